//! Binding payloads returned to consuming clients.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Instance group name to the addresses of its VMs.
pub type DeploymentTopology = HashMap<String, Vec<String>>;

/// Connection credentials for the web tier.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialSet {
    pub username: String,
    pub password: String,
    pub host: String,
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSet")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

/// Binding envelope understood by the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub credentials: CredentialSet,
}

impl From<CredentialSet> for Binding {
    fn from(credentials: CredentialSet) -> Self {
        Self { credentials }
    }
}
