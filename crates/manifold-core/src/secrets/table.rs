//! Secrets issued for a single synthesis.

use super::{Secret, SecretStrategy};
use crate::error::SynthesisError;

/// What a secret is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretPurpose {
    /// Basic-auth password of the web tier
    WebPassword,
    /// Password of the database role, shared by the web and db tiers
    DatabasePassword,
}

/// Every secret of one synthesis, issued exactly once per purpose.
#[derive(Debug, Clone)]
pub struct SecretTable {
    web_password: Secret,
    database_password: Secret,
}

impl SecretTable {
    /// Issue one secret per purpose according to `strategy`
    pub fn issue(strategy: &SecretStrategy) -> Result<Self, SynthesisError> {
        match strategy {
            SecretStrategy::Generate(generator) => Ok(Self {
                web_password: generator.generate()?,
                database_password: generator.generate()?,
            }),
            SecretStrategy::Static(credentials) => Ok(Self {
                web_password: credentials.web_password.clone(),
                database_password: credentials.database_password.clone(),
            }),
        }
    }

    /// Look up the secret issued for `purpose`
    pub fn get(&self, purpose: SecretPurpose) -> &Secret {
        match purpose {
            SecretPurpose::WebPassword => &self.web_password,
            SecretPurpose::DatabasePassword => &self.database_password,
        }
    }
}
