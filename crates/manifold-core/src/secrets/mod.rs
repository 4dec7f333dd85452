//! Secret generation and per-synthesis secret tables.
//!
//! A [`SecretStrategy`] decides where secrets come from: freshly drawn from a
//! [`SecretGenerator`] or taken from operator-supplied static credentials.
//! Either way the secrets for one synthesis are issued once into a
//! [`SecretTable`] that every tier composer reads from.

pub mod generator;
pub mod table;

use std::sync::Arc;

pub use generator::{OsSecretGenerator, SECRET_ENTROPY_BYTES, SecretGenerator};
pub use table::{SecretPurpose, SecretTable};

/// An opaque secret value. `Debug` never prints the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value for embedding into a manifest
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Operator-supplied credentials used instead of generated ones.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub web_password: Secret,
    pub database_password: Secret,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials").finish_non_exhaustive()
    }
}

/// Where the secrets of a synthesis come from.
#[derive(Debug, Clone)]
pub enum SecretStrategy {
    /// Fresh secrets on every synthesis
    Generate(Arc<dyn SecretGenerator>),
    /// The same literal credentials on every synthesis
    Static(StaticCredentials),
}

impl Default for SecretStrategy {
    fn default() -> Self {
        SecretStrategy::Generate(Arc::new(OsSecretGenerator))
    }
}
