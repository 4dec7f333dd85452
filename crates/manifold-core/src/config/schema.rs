//! Configuration schema for the adapter config file.

use crate::secrets::{Secret, SecretStrategy, StaticCredentials};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Where manifest secrets come from
    #[serde(default)]
    pub secrets: SecretsConfig,

    /// Web tier options
    #[serde(default)]
    pub web: WebConfig,

    /// Binding options
    #[serde(default)]
    pub binding: BindingConfig,
}

/// Secret source selection
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// "generate" (default) or "static"
    #[serde(default = "default_secret_strategy")]
    pub strategy: String,

    /// Static: web tier basic-auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_password: Option<String>,

    /// Static: database role password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_password: Option<String>,
}

fn default_secret_strategy() -> String {
    "generate".to_string()
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            strategy: default_secret_strategy(),
            web_password: None,
            database_password: None,
        }
    }
}

impl std::fmt::Debug for SecretsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsConfig")
            .field("strategy", &self.strategy)
            .field("web_password", &self.web_password.as_ref().map(|_| "<redacted>"))
            .field(
                "database_password",
                &self.database_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl SecretsConfig {
    /// Whether the static credential mode is selected
    pub fn is_static(&self) -> bool {
        self.strategy == "static"
    }

    /// Map onto a secret strategy.
    ///
    /// Fails for an unknown strategy, or for static mode with a missing or
    /// empty password, so an empty secret never reaches a manifest.
    pub fn strategy(&self) -> anyhow::Result<SecretStrategy> {
        self.validate()?;
        if !self.is_static() {
            return Ok(SecretStrategy::default());
        }
        match (&self.web_password, &self.database_password) {
            (Some(web), Some(database)) => Ok(SecretStrategy::Static(StaticCredentials {
                web_password: Secret::new(web.clone()),
                database_password: Secret::new(database.clone()),
            })),
            _ => anyhow::bail!("static secrets strategy requires both passwords"),
        }
    }

    /// Check the strategy name and its password fields
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.strategy.as_str() {
            "generate" => {
                if self.web_password.is_some() || self.database_password.is_some() {
                    anyhow::bail!(
                        "secrets.web_password and secrets.database_password are only valid with strategy = \"static\""
                    );
                }
            }
            "static" => {
                for (key, value) in [
                    ("web_password", &self.web_password),
                    ("database_password", &self.database_password),
                ] {
                    match value {
                        Some(password) if !password.is_empty() => {}
                        _ => anyhow::bail!(
                            "secrets.{} is required when strategy = \"static\"",
                            key
                        ),
                    }
                }
            }
            other => anyhow::bail!(
                "Unknown secrets.strategy '{}', expected \"generate\" or \"static\"",
                other
            ),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebConfig {
    /// Fail manifest generation when `app_domain` is not supplied
    #[serde(default)]
    pub require_app_domain: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Fail binding when a credential field is missing from the manifest
    #[serde(default)]
    pub strict: bool,
}

impl AdapterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.secrets.validate()
    }
}
