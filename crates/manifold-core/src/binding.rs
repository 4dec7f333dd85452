//! Credential extraction for service bindings.

use crate::config::AdapterConfig;
use crate::error::BindingError;
use crate::schema::{
    Binding, CredentialSet, DeploymentTopology, Manifest, Properties, RequestParameters,
};

pub const USERNAME_PROPERTY: &str = "basic_auth_username";
pub const PASSWORD_PROPERTY: &str = "basic_auth_password";
pub const HOST_PROPERTY: &str = "external_url";

/// Extract web-tier credentials from an applied manifest.
///
/// The web tier is the first instance group. Absent or non-string fields come
/// back empty, and so does everything when the manifest has no instance groups.
pub fn extract(manifest: &Manifest) -> CredentialSet {
    let Some(group) = manifest.instance_groups.first() else {
        return CredentialSet::default();
    };
    let field = |key: &str| string_property(&group.properties, key).unwrap_or_default();
    CredentialSet {
        username: field(USERNAME_PROPERTY),
        password: field(PASSWORD_PROPERTY),
        host: field(HOST_PROPERTY),
    }
}

/// Like [`extract`], but fails instead of returning empty fields.
pub fn extract_strict(manifest: &Manifest) -> Result<CredentialSet, BindingError> {
    let group = manifest
        .instance_groups
        .first()
        .ok_or(BindingError::NoInstanceGroups)?;
    let field = |key: &str| {
        string_property(&group.properties, key).ok_or_else(|| BindingError::MissingCredential {
            instance_group: group.name.clone(),
            field: key.to_string(),
        })
    };
    Ok(CredentialSet {
        username: field(USERNAME_PROPERTY)?,
        password: field(PASSWORD_PROPERTY)?,
        host: field(HOST_PROPERTY)?,
    })
}

fn string_property(properties: &Properties, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::to_string)
}

/// Creates and deletes bindings against applied manifests.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    strict: bool,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        Self {
            strict: config.binding.strict,
        }
    }

    /// Reject manifests with missing credential fields
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the credentials handed to a consuming client.
    ///
    /// `topology` and `request_params` are part of the broker contract and
    /// not consulted.
    pub fn create_binding(
        &self,
        binding_id: &str,
        _topology: &DeploymentTopology,
        manifest: &Manifest,
        _request_params: &RequestParameters,
    ) -> Result<Binding, BindingError> {
        let credentials = if self.strict {
            extract_strict(manifest)?
        } else {
            extract(manifest)
        };
        tracing::info!(
            binding_id,
            deployment = %manifest.name,
            host = %credentials.host,
            "created binding"
        );
        Ok(Binding::from(credentials))
    }

    /// Credentials are fixed for the lifetime of the deployment, so there is
    /// nothing to revoke.
    pub fn delete_binding(
        &self,
        binding_id: &str,
        _topology: &DeploymentTopology,
        manifest: &Manifest,
        _request_params: &RequestParameters,
    ) -> Result<(), BindingError> {
        tracing::info!(binding_id, deployment = %manifest.name, "deleted binding");
        Ok(())
    }
}
