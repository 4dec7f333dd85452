//! Per-tier property composition.
//!
//! Each composer only reads from [`TierInputs`]; secrets shared between tiers
//! come from the synthesis' [`SecretTable`] so every tier sees the same value.

use crate::schema::{Manifest, Properties};
use crate::secrets::{Secret, SecretPurpose, SecretTable};
use crate::tier::Tier;
use serde_json::{Value, json};

/// Request parameter holding the domain the web tier is published under
pub const APP_DOMAIN_PARAM: &str = "app_domain";
/// Basic-auth user of the web tier
pub const BASIC_AUTH_USERNAME: &str = "atc";

pub const DATABASE_NAME: &str = "atc_db";
pub const DATABASE_ROLE: &str = "atc";

pub const GARDEN_LISTEN_NETWORK: &str = "tcp";
pub const GARDEN_LISTEN_ADDRESS: &str = "0.0.0.0:7777";

/// Everything a tier composer may read.
#[derive(Debug, Clone, Copy)]
pub struct TierInputs<'a> {
    pub deployment_name: &'a str,
    /// Plan-level properties. Carried for composers but not merged into any
    /// tier yet.
    pub plan_properties: &'a Properties,
    pub arbitrary_params: &'a serde_json::Map<String, Value>,
    /// Previously applied manifest. No composer reads it; only the update
    /// policy looks at whether one exists.
    pub previous_manifest: Option<&'a Manifest>,
    pub secrets: &'a SecretTable,
    pub database: &'a DatabaseBinding,
}

impl TierInputs<'_> {
    /// The `app_domain` request parameter, if it was sent as a string
    pub fn app_domain(&self) -> Option<&str> {
        self.arbitrary_params
            .get(APP_DOMAIN_PARAM)
            .and_then(Value::as_str)
    }
}

/// Database binding shared by the web tier (as a client) and the db tier
/// (as the server). Built once per synthesis and handed to both composers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseBinding {
    pub name: String,
    pub role: String,
    pub password: Secret,
}

impl DatabaseBinding {
    pub fn from_secrets(secrets: &SecretTable) -> Self {
        Self {
            name: DATABASE_NAME.to_string(),
            role: DATABASE_ROLE.to_string(),
            password: secrets.get(SecretPurpose::DatabasePassword).clone(),
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "role": self.role,
            "password": self.password.expose(),
        })
    }
}

/// Compose the properties for `tier`
pub fn compose(tier: Tier, inputs: &TierInputs<'_>) -> Properties {
    match tier {
        Tier::Web => web_properties(inputs),
        Tier::Database => database_properties(inputs),
        Tier::Worker => worker_properties(inputs),
    }
}

/// Public endpoint of the deployment.
///
/// A missing domain leaves an empty segment (`https://name.`) rather than
/// failing; callers wanting a hard error check before composing.
pub fn external_url(deployment_name: &str, app_domain: Option<&str>) -> String {
    format!("https://{}.{}", deployment_name, app_domain.unwrap_or_default())
}

pub fn web_properties(inputs: &TierInputs<'_>) -> Properties {
    let mut properties = Properties::new();
    properties.insert(
        "external_url".into(),
        Value::String(external_url(inputs.deployment_name, inputs.app_domain())),
    );
    properties.insert(
        "basic_auth_username".into(),
        Value::String(BASIC_AUTH_USERNAME.into()),
    );
    properties.insert(
        "basic_auth_password".into(),
        Value::String(
            inputs
                .secrets
                .get(SecretPurpose::WebPassword)
                .expose()
                .to_string(),
        ),
    );
    properties.insert("postgresql_database".into(), inputs.database.to_value());
    properties
}

pub fn database_properties(inputs: &TierInputs<'_>) -> Properties {
    let mut properties = Properties::new();
    properties.insert(
        "databases".into(),
        Value::Array(vec![inputs.database.to_value()]),
    );
    properties
}

pub fn worker_properties(_inputs: &TierInputs<'_>) -> Properties {
    let mut properties = Properties::new();
    properties.insert(
        "garden".into(),
        json!({
            "listen_network": GARDEN_LISTEN_NETWORK,
            "listen_address": GARDEN_LISTEN_ADDRESS,
        }),
    );
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::{SecretStrategy, StaticCredentials};

    fn static_table() -> SecretTable {
        SecretTable::issue(&SecretStrategy::Static(StaticCredentials {
            web_password: Secret::new("web-pw"),
            database_password: Secret::new("db-pw"),
        }))
        .unwrap()
    }

    #[test]
    fn external_url_with_domain() {
        assert_eq!(
            external_url("svc-1", Some("example.com")),
            "https://svc-1.example.com"
        );
    }

    #[test]
    fn external_url_without_domain_keeps_empty_segment() {
        assert_eq!(external_url("svc-1", None), "https://svc-1.");
    }

    #[test]
    fn non_string_app_domain_is_treated_as_absent() {
        let secrets = static_table();
        let database = DatabaseBinding::from_secrets(&secrets);
        let plan_properties = Properties::new();
        let mut params = serde_json::Map::new();
        params.insert(APP_DOMAIN_PARAM.into(), json!(42));
        let inputs = TierInputs {
            deployment_name: "svc-1",
            plan_properties: &plan_properties,
            arbitrary_params: &params,
            previous_manifest: None,
            secrets: &secrets,
            database: &database,
        };
        assert_eq!(inputs.app_domain(), None);
    }

    #[test]
    fn web_and_db_share_the_database_binding() {
        let secrets = static_table();
        let database = DatabaseBinding::from_secrets(&secrets);
        let plan_properties = Properties::new();
        let params = serde_json::Map::new();
        let inputs = TierInputs {
            deployment_name: "svc-1",
            plan_properties: &plan_properties,
            arbitrary_params: &params,
            previous_manifest: None,
            secrets: &secrets,
            database: &database,
        };

        let web = web_properties(&inputs);
        let db = database_properties(&inputs);

        assert_eq!(web["postgresql_database"], db["databases"][0]);
        assert_eq!(web["postgresql_database"]["password"], "db-pw");
        assert_eq!(web["basic_auth_password"], "web-pw");
        assert_eq!(web["basic_auth_username"], "atc");
    }
}
