//! Adapter configuration
//!
//! Loaded from a TOML file by the command-line entry point. Every section is
//! optional; an empty or missing file yields the defaults.

pub mod parser;
pub mod schema;

pub use parser::{load_or_default, parse_adapter_toml, parse_adapter_toml_str, to_toml};
pub use schema::{AdapterConfig, BindingConfig, SecretsConfig, WebConfig};

/// Config path used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "/var/vcap/jobs/service-adapter/config/service-adapter.conf";
