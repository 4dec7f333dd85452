//! Manifold Core Library
//!
//! Synthesizes deployment manifests for an on-demand service broker and
//! extracts client credentials from manifests that have already been applied.

pub mod binding;
pub mod config;
pub mod error;
pub mod generator;
pub mod properties;
pub mod resolver;
pub mod schema;
pub mod secrets;
pub mod tier;
pub mod update;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{AdapterConfig, BindingConfig, SecretsConfig, WebConfig};

    // Errors
    pub use crate::error::{BindingError, SynthesisError};

    // Schema
    pub use crate::schema::{
        Binding, CredentialSet, DeploymentTopology, InstanceGroup, Job, Manifest, Network, Plan,
        PlanInstanceGroup, Properties, Release, RequestParameters, ServiceDeployment,
        ServiceRelease, Stemcell, StemcellRef, UpdatePolicy,
    };

    // Synthesis
    pub use crate::generator::ManifestGenerator;
    pub use crate::secrets::{
        OsSecretGenerator, Secret, SecretGenerator, SecretPurpose, SecretStrategy, SecretTable,
        StaticCredentials,
    };
    pub use crate::tier::Tier;

    // Binding
    pub use crate::binding::Binder;
}
