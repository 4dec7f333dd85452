//! Data contract shared with the broker and the orchestrator.
//!
//! - `service`: inputs handed to the adapter (deployment, plan, parameters)
//! - `manifest`: the deployment manifest produced for the orchestrator
//! - `binding`: credentials returned to a consuming client

pub mod binding;
pub mod manifest;
pub mod service;

pub use binding::{Binding, CredentialSet, DeploymentTopology};
pub use manifest::{InstanceGroup, Job, Manifest, Network, Release, StemcellRef, UpdatePolicy};
pub use service::{
    Plan, PlanInstanceGroup, RequestParameters, ServiceDeployment, ServiceRelease, Stemcell,
};

/// Free-form property mapping attached to plans and instance groups.
pub type Properties = serde_json::Map<String, serde_json::Value>;
