//! Deployment manifest handed to the orchestrator.

use super::Properties;
use serde::{Deserialize, Serialize};

/// A fully resolved deployment manifest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,

    #[serde(default)]
    pub stemcells: Vec<StemcellRef>,

    #[serde(default)]
    pub releases: Vec<Release>,

    #[serde(default)]
    pub instance_groups: Vec<InstanceGroup>,

    #[serde(default)]
    pub update: UpdatePolicy,
}

impl Manifest {
    /// Find an instance group by name
    pub fn instance_group(&self, name: &str) -> Option<&InstanceGroup> {
        self.instance_groups.iter().find(|group| group.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemcellRef {
    pub alias: String,
    pub os: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub version: String,
}

/// One tier of the deployment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstanceGroup {
    pub name: String,

    pub instances: u32,

    #[serde(default)]
    pub jobs: Vec<Job>,

    pub vm_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vm_extensions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_disk_type: Option<String>,

    pub stemcell: String,

    #[serde(default)]
    pub networks: Vec<Network>,

    #[serde(default)]
    pub azs: Vec<String>,

    #[serde(default)]
    pub properties: Properties,
}

/// A job bound to the release that ships it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub release: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Rollout policy for the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdatePolicy {
    pub canaries: u32,
    pub max_in_flight: u32,
    pub canary_watch_time: String,
    pub update_watch_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<bool>,
}
