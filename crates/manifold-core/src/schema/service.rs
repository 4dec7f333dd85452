//! Broker-supplied inputs: service deployment, plan and request parameters.

use super::Properties;
use super::manifest::UpdatePolicy;
use serde::{Deserialize, Serialize};

/// The deployment the broker wants synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDeployment {
    pub deployment_name: String,

    #[serde(default)]
    pub releases: Vec<ServiceRelease>,

    pub stemcell: Stemcell,
}

/// A release offered to the deployment together with the jobs it ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRelease {
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub jobs: Vec<String>,
}

impl ServiceRelease {
    pub fn new(name: impl Into<String>, version: impl Into<String>, jobs: &[&str]) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            jobs: jobs.iter().map(|job| job.to_string()).collect(),
        }
    }

    /// Whether this release ships the given job
    pub fn provides(&self, job: &str) -> bool {
        self.jobs.iter().any(|provided| provided == job)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stemcell {
    pub stemcell_os: String,
    pub stemcell_version: String,
}

/// Service plan: per-tier topology plus optional rollout override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub instance_groups: Vec<PlanInstanceGroup>,

    /// Plan-level properties (accepted, not consumed by any tier today)
    #[serde(default)]
    pub properties: Properties,

    /// Explicit update block; copied verbatim into the manifest when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdatePolicy>,
}

impl Plan {
    /// Find the topology for a named instance group
    pub fn instance_group(&self, name: &str) -> Option<&PlanInstanceGroup> {
        self.instance_groups.iter().find(|group| group.name == name)
    }
}

/// Topology for one tier as declared by the plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanInstanceGroup {
    pub name: String,

    pub vm_type: String,

    #[serde(default)]
    pub vm_extensions: Vec<String>,

    /// Only honoured for the database tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_disk_type: Option<String>,

    #[serde(default)]
    pub networks: Vec<String>,

    pub instances: u32,

    #[serde(default)]
    pub azs: Vec<String>,
}

/// Raw request parameters as received from the broker.
///
/// User-supplied values (`cf create-service -c '{...}'`) live under the
/// `"parameters"` key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParameters(pub serde_json::Map<String, serde_json::Value>);

impl RequestParameters {
    const ARBITRARY_PARAMS_KEY: &'static str = "parameters";

    /// Build request parameters whose arbitrary section holds `params`
    pub fn from_arbitrary<K, V, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        let arbitrary: serde_json::Map<String, serde_json::Value> = params
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let mut raw = serde_json::Map::new();
        raw.insert(
            Self::ARBITRARY_PARAMS_KEY.to_string(),
            serde_json::Value::Object(arbitrary),
        );
        Self(raw)
    }

    /// The user-supplied parameter object, or an empty map if none was sent
    pub fn arbitrary_params(&self) -> serde_json::Map<String, serde_json::Value> {
        match self.0.get(Self::ARBITRARY_PARAMS_KEY) {
            Some(serde_json::Value::Object(params)) => params.clone(),
            _ => serde_json::Map::new(),
        }
    }
}
