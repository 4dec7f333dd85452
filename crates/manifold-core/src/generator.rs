//! Manifest generation.
//!
//! `ManifestGenerator` stitches together job resolution, per-tier property
//! composition and update policy selection into one deployment manifest.
//! Synthesis is all-or-nothing: any failure returns an error and no manifest.

use std::sync::Arc;

use crate::config::AdapterConfig;
use crate::error::SynthesisError;
use crate::properties::{self, APP_DOMAIN_PARAM, DatabaseBinding, TierInputs};
use crate::resolver::resolve_jobs;
use crate::schema::{
    InstanceGroup, Manifest, Network, Plan, PlanInstanceGroup, Release, RequestParameters,
    ServiceDeployment, StemcellRef,
};
use crate::secrets::{SecretGenerator, SecretStrategy, SecretTable};
use crate::tier::{STEMCELL_ALIAS, Tier};
use crate::update::select_update_policy;

/// Synthesizes deployment manifests.
#[derive(Debug, Clone, Default)]
pub struct ManifestGenerator {
    secrets: SecretStrategy,
    require_app_domain: bool,
}

impl ManifestGenerator {
    /// Create a generator drawing secrets from the OS entropy source
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a generator from adapter configuration
    ///
    /// Fails when the secrets section is invalid, even if the config was
    /// built in code without [`AdapterConfig::validate`].
    pub fn from_config(config: &AdapterConfig) -> anyhow::Result<Self> {
        Ok(Self {
            secrets: config.secrets.strategy()?,
            require_app_domain: config.web.require_app_domain,
        })
    }

    /// Replace the secret strategy
    pub fn with_secret_strategy(mut self, strategy: SecretStrategy) -> Self {
        self.secrets = strategy;
        self
    }

    /// Generate secrets with `generator` instead of the OS entropy source
    pub fn with_secret_generator(self, generator: Arc<dyn SecretGenerator>) -> Self {
        self.with_secret_strategy(SecretStrategy::Generate(generator))
    }

    /// Fail synthesis when the `app_domain` parameter is missing
    pub fn with_required_app_domain(mut self, required: bool) -> Self {
        self.require_app_domain = required;
        self
    }

    /// Synthesize the manifest for `deployment` under `plan`.
    ///
    /// `previous_manifest` only signals that this is an update; its content is
    /// not consulted. `previous_plan` is accepted for the broker contract and
    /// currently unused.
    pub fn generate_manifest(
        &self,
        deployment: &ServiceDeployment,
        plan: &Plan,
        request_params: &RequestParameters,
        previous_manifest: Option<&Manifest>,
        _previous_plan: Option<&Plan>,
    ) -> Result<Manifest, SynthesisError> {
        let releases: Vec<Release> = deployment
            .releases
            .iter()
            .map(|release| Release {
                name: release.name.clone(),
                version: release.version.clone(),
            })
            .collect();

        let arbitrary_params = request_params.arbitrary_params();
        if arbitrary_params
            .get(APP_DOMAIN_PARAM)
            .and_then(|value| value.as_str())
            .is_none()
        {
            if self.require_app_domain {
                return Err(SynthesisError::MissingParameter {
                    name: APP_DOMAIN_PARAM.to_string(),
                });
            }
            tracing::warn!(
                deployment = %deployment.deployment_name,
                "request parameter {} missing, external_url will have an empty domain",
                APP_DOMAIN_PARAM
            );
        }

        // Validate topology and jobs for every tier before drawing any secret
        let mut resolved = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            let topology = plan.instance_group(tier.name()).ok_or_else(|| {
                SynthesisError::UnknownTier {
                    tier: tier.name().to_string(),
                }
            })?;
            let jobs = resolve_jobs(&deployment.releases, tier.required_jobs())?;
            let bindings: Vec<String> = jobs
                .iter()
                .map(|job| format!("{}/{}", job.release, job.name))
                .collect();
            tracing::debug!(tier = %tier, jobs = ?bindings, "resolved jobs");
            resolved.push((tier, topology, jobs));
        }

        let secrets = SecretTable::issue(&self.secrets)?;
        let database = DatabaseBinding::from_secrets(&secrets);
        let inputs = TierInputs {
            deployment_name: &deployment.deployment_name,
            plan_properties: &plan.properties,
            arbitrary_params: &arbitrary_params,
            previous_manifest,
            secrets: &secrets,
            database: &database,
        };

        let instance_groups: Vec<InstanceGroup> = resolved
            .into_iter()
            .map(|(tier, topology, jobs)| InstanceGroup {
                name: tier.name().to_string(),
                instances: topology.instances,
                jobs,
                vm_type: topology.vm_type.clone(),
                vm_extensions: topology.vm_extensions.clone(),
                persistent_disk_type: persistent_disk_type(tier, topology),
                stemcell: STEMCELL_ALIAS.to_string(),
                networks: map_networks(&topology.networks),
                azs: topology.azs.clone(),
                properties: properties::compose(tier, &inputs),
            })
            .collect();

        let update = select_update_policy(plan.update.as_ref(), previous_manifest.is_some());
        tracing::debug!(
            canaries = update.canaries,
            max_in_flight = update.max_in_flight,
            overridden = plan.update.is_some(),
            "selected update policy"
        );

        tracing::info!(
            deployment = %deployment.deployment_name,
            releases = releases.len(),
            update = previous_manifest.is_some(),
            "generated manifest"
        );

        Ok(Manifest {
            name: deployment.deployment_name.clone(),
            stemcells: vec![StemcellRef {
                alias: STEMCELL_ALIAS.to_string(),
                os: deployment.stemcell.stemcell_os.clone(),
                version: deployment.stemcell.stemcell_version.clone(),
            }],
            releases,
            instance_groups,
            update,
        })
    }
}

fn persistent_disk_type(tier: Tier, topology: &PlanInstanceGroup) -> Option<String> {
    if tier.has_persistent_disk() {
        topology.persistent_disk_type.clone()
    } else {
        None
    }
}

fn map_networks(networks: &[String]) -> Vec<Network> {
    networks.iter().map(Network::new).collect()
}
