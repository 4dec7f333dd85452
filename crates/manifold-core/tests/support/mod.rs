#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use manifold_core::error::SynthesisError;
use manifold_core::schema::{
    Plan, PlanInstanceGroup, RequestParameters, ServiceDeployment, ServiceRelease, Stemcell,
};
use manifold_core::secrets::{Secret, SecretGenerator};
use manifold_core::tier::{
    ATC_JOB_NAME, BAGGAGECLAIM_JOB_NAME, CONCOURSE_RELEASE_NAME, GARDEN_JOB_NAME,
    GARDEN_RUNC_RELEASE_NAME, GROUNDCREW_JOB_NAME, POSTGRES_JOB_NAME, TSA_JOB_NAME,
};

/// Hands out "secret-1", "secret-2", ... in call order.
#[derive(Debug, Default)]
pub struct SequenceSecrets {
    next: AtomicUsize,
}

impl SecretGenerator for SequenceSecrets {
    fn generate(&self) -> Result<Secret, SynthesisError> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Secret::new(format!("secret-{}", n)))
    }
}

/// Never produces a secret.
#[derive(Debug, Default)]
pub struct ExhaustedEntropy;

impl SecretGenerator for ExhaustedEntropy {
    fn generate(&self) -> Result<Secret, SynthesisError> {
        Err(SynthesisError::EntropyUnavailable(getrandom_error()))
    }
}

fn getrandom_error() -> getrandom::Error {
    getrandom::Error::UNSUPPORTED
}

pub fn default_releases() -> Vec<ServiceRelease> {
    vec![
        ServiceRelease::new(
            CONCOURSE_RELEASE_NAME,
            "4",
            &[
                ATC_JOB_NAME,
                TSA_JOB_NAME,
                POSTGRES_JOB_NAME,
                BAGGAGECLAIM_JOB_NAME,
                GROUNDCREW_JOB_NAME,
            ],
        ),
        ServiceRelease::new(GARDEN_RUNC_RELEASE_NAME, "3", &[GARDEN_JOB_NAME]),
    ]
}

pub fn deployment(name: &str) -> ServiceDeployment {
    ServiceDeployment {
        deployment_name: name.to_string(),
        releases: default_releases(),
        stemcell: Stemcell {
            stemcell_os: "some-stemcell-os".to_string(),
            stemcell_version: "1234".to_string(),
        },
    }
}

pub fn plan_group(name: &str, instances: u32) -> PlanInstanceGroup {
    PlanInstanceGroup {
        name: name.to_string(),
        vm_type: "medium".to_string(),
        vm_extensions: vec![],
        persistent_disk_type: None,
        networks: vec!["default_network".to_string()],
        instances,
        azs: vec!["az1".to_string()],
    }
}

pub fn plan(instances: u32) -> Plan {
    Plan {
        instance_groups: vec![
            plan_group("web", instances),
            plan_group("db", instances),
            plan_group("worker", instances),
        ],
        ..Default::default()
    }
}

pub fn params(app_domain: &str) -> RequestParameters {
    RequestParameters::from_arbitrary([("app_domain", app_domain)])
}
