//! Tier catalogue: fixed instance groups, their order and required jobs.

/// Release shipping the web, database and worker control jobs
pub const CONCOURSE_RELEASE_NAME: &str = "concourse";
/// Release shipping the container runtime job
pub const GARDEN_RUNC_RELEASE_NAME: &str = "garden-runc";

pub const WEB_INSTANCE_NAME: &str = "web";
pub const DATABASE_INSTANCE_NAME: &str = "db";
pub const WORKER_INSTANCE_NAME: &str = "worker";

pub const ATC_JOB_NAME: &str = "atc";
pub const TSA_JOB_NAME: &str = "tsa";
pub const POSTGRES_JOB_NAME: &str = "postgresql";
pub const GROUNDCREW_JOB_NAME: &str = "groundcrew";
pub const BAGGAGECLAIM_JOB_NAME: &str = "baggageclaim";
pub const GARDEN_JOB_NAME: &str = "garden";

/// Stemcell alias shared by every instance group
pub const STEMCELL_ALIAS: &str = "only-stemcell";

/// An instance group of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Front-end: API and SSH gateway
    Web,
    /// Backing database
    Database,
    /// Build workers
    Worker,
}

impl Tier {
    /// Every tier, in manifest order
    pub const ALL: [Tier; 3] = [Tier::Web, Tier::Database, Tier::Worker];

    /// Instance group name used in plans and manifests
    pub fn name(self) -> &'static str {
        match self {
            Tier::Web => WEB_INSTANCE_NAME,
            Tier::Database => DATABASE_INSTANCE_NAME,
            Tier::Worker => WORKER_INSTANCE_NAME,
        }
    }

    /// Jobs that must be colocated on this tier, in declaration order
    pub fn required_jobs(self) -> &'static [&'static str] {
        match self {
            Tier::Web => &[ATC_JOB_NAME, TSA_JOB_NAME],
            Tier::Database => &[POSTGRES_JOB_NAME],
            Tier::Worker => &[GROUNDCREW_JOB_NAME, BAGGAGECLAIM_JOB_NAME, GARDEN_JOB_NAME],
        }
    }

    /// Whether the plan's persistent disk is attached to this tier
    pub fn has_persistent_disk(self) -> bool {
        matches!(self, Tier::Database)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
