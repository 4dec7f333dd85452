//! Error types for manifest synthesis and credential binding.
//!
//! None of these messages ever carry secret material.

/// Failures that abort a manifest synthesis. No partial manifest is ever
/// returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
    #[error("no release provided for job {job}")]
    UnprovidedJob { job: String },

    #[error("job {job} defined in multiple releases: {}", .releases.join(", "))]
    AmbiguousJob { job: String, releases: Vec<String> },

    #[error("plan does not define instance group {tier}")]
    UnknownTier { tier: String },

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(getrandom::Error),

    #[error("missing required request parameter: {name}")]
    MissingParameter { name: String },
}

/// Failures raised by strict credential extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("manifest has no instance groups")]
    NoInstanceGroups,

    #[error("instance group {instance_group} has no string property {field}")]
    MissingCredential {
        instance_group: String,
        field: String,
    },
}
