//! Update policy selection.

use crate::schema::UpdatePolicy;

pub const DEFAULT_CANARIES: u32 = 4;
pub const DEFAULT_MAX_IN_FLIGHT: u32 = 4;
/// Canaries and max-in-flight when updating a live deployment
pub const UPDATE_CANARIES: u32 = 1;
pub const UPDATE_MAX_IN_FLIGHT: u32 = 1;
pub const DEFAULT_WATCH_TIME: &str = "30000-240000";

/// Pick the rollout policy for a synthesis.
///
/// An explicit plan override wins verbatim. Otherwise a first deploy rolls
/// out four at a time and an update to an existing deployment one at a time.
pub fn select_update_policy(
    override_policy: Option<&UpdatePolicy>,
    previous_manifest_present: bool,
) -> UpdatePolicy {
    if let Some(policy) = override_policy {
        return policy.clone();
    }

    let mut policy = UpdatePolicy {
        canaries: DEFAULT_CANARIES,
        max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        canary_watch_time: DEFAULT_WATCH_TIME.to_string(),
        update_watch_time: DEFAULT_WATCH_TIME.to_string(),
        serial: None,
    };

    if previous_manifest_present {
        policy.canaries = UPDATE_CANARIES;
        policy.max_in_flight = UPDATE_MAX_IN_FLIGHT;
    }

    policy
}
