//! Job resolver: binds each required job to the one release that ships it.

use crate::error::SynthesisError;
use crate::schema::{Job, ServiceRelease};

/// Resolve every job in `required`, in order, against the full catalog.
///
/// Each job must be shipped by exactly one release. Output order follows
/// `required`, never catalog order.
pub fn resolve_jobs(
    releases: &[ServiceRelease],
    required: &[&str],
) -> Result<Vec<Job>, SynthesisError> {
    required
        .iter()
        .map(|job| {
            let release = find_release_for_job(releases, job)?;
            Ok(Job {
                name: job.to_string(),
                release: release.name.clone(),
            })
        })
        .collect()
}

/// Find the single release providing `job`.
pub fn find_release_for_job<'a>(
    releases: &'a [ServiceRelease],
    job: &str,
) -> Result<&'a ServiceRelease, SynthesisError> {
    let providers: Vec<&ServiceRelease> = releases
        .iter()
        .filter(|release| release.provides(job))
        .collect();

    match providers.as_slice() {
        [] => Err(SynthesisError::UnprovidedJob {
            job: job.to_string(),
        }),
        [release] => Ok(release),
        _ => Err(SynthesisError::AmbiguousJob {
            job: job.to_string(),
            releases: providers.iter().map(|r| r.name.clone()).collect(),
        }),
    }
}
