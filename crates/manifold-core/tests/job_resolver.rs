//! Tests for binding required jobs to the releases that ship them.

use manifold_core::error::SynthesisError;
use manifold_core::resolver::{find_release_for_job, resolve_jobs};
use manifold_core::schema::{Job, ServiceRelease};

fn job(name: &str, release: &str) -> Job {
    Job {
        name: name.to_string(),
        release: release.to_string(),
    }
}

#[test]
fn resolves_single_provider() {
    let releases = vec![
        ServiceRelease::new("concourse", "4", &["atc", "tsa"]),
        ServiceRelease::new("garden-runc", "3", &["garden"]),
    ];

    let release = find_release_for_job(&releases, "garden").unwrap();
    assert_eq!(release.name, "garden-runc");
}

#[test]
fn output_follows_required_order_not_catalog_order() {
    let releases = vec![
        ServiceRelease::new("garden-runc", "3", &["garden"]),
        ServiceRelease::new("concourse", "4", &["baggageclaim", "groundcrew"]),
    ];

    let jobs = resolve_jobs(&releases, &["groundcrew", "baggageclaim", "garden"]).unwrap();
    assert_eq!(
        jobs,
        vec![
            job("groundcrew", "concourse"),
            job("baggageclaim", "concourse"),
            job("garden", "garden-runc"),
        ]
    );
}

#[test]
fn unprovided_job_is_named() {
    let releases = vec![ServiceRelease::new("concourse", "4", &["atc"])];

    let err = resolve_jobs(&releases, &["atc", "tsa"]).unwrap_err();
    assert_eq!(
        err,
        SynthesisError::UnprovidedJob {
            job: "tsa".to_string()
        }
    );
    assert_eq!(err.to_string(), "no release provided for job tsa");
}

#[test]
fn empty_catalog_fails_on_first_job() {
    let err = resolve_jobs(&[], &["atc"]).unwrap_err();
    assert!(matches!(err, SynthesisError::UnprovidedJob { job } if job == "atc"));
}

#[test]
fn ambiguous_job_lists_releases_in_catalog_order() {
    let releases = vec![
        ServiceRelease::new("zeta", "1", &["garden"]),
        ServiceRelease::new("concourse", "4", &["atc"]),
        ServiceRelease::new("alpha", "2", &["garden"]),
    ];

    let err = resolve_jobs(&releases, &["atc", "garden"]).unwrap_err();
    assert_eq!(
        err,
        SynthesisError::AmbiguousJob {
            job: "garden".to_string(),
            releases: vec!["zeta".to_string(), "alpha".to_string()],
        }
    );
    assert_eq!(
        err.to_string(),
        "job garden defined in multiple releases: zeta, alpha"
    );
}

#[test]
fn jobs_resolve_independently() {
    // Both jobs come from the same release; binding one does not consume it
    let releases = vec![ServiceRelease::new("concourse", "4", &["atc", "tsa"])];

    let jobs = resolve_jobs(&releases, &["atc", "tsa"]).unwrap();
    assert_eq!(jobs, vec![job("atc", "concourse"), job("tsa", "concourse")]);
}

#[test]
fn no_required_jobs_resolves_to_nothing() {
    let releases = vec![ServiceRelease::new("concourse", "4", &["atc"])];
    assert!(resolve_jobs(&releases, &[]).unwrap().is_empty());
}
