//! Resolution against the serverless fixture.

use anyhow::Result;
use comet_cli::constants::RHEL8;
use comet_cli::core::CometError;
use comet_cli::mapping::{MappingLocks, MappingStore, MatchQuery, resolve};
use comet_cli::test_utils::{MappingFixture, init_test_logging};

fn resolve_target(image: &str, platform: &str) -> Result<String> {
    let (_temp, path) = MappingFixture::serverless().write_temp()?;
    let locks = MappingLocks::new();
    let entry = resolve(&locks, &MatchQuery::new(&path, platform, image))?;
    Ok(entry.target)
}

#[test]
fn test_resolves_known_images() -> Result<()> {
    init_test_logging(None);

    let cases = [
        (
            "serverless-operator-135/serverless-kn-operator",
            "openshift-serverless-1/serverless-rhel8-operator",
        ),
        (
            "serverless-operator-135/kn-serving-activator",
            "openshift-serverless-1/serving-activator-rhel8",
        ),
        ("kn-serving-activator", "openshift-serverless-1/serving-activator-rhel8"),
        (
            "serverless-operator-135/kn-eventing-channel-controller",
            "openshift-serverless-1/eventing-in-memory-channel-controller-rhel8",
        ),
        (
            "serverless-operator-136/kn-eventing-channel-controller",
            "openshift-serverless-1/eventing-in-memory-channel-controller-rhel8",
        ),
    ];

    for (image, expected) in cases {
        assert_eq!(resolve_target(image, RHEL8)?, expected, "image {image}");
    }
    Ok(())
}

#[test]
fn test_resolves_unrecorded_images_by_similarity() -> Result<()> {
    init_test_logging(None);

    assert_eq!(
        resolve_target("serverless-operator-136/kn-serving-webhook-v2", RHEL8)?,
        "openshift-serverless-1/serving-webhook-rhel8"
    );
    assert_eq!(
        resolve_target("kn-serving-autoscaler-hpa", RHEL8)?,
        "openshift-serverless-1/serving-autoscaler-rhel8"
    );
    assert_eq!(
        resolve_target("openshift/knative-eventing-channel-dispatcher", RHEL8)?,
        "openshift-serverless-1/eventing-in-memory-channel-dispatcher-rhel8"
    );
    Ok(())
}

#[test]
fn test_platform_filter_selects_target_family() -> Result<()> {
    assert_eq!(
        resolve_target("kn-ingress", "rhel9")?,
        "openshift-serverless-1/ingress-rhel9"
    );
    assert_eq!(resolve_target("kn-ingress", "")?, "openshift-serverless-1/ingress-rhel9");
    Ok(())
}

#[test]
fn test_unmatched_platform_is_no_match() -> Result<()> {
    let (_temp, path) = MappingFixture::serverless().write_temp()?;
    let store = MappingStore::new(&path);

    match store.resolve("rhel10", "kn-serving-activator") {
        Err(CometError::NoMatch { image, platform, dump, .. }) => {
            assert_eq!(image, "kn-serving-activator");
            assert_eq!(platform, "rhel10");
            assert!(dump.contains("openshift-serverless-1/ingress-rhel9"));
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_empty_file_is_no_match() -> Result<()> {
    let (_temp, path) = MappingFixture::empty().write_temp()?;
    let err = MappingStore::new(&path).resolve("", "kn-anything").unwrap_err();
    assert!(matches!(err, CometError::NoMatch { .. }));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let store = MappingStore::new(temp.path().join("comet.yaml"));
    let err = store.resolve(RHEL8, "kn-serving-activator").unwrap_err();
    assert!(matches!(err, CometError::Io { .. }));
}

#[test]
fn test_malformed_file_is_format_error() -> Result<()> {
    let temp = tempfile::TempDir::new()?;
    let path = temp.path().join("comet.yaml");
    std::fs::write(&path, "- to: [unterminated\n")?;

    let err = MappingStore::new(&path).resolve(RHEL8, "kn-x").unwrap_err();
    assert!(matches!(err, CometError::Format { .. }));
    Ok(())
}

#[test]
fn test_repeated_resolution_is_stable() -> Result<()> {
    let (_temp, path) = MappingFixture::serverless().write_temp()?;
    let store = MappingStore::new(&path);

    let first = store.resolve(RHEL8, "kn-eventing")?;
    for _ in 0..5 {
        assert_eq!(store.resolve(RHEL8, "kn-eventing")?, first);
    }
    Ok(())
}
