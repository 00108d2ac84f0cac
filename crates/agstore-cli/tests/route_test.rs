use agstore_testing::{TestWorld, fixtures};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_route_for_featured_agent() {
    let world = TestWorld::new().initialized();

    let result = world
        .run(&["route", "seo-optimizer-pro"])
        .expect("Failed to run route");
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @"/store/agent/WordCraft AI/seo-optimizer-pro");
}

#[test]
fn test_route_for_top_agent() {
    let world = TestWorld::new().initialized();

    let result = world
        .run(&["route", "code-reviewer", "--format", "json"])
        .expect("Failed to run route");
    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["slug"], "code-reviewer");
    assert_eq!(json["content"]["path"], "/store/agent/DevTools Co/code-reviewer");
}

#[test]
fn test_unknown_slug_fails() {
    let world = TestWorld::new().initialized();

    let mut cmd = cargo_bin_cmd!("agstore");
    world.configure_command(&mut cmd).args(["route", "no-such-agent"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No agent with slug 'no-such-agent'"));
}

#[test]
fn test_missing_catalog_points_at_init() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("agstore");
    world.configure_command(&mut cmd).args(["route", "inbox-zero"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("agstore init"));
}

#[test]
fn test_catalog_flag_overrides_workspace() {
    let world = TestWorld::new();
    let elsewhere = world.temp_dir().join("elsewhere.json");
    fixtures::write_catalog(&fixtures::catalog_with_featured(1), &elsewhere).unwrap();

    let result = world
        .run(&["route", "seo-optimizer-pro", "--catalog", elsewhere.to_str().unwrap()])
        .expect("Failed to run route");
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "/store/agent/WordCraft AI/seo-optimizer-pro\n"
    );
}
