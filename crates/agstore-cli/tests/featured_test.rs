use agstore_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_featured_json_starts_at_first_slide() {
    let world = TestWorld::new().initialized();

    let result = world
        .run(&["featured", "--format", "json"])
        .expect("Failed to run featured");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("featured output is not JSON");
    assertions::assert_slide_count(&json, 4).unwrap();
    assertions::assert_current_index(&json, Some(0)).unwrap();

    let slides = json["content"]["slides"].as_array().unwrap();
    assertions::assert_paths_are_agent_routes(slides).unwrap();
    assert_eq!(slides[0]["runs"], 75000);
    assert_eq!(slides[0]["rating"], 4.7);
    assert!(slides[3]["runs"].is_null());
    assert!(slides[3]["rating"].is_null());
}

#[test]
fn test_start_selects_slide() {
    let world = TestWorld::new().initialized();

    let result = world
        .run(&["featured", "--start", "2", "--format", "json"])
        .expect("Failed to run featured");
    assert!(result.success());
    let json = result.json().unwrap();
    assertions::assert_current_index(&json, Some(2)).unwrap();
}

#[test]
fn test_start_out_of_range_fails() {
    let world = TestWorld::new().initialized();

    let result = world
        .run(&["featured", "--start", "9"])
        .expect("Failed to run featured");
    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("slide 9 is out of range (4 slides)")
    );
}

#[test]
fn test_plain_output() {
    let world = TestWorld::new().with_catalog(&fixtures::catalog_with_featured(2));

    let result = world.run(&["featured"]).expect("Failed to run featured");
    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    FEATURED AGENTS (2)

    ▶ [1/2] SEO Optimizer Pro  by WordCraft AI
            Rank higher with less effort
            runs 75,000   ★ 4.7
            /store/agent/WordCraft AI/seo-optimizer-pro
      [2/2] Inbox Zero  by Mailwise Labs
            Triage email on autopilot
            runs 1,250,300   ★ 4.9
            /store/agent/Mailwise Labs/inbox-zero

    ━━━ •
    ");
}

#[test]
fn test_locale_changes_grouping() {
    let world = TestWorld::new()
        .with_catalog(&fixtures::catalog_with_featured(1))
        .with_config("[display]\nlocale = \"de\"\n");

    let result = world.run(&["featured"]).expect("Failed to run featured");
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("runs 75.000"));
}

#[test]
fn test_empty_collection_is_inert() {
    let world = TestWorld::new().with_catalog(&fixtures::empty_catalog());

    let plain = world.run(&["featured"]).expect("Failed to run featured");
    assert!(plain.success());
    assert!(plain.stdout().starts_with("No featured agents."));
    assert!(plain.stdout().contains("agstore init --force"));

    let json = world
        .run(&["featured", "--format", "json"])
        .expect("Failed to run featured")
        .json()
        .unwrap();
    assertions::assert_slide_count(&json, 0).unwrap();
    assertions::assert_current_index(&json, None).unwrap();

    let start = world
        .run(&["featured", "--start", "0"])
        .expect("Failed to run featured");
    assert!(!start.success());
    assert!(start.stderr().contains("out of range (0 slides)"));
}

#[test]
fn test_camel_case_catalog_loads() {
    let world = TestWorld::new();
    std::fs::write(
        world.catalog_path(),
        r#"{
            "featured": [{
                "slug": "seo-optimizer-pro",
                "agentName": "SEO Optimizer Pro",
                "agentImage": "https://example.com/seo.png",
                "creatorName": "WordCraft AI",
                "creatorAvatar": "https://example.com/wordcraft.png",
                "subHeading": "Rank higher",
                "description": "Audits pages.",
                "runs": 75000,
                "rating": 4.7
            }]
        }"#,
    )
    .unwrap();

    let result = world
        .run(&["featured", "--format", "json"])
        .expect("Failed to run featured");
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(
        json["content"]["slides"][0]["path"],
        "/store/agent/WordCraft AI/seo-optimizer-pro"
    );
    assert_eq!(json["content"]["slides"][0]["sub_heading"], "Rank higher");
}
