//! Scenario: apps deployed from a prebuilt image instead of source.

use appjson::domain::entities::{CommitOutcome, StageOutcome};
use appjson::domain::value_objects::property_keys::{
    BUILDER_NAMESPACE, BUILD_DIR_KEY, GIT_NAMESPACE, SOURCE_IMAGE_KEY,
};
use appjson::domain::ports::DeployQuery;
use appjson::presentation::factory;
use appjson::{AppName, AttemptToken, ImageRef};

use crate::common::{directory_stager, DirectoryImages, TestEnv};

fn app() -> AppName {
    AppName::parse("api").unwrap()
}

fn token(t: &str) -> AttemptToken {
    AttemptToken::parse(t).unwrap()
}

#[test]
fn document_is_taken_from_source_image_property() {
    let env = TestEnv::new();
    let images = DirectoryImages::new(env.path("images"));
    images.add_file("registry:5000/api:7", "app.json", r#"{"name":"from-image"}"#);
    env.write_source_file("api", "app.json", r#"{"name":"from-tree"}"#);
    env.set_property(GIT_NAMESPACE, "api", SOURCE_IMAGE_KEY, "registry:5000/api:7");

    let source_image = factory::create_deploy_query(&env.config)
        .source_image(&app())
        .unwrap();
    assert_eq!(source_image, Some(ImageRef::new("registry:5000/api:7")));

    let token = token("200");
    let outcome = directory_stager(&env.config, &images)
        .stage(&app(), &env.source_dir("api"), source_image.as_ref(), &token)
        .unwrap();
    assert_eq!(outcome, StageOutcome::Staged);

    factory::create_commit_manager(&env.config)
        .commit(&app(), &token)
        .unwrap();
    assert_eq!(
        env.committed_document("api").as_deref(),
        Some(r#"{"name":"from-image"}"#)
    );
}

#[test]
fn build_dir_is_honoured_inside_image() {
    let env = TestEnv::new();
    let images = DirectoryImages::new(env.path("images"));
    images.add_file("api:1", "services/api/app.json", r#"{"name":"nested"}"#);
    env.set_property(BUILDER_NAMESPACE, "api", BUILD_DIR_KEY, "services/api");

    let token = token("201");
    directory_stager(&env.config, &images)
        .stage(
            &app(),
            &env.source_dir("api"),
            Some(&ImageRef::new("api:1")),
            &token,
        )
        .unwrap();
    factory::create_commit_manager(&env.config)
        .commit(&app(), &token)
        .unwrap();

    assert_eq!(
        env.committed_document("api").as_deref(),
        Some(r#"{"name":"nested"}"#)
    );
}

#[test]
fn image_without_document_stages_missing() {
    let env = TestEnv::new();
    let images = DirectoryImages::new(env.path("images"));
    env.write_source_file("api", "app.json", r#"{"name":"ignored"}"#);

    let token = token("202");
    let outcome = directory_stager(&env.config, &images)
        .stage(
            &app(),
            &env.source_dir("api"),
            Some(&ImageRef::new("api:2")),
            &token,
        )
        .unwrap();
    assert_eq!(outcome, StageOutcome::Missing);
    assert!(env.data_path("api", "app.json.202.missing").exists());
    assert!(!env.data_path("api", "app.json.202").exists());

    let outcome = factory::create_commit_manager(&env.config)
        .commit(&app(), &token)
        .unwrap();
    assert_eq!(outcome, CommitOutcome::Cleared);
    assert!(env.committed_document("api").is_none());
}

#[test]
fn blank_source_image_falls_back_to_tree() {
    let env = TestEnv::new();
    let images = DirectoryImages::new(env.path("images"));
    env.set_property(GIT_NAMESPACE, "api", SOURCE_IMAGE_KEY, "  ");
    env.write_source_file("api", "app.json", r#"{"name":"from-tree"}"#);

    let source_image = factory::create_deploy_query(&env.config)
        .source_image(&app())
        .unwrap();
    assert!(source_image.is_none());

    let token = token("203");
    let outcome = directory_stager(&env.config, &images)
        .stage(&app(), &env.source_dir("api"), None, &token)
        .unwrap();
    assert_eq!(outcome, StageOutcome::Staged);
}
