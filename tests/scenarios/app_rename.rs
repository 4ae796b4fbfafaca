//! Scenario: app create, clone, rename and delete keep app-json state in step.

use appjson::domain::ports::PropertyStore;
use appjson::domain::value_objects::property_keys::{APPJSON_PATH_KEY, APP_JSON_NAMESPACE};
use appjson::presentation::factory;
use appjson::{AppName, AttemptToken};

use crate::common::TestEnv;

fn app(name: &str) -> AppName {
    AppName::parse(name).unwrap()
}

/// Deploy a document and mark the first-deploy script as run.
fn deployed_app(env: &TestEnv, name: &str) {
    let events = factory::create_app_events(&env.config);
    events.install().unwrap();
    events.post_create(&app(name)).unwrap();

    env.write_source_file(name, "app.json", r#"{"name":"deployed"}"#);
    let token = AttemptToken::parse("400").unwrap();
    factory::create_stager(&env.config)
        .stage(&app(name), &env.source_dir(name), None, &token)
        .unwrap();
    factory::create_commit_manager(&env.config)
        .commit(&app(name), &token)
        .unwrap();

    env.set_property(APP_JSON_NAMESPACE, name, "heroku.postdeploy", "executed");
    factory::create_settings(&env.config)
        .set(&app(name), APPJSON_PATH_KEY, "app.json")
        .unwrap();
}

#[test]
fn rename_carries_document_and_marker() {
    let env = TestEnv::new();
    deployed_app(&env, "old");
    let before = env
        .properties()
        .list(APP_JSON_NAMESPACE, &app("old"))
        .unwrap();
    assert!(before.contains_key(APPJSON_PATH_KEY));
    let events = factory::create_app_events(&env.config);

    events.rename_setup(&app("old"), &app("new")).unwrap();
    events.rename(&app("old"), &app("new")).unwrap();

    assert_eq!(
        env.committed_document("new").as_deref(),
        Some(r#"{"name":"deployed"}"#)
    );
    assert!(env.committed_document("old").is_none());
    assert_eq!(
        env.property(APP_JSON_NAMESPACE, "new", "heroku.postdeploy")
            .as_deref(),
        Some("executed")
    );
    assert!(env
        .property(APP_JSON_NAMESPACE, "old", "heroku.postdeploy")
        .is_none());

    assert!(!env
        .config
        .paths
        .property_root
        .join(APP_JSON_NAMESPACE)
        .join("old")
        .exists());
    let after = env
        .properties()
        .list(APP_JSON_NAMESPACE, &app("new"))
        .unwrap();
    assert_eq!(after, before);
}

#[test]
fn clone_leaves_source_app_untouched() {
    let env = TestEnv::new();
    deployed_app(&env, "web");
    let events = factory::create_app_events(&env.config);

    events.clone_setup(&app("web"), &app("web-staging")).unwrap();

    for name in ["web", "web-staging"] {
        assert_eq!(
            env.committed_document(name).as_deref(),
            Some(r#"{"name":"deployed"}"#)
        );
        assert_eq!(
            env.property(APP_JSON_NAMESPACE, name, APPJSON_PATH_KEY)
                .as_deref(),
            Some("app.json")
        );
    }
}

#[test]
fn delete_removes_all_state() {
    let env = TestEnv::new();
    deployed_app(&env, "web");

    factory::create_app_events(&env.config)
        .delete(&app("web"))
        .unwrap();

    assert!(!env.config.document_root().join("web").exists());
    assert!(env
        .property(APP_JSON_NAMESPACE, "web", "heroku.postdeploy")
        .is_none());
    assert_eq!(
        factory::create_content_query(&env.config)
            .get_content(&app("web"))
            .unwrap(),
        "{}"
    );
}
