//! Scenario: a document declaring only `{"scripts":{"release":"migrate"}}`.

use appjson::domain::value_objects::property_keys::APP_JSON_NAMESPACE;
use appjson::domain::value_objects::LifecyclePhase;
use appjson::presentation::factory;
use appjson::{AppName, AttemptToken, ImageRef};

use crate::common::{recording_runner, RecordingExecutor, TestEnv, RELEASE_ONLY};

fn app() -> AppName {
    AppName::parse("web").unwrap()
}

fn stage_and_commit(env: &TestEnv, token: &AttemptToken) {
    factory::create_stager(&env.config)
        .stage(&app(), &env.source_dir("web"), None, token)
        .unwrap();
    factory::create_commit_manager(&env.config)
        .commit(&app(), token)
        .unwrap();
}

#[test]
fn release_runs_migrate_and_nothing_else() {
    let env = TestEnv::new();
    env.write_source_file("web", "app.json", RELEASE_ONLY);
    let executor = RecordingExecutor::new(&env.config);
    let runner = recording_runner(&env.config, &executor);
    let token = AttemptToken::parse("300").unwrap();
    let image = ImageRef::new("apps/web:3");

    stage_and_commit(&env, &token);
    runner.pre_release(&app(), &image, &token).unwrap();
    runner.release(&app(), &image, &token).unwrap();
    runner.post_deploy(&app(), "3", &token).unwrap();

    let calls = executor.calls();
    assert_eq!(calls.len(), 1, "{calls:?}");
    assert_eq!(calls[0].phase, LifecyclePhase::Release);
    assert_eq!(calls[0].script, "migrate");
    assert_eq!(calls[0].image, "apps/web:3");

    // the marker is written even though no first-deploy script exists
    assert_eq!(
        env.property(APP_JSON_NAMESPACE, "web", "heroku.postdeploy")
            .as_deref(),
        Some("executed")
    );
}

#[test]
fn release_runs_on_every_deploy() {
    let env = TestEnv::new();
    env.write_source_file("web", "app.json", RELEASE_ONLY);
    let executor = RecordingExecutor::new(&env.config);
    let runner = recording_runner(&env.config, &executor);

    for attempt in ["301", "302", "303"] {
        let token = AttemptToken::parse(attempt).unwrap();
        let image = ImageRef::new(format!("apps/web:{attempt}"));
        stage_and_commit(&env, &token);
        runner.pre_release(&app(), &image, &token).unwrap();
        runner.release(&app(), &image, &token).unwrap();
    }

    assert_eq!(
        executor.phases(),
        vec![LifecyclePhase::Release; 3]
    );
}
