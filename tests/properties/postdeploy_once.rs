//! Property tests for at-most-once execution of the first-deploy script.

use proptest::prelude::*;

use appjson::domain::value_objects::LifecyclePhase;
use appjson::presentation::factory;
use appjson::{AppName, AttemptToken, ImageRef};

use crate::common::{recording_runner, RecordingExecutor, TestEnv, ALL_SCRIPTS};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: However many releases run, and whether or not earlier
    /// attempts went through pre-release, `heroku.postdeploy` runs once.
    #[test]
    fn property_first_deploy_script_runs_once(
        releases in proptest::collection::vec(any::<bool>(), 1..8)
    ) {
        let env = TestEnv::new();
        env.write_source_file("web", "app.json", ALL_SCRIPTS);
        let app = AppName::parse("web").unwrap();
        let executor = RecordingExecutor::new(&env.config);
        let runner = recording_runner(&env.config, &executor);

        for (i, staged) in releases.iter().enumerate() {
            let token = AttemptToken::parse(&format!("r{i}")).unwrap();
            let image = ImageRef::new(format!("apps/web:{i}"));
            // unstaged attempts model rebuilds, which skip stage and commit
            if *staged {
                factory::create_stager(&env.config)
                    .stage(&app, &env.source_dir("web"), None, &token)
                    .unwrap();
                factory::create_commit_manager(&env.config)
                    .commit(&app, &token)
                    .unwrap();
                runner.pre_release(&app, &image, &token).unwrap();
            }
            runner.release(&app, &image, &token).unwrap();
        }

        let first_deploys = executor
            .phases()
            .into_iter()
            .filter(|phase| *phase == LifecyclePhase::HerokuPostdeploy)
            .count();
        let any_committed = releases.iter().any(|staged| *staged);
        // without a committed document there is no script to record
        prop_assert!(first_deploys <= 1);
        if releases[0] {
            prop_assert_eq!(first_deploys, 1);
        }
        if !any_committed {
            prop_assert_eq!(first_deploys, 0);
        }
    }
}
