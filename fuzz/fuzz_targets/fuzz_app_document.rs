#![no_main]

use libfuzzer_sys::fuzz_target;

use appjson::domain::entities::AppDocument;
use appjson::domain::value_objects::LifecyclePhase;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Document parsing and script lookup must never panic
        if let Ok(document) = AppDocument::parse(content) {
            for phase in [
                LifecyclePhase::Predeploy,
                LifecyclePhase::Release,
                LifecyclePhase::HerokuPostdeploy,
                LifecyclePhase::Postdeploy,
            ] {
                let _ = document.script_for(phase);
            }
            assert!(document.deploy_parallelism("web") >= 1);
        }
    }
});
