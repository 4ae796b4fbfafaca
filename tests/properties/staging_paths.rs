//! Property tests for staging path resolution and name validation.

use proptest::prelude::*;

use appjson::domain::services::{source_locations, DocumentLayout};
use appjson::domain::value_objects::DocumentPath;
use appjson::{AppName, AttemptToken};

fn app_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap()
}

fn attempt_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Attempt files live beside the canonical document and carry the token.
    #[test]
    fn property_attempt_paths_stay_in_app_dir(app in app_name(), token in attempt_token()) {
        let layout = DocumentLayout::new("/data/app-json");
        let app = AppName::parse(&app).unwrap();
        let token = AttemptToken::parse(&token).unwrap();
        let paths = layout.staging(&app, &token);
        let canonical = layout.canonical(&app);
        let app_dir = layout.app_dir(&app);

        prop_assert_eq!(paths.canonical(), canonical.as_path());
        prop_assert_eq!(paths.attempt().parent(), Some(app_dir.as_path()));
        prop_assert_eq!(
            paths.attempt().file_name().unwrap().to_string_lossy().to_string(),
            format!("app.json.{token}")
        );
        prop_assert_eq!(
            paths.missing_marker().file_name().unwrap().to_string_lossy().to_string(),
            format!("app.json.{token}.missing")
        );
    }

    /// PROPERTY: Tokens of different attempts never share a staging file.
    #[test]
    fn property_distinct_tokens_distinct_files(a in attempt_token(), b in attempt_token()) {
        prop_assume!(a != b);
        let layout = DocumentLayout::new("/data/app-json");
        let app = AppName::parse("web").unwrap();
        let first = layout.staging(&app, &AttemptToken::parse(&a).unwrap());
        let second = layout.staging(&app, &AttemptToken::parse(&b).unwrap());

        prop_assert_ne!(first.attempt(), second.attempt());
        prop_assert_ne!(first.missing_marker(), second.missing_marker());
        prop_assert_ne!(first.attempt(), second.missing_marker());
    }

    /// PROPERTY: Parsing arbitrary names and tokens never panics, and
    /// anything accepted cannot escape its directory.
    #[test]
    fn property_validation_never_panics(s in "(?s).{0,64}") {
        if let Ok(app) = AppName::parse(&s) {
            prop_assert!(!app.as_str().contains('/'));
            prop_assert!(!app.as_str().starts_with('.'));
        }
        if let Ok(token) = AttemptToken::parse(&s) {
            prop_assert!(!token.as_str().contains('/'));
            prop_assert!(!token.as_str().contains('.'));
        }
    }

    /// PROPERTY: Accepted document paths resolve inside the source root.
    #[test]
    fn property_document_paths_stay_in_source(s in "[A-Za-z0-9./_-]{0,48}") {
        if let Ok(document) = DocumentPath::parse(&s) {
            let root = std::path::Path::new("/src/web");
            let locations = source_locations(root, "", &document);
            prop_assert!(locations.tree.starts_with(root));
            prop_assert!(!locations.image.is_absolute());
            prop_assert!(!document.as_str().split('/').any(|seg| seg == ".."));
        }
    }
}
