//! Property tests for image tag extraction.

use proptest::prelude::*;

use appjson::domain::value_objects::DEFAULT_TAG;
use appjson::ImageRef;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9._-]{0,12}").unwrap()
}

fn tag() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._-]{0,16}").unwrap()
}

fn registry() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(
        (segment(), proptest::option::of(1u16..=65535)).prop_map(|(host, port)| match port {
            Some(port) => format!("{host}:{port}"),
            None => host,
        }),
    )
}

fn repository() -> impl Strategy<Value = String> {
    (registry(), proptest::collection::vec(segment(), 1..=3)).prop_map(|(registry, path)| {
        let path = path.join("/");
        match registry {
            Some(registry) => format!("{registry}/{path}"),
            None => path,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The tag is the text after the last `:` following the last `/`.
    #[test]
    fn property_explicit_tag_is_extracted(repo in repository(), tag in tag()) {
        let image = ImageRef::new(format!("{repo}:{tag}"));
        prop_assert_eq!(image.tag(), tag.as_str());
    }

    /// PROPERTY: A registry port is never mistaken for a tag.
    #[test]
    fn property_untagged_image_is_latest(repo in repository()) {
        let image = ImageRef::new(repo);
        prop_assert_eq!(image.tag(), DEFAULT_TAG);
    }

    /// PROPERTY: Images built for an app carry the requested tag.
    #[test]
    fn property_app_image_round_trips_tag(app in segment(), tag in tag()) {
        let image = ImageRef::for_app("apps", &app, &tag);
        prop_assert_eq!(image.tag(), tag.as_str());
        prop_assert_eq!(image.as_str(), format!("apps/{app}:{tag}"));
    }
}
