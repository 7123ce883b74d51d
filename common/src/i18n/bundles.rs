//! Bundles compiled into the crate.
//!
//! The English tree under `locales/en.toml` is parsed once on first use and
//! cloned into each catalog that asks for the defaults.

use once_cell::sync::Lazy;

use super::{FALLBACK_LOCALE, I18nError, MessageTree, Messages};

const EN_BUNDLE_NAME: &str = "en.toml";
const EN_BUNDLE: &str = include_str!("../../locales/en.toml");

static BUILT_IN_EN: Lazy<Result<MessageTree, I18nError>> =
    Lazy::new(|| parse_toml_bundle(EN_BUNDLE_NAME, EN_BUNDLE));

/// Parse a TOML bundle holding a single locale's message tree.
///
/// # Errors
///
/// Returns [`I18nError::InvalidBundle`] naming `name` when `source` is not a
/// valid message tree.
pub fn parse_toml_bundle(name: &str, source: &str) -> Result<MessageTree, I18nError> {
    toml::from_str(source).map_err(|error| I18nError::InvalidBundle {
        name: name.to_owned(),
        reason: error.to_string(),
    })
}

/// Return the built-in messages keyed by locale.
///
/// # Errors
///
/// Returns [`I18nError::InvalidBundle`] when an embedded bundle fails to
/// parse.
pub fn built_in_messages() -> Result<Messages, I18nError> {
    let cached: &Result<MessageTree, I18nError> = &BUILT_IN_EN;
    let english = cached.clone()?;
    Ok(Messages::from([(FALLBACK_LOCALE.to_owned(), english)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["styleManager", "empty"], Some("Select an element before using Style Manager"))]
    #[case(&["domComponents", "names", ""], Some("Box"))]
    #[case(&["traitManager", "traits", "options", "target", "false"], Some("This window"))]
    #[case(&["styleManager", "properties", "margin-top"], None)]
    fn english_bundle_parses(#[case] path: &[&str], #[case] expected: Option<&str>) {
        let messages = built_in_messages().expect("built-in bundle should parse");
        let english = messages.get(FALLBACK_LOCALE).expect("english tree should exist");

        assert_eq!(english.text_at(path), expected);
    }

    #[test]
    fn reports_the_bundle_name_on_parse_errors() {
        let error = parse_toml_bundle("broken.toml", "styleManager = [1, 2]")
            .expect_err("arrays are not message trees");

        assert!(matches!(
            error,
            I18nError::InvalidBundle { ref name, .. } if name == "broken.toml"
        ));
    }
}
