//! Locale code normalisation.
//!
//! Catalog keys are short language codes such as `en` or `it`. Hosts and
//! operating systems hand over richer tags (`it-IT`, `pt_BR.UTF-8`), so this
//! module reduces them to the primary language subtag before they reach the
//! catalog.

use unic_langid::LanguageIdentifier;

const UNDETERMINED: &str = "und";

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}

/// Reduce a locale tag to its lowercase primary language subtag.
///
/// POSIX suffixes (`.UTF-8`, `@euro`) are dropped and `_` separators are
/// accepted. Tags without a language, such as `und` or `C`, yield `None`.
///
/// ```
/// use lexis_common::i18n::primary_language;
///
/// assert_eq!(primary_language("it-IT").as_deref(), Some("it"));
/// assert_eq!(primary_language("pt_BR.UTF-8").as_deref(), Some("pt"));
/// assert_eq!(primary_language("C"), None);
/// ```
#[must_use]
pub fn primary_language(tag: &str) -> Option<String> {
    let trimmed = normalise_locale(Some(tag))?;
    let without_codeset = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or(trimmed)
        .replace('_', "-");

    let identifier = without_codeset.parse::<LanguageIdentifier>().ok()?;
    let language = identifier.language.to_string().to_ascii_lowercase();
    if language == UNDETERMINED {
        return None;
    }

    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("  "), None)]
    #[case(Some("it"), Some("it"))]
    #[case(Some(" it "), Some("it"))]
    fn normalises_candidates(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(normalise_locale(input), expected);
    }

    #[rstest]
    #[case("en", Some("en"))]
    #[case("EN-gb", Some("en"))]
    #[case("tr_TR.UTF-8", Some("tr"))]
    #[case("de_DE@euro", Some("de"))]
    #[case("zh-Hant-TW", Some("zh"))]
    #[case("und", None)]
    #[case("C", None)]
    #[case("", None)]
    fn reduces_tags_to_language(#[case] tag: &str, #[case] expected: Option<&str>) {
        assert_eq!(primary_language(tag).as_deref(), expected);
    }
}
