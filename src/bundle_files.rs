//! Loading locale bundle files from disk.
//!
//! A bundle file holds a table of locale code to message tree, written either
//! as TOML or as JSON. Files are merged into the catalog in the order the
//! configuration lists them.

use std::fs;

use camino::Utf8Path;
use lexis_common::i18n::Messages;

use crate::error::{LexisError, Result};

/// Read and parse the bundle at `path`, dispatching on its extension.
///
/// # Errors
///
/// Returns [`LexisError::Read`] when the file cannot be read,
/// [`LexisError::Parse`] when its contents are not a locale table, and
/// [`LexisError::UnsupportedBundle`] for extensions other than `toml` and
/// `json`.
pub fn load_bundle_file(path: &Utf8Path) -> Result<Messages> {
    let format = BundleFormat::for_path(path)?;
    let source = fs::read_to_string(path).map_err(|source| LexisError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(path.as_str(), &source)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum BundleFormat {
    Toml,
    Json,
}

impl BundleFormat {
    fn for_path(path: &Utf8Path) -> Result<Self> {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(LexisError::UnsupportedBundle {
                path: path.to_path_buf(),
            }),
        }
    }

    fn parse(self, origin: &str, source: &str) -> Result<Messages> {
        let parsed = match self {
            Self::Toml => toml::from_str(source).map_err(|error| error.to_string()),
            Self::Json => serde_json::from_str(source).map_err(|error| error.to_string()),
        };
        parsed.map_err(|reason| LexisError::Parse {
            origin: origin.to_owned(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;

    #[rstest]
    #[case("locales/it.toml", Some(BundleFormat::Toml))]
    #[case("locales/it.JSON", Some(BundleFormat::Json))]
    #[case("locales/it.yaml", None)]
    #[case("locales/it", None)]
    fn picks_format_from_extension(#[case] path: &str, #[case] expected: Option<BundleFormat>) {
        let format = BundleFormat::for_path(&Utf8PathBuf::from(path)).ok();
        assert_eq!(format, expected);
    }

    #[test]
    fn json_and_toml_describe_the_same_tree() {
        let from_toml = BundleFormat::Toml
            .parse("it.toml", "[it.styleManager]\nempty = \"Seleziona un elemento\"\n")
            .expect("toml bundle should parse");
        let from_json = BundleFormat::Json
            .parse(
                "it.json",
                r#"{"it": {"styleManager": {"empty": "Seleziona un elemento"}}}"#,
            )
            .expect("json bundle should parse");

        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn parse_errors_name_their_origin() {
        let error = BundleFormat::Json
            .parse("broken.json", "{not json")
            .expect_err("malformed json should fail");

        assert!(matches!(error, LexisError::Parse { ref origin, .. } if origin == "broken.json"));
    }
}
