//! Catalog configuration consumed when a host initialises its catalog.
//!
//! Settings live in a TOML file. Every field is optional: an empty file
//! yields auto-detection with an English fallback and only the built-in
//! messages. `messages` holds inline overrides keyed by locale code and is
//! merged with the same deep-merge rule as
//! [`MessageCatalog::add_messages`](lexis_common::i18n::MessageCatalog::add_messages).

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use lexis_common::i18n::{FALLBACK_LOCALE, LocaleRequest, Messages, normalise_locale};
use serde::Deserialize;

use crate::error::{LexisError, Result};

/// Configuration for a host's message catalog.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Explicit starting locale.
    ///
    /// Unset, blank or `auto` values leave the choice to the locale detector.
    /// The resolver trims whitespace, so `locale = ""` behaves like an
    /// omitted setting.
    pub locale: Option<String>,
    /// Whether the injected locale detector is consulted when no explicit
    /// locale is configured.
    pub detect_locale: bool,
    /// Locale consulted when a lookup misses in the active locale.
    pub locale_fallback: String,
    /// Inline messages keyed by locale code, merged over the built-in bundle.
    pub messages: Messages,
    /// Bundle files merged after `messages`, in order. Relative paths are
    /// resolved against the directory holding the configuration file.
    pub message_files: Vec<Utf8PathBuf>,
    /// Log missing keys during lookups.
    pub debug: bool,
    #[serde(skip)]
    base_dir: Option<Utf8PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale: None,
            detect_locale: true,
            locale_fallback: FALLBACK_LOCALE.to_owned(),
            messages: Messages::new(),
            message_files: Vec::new(),
            debug: false,
            base_dir: None,
        }
    }
}

impl CatalogConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::Parse`] when `source` is not valid TOML or holds
    /// unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis::CatalogConfig;
    ///
    /// let config = CatalogConfig::from_toml_str("locale = \"it\"\n")?;
    /// assert_eq!(config.locale(), Some("it"));
    /// assert!(config.detect_locale);
    /// assert_eq!(config.fallback_locale(), "en");
    /// # Ok::<(), lexis::LexisError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::parse("configuration", source)
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::Read`] when the file cannot be read and
    /// [`LexisError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| LexisError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(path.as_str(), &source)?;
        config.base_dir = path.parent().map(Utf8Path::to_path_buf);
        Ok(config)
    }

    fn parse(origin: &str, source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|error| LexisError::Parse {
            origin: origin.to_owned(),
            reason: error.to_string(),
        })
    }

    /// Returns the configured locale, if present.
    ///
    /// Whitespace-only values and `auto` (in any case) are treated as absent.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
            .filter(|value| !matches!(value.parse::<LocaleRequest>(), Ok(LocaleRequest::Auto)))
    }

    /// Returns the fallback locale, defaulting to
    /// [`FALLBACK_LOCALE`] when the setting is blank.
    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        normalise_locale(Some(&self.locale_fallback)).unwrap_or(FALLBACK_LOCALE)
    }

    /// Bundle file paths with relative entries anchored at the configuration
    /// file's directory.
    #[must_use]
    pub fn message_file_paths(&self) -> Vec<Utf8PathBuf> {
        self.message_files
            .iter()
            .map(|path| match &self.base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            })
            .collect()
    }
}
