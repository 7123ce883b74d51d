//! Catalog bootstrap for a hosting application.
//!
//! [`Localisation`] owns the catalog for one host instance. It layers the
//! built-in bundle, inline configuration messages and bundle files, then
//! picks the starting locale from the explicit setting, the injected
//! detector or the fallback, in that order.

use lexis_common::i18n::{LocaleDetector, LocaleSelection, MessageCatalog, resolve_locale};
use log::debug;

use crate::bundle_files::load_bundle_file;
use crate::config::CatalogConfig;
use crate::error::Result;

const LOG_TARGET: &str = "i18n::host";

/// A host's message catalog together with the outcome of locale selection.
#[derive(Debug)]
pub struct Localisation {
    catalog: MessageCatalog,
    selection: LocaleSelection,
}

impl Localisation {
    /// Build the catalog described by `config`.
    ///
    /// `detector` is consulted only when no explicit locale is configured and
    /// `detect_locale` is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error when the built-in bundle or a configured bundle file
    /// cannot be loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis::{CatalogConfig, Localisation};
    /// use lexis_common::i18n::testing::FixedDetector;
    /// use lexis_common::i18n::LocaleSource;
    ///
    /// let config = CatalogConfig::default();
    /// let localisation = Localisation::init(&config, &FixedDetector::new(Some("it")))?;
    ///
    /// assert_eq!(localisation.selection().source(), LocaleSource::Detected);
    /// assert_eq!(localisation.catalog().locale(), "it");
    /// # Ok::<(), lexis::LexisError>(())
    /// ```
    pub fn init(config: &CatalogConfig, detector: &dyn LocaleDetector) -> Result<Self> {
        let mut catalog = MessageCatalog::with_defaults()?;
        catalog.add_messages(config.messages.clone());
        let paths = config.message_file_paths();
        for path in &paths {
            catalog.add_messages(load_bundle_file(path)?);
        }
        debug!(
            target: LOG_TARGET,
            "merged {} bundle files over the built-in messages",
            paths.len()
        );

        let fallback = config.fallback_locale();
        catalog.set_fallback_chain([fallback]);
        catalog.set_debug(config.debug);

        let selection = resolve_locale(
            config.locale(),
            config.detect_locale.then_some(detector),
            fallback,
        );
        catalog.set_locale(selection.locale());
        selection.log_outcome(LOG_TARGET);

        Ok(Self { catalog, selection })
    }

    /// The host's catalog.
    #[must_use]
    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Mutable access for plugins and runtime overrides.
    pub const fn catalog_mut(&mut self) -> &mut MessageCatalog {
        &mut self.catalog
    }

    /// How the starting locale was chosen.
    #[must_use]
    pub const fn selection(&self) -> &LocaleSelection {
        &self.selection
    }

    /// Consume the host, yielding the catalog.
    #[must_use]
    pub fn into_catalog(self) -> MessageCatalog {
        self.catalog
    }
}
