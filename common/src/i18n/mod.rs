//! Hierarchical message catalog for UI strings.
//!
//! Messages live per locale in nested [`MessageTree`]s addressed by namespace
//! paths such as `styleManager.properties.margin-top`. Hosts and plugins
//! override or extend them at any time with [`MessageCatalog::add_messages`],
//! which deep-merges partial trees and leaves untouched siblings alone.
//!
//! Lookups start from the active locale and walk the fallback chain before
//! reporting absence. The active locale is chosen by [`resolve_locale`] or
//! [`MessageCatalog::select_locale`], which consult an injected
//! [`LocaleDetector`] when asked for `auto`.
//!
//! See [`resolve_or_placeholder`] for rendering absent messages without
//! failing.

/// Locale consulted when nothing else provides a message.
pub const FALLBACK_LOCALE: &str = "en";

mod bundles;
mod catalog;
mod diagnostics;
mod error;
mod events;
mod locales;
mod params;
mod selection;
mod tree;
pub mod testing;

pub use bundles::{built_in_messages, parse_toml_bundle};
pub use catalog::{MessageCatalog, Messages, TranslateOptions};
pub use diagnostics::{MessageLookup, MissingPolicy, resolve_or_placeholder};
pub use error::I18nError;
pub use events::{CatalogEvent, ListenerId};
pub use locales::{normalise_locale, primary_language};
pub use params::{Params, interpolate};
pub use selection::{
    LocaleDetector, LocaleRequest, LocaleSelection, LocaleSource, SystemLocaleDetector,
    resolve_locale, select_with,
};
pub use tree::{MessageNode, MessageTree};
