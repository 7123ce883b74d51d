//! Core of the Lexis message catalog: nested message trees, deep merges,
//! locale selection and fallback lookups.

pub mod i18n;

pub use i18n::{
    CatalogEvent, FALLBACK_LOCALE, I18nError, ListenerId, LocaleDetector, LocaleRequest,
    LocaleSelection, LocaleSource, MessageCatalog, MessageLookup, MessageNode, MessageTree,
    Messages, MissingPolicy, Params, SystemLocaleDetector, TranslateOptions, normalise_locale,
    resolve_locale, resolve_or_placeholder,
};
