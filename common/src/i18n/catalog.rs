//! Message catalog with deep-merge updates and locale fallback.
//!
//! # Invariants
//!
//! 1. **One tree per locale**: merging into a known locale combines trees,
//!    it never swaps them wholesale.
//! 2. **Fallback chain terminates**: a lookup consults the starting locale
//!    and then each fallback locale at most once, returning `None` when none
//!    of them holds a leaf at the path.
//! 3. **Lookups never fail**: absence is reported as `None`; only
//!    [`MessageCatalog::message`] lifts it into an [`I18nError`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::{debug, warn};

use super::events::{CatalogEvent, ListenerId, Listeners};
use super::{
    FALLBACK_LOCALE, I18nError, LocaleDetector, LocaleRequest, LocaleSelection, MessageTree,
    Params, interpolate, normalise_locale, select_with,
};

/// Mapping from locale code to message tree, as passed to
/// [`MessageCatalog::add_messages`].
pub type Messages = BTreeMap<String, MessageTree>;

/// Per-call overrides for [`MessageCatalog::translate`].
#[derive(Clone, Debug, Default)]
pub struct TranslateOptions<'a> {
    locale: Option<&'a str>,
    fallback: Option<&'a [String]>,
    params: Params<'a>,
    no_warn: bool,
}

impl<'a> TranslateOptions<'a> {
    /// Options that follow the catalog's active locale and fallback chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the lookup from `locale` instead of the active locale.
    #[must_use]
    pub fn locale(mut self, locale: &'a str) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Consult `chain` instead of the catalog's fallback chain.
    #[must_use]
    pub fn fallback(mut self, chain: &'a [String]) -> Self {
        self.fallback = Some(chain);
        self
    }

    /// Supply a value for the `{name}` placeholder.
    #[must_use]
    pub fn param(
        mut self,
        name: impl Into<Cow<'a, str>>,
        value: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Replace all placeholder values.
    #[must_use]
    pub fn params(mut self, params: Params<'a>) -> Self {
        self.params = params;
        self
    }

    /// Suppress the missing-key diagnostic for this lookup.
    #[must_use]
    pub fn no_warn(mut self) -> Self {
        self.no_warn = true;
        self
    }
}

/// Owned store of message trees keyed by locale code.
///
/// A host creates one catalog, fills it with its bundles, and passes it by
/// reference to whatever renders strings. Plugins and user overrides merge
/// into it at any time through [`Self::add_messages`].
///
/// ```
/// use lexis_common::i18n::{MessageCatalog, MessageNode, MessageTree, Messages};
///
/// let mut catalog = MessageCatalog::empty();
/// catalog.add_messages(Messages::from([(
///     "en".to_owned(),
///     MessageTree::from_iter([(
///         "styleManager",
///         MessageTree::from_iter([("empty", MessageNode::from("Select an element"))]),
///     )]),
/// )]));
/// catalog.set_locale("it");
///
/// assert_eq!(catalog.resolve("it", &["styleManager", "empty"]), Some("Select an element"));
/// assert_eq!(catalog.resolve("it", &["styleManager"]), None);
/// ```
#[derive(Debug)]
pub struct MessageCatalog {
    messages: Messages,
    locale: String,
    fallback_chain: Vec<String>,
    debug: bool,
    revision: u64,
    listeners: Listeners,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl MessageCatalog {
    /// Create a catalog without any messages, active and falling back on
    /// [`FALLBACK_LOCALE`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            messages: Messages::new(),
            locale: FALLBACK_LOCALE.to_owned(),
            fallback_chain: vec![FALLBACK_LOCALE.to_owned()],
            debug: false,
            revision: 0,
            listeners: Listeners::default(),
        }
    }

    /// Create a catalog seeded with the built-in bundles.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::InvalidBundle`] when an embedded bundle fails to
    /// parse.
    pub fn with_defaults() -> Result<Self, I18nError> {
        let mut catalog = Self::empty();
        catalog.add_messages(super::bundles::built_in_messages()?);
        Ok(catalog)
    }

    /// Deep-merge `partial` into the stored trees.
    ///
    /// Unknown locales and namespaces are created on demand. Blank locale
    /// codes are skipped, and a payload that touches no locale leaves the
    /// catalog, its revision and its listeners alone.
    pub fn add_messages(&mut self, partial: Messages) {
        let mut touched = Vec::with_capacity(partial.len());
        for (code, tree) in partial {
            let Some(locale) = normalise_locale(Some(&code)) else {
                warn!(target: "i18n::catalog", "skipping messages for a blank locale code");
                continue;
            };
            self.messages
                .entry(locale.to_owned())
                .or_default()
                .merge(tree);
            touched.push(locale.to_owned());
        }
        if touched.is_empty() {
            return;
        }

        debug!(target: "i18n::catalog", "merged messages into {touched:?}");
        self.bump();
        self.listeners.emit(&CatalogEvent::Added { locales: touched });
        self.listeners.emit(&CatalogEvent::Updated);
    }

    /// Replace every stored tree with `messages`.
    pub fn set_messages(&mut self, messages: Messages) {
        self.messages.clear();
        for (code, tree) in messages {
            if let Some(locale) = normalise_locale(Some(&code)) {
                self.messages.insert(locale.to_owned(), tree);
            }
        }

        self.bump();
        self.listeners.emit(&CatalogEvent::Updated);
    }

    /// Returns the stored tree for `locale`.
    #[must_use]
    pub fn messages(&self, locale: &str) -> Option<&MessageTree> {
        normalise_locale(Some(locale)).and_then(|code| self.messages.get(code))
    }

    /// Returns every stored tree.
    #[must_use]
    pub const fn all_messages(&self) -> &Messages {
        &self.messages
    }

    /// Sorted locale codes that hold a tree.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.messages.keys().map(String::as_str).collect()
    }

    /// Whether a tree is stored for `locale`.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.messages(locale).is_some()
    }

    /// Look up the leaf at `path`, starting in `locale` and walking the
    /// fallback chain.
    ///
    /// Paths that stop at an inner node count as absent.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, locale: &str, path: &[S]) -> Option<&str> {
        self.resolve_in_chain(locale, &self.fallback_chain, path)
    }

    fn resolve_in_chain<S: AsRef<str>>(
        &self,
        locale: &str,
        chain: &[String],
        path: &[S],
    ) -> Option<&str> {
        if path.is_empty() {
            return None;
        }

        lookup_order(locale, chain)
            .into_iter()
            .find_map(|code| self.messages.get(code)?.text_at(path))
    }

    /// Resolve a dotted key such as `styleManager.empty` and substitute its
    /// placeholders.
    ///
    /// When the catalog runs in debug mode, misses are logged unless the
    /// options ask for silence.
    #[must_use]
    pub fn translate(&self, key: &str, options: &TranslateOptions<'_>) -> Option<String> {
        let start = options.locale.unwrap_or(&self.locale);
        let chain = options.fallback.unwrap_or(&self.fallback_chain);
        let path = split_key(key);

        match self.resolve_in_chain(start, chain, path.as_slice()) {
            Some(template) => Some(interpolate(template, &options.params)),
            None => {
                if self.debug && !options.no_warn {
                    self.warn_missing(key, start);
                }
                None
            }
        }
    }

    /// Like [`Self::translate`] but reports absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when no locale consulted holds
    /// the key.
    pub fn message(
        &self,
        key: &str,
        options: &TranslateOptions<'_>,
    ) -> Result<String, I18nError> {
        self.translate(key, options)
            .ok_or_else(|| I18nError::MissingMessage {
                key: key.to_owned(),
                locale: options.locale.unwrap_or(&self.locale).to_owned(),
            })
    }

    fn warn_missing(&self, key: &str, locale: &str) {
        if !self.has_locale(locale) {
            warn!(target: "i18n::catalog", "`{locale}` i18n lang not found");
        }
        warn!(target: "i18n::catalog", "`{key}` i18n key not found in `{locale}` lang");
    }

    /// Currently active locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Make `locale` active. Blank codes are ignored.
    ///
    /// No tree needs to exist for `locale`; lookups simply fall through to the
    /// fallback chain.
    pub fn set_locale(&mut self, locale: &str) {
        let Some(code) = normalise_locale(Some(locale)) else {
            return;
        };
        if code == self.locale {
            return;
        }

        let previous = std::mem::replace(&mut self.locale, code.to_owned());
        self.bump();
        self.listeners.emit(&CatalogEvent::LocaleChanged {
            value: self.locale.clone(),
            previous,
        });
    }

    /// Resolve `request` (consulting `detector` for `auto`) and make the
    /// outcome active.
    pub fn select_locale(
        &mut self,
        request: &LocaleRequest,
        detector: &dyn LocaleDetector,
    ) -> LocaleSelection {
        let selection = select_with(request, detector, self.primary_fallback());
        self.set_locale(selection.locale());
        selection.log_outcome("i18n::catalog");
        selection
    }

    /// Ordered fallback locales consulted after the starting locale.
    #[must_use]
    pub fn fallback_chain(&self) -> &[String] {
        &self.fallback_chain
    }

    /// Replace the fallback chain. Blank entries are dropped.
    pub fn set_fallback_chain<I, S>(&mut self, chain: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fallback_chain = chain
            .into_iter()
            .filter_map(|code| normalise_locale(Some(code.as_ref())).map(str::to_owned))
            .collect();
        self.bump();
    }

    fn primary_fallback(&self) -> &str {
        self.fallback_chain
            .first()
            .map_or(FALLBACK_LOCALE, String::as_str)
    }

    /// Whether missing keys are logged by [`Self::translate`].
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Toggle missing-key logging.
    pub const fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Counter bumped by every mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener for [`CatalogEvent`]s.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CatalogEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener, returning whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    const fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Locales consulted for a lookup: the start, then the chain, each once.
fn lookup_order<'a>(start: &'a str, chain: &'a [String]) -> Vec<&'a str> {
    let mut order: Vec<&str> = Vec::with_capacity(chain.len() + 1);
    let candidates = normalise_locale(Some(start))
        .into_iter()
        .chain(chain.iter().map(String::as_str));
    for code in candidates {
        if !order.contains(&code) {
            order.push(code);
        }
    }
    order
}

fn split_key(key: &str) -> Vec<&str> {
    if key.is_empty() {
        return Vec::new();
    }
    key.split('.').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("it", &["it", "en"], vec!["it", "en"])]
    #[case("en", &["en"], vec!["en"])]
    #[case("it", &["en", "it", "en"], vec!["it", "en"])]
    #[case(" ", &["en"], vec!["en"])]
    #[case("tr", &[], vec!["tr"])]
    fn lookup_order_visits_each_locale_once(
        #[case] start: &str,
        #[case] chain: &[&str],
        #[case] expected: Vec<&str>,
    ) {
        let owned: Vec<String> = chain.iter().map(|code| (*code).to_owned()).collect();
        assert_eq!(lookup_order(start, &owned), expected);
    }

    #[rstest]
    #[case("", vec![])]
    #[case("styleManager", vec!["styleManager"])]
    #[case(
        "styleManager.properties.margin-top",
        vec!["styleManager", "properties", "margin-top"]
    )]
    fn splits_dotted_keys(#[case] key: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_key(key), expected);
    }
}
