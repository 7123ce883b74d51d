use log::debug;

use super::{I18nError, MessageCatalog, TranslateOptions};

/// Lookup seam used by renderers to resolve translated strings.
pub trait MessageLookup {
    /// Resolve `key` with `options`, reporting absence as an error.
    fn lookup(&self, key: &str, options: &TranslateOptions<'_>) -> Result<String, I18nError>;
}

impl MessageLookup for MessageCatalog {
    fn lookup(&self, key: &str, options: &TranslateOptions<'_>) -> Result<String, I18nError> {
        self.message(key, options)
    }
}

/// How an absent message is rendered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum MissingPolicy {
    /// Render the dotted key itself.
    #[default]
    Key,
    /// Render nothing.
    Empty,
    /// Render a fixed placeholder text.
    Placeholder(String),
}

impl MissingPolicy {
    /// Produce the text shown in place of `key`.
    #[must_use]
    pub fn render(&self, key: &str) -> String {
        match self {
            Self::Key => key.to_owned(),
            Self::Empty => String::new(),
            Self::Placeholder(text) => text.clone(),
        }
    }
}

/// Resolve `key`, rendering `policy`'s placeholder instead of failing.
///
/// # Examples
///
/// ```
/// use lexis_common::i18n::{
///     MessageCatalog, MissingPolicy, TranslateOptions, resolve_or_placeholder,
/// };
///
/// let catalog = MessageCatalog::empty();
/// let options = TranslateOptions::new();
///
/// let rendered =
///     resolve_or_placeholder(&catalog, "styleManager.empty", &options, &MissingPolicy::Key);
/// assert_eq!(rendered, "styleManager.empty");
/// ```
#[must_use]
pub fn resolve_or_placeholder(
    lookup: &impl MessageLookup,
    key: &str,
    options: &TranslateOptions<'_>,
    policy: &MissingPolicy,
) -> String {
    match lookup.lookup(key, options) {
        Ok(message) => message,
        Err(error) => {
            debug!(target: "i18n::diagnostics", "{error}; rendering placeholder");
            policy.render(key)
        }
    }
}
