use thiserror::Error;

/// Error raised when localisation data cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when the requested message key is missing from every locale consulted.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage {
        /// Dotted key that was requested.
        key: String,
        /// Locale the lookup started from.
        locale: String,
    },
    /// Raised when a locale request is blank or cannot name a language.
    #[error("`{value}` is not a usable locale")]
    InvalidLocale {
        /// The rejected input.
        value: String,
    },
    /// Raised when an embedded or supplied bundle cannot be parsed.
    #[error("bundle `{name}` is invalid: {reason}")]
    InvalidBundle {
        /// Bundle name, usually the file it came from.
        name: String,
        /// Parser diagnostic.
        reason: String,
    },
}
