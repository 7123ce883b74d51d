use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use super::{I18nError, normalise_locale, primary_language};

/// Source for a resolved locale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Locale supplied explicitly by the host or the caller.
    Explicit,
    /// Locale reported by the injected [`LocaleDetector`].
    Detected,
    /// Configured fallback locale.
    Fallback,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => formatter.write_str("explicit locale"),
            Self::Detected => formatter.write_str("detected locale"),
            Self::Fallback => formatter.write_str("fallback locale"),
        }
    }
}

/// Requested starting locale: a concrete code or `auto`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum LocaleRequest {
    /// Ask the injected [`LocaleDetector`] for the locale.
    #[default]
    Auto,
    /// Use this locale code.
    Code(String),
}

impl LocaleRequest {
    const AUTO: &'static str = "auto";

    /// Build an explicit request for `code`.
    #[must_use]
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }
}

impl FromStr for LocaleRequest {
    type Err = I18nError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match normalise_locale(Some(input)) {
            None => Err(I18nError::InvalidLocale {
                value: input.to_owned(),
            }),
            Some(value) if value.eq_ignore_ascii_case(Self::AUTO) => Ok(Self::Auto),
            Some(value) => Ok(Self::Code(value.to_owned())),
        }
    }
}

impl fmt::Display for LocaleRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => formatter.write_str(Self::AUTO),
            Self::Code(code) => formatter.write_str(code),
        }
    }
}

/// Capability supplied by the host that guesses the user's locale.
#[cfg_attr(test, mockall::automock)]
pub trait LocaleDetector {
    /// Returns a best-guess locale code, or `None` when nothing is known.
    fn detect(&self) -> Option<String>;
}

/// Detector backed by the operating system's preferred locale.
///
/// The reported tag is reduced to its primary language, so `it-IT` becomes
/// `it`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLocaleDetector;

impl LocaleDetector for SystemLocaleDetector {
    fn detect(&self) -> Option<String> {
        sys_locale::get_locale().and_then(|tag| primary_language(&tag))
    }
}

/// Outcome of locale resolution including the effective locale and provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    locale: String,
    source: LocaleSource,
    requested: Option<String>,
}

impl LocaleSelection {
    pub(crate) const fn new(
        locale: String,
        source: LocaleSource,
        requested: Option<String>,
    ) -> Self {
        Self {
            locale,
            source,
            requested,
        }
    }

    /// Returns the effective locale source.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Returns the raw value the resolved source supplied, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Returns the resolved locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether the fallback locale was used.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.source == LocaleSource::Fallback
    }

    /// Emit a debug log summarising the resolved locale.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.locale(),
        );
    }
}

fn detect_candidate(detector: &dyn LocaleDetector) -> Option<LocaleSelection> {
    let Some(raw) = detector.detect() else {
        debug!(target: "i18n::selection", "locale detector reported nothing");
        return None;
    };

    if let Some(candidate) = normalise_locale(Some(&raw)) {
        return Some(LocaleSelection::new(
            candidate.to_owned(),
            LocaleSource::Detected,
            Some(raw.clone()),
        ));
    }

    warn!(
        target: "i18n::selection",
        "skipping blank {} `{raw}`",
        LocaleSource::Detected,
    );

    None
}

fn fallback_selection(fallback: &str) -> LocaleSelection {
    LocaleSelection::new(fallback.to_owned(), LocaleSource::Fallback, None)
}

/// Resolve a [`LocaleRequest`] against `detector`, using `fallback` when the
/// detector has no answer.
#[must_use]
pub fn select_with(
    request: &LocaleRequest,
    detector: &dyn LocaleDetector,
    fallback: &str,
) -> LocaleSelection {
    match request {
        LocaleRequest::Code(code) => match normalise_locale(Some(code)) {
            Some(value) => {
                LocaleSelection::new(value.to_owned(), LocaleSource::Explicit, Some(code.clone()))
            }
            None => fallback_selection(fallback),
        },
        LocaleRequest::Auto => {
            detect_candidate(detector).unwrap_or_else(|| fallback_selection(fallback))
        }
    }
}

/// Resolve the starting locale from configuration.
///
/// The resolver considers candidates in the following order:
///
/// 1. The explicitly configured locale.
/// 2. The detector, when detection is enabled.
/// 3. The fallback locale.
#[must_use]
pub fn resolve_locale(
    explicit: Option<&str>,
    detector: Option<&dyn LocaleDetector>,
    fallback: &str,
) -> LocaleSelection {
    if let Some(value) = normalise_locale(explicit) {
        return LocaleSelection::new(
            value.to_owned(),
            LocaleSource::Explicit,
            Some(value.to_owned()),
        );
    }

    detector
        .and_then(detect_candidate)
        .unwrap_or_else(|| fallback_selection(fallback))
}
