//! Test doubles for catalog consumers.
//!
//! [`FixedDetector`] answers locale detection with a fixed value,
//! [`FailingLookup`] reports every key as missing, and
//! [`RecordingListener`] captures the events a catalog emits.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use super::{CatalogEvent, I18nError, LocaleDetector, MessageLookup, TranslateOptions};

/// Detector double returning a fixed answer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FixedDetector {
    locale: Option<String>,
}

impl FixedDetector {
    /// Construct a detector that always reports `locale`.
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        Self {
            locale: locale.map(str::to_owned),
        }
    }
}

impl LocaleDetector for FixedDetector {
    fn detect(&self) -> Option<String> {
        self.locale.clone()
    }
}

/// Test double that always returns `MissingMessage` errors for lookups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailingLookup {
    message_key: Cow<'static, str>,
    locale: Cow<'static, str>,
}

impl FailingLookup {
    /// Construct a failing lookup for `message_key` using the default test locale.
    #[must_use]
    pub fn new(message_key: impl Into<Cow<'static, str>>) -> Self {
        Self::with_locale(message_key, Cow::Borrowed("test"))
    }

    /// Construct a failing lookup for `message_key` and `locale`.
    #[must_use]
    pub fn with_locale(
        message_key: impl Into<Cow<'static, str>>,
        locale: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message_key: message_key.into(),
            locale: locale.into(),
        }
    }
}

impl MessageLookup for FailingLookup {
    fn lookup(&self, _key: &str, _options: &TranslateOptions<'_>) -> Result<String, I18nError> {
        Err(I18nError::MissingMessage {
            key: self.message_key.clone().into_owned(),
            locale: self.locale.clone().into_owned(),
        })
    }
}

/// Listener double recording every catalog event it receives.
///
/// Clones share the same record, so one clone can be handed to
/// [`MessageCatalog::subscribe`](super::MessageCatalog::subscribe) while the
/// test keeps the other for assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<CatalogEvent>>>,
}

impl RecordingListener {
    /// Return a listener closure feeding this recorder.
    #[must_use]
    pub fn listener(&self) -> impl FnMut(&CatalogEvent) + 'static {
        let events = Rc::clone(&self.events);
        move |event| events.borrow_mut().push(event.clone())
    }

    /// Access the events recorded so far.
    #[must_use]
    pub fn recorded_events(&self) -> Vec<CatalogEvent> {
        self.events.borrow().clone()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
