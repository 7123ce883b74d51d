//! Change notifications emitted by the catalog.
//!
//! Listeners run synchronously on the thread that mutates the catalog. They
//! observe the change but cannot reach back into the catalog while it is
//! being mutated.

use std::fmt;

/// A change applied to a [`MessageCatalog`](super::MessageCatalog).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogEvent {
    /// Messages were merged into the listed locales.
    Added {
        /// Locale codes touched by the merge, in key order.
        locales: Vec<String>,
    },
    /// Stored messages changed; emitted after every merge or replacement.
    Updated,
    /// The active locale changed.
    LocaleChanged {
        /// Newly active locale.
        value: String,
        /// Locale that was active before.
        previous: String,
    },
}

/// Handle returned by [`MessageCatalog::subscribe`](super::MessageCatalog::subscribe).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CatalogEvent)>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(candidate, _)| *candidate != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &CatalogEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Listeners")
            .field("registered", &self.entries.len())
            .finish()
    }
}
