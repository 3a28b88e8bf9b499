//! One-shot visibility subscriptions.
//!
//! A [`VisibilityObserver`] owns the mapping from watched elements to their
//! pending callbacks. The host (an `IntersectionObserver` in the browser, a
//! recording fake in tests) reports visibility in batches; each element fires
//! at most once and is then unsubscribed.
//!
//! When no host is available the observer runs in eager mode: callbacks fire
//! during [`VisibilityObserver::register`] and nothing is left pending.

use fnv::FnvHashMap;
use std::fmt;

/// Handle assigned to an element when it is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(pub u32);

impl WatchId {
    /// Parse the decimal form written into element attributes.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().map(WatchId)
    }
}

impl fmt::Display for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Pending,
    Resolved,
    Unregistered,
}

/// One record of a host callback batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub id: WatchId,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn visible(id: WatchId) -> Self {
        Self {
            id,
            is_intersecting: true,
        }
    }

    pub fn hidden(id: WatchId) -> Self {
        Self {
            id,
            is_intersecting: false,
        }
    }
}

/// Platform capability that reports when elements intersect the viewport.
pub trait VisibilityHost<E> {
    fn observe(&self, id: WatchId, element: &E);
    fn unobserve(&self, element: &E);
}

type OnVisible<E> = Box<dyn FnOnce(&E)>;

enum Slot<E> {
    Pending { element: E, on_visible: OnVisible<E> },
    Resolved,
    Unregistered,
}

impl<E> Slot<E> {
    fn state(&self) -> WatchState {
        match self {
            Slot::Pending { .. } => WatchState::Pending,
            Slot::Resolved => WatchState::Resolved,
            Slot::Unregistered => WatchState::Unregistered,
        }
    }
}

pub struct VisibilityObserver<E, H> {
    host: Option<H>,
    slots: FnvHashMap<WatchId, Slot<E>>,
    next_id: u32,
}

impl<E, H: VisibilityHost<E>> VisibilityObserver<E, H> {
    /// `None` means the runtime cannot detect visibility; every registration
    /// then resolves immediately.
    pub fn new(host: Option<H>) -> Self {
        Self {
            host,
            slots: FnvHashMap::default(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn is_eager(&self) -> bool {
        self.host.is_none()
    }

    /// Subscribe `element`; `on_visible` runs the first time it is reported
    /// as intersecting and never again.
    pub fn register(&mut self, element: E, on_visible: impl FnOnce(&E) + 'static) -> WatchId {
        let id = WatchId(self.next_id);
        // Ids only repeat after 2^32 registrations on one page.
        self.next_id = self.next_id.wrapping_add(1);
        match &self.host {
            Some(host) => {
                host.observe(id, &element);
                self.slots.insert(
                    id,
                    Slot::Pending {
                        element,
                        on_visible: Box::new(on_visible),
                    },
                );
            }
            None => {
                on_visible(&element);
                self.slots.insert(id, Slot::Resolved);
            }
        }
        id
    }

    /// Drop a pending subscription (e.g. the element left the page).
    /// Returns false if `id` was unknown or already terminal.
    ///
    /// The page wiring never detaches elements, so only callers that remove
    /// watched nodes need this.
    pub fn unregister(&mut self, id: WatchId) -> bool {
        if !matches!(self.slots.get(&id), Some(Slot::Pending { .. })) {
            return false;
        }
        if let Some(Slot::Pending { element, .. }) = self.slots.insert(id, Slot::Unregistered) {
            if let Some(host) = &self.host {
                host.unobserve(&element);
            }
        }
        true
    }

    /// Process one host callback batch and return how many elements resolved.
    ///
    /// Entries that are not intersecting, unknown, or already terminal are
    /// ignored.
    pub fn dispatch<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = VisibilityEntry>,
    {
        let mut resolved = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if !matches!(self.slots.get(&entry.id), Some(Slot::Pending { .. })) {
                continue;
            }
            if let Some(Slot::Pending {
                element,
                on_visible,
            }) = self.slots.insert(entry.id, Slot::Resolved)
            {
                on_visible(&element);
                if let Some(host) = &self.host {
                    host.unobserve(&element);
                }
                resolved += 1;
            }
        }
        resolved
    }

    pub fn state(&self, id: WatchId) -> Option<WatchState> {
        self.slots.get(&id).map(Slot::state)
    }

    pub fn pending_count(&self) -> usize {
        self.slots
            .values()
            .filter(|s| matches!(s, Slot::Pending { .. }))
            .count()
    }

    /// Number of registrations ever made, terminal ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
