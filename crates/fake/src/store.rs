//! Keyed in-memory stores and identity generation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use stratus_core::Guid;
use uuid::Uuid;

/// Records addressable by GUID.
pub trait HasGuid {
    fn guid(&self) -> &Guid;
}

/// Insertion-ordered collection keyed by GUID.
///
/// Iteration order is insertion order, so pagination over a store is
/// stable. Intended for the fake controller; not optimized.
#[derive(Debug)]
pub struct Store<T> {
    inner: RwLock<Slots<T>>,
}

#[derive(Debug)]
struct Slots<T> {
    order: Vec<Guid>,
    items: HashMap<Guid, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Slots {
                order: Vec::new(),
                items: HashMap::new(),
            }),
        }
    }
}

impl<T: HasGuid + Clone> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, returning it. First insertion fixes the
    /// record's position in iteration order.
    pub fn add(&self, item: T) -> T {
        let mut slots = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let guid = item.guid().clone();
        if !slots.items.contains_key(&guid) {
            slots.order.push(guid.clone());
        }
        slots.items.insert(guid, item.clone());
        item
    }

    pub fn get(&self, guid: &Guid) -> Option<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .get(guid)
            .cloned()
    }

    pub fn contains(&self, guid: &Guid) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .contains_key(guid)
    }

    /// Mutate a record in place; returns the updated record, or `None` when
    /// the GUID is unknown.
    pub fn update(&self, guid: &Guid, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut slots = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let item = slots.items.get_mut(guid)?;
        f(item);
        Some(item.clone())
    }

    /// Snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<T> {
        let slots = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .order
            .iter()
            .filter_map(|guid| slots.items.get(guid).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identity generation seam for the fake controller.
pub trait GuidSource: Send + Sync {
    /// Mint a fresh GUID for a resource kind (`org`, `space`, `user`, `app`).
    fn next(&self, prefix: &str) -> Guid;
}

/// Default source: random v4 uuids under a readable prefix.
#[derive(Debug, Default)]
pub struct UuidGuidSource;

impl GuidSource for UuidGuidSource {
    fn next(&self, prefix: &str) -> Guid {
        Guid::new(format!("{prefix}-{}", Uuid::new_v4()))
    }
}

/// Deterministic source for tests: `org-001`, `org-002`, ...
#[derive(Debug, Default)]
pub struct SequenceGuidSource {
    counter: AtomicU64,
}

impl GuidSource for SequenceGuidSource {
    fn next(&self, prefix: &str) -> Guid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Guid::new(format!("{prefix}-{n:03}"))
    }
}
