//! The garage store - the user's saved-item collection
//!
//! An explicit store object with an open/dispose lifecycle, injected into
//! whatever surface needs it. All mutations are synchronous in-memory edits
//! followed by a whole-collection write through the storage backend; a
//! failed write is a warning, never a crash - the in-memory collection
//! stays authoritative for the session.

use crate::garage::achievements::{Achievements, GarageTally, ScoringRule};
use crate::garage::persist::StorageBackend;
use crate::garage::types::{CardType, ItemMetadata, Ownership, SavedItem};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Change notification delivered to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarageEvent {
    Added { id: String, card_type: CardType },
    Updated { id: String, card_type: CardType },
    Removed { id: String, card_type: CardType },
}

/// Handle returned by `subscribe`, accepted by `unsubscribe`
pub type SubscriberId = usize;

type Subscriber = Box<dyn Fn(&GarageEvent) + Send + Sync>;

/// Shared handle for surfaces that read snapshots concurrently
///
/// Mutations are serialized through the write lock; readers take the
/// current snapshot. Last-write-wins is fine here - every mutation is an
/// idempotent overwrite keyed by `(id, card_type)`.
pub type SharedGarage = Arc<RwLock<GarageStore>>;

/// Durable collection of saved content items keyed by `(id, card_type)`
pub struct GarageStore {
    items: Vec<SavedItem>,
    storage: Box<dyn StorageBackend + Send + Sync>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: SubscriberId,
}

impl GarageStore {
    /// Open the store, eagerly loading the persisted collection
    ///
    /// A missing document means a brand new garage. A document that exists
    /// but cannot be read or parsed is an error - silently discarding a
    /// user's collection is worse than failing loudly.
    pub fn open(storage: Box<dyn StorageBackend + Send + Sync>) -> Result<Self> {
        let items = storage.load()?.unwrap_or_default();
        Ok(Self {
            items,
            storage,
            subscribers: Vec::new(),
            next_subscriber: 0,
        })
    }

    /// Wrap the store in a shared read/write handle
    pub fn into_shared(self) -> SharedGarage {
        Arc::new(RwLock::new(self))
    }

    /// Insert or overwrite the entry at `(item.id, item.card_type)`
    ///
    /// Overwriting keeps the entry's position in the collection. Persists
    /// and notifies subscribers.
    pub fn add(&mut self, item: SavedItem) {
        let id = item.id.clone();
        let card_type = item.card_type;

        let event = match self.position(&id, card_type) {
            Some(pos) => {
                self.items[pos] = item;
                GarageEvent::Updated { id, card_type }
            }
            None => {
                self.items.push(item);
                GarageEvent::Added { id, card_type }
            }
        };

        self.persist();
        self.notify(&event);
    }

    /// Remove the entry if present; a no-op (not an error) if absent
    pub fn remove(&mut self, id: &str, card_type: CardType) {
        let Some(pos) = self.position(id, card_type) else {
            return;
        };

        self.items.remove(pos);
        self.persist();
        self.notify(&GarageEvent::Removed {
            id: id.to_string(),
            card_type,
        });
    }

    /// Shallow-merge a metadata patch into the first item with this id
    ///
    /// A no-op if no item matches. `saved_at` and the display fields are
    /// never touched; only keys present in the patch change.
    pub fn update(&mut self, id: &str, patch: ItemMetadata) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        item.metadata.merge(patch);
        let event = GarageEvent::Updated {
            id: id.to_string(),
            card_type: item.card_type,
        };

        self.persist();
        self.notify(&event);
    }

    /// Pure lookup: is this exact `(id, card_type)` key saved?
    pub fn is_saved(&self, id: &str, card_type: CardType) -> bool {
        self.position(id, card_type).is_some()
    }

    /// First item with this id, ignoring card type
    ///
    /// Used by surfaces that only know an entity id.
    pub fn find_by_id(&self, id: &str) -> Option<&SavedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Exact-key lookup
    pub fn get(&self, id: &str, card_type: CardType) -> Option<&SavedItem> {
        self.position(id, card_type).map(|pos| &self.items[pos])
    }

    /// The full collection in insertion order
    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in a given ownership bucket (the garage view filter)
    pub fn by_ownership(&self, ownership: Ownership) -> Vec<&SavedItem> {
        self.items
            .iter()
            .filter(|item| item.metadata.ownership == Some(ownership))
            .collect()
    }

    /// Per-category counts for the current collection
    pub fn tally(&self) -> GarageTally {
        GarageTally::of(&self.items)
    }

    /// Gamification summary under the given point rule
    pub fn achievements(&self, rule: &dyn ScoringRule) -> Achievements {
        Achievements::compute(&self.tally(), rule)
    }

    /// Register a change callback; returns a handle for `unsubscribe`
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: Fn(&GarageEvent) + Send + Sync + 'static,
    {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscriber; returns false if the handle was unknown
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn position(&self, id: &str, card_type: CardType) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id == id && item.card_type == card_type)
    }

    /// Write the collection through the backend; failure is non-fatal
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.items) {
            eprintln!("  ⚠ Failed to persist garage: {err:#}");
            eprintln!("    Changes are kept in memory for this session only.");
        }
    }

    fn notify(&self, event: &GarageEvent) {
        for (_, callback) in &self.subscribers {
            callback(event);
        }
    }
}
