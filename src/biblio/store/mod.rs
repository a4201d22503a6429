//! # Storage Layer
//!
//! The [`CatalogStore`] trait abstracts where the catalog lives so the command
//! layer never knows about files.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `catalog.json` per directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests and embedding
//!
//! ## Contract
//!
//! Stores own the catalog (an insertion-ordered list of items) and the
//! active-loans index (the on-loan items, keyed by id). The index is a
//! denormalization of item status and must be reconciled on every save and
//! remove; [`CatalogStore::loaned_items`] walks the index, not the whole
//! catalog. Items handed out are clones, so callers can never mutate store
//! state through a returned value.

use crate::error::Result;
use crate::model::Item;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait CatalogStore {
    /// Save an item (create or update). An item seen for the first time is
    /// appended; a known id is updated in place, keeping catalog order.
    fn save_item(&mut self, item: &Item) -> Result<()>;

    /// Get an item by id.
    fn get_item(&self, id: &Uuid) -> Result<Item>;

    /// All items in insertion order.
    fn list_items(&self) -> Result<Vec<Item>>;

    /// Remove an item permanently, returning it. Order of the remaining
    /// items is preserved.
    fn remove_item(&mut self, id: &Uuid) -> Result<Item>;

    /// The items currently on loan, via the active-loans index.
    fn loaned_items(&self) -> Result<Vec<Item>>;
}
