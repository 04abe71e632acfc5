//! The cart persistence port.

use std::cell::RefCell;

use thiserror::Error;

use super::CartLineItem;

/// Errors a persistence backend can report.
///
/// [`CartStore`](super::CartStore) never propagates these to its callers; it
/// logs them and keeps the in-memory cart authoritative.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the backing storage failed.
    #[error("cart storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be serialized.
    #[error("cart serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable local storage for the cart, injected into the store.
///
/// Implementations hold a single named slot containing the JSON-serialized
/// line items. The slot is read once when the store is constructed and
/// rewritten wholesale on every mutation; there is exactly one writer, so no
/// conflict resolution is needed.
///
/// An absent or unparsable slot must load as an empty cart, not an error.
/// Errors are reserved for genuine storage failures (e.g. an unwritable
/// directory).
pub trait CartPersistence {
    /// Restore the persisted line items, or an empty list if nothing usable
    /// is stored.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing storage itself fails.
    fn load(&self) -> Result<Vec<CartLineItem>, PersistError>;

    /// Replace the persisted cart with `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn save(&self, lines: &[CartLineItem]) -> Result<(), PersistError>;
}

/// In-memory persistence backend.
///
/// Used in tests and for ephemeral carts; state lives only as long as the
/// value itself.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    slot: RefCell<Vec<CartLineItem>>,
}

impl MemoryCartStorage {
    /// A backend pre-seeded with line items, as if restored from disk.
    #[must_use]
    pub fn seeded(lines: Vec<CartLineItem>) -> Self {
        Self {
            slot: RefCell::new(lines),
        }
    }

    /// Snapshot of what is currently "persisted".
    #[must_use]
    pub fn stored(&self) -> Vec<CartLineItem> {
        self.slot.borrow().clone()
    }
}

impl CartPersistence for MemoryCartStorage {
    fn load(&self) -> Result<Vec<CartLineItem>, PersistError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, lines: &[CartLineItem]) -> Result<(), PersistError> {
        *self.slot.borrow_mut() = lines.to_vec();
        Ok(())
    }
}
