//! File-backed durable local storage.
//!
//! The browser build of this storefront kept its cart and session token in
//! `localStorage`; here each slot is a small file under the configured data
//! directory. Slots are read once at startup and rewritten wholesale on each
//! change - there is exactly one writer, so last-writer-wins is trivially
//! correct.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use kommerce_core::cart::{CartLineItem, CartPersistence, PersistError};

/// Cart slot stored as a JSON array of line items.
///
/// An absent or unparsable file loads as an empty cart; corruption of purely
/// local, recoverable state is not worth surfacing to the user.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Storage backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartPersistence for FileCartStorage {
    fn load(&self) -> Result<Vec<CartLineItem>, PersistError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(lines) => Ok(lines),
            Err(e) => {
                warn!(path = %self.path.display(), "unparsable cart slot, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, lines: &[CartLineItem]) -> Result<(), PersistError> {
        ensure_parent(&self.path)?;
        let json = serde_json::to_string_pretty(lines)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Session token slot.
///
/// The JWT is held as a [`SecretString`] in memory so it never shows up in
/// debug output or logs.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The persisted token, if one exists and is non-empty.
    #[must_use]
    pub fn load(&self) -> Option<SecretString> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SecretString::from(trimmed.to_owned()))
        }
    }

    /// Persist a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be written.
    pub fn save(&self, token: &SecretString) -> std::io::Result<()> {
        ensure_parent(&self.path)?;
        fs::write(&self.path, token.expose_secret())
    }

    /// Delete the persisted token. Missing file is fine.
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than the file being absent.
    pub fn clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use kommerce_core::cart::CartStore;
    use kommerce_core::types::{ProductId, SellerId};

    use super::*;

    fn line(id: i64, qty: u32) -> CartLineItem {
        CartLineItem {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: Decimal::new(1050, 2),
            image_url: Some(format!("https://img.example/{id}.jpg")),
            quantity: qty,
            seller_id: SellerId::new(3),
            seller_name: "Atelier North".to_owned(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path().join("cart.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path().join("cart.json"));

        let lines = vec![line(1, 2), line(2, 1), line(3, 5)];
        storage.save(&lines).unwrap();

        assert_eq!(storage.load().unwrap(), lines);
    }

    #[test]
    fn test_garbage_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "{not json!").unwrap();

        let storage = FileCartStorage::new(path);
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_cart_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let product = kommerce_core::cart::CartProduct {
            product_id: ProductId::new(1),
            name: "Ceramic Mug".to_owned(),
            unit_price: Decimal::from(10),
            image_url: None,
            seller_id: SellerId::new(7),
            seller_name: "Atelier North".to_owned(),
        };

        {
            let mut cart = CartStore::new(FileCartStorage::new(&path));
            cart.add_item(&product, 2);
        }

        let restored = CartStore::new(FileCartStorage::new(&path));
        assert_eq!(restored.line_count(), 1);
        assert_eq!(restored.lines()[0].quantity, 2);
        assert_eq!(restored.total(), Decimal::from(20));
    }

    #[test]
    fn test_token_store_roundtrip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token"));

        assert!(store.load().is_none());

        store.save(&SecretString::from("jwt-abc".to_owned())).unwrap();
        assert_eq!(store.load().unwrap().expose_secret(), "jwt-abc");

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
