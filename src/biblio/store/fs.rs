use super::CatalogStore;
use crate::error::{BiblioError, Result};
use crate::model::Item;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const CATALOG_FILENAME: &str = "catalog.json";

/// File-based storage: the whole catalog as a JSON array in `catalog.json`
/// under the store root. Array order is catalog order, so insertion order
/// survives a round trip. The active-loans index is derived from item status
/// at read time rather than persisted, which keeps the file a single source
/// of truth.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BiblioError::Io)?;
        }
        Ok(())
    }

    fn load_catalog(&self) -> Result<Vec<Item>> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(BiblioError::Io)?;
        let items: Vec<Item> = serde_json::from_str(&content).map_err(BiblioError::Serialization)?;
        Ok(items)
    }

    fn save_catalog(&self, items: &[Item]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(items).map_err(BiblioError::Serialization)?;
        fs::write(self.catalog_path(), content).map_err(BiblioError::Io)?;
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn save_item(&mut self, item: &Item) -> Result<()> {
        let mut items = self.load_catalog()?;
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        self.save_catalog(&items)
    }

    fn get_item(&self, id: &Uuid) -> Result<Item> {
        self.load_catalog()?
            .into_iter()
            .find(|i| i.id == *id)
            .ok_or(BiblioError::ItemNotFound(*id))
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        self.load_catalog()
    }

    fn remove_item(&mut self, id: &Uuid) -> Result<Item> {
        let mut items = self.load_catalog()?;
        let pos = items
            .iter()
            .position(|i| i.id == *id)
            .ok_or(BiblioError::ItemNotFound(*id))?;
        let removed = items.remove(pos);
        self.save_catalog(&items)?;
        Ok(removed)
    }

    fn loaned_items(&self) -> Result<Vec<Item>> {
        Ok(self
            .load_catalog()?
            .into_iter()
            .filter(|i| !i.is_available())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Loan, LoanStatus};
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn item(title: &str) -> Item {
        Item::new(title.into(), "A".into(), "G".into(), "I".into())
    }

    #[test]
    fn empty_store_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.list_items().unwrap().is_empty());
    }

    #[test]
    fn items_survive_a_store_reload() {
        let dir = TempDir::new().unwrap();
        let a = item("a");
        {
            let mut store = FileStore::new(dir.path().to_path_buf());
            store.save_item(&a).unwrap();
            store.save_item(&item("b")).unwrap();
        }

        let store = FileStore::new(dir.path().to_path_buf());
        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], a);
    }

    #[test]
    fn loan_state_round_trips_through_json() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut it = item("lent");
        let now = Utc::now();
        it.status = LoanStatus::OnLoan(Loan {
            borrower: "Alice".into(),
            loaned_at: now,
            due_at: now + Duration::days(14),
        });
        store.save_item(&it).unwrap();
        store.save_item(&item("shelved")).unwrap();

        let loaned = store.loaned_items().unwrap();
        assert_eq!(loaned.len(), 1);
        assert_eq!(loaned[0].loan().unwrap().borrower, "Alice");
    }

    #[test]
    fn remove_rewrites_the_catalog_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let a = item("a");
        store.save_item(&a).unwrap();
        store.save_item(&item("b")).unwrap();

        let removed = store.remove_item(&a.id).unwrap();
        assert_eq!(removed.title, "a");

        let store = FileStore::new(dir.path().to_path_buf());
        let items = store.list_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "b");
    }

    #[test]
    fn get_missing_item_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        let err = store.get_item(&Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, BiblioError::ItemNotFound(_)));
    }
}
