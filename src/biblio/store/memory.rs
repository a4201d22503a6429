use super::CatalogStore;
use crate::error::{BiblioError, Result};
use crate::model::Item;
use std::collections::HashSet;
use uuid::Uuid;

/// In-memory storage for testing and embedding.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    // Active-loans index: ids of items whose status is OnLoan. Reconciled on
    // every save_item/remove_item so it cannot drift from item status.
    loans: HashSet<Uuid>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn loan_index_matches_items(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.is_available() != self.loans.contains(&item.id))
            && self.loans.len() == self.items.iter().filter(|i| !i.is_available()).count()
    }
}

impl CatalogStore for InMemoryStore {
    fn save_item(&mut self, item: &Item) -> Result<()> {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => self.items.push(item.clone()),
        }
        if item.is_available() {
            self.loans.remove(&item.id);
        } else {
            self.loans.insert(item.id);
        }
        Ok(())
    }

    fn get_item(&self, id: &Uuid) -> Result<Item> {
        self.items
            .iter()
            .find(|i| i.id == *id)
            .cloned()
            .ok_or(BiblioError::ItemNotFound(*id))
    }

    fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn remove_item(&mut self, id: &Uuid) -> Result<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == *id)
            .ok_or(BiblioError::ItemNotFound(*id))?;
        self.loans.remove(id);
        Ok(self.items.remove(pos))
    }

    fn loaned_items(&self) -> Result<Vec<Item>> {
        Ok(self
            .items
            .iter()
            .filter(|i| self.loans.contains(&i.id))
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Loan, LoanStatus};
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let item = Item::new(
                    format!("Test Item {}", i + 1),
                    format!("Author {}", i + 1),
                    "Fiction".to_string(),
                    format!("isbn-{}", i + 1),
                );
                self.store.save_item(&item).unwrap();
            }
            self
        }

        pub fn with_available_item(mut self, title: &str) -> Self {
            let item = Item::new(
                title.to_string(),
                "Some Author".to_string(),
                "Fiction".to_string(),
                "isbn".to_string(),
            );
            self.store.save_item(&item).unwrap();
            self
        }

        /// Item lent to `borrower`, due `due_in_days` from now (negative for
        /// an already-overdue loan).
        pub fn with_loaned_item(mut self, title: &str, borrower: &str, due_in_days: i64) -> Self {
            let mut item = Item::new(
                title.to_string(),
                "Some Author".to_string(),
                "Fiction".to_string(),
                "isbn".to_string(),
            );
            let now = Utc::now();
            item.status = LoanStatus::OnLoan(Loan {
                borrower: borrower.to_string(),
                loaned_at: now,
                due_at: now + Duration::days(due_in_days),
            });
            self.store.save_item(&item).unwrap();
            self
        }
    }
}
