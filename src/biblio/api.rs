//! # API Facade
//!
//! Single entry point for catalog operations, regardless of the front end in
//! use. The facade dispatches to the command layer, fills in the clock
//! (`Utc::now()`) and configured defaults (loan days, fine rate), and returns
//! structured `Result<CmdResult>` values. It holds no business logic and does
//! no I/O of its own.
//!
//! `BiblioApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `BiblioApi<FileStore>`
//! - Testing / embedding: `BiblioApi<InMemoryStore>`
//!
//! Callers embedding the API in a concurrent host must serialize access; the
//! core is single-threaded by design and takes `&mut self` for mutations.

use crate::commands;
use crate::config::BiblioConfig;
use crate::error::Result;
use crate::store::CatalogStore;
use chrono::Utc;
use uuid::Uuid;

/// The main API facade for catalog and lending operations.
pub struct BiblioApi<S: CatalogStore> {
    store: S,
    config: BiblioConfig,
}

impl<S: CatalogStore> BiblioApi<S> {
    pub fn new(store: S, config: BiblioConfig) -> Self {
        Self { store, config }
    }

    pub fn add_item(
        &mut self,
        title: String,
        author: String,
        genre: String,
        isbn: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author, genre, isbn)
    }

    pub fn remove_item(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Lend an item. `days` falls back to the configured loan duration.
    pub fn lend(
        &mut self,
        id: &Uuid,
        borrower: String,
        days: Option<i64>,
    ) -> Result<commands::CmdResult> {
        let days = days.unwrap_or(self.config.loan_days);
        commands::lend::run(&mut self.store, id, borrower, days, Utc::now())
    }

    pub fn return_item(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::return_item::run(&mut self.store, id, self.config.fine_rate, Utc::now())
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn by_genre(&self, genre: &str) -> Result<commands::CmdResult> {
        commands::genre::run(&self.store, genre)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn overdue(&self) -> Result<commands::CmdResult> {
        commands::overdue::run(&self.store, self.config.fine_rate, Utc::now())
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.store, self.config.fine_rate, Utc::now())
    }

    pub fn config(&self) -> &BiblioConfig {
        &self.config
    }
}

pub use crate::commands::{CmdMessage, CmdResult, LibraryReport, MessageLevel, OverdueEntry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> BiblioApi<InMemoryStore> {
        BiblioApi::new(InMemoryStore::new(), BiblioConfig::default())
    }

    #[test]
    fn add_then_lend_uses_configured_default_days() {
        let mut api = api();
        let added = api
            .add_item("Dune".into(), "Herbert".into(), "SciFi".into(), "123".into())
            .unwrap();
        let id = added.affected_items[0].id;

        let lent = api.lend(&id, "Alice".into(), None).unwrap();
        let loan = lent.affected_items[0].loan().unwrap().clone();
        assert_eq!(loan.due_at - loan.loaned_at, chrono::Duration::days(14));
    }

    #[test]
    fn explicit_days_override_the_default() {
        let mut api = api();
        let added = api
            .add_item("Dune".into(), "Herbert".into(), "SciFi".into(), "123".into())
            .unwrap();
        let id = added.affected_items[0].id;

        let lent = api.lend(&id, "Alice".into(), Some(3)).unwrap();
        let loan = lent.affected_items[0].loan().unwrap().clone();
        assert_eq!(loan.due_at - loan.loaned_at, chrono::Duration::days(3));
    }

    #[test]
    fn report_reflects_api_level_mutations() {
        let mut api = api();
        let added = api
            .add_item("Dune".into(), "Herbert".into(), "SciFi".into(), "123".into())
            .unwrap();
        api.add_item("Emma".into(), "Austen".into(), "Romance".into(), "456".into())
            .unwrap();
        let id = added.affected_items[0].id;
        api.lend(&id, "Alice".into(), None).unwrap();

        let report = api.report().unwrap().report.unwrap();
        assert_eq!(report.total_items, 2);
        assert_eq!(report.on_loan, 1);
        assert_eq!(report.available, 1);
        assert_eq!(report.overdue, 0);
    }
}
