use crate::commands::{CmdResult, LibraryReport};
use crate::error::Result;
use crate::fine::{fine_for, round_currency};
use crate::store::CatalogStore;
use chrono::{DateTime, Utc};

/// Aggregate catalog summary. Counts and fines come from one pass over the
/// active-loans index; fines accumulate unrounded and are rounded to cents
/// once at the end.
pub fn run<S: CatalogStore>(store: &S, rate_per_day: f64, now: DateTime<Utc>) -> Result<CmdResult> {
    let total_items = store.list_items()?.len();
    let loaned = store.loaned_items()?;
    let on_loan = loaned.len();

    let mut overdue = 0;
    let mut total_fines = 0.0;
    for item in &loaned {
        if let Some(loan) = item.loan() {
            if loan.due_at < now {
                overdue += 1;
                total_fines += fine_for(loan.due_at, now, rate_per_day);
            }
        }
    }

    let report = LibraryReport {
        total_items,
        on_loan,
        available: total_items - on_loan,
        overdue,
        total_fines_owed: round_currency(total_fines),
    };
    Ok(CmdResult::default().with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, lend};
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    fn add_item(store: &mut InMemoryStore, title: &str) -> Uuid {
        add::run(store, title.into(), "A".into(), "G".into(), "I".into())
            .unwrap()
            .affected_items[0]
            .id
    }

    #[test]
    fn empty_catalog_reports_all_zeroes() {
        let store = InMemoryStore::new();
        let report = run(&store, 0.5, Utc::now()).unwrap().report.unwrap();
        assert_eq!(
            report,
            LibraryReport {
                total_items: 0,
                on_loan: 0,
                available: 0,
                overdue: 0,
                total_fines_owed: 0.0,
            }
        );
    }

    #[test]
    fn counts_and_fines_add_up() {
        let mut store = InMemoryStore::new();
        let ids: Vec<_> = (0..5)
            .map(|i| add_item(&mut store, &format!("Item {i}")))
            .collect();

        let now = Utc::now();
        // Three on loan, two of them overdue (3 days and 1 day late).
        lend::run(&mut store, &ids[0], "Alice".into(), -3, now).unwrap();
        lend::run(&mut store, &ids[1], "Bob".into(), -1, now).unwrap();
        lend::run(&mut store, &ids[2], "Carol".into(), 14, now).unwrap();

        let report = run(&store, 0.5, now).unwrap().report.unwrap();
        assert_eq!(report.total_items, 5);
        assert_eq!(report.on_loan, 3);
        assert_eq!(report.available, 2);
        assert_eq!(report.overdue, 2);
        assert_eq!(report.total_fines_owed, 2.0);
    }
}
