use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::{Loan, LoanStatus};
use crate::store::CatalogStore;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Transition an item from Available to OnLoan.
///
/// `now` is injected so callers (and tests) control the clock; the due date
/// is `now` plus `days` calendar days. Negative or zero `days` are accepted
/// as given and simply produce a due date at or before the loan date.
pub fn run<S: CatalogStore>(
    store: &mut S,
    id: &Uuid,
    borrower: String,
    days: i64,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut item = store.get_item(id)?;

    if let Some(loan) = item.loan() {
        return Err(BiblioError::AlreadyOnLoan {
            title: item.title.clone(),
            borrower: loan.borrower.clone(),
        });
    }

    let due_at = now + Duration::days(days);
    item.status = LoanStatus::OnLoan(Loan {
        borrower: borrower.clone(),
        loaned_at: now,
        due_at,
    });
    store.save_item(&item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Lent \"{}\" to {}. Due back {}",
        item.title,
        borrower,
        due_at.format("%Y-%m-%d")
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn seeded(title: &str) -> (InMemoryStore, Uuid) {
        let mut store = InMemoryStore::new();
        let result = add::run(
            &mut store,
            title.into(),
            "Author".into(),
            "Fiction".into(),
            "isbn".into(),
        )
        .unwrap();
        let id = result.affected_items[0].id;
        (store, id)
    }

    #[test]
    fn lends_an_available_item() {
        let (mut store, id) = seeded("Dune");
        let now = Utc::now();

        let result = run(&mut store, &id, "Alice".into(), 14, now).unwrap();
        let item = &result.affected_items[0];
        assert!(!item.is_available());

        let loan = item.loan().unwrap();
        assert_eq!(loan.borrower, "Alice");
        assert_eq!(loan.loaned_at, now);
        assert_eq!(loan.due_at, now + Duration::days(14));

        assert_eq!(store.loaned_items().unwrap().len(), 1);
    }

    #[test]
    fn missing_id_is_item_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &Uuid::new_v4(), "Alice".into(), 14, Utc::now()).unwrap_err();
        assert!(matches!(err, BiblioError::ItemNotFound(_)));
    }

    #[test]
    fn lending_twice_fails_and_keeps_the_first_loan() {
        let (mut store, id) = seeded("Dune");
        let now = Utc::now();
        run(&mut store, &id, "Alice".into(), 14, now).unwrap();

        let err = run(&mut store, &id, "Bob".into(), 7, now).unwrap_err();
        match err {
            BiblioError::AlreadyOnLoan { title, borrower } => {
                assert_eq!(title, "Dune");
                assert_eq!(borrower, "Alice");
            }
            other => panic!("expected AlreadyOnLoan, got {other:?}"),
        }

        let item = store.get_item(&id).unwrap();
        let loan = item.loan().unwrap();
        assert_eq!(loan.borrower, "Alice");
        assert_eq!(loan.due_at, now + Duration::days(14));
    }

    #[test]
    fn zero_day_loan_is_due_immediately() {
        let (mut store, id) = seeded("Dune");
        let now = Utc::now();

        let result = run(&mut store, &id, "Alice".into(), 0, now).unwrap();
        assert_eq!(result.affected_items[0].loan().unwrap().due_at, now);
    }
}
