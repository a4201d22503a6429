use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::fine::{fine_for, round_currency};
use crate::model::LoanStatus;
use crate::store::CatalogStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Transition an item from OnLoan back to Available, charging any overdue
/// fine along the way.
///
/// An unknown id and an item that is not on loan collapse into the same
/// `NotOnLoan` outcome. The fine (unrounded) is surfaced on the result;
/// the message carries it rounded to cents.
pub fn run<S: CatalogStore>(
    store: &mut S,
    id: &Uuid,
    rate_per_day: f64,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut item = match store.get_item(id) {
        Ok(item) => item,
        Err(BiblioError::ItemNotFound(_)) => return Err(BiblioError::NotOnLoan(*id)),
        Err(e) => return Err(e),
    };

    let loan = match item.loan() {
        Some(loan) => loan.clone(),
        None => return Err(BiblioError::NotOnLoan(*id)),
    };

    let mut result = CmdResult::default();

    let fine = fine_for(loan.due_at, now, rate_per_day);
    if fine > 0.0 {
        result.fine = Some(fine);
        result.add_message(CmdMessage::warning(format!(
            "Late return. Fine owed: ${:.2}",
            round_currency(fine)
        )));
    }

    item.status = LoanStatus::Available;
    store.save_item(&item)?;

    result.add_message(CmdMessage::success(format!("Returned \"{}\"", item.title)));
    result.affected_items.push(item);
    Ok(result)
}
