use crate::commands::{CmdResult, OverdueEntry};
use crate::error::Result;
use crate::fine::{fine_for, round_currency};
use crate::store::CatalogStore;
use chrono::{DateTime, Utc};

/// Overdue loans with their fines, computed at query time.
///
/// Walks the active-loans index rather than the full catalog. Each entry is
/// an independent snapshot; its fine is rounded to cents because the entry is
/// a presentation boundary. Nothing is stored back.
pub fn run<S: CatalogStore>(store: &S, rate_per_day: f64, now: DateTime<Utc>) -> Result<CmdResult> {
    let entries: Vec<_> = store
        .loaned_items()?
        .into_iter()
        .filter_map(|item| {
            let due_at = item.loan()?.due_at;
            if due_at < now {
                let fine = round_currency(fine_for(due_at, now, rate_per_day));
                Some(OverdueEntry { item, fine })
            } else {
                None
            }
        })
        .collect();

    Ok(CmdResult::default().with_overdue_items(entries))
}
