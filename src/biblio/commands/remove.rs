use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;
use uuid::Uuid;

pub fn run<S: CatalogStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    // The store drops the item from both the catalog and the loan index;
    // a missing id surfaces as ItemNotFound with the catalog untouched.
    let removed = store.remove_item(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed \"{}\" (id: {})",
        removed.title, id
    )));
    result.affected_items.push(removed);
    Ok(result)
}
