use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    store: &mut S,
    title: String,
    author: String,
    genre: String,
    isbn: String,
) -> Result<CmdResult> {
    let item = Item::new(title, author, genre, isbn);
    store.save_item(&item)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" (id: {})",
        item.title, item.id
    )));
    result.affected_items.push(item);
    Ok(result)
}
