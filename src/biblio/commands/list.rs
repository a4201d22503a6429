use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(store.list_items()?))
}
