use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// Exact case-insensitive genre match, catalog order.
pub fn run<S: CatalogStore>(store: &S, genre: &str) -> Result<CmdResult> {
    let genre_lower = genre.to_lowercase();

    let matches: Vec<_> = store
        .list_items()?
        .into_iter()
        .filter(|item| item.genre.to_lowercase() == genre_lower)
        .collect();

    Ok(CmdResult::default().with_listed_items(matches))
}
