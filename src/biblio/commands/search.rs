use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// Case-insensitive substring match against title, author, or genre.
/// Matches in catalog order; any field hit qualifies.
pub fn run<S: CatalogStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();

    let matches: Vec<_> = store
        .list_items()?
        .into_iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&term_lower)
                || item.author.to_lowercase().contains(&term_lower)
                || item.genre.to_lowercase().contains(&term_lower)
        })
        .collect();

    Ok(CmdResult::default().with_listed_items(matches))
}
