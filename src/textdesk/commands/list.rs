use crate::commands::{CmdResult, Listing};
use crate::error::Result;
use crate::pagination::paginate;
use crate::store::DataStore;
use tracing::debug;

/// List one window of texts. A `limit` of 0 lists everything.
pub fn run<S: DataStore>(store: &S, page: usize, limit: usize) -> Result<CmdResult> {
    let total = store.count()?;
    let window = paginate(total, page, limit)?;
    let results = store.find_range(window.start, window.fetch_limit())?;

    debug!(
        total,
        page,
        limit,
        returned = results.len(),
        "texts listed"
    );

    Ok(CmdResult::default().with_listing(Listing {
        next: window.next,
        previous: window.previous,
        results,
    }))
}
