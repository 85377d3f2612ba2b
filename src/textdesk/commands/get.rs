use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;
use uuid::Uuid;

use super::helpers::fetch_text;

pub fn run<S: DataStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let text = fetch_text(store, id)?;
    debug!(id = %id, state = %text.state(), "text fetched");
    Ok(CmdResult::default().with_affected_text(text))
}
