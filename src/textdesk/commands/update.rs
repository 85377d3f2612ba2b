use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContentInput;
use crate::store::DataStore;
use tracing::info;
use uuid::Uuid;

use super::helpers::fetch_text;

/// Replace a text's content. The payload must carry all three languages.
///
/// With no payload the text is saved as is, which only refreshes `updated_at`.
pub fn run<S: DataStore>(
    store: &mut S,
    id: &Uuid,
    content: Option<ContentInput>,
) -> Result<CmdResult> {
    let mut text = fetch_text(store, id)?;
    if let Some(content) = content {
        text.content = content.validate()?;
    }
    text.touch();
    store.save(&text)?;

    info!(id = %id, state = %text.state(), "text content updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Text updated: {}", id)));
    Ok(result.with_affected_text(text))
}

/// Update only the languages present in `patch`, keeping the others.
pub fn patch<S: DataStore>(store: &mut S, id: &Uuid, patch: ContentInput) -> Result<CmdResult> {
    let current = fetch_text(store, id)?;
    let merged = patch.or_existing(&current.content);
    run(store, id, Some(merged))
}
