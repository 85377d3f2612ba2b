use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContentInput, TextResource};
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, content: ContentInput) -> Result<CmdResult> {
    let content = content.validate()?;
    let text = TextResource::new(content);
    store.insert(&text)?;

    info!(id = %text.id(), state = %text.state(), "text created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Text created: {}", text.id())));
    Ok(result.with_affected_text(text))
}
