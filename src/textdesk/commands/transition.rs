use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lifecycle::Event;
use crate::store::DataStore;
use tracing::{info, warn};
use uuid::Uuid;

use super::helpers::fetch_text;

pub fn submit<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    run(store, id, Event::Submit)
}

pub fn reject<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    run(store, id, Event::Reject)
}

pub fn approve<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    run(store, id, Event::Approve)
}

/// Fetch, apply `event`, persist. An illegal event never reaches the store.
///
/// The fetch and the save are two separate store calls with no guard between
/// them, so two processes sharing a store can race on the same text.
pub fn run<S: DataStore>(store: &mut S, id: &Uuid, event: Event) -> Result<CmdResult> {
    let mut text = fetch_text(store, id)?;
    let from = text.state();

    if let Err(e) = text.apply(event) {
        warn!(id = %id, state = %from, event = %event, "illegal transition");
        return Err(e);
    }
    store.save(&text)?;

    info!(id = %id, from = %from, to = %text.state(), "text transitioned");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Text {} ({} -> {})",
        id,
        from,
        text.state()
    )));
    Ok(result.with_affected_text(text))
}
