use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use crate::words::{count_words_for, count_words_per_language, count_words_total};
use tracing::debug;
use uuid::Uuid;

use super::helpers::fetch_text;

/// Total number of words across all of a text's languages.
pub fn total<S: DataStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let text = fetch_text(store, id)?;
    let count = count_words_total(&text.content);
    debug!(id = %id, count, "total word count");
    Ok(CmdResult::default().with_word_count(count))
}

/// Number of words in one language, given by its code.
pub fn for_language<S: DataStore>(store: &S, id: &Uuid, language: &str) -> Result<CmdResult> {
    let text = fetch_text(store, id)?;
    let count = count_words_for(&text.content, language)?;
    debug!(id = %id, language, count, "word count for language");
    Ok(CmdResult::default().with_word_count(count))
}

/// Per-language word counts together with their total.
pub fn breakdown<S: DataStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let text = fetch_text(store, id)?;
    let mut result = CmdResult::default();
    result.word_counts = count_words_per_language(&text.content);
    Ok(result.with_word_count(count_words_total(&text.content)))
}
