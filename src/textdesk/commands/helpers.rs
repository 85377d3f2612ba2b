use crate::error::{Result, TextdeskError};
use crate::model::TextResource;
use crate::store::DataStore;
use uuid::Uuid;

/// Fetch a text from the store, mapping absence to `NotFound`.
pub fn fetch_text<S: DataStore>(store: &S, id: &Uuid) -> Result<TextResource> {
    store.find_by_id(id)?.ok_or(TextdeskError::NotFound(*id))
}
