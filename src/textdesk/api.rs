//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all textdesk operations, whatever the boundary in front of it
//! (the bundled CLI, an HTTP service, a test).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing text IDs from strings)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no text state of its own; every call goes back to the store.
//!
//! ## Generic Over DataStore
//!
//! `TextdeskApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TextdeskApi<FileStore>`
//! - Testing: `TextdeskApi<InMemoryStore>`
//!
//! Operations that change a text borrow the API mutably, so within a process
//! they never interleave.

use crate::commands;
use crate::error::{Result, TextdeskError};
use crate::lifecycle::Event;
use crate::model::ContentInput;
use crate::store::DataStore;
use std::path::PathBuf;
use uuid::Uuid;

/// The main API facade for textdesk operations.
pub struct TextdeskApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> TextdeskApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_resource(&mut self, content: ContentInput) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn get_resource(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, &parse_id(id)?)
    }

    pub fn list_resources(&self, page: usize, limit: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, page, limit)
    }

    pub fn update_content(
        &mut self,
        id: &str,
        content: Option<ContentInput>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &parse_id(id)?, content)
    }

    pub fn patch_content(&mut self, id: &str, patch: ContentInput) -> Result<commands::CmdResult> {
        commands::update::patch(&mut self.store, &parse_id(id)?, patch)
    }

    pub fn word_count_total(&self, id: &str) -> Result<commands::CmdResult> {
        commands::count::total(&self.store, &parse_id(id)?)
    }

    pub fn word_count_for_language(
        &self,
        id: &str,
        language: &str,
    ) -> Result<commands::CmdResult> {
        commands::count::for_language(&self.store, &parse_id(id)?, language)
    }

    pub fn word_count_breakdown(&self, id: &str) -> Result<commands::CmdResult> {
        commands::count::breakdown(&self.store, &parse_id(id)?)
    }

    pub fn most_frequent_word(&self) -> Result<commands::CmdResult> {
        commands::frequent::run(&self.store)
    }

    pub fn submit(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::transition::submit(&mut self.store, &parse_id(id)?)
    }

    pub fn reject(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::transition::reject(&mut self.store, &parse_id(id)?)
    }

    pub fn approve(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::transition::approve(&mut self.store, &parse_id(id)?)
    }

    pub fn transition(&mut self, id: &str, event: Event) -> Result<commands::CmdResult> {
        commands::transition::run(&mut self.store, &parse_id(id)?, event)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

fn parse_id(input: &str) -> Result<Uuid> {
    Uuid::parse_str(input.trim())
        .map_err(|_| TextdeskError::validation("id", format!("'{}' is not a valid text id", input)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Listing, MessageLevel};
