//! # Storage Layer
//!
//! This module defines the storage abstraction for textdesk. The [`DataStore`] trait
//! is the only thing the command layer knows about persistence.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **other backends** (a document database, a remote service) without
//!   changing core logic
//! - Keep the lifecycle, counting and pagination logic **decoupled** from persistence
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All texts in `texts.jsonl`, one JSON document per line, in insertion order
//!   - Rewrites go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Ordering
//!
//! Pagination relies on [`DataStore::find_range`] returning texts in the same order
//! on every call. Both stores use insertion order, and [`DataStore::scan`] walks
//! texts in that same order.

use crate::error::Result;
use crate::model::TextResource;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for text storage.
pub trait DataStore {
    /// Total number of texts
    fn count(&self) -> Result<usize>;

    /// Get a text by ID, `None` if absent
    fn find_by_id(&self, id: &Uuid) -> Result<Option<TextResource>>;

    /// Up to `limit` texts starting at `skip`, in insertion order. `None` means no limit.
    fn find_range(&self, skip: usize, limit: Option<usize>) -> Result<Vec<TextResource>>;

    /// Store a new text. Fails if the ID is already taken.
    fn insert(&mut self, text: &TextResource) -> Result<()>;

    /// Replace an existing text, keeping its position
    fn save(&mut self, text: &TextResource) -> Result<()>;

    /// Visit every text in insertion order without collecting them
    fn scan(&self, visit: &mut dyn FnMut(&TextResource)) -> Result<()>;
}
