//! # Textdesk Architecture
//!
//! Textdesk manages multilingual texts (Arabic, French and English versions of the
//! same text) through a review workflow, and answers a few questions about them:
//! how many words a text has, which word is most frequent across all texts, and
//! what a given page of the collection looks like.
//!
//! Like any library with a bundled client, the core knows nothing about the
//! terminal. The CLI is one boundary; an HTTP service would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses text IDs, returns structured Result types         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Fetch, decide, persist                                   │
//! │  - Decisions delegated to lifecycle, words, frequency,      │
//! │    pagination (pure, no I/O)                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr. Diagnostics go through
//! `tracing`; installing a subscriber is the binary's job.
//!
//! ## Testing Strategy
//!
//! 1. **Decision modules** (`lifecycle`, `words`, `frequency`, `pagination`):
//!    exhaustive unit tests of the rules.
//! 2. **Commands**: behaviour against `InMemoryStore`, including what the store
//!    looks like after a failure.
//! 3. **API**: dispatch only.
//! 4. **CLI**: end-to-end through the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `TextResource`, `Content`, `Language`, `State`
//! - [`lifecycle`]: Review state machine
//! - [`words`]: Word counting
//! - [`frequency`]: Corpus-wide word frequency
//! - [`pagination`]: Page windows and next/previous links
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod frequency;
pub mod lifecycle;
pub mod model;
pub mod pagination;
pub mod store;
pub mod words;
