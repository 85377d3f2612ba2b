use crate::config::TextdeskConfig;
use crate::frequency::WordFrequency;
use crate::model::{Language, TextResource};
use crate::pagination::PageRef;
use serde::Serialize;
use std::collections::BTreeMap;

pub mod config;
pub mod count;
pub mod create;
pub mod frequent;
pub mod get;
pub mod helpers;
pub mod list;
pub mod transition;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// One window of a paginated listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageRef>,
    pub results: Vec<TextResource>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_texts: Vec<TextResource>,
    pub listing: Option<Listing>,
    pub word_count: Option<usize>,
    pub word_counts: BTreeMap<Language, usize>,
    pub frequent_word: Option<WordFrequency>,
    pub config: Option<TextdeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_text(mut self, text: TextResource) -> Self {
        self.affected_texts.push(text);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_word_count(mut self, count: usize) -> Self {
        self.word_count = Some(count);
        self
    }

    pub fn with_config(mut self, config: TextdeskConfig) -> Self {
        self.config = Some(config);
        self
    }
}
