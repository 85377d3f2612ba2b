//! # Domain Model
//!
//! A [`TextResource`] is one text translated into the three required languages,
//! moving through a review workflow tracked by its [`State`].
//!
//! ## Content Shape
//!
//! [`Content`] is a fixed record with exactly three fields: `ar`, `fr` and `en`.
//! There is no way to build a `Content` with a missing or blank language; every
//! constructor goes through [`ContentInput::validate`], which trims each value and
//! reports the first offending field (checked in `ar`, `fr`, `en` order).
//!
//! Raw payloads (JSON bodies, CLI flags) arrive as [`ContentInput`], where every
//! field is optional. Deserializing a `Content` directly runs the same validation.
//!
//! ## Languages as a Property Bag
//!
//! Code that needs to treat content generically (word counting, frequency
//! aggregation) iterates with [`Content::iter`], which always yields languages in
//! the same fixed order. Lookups by user-supplied code go through [`Language`]'s
//! `FromStr`, which rejects unknown codes with `InvalidLanguage`.
//!
//! ## State
//!
//! `state` and `id` are private: the id never changes after creation, and the
//! state only moves through [`TextResource::apply`] (see [`crate::lifecycle`]).

use crate::error::{Result, TextdeskError};
use crate::lifecycle::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ar, Language::Fr, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TextdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ar" => Ok(Language::Ar),
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(TextdeskError::InvalidLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Draft,
    Submitted,
    Rejected,
    Approved,
}

impl State {
    pub const ALL: [State; 4] = [
        State::Draft,
        State::Submitted,
        State::Rejected,
        State::Approved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            State::Draft => "draft",
            State::Submitted => "submitted",
            State::Rejected => "rejected",
            State::Approved => "approved",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated content payload. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInput {
    #[serde(default)]
    pub ar: Option<String>,
    #[serde(default)]
    pub fr: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl ContentInput {
    pub fn new(ar: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: Some(ar.into()),
            fr: Some(fr.into()),
            en: Some(en.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ar.is_none() && self.fr.is_none() && self.en.is_none()
    }

    /// Fill the languages this payload leaves out from `current`.
    pub fn or_existing(self, current: &Content) -> Self {
        Self {
            ar: self.ar.or_else(|| Some(current.ar.clone())),
            fr: self.fr.or_else(|| Some(current.fr.clone())),
            en: self.en.or_else(|| Some(current.en.clone())),
        }
    }

    pub fn validate(self) -> Result<Content> {
        Ok(Content {
            ar: required(Language::Ar, self.ar)?,
            fr: required(Language::Fr, self.fr)?,
            en: required(Language::En, self.en)?,
        })
    }
}

fn required(lang: Language, value: Option<String>) -> Result<String> {
    let field = format!("content.{}", lang);
    let value = value.ok_or_else(|| TextdeskError::validation(&field, "is required"))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextdeskError::validation(field, "must not be blank"));
    }
    Ok(trimmed.to_string())
}

/// Validated content: all three languages present, trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContentInput")]
pub struct Content {
    ar: String,
    fr: String,
    en: String,
}

impl Content {
    pub fn new(ar: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Result<Self> {
        ContentInput::new(ar, fr, en).validate()
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }

    pub fn for_each<F: FnMut(Language, &str)>(&self, mut f: F) {
        for (lang, value) in self.iter() {
            f(lang, value);
        }
    }
}

impl TryFrom<ContentInput> for Content {
    type Error = TextdeskError;

    fn try_from(input: ContentInput) -> Result<Self> {
        input.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextResource {
    id: Uuid,
    #[serde(default)]
    state: State,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TextResource {
    pub fn new(content: Content) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: State::Draft,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Apply a lifecycle event. On an illegal pair the resource is left untouched.
    pub fn apply(&mut self, event: Event) -> Result<State> {
        let next = self.state.apply(event)?;
        self.state = next;
        self.touch();
        Ok(next)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_state(mut self, state: State) -> Self {
        self.state = state;
        self
    }
}
