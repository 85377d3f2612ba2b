//! # Review Lifecycle
//!
//! Every text starts as a `draft` and moves through review by events:
//!
//! ```text
//!             submit                 approve
//!   draft ───────────▶ submitted ───────────▶ approved
//!                        │   ▲
//!                 reject │   │ submit
//!                        ▼   │
//!                      rejected
//! ```
//!
//! | Current   | Event   | Next      |
//! |-----------|---------|-----------|
//! | draft     | submit  | submitted |
//! | rejected  | submit  | submitted |
//! | submitted | reject  | rejected  |
//! | submitted | approve | approved  |
//!
//! Any other pair is an `IllegalTransition`. Nothing leaves `approved` today, but
//! that is just the absence of a row in the table, not a structural rule.
//!
//! [`State::apply`] is the pure table lookup. Persisting the outcome is done by
//! `commands::transition`.

use crate::error::{Result, TextdeskError};
use crate::model::State;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Submit,
    Reject,
    Approve,
}

impl Event {
    pub const ALL: [Event; 3] = [Event::Submit, Event::Reject, Event::Approve];

    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Submit => "submit",
            Event::Reject => "reject",
            Event::Approve => "approve",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl State {
    /// The state reached from `self` on `event`, if the table has a row for it.
    pub fn next(self, event: Event) -> Option<State> {
        match (self, event) {
            (State::Draft | State::Rejected, Event::Submit) => Some(State::Submitted),
            (State::Submitted, Event::Reject) => Some(State::Rejected),
            (State::Submitted, Event::Approve) => Some(State::Approved),
            _ => None,
        }
    }

    pub fn apply(self, event: Event) -> Result<State> {
        self.next(event)
            .ok_or(TextdeskError::IllegalTransition { state: self, event })
    }
}
