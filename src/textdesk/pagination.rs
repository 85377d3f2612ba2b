//! # Pagination
//!
//! Lists are windowed by `page` (1-based) and `limit` (page size):
//!
//! ```text
//! start = (page - 1) * limit
//! end   = page * limit
//! next      present iff end < total    -> { page + 1, limit }
//! previous  present iff start > 0      -> { page - 1, limit }
//! ```
//!
//! A `limit` of 0 means no limit: the window covers the whole collection and has
//! neither `next` nor `previous`, whatever the page.
//!
//! The window is not clamped to the collection. A page past the end has a
//! `start` beyond `total`, which fetches nothing, and never has a `next`.
//!
//! The window is only meaningful when the store returns texts in a stable order
//! across calls; both stores keep insertion order.

use crate::error::{Result, TextdeskError};
use serde::{Deserialize, Serialize};

/// Reference to another page of the same listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub limit: usize,
    pub start: usize,
    pub end: usize,
    pub next: Option<PageRef>,
    pub previous: Option<PageRef>,
}

impl Window {
    /// Number of items to fetch from `start`, or `None` for everything.
    pub fn fetch_limit(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }
}

pub fn paginate(total: usize, page: usize, limit: usize) -> Result<Window> {
    if page == 0 {
        return Err(TextdeskError::validation("page", "must be 1 or greater"));
    }

    if limit == 0 {
        return Ok(Window {
            limit,
            start: 0,
            end: total,
            next: None,
            previous: None,
        });
    }

    let start = (page - 1).saturating_mul(limit);
    let end = page.saturating_mul(limit);

    let next = page
        .checked_add(1)
        .filter(|_| end < total)
        .map(|page| PageRef { page, limit });
    let previous = (start > 0).then(|| PageRef {
        page: page - 1,
        limit,
    });

    Ok(Window {
        limit,
        start,
        end,
        next,
        previous,
    })
}
