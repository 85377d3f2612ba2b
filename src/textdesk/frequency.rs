//! # Word Frequency
//!
//! Finds the most frequent word across the whole corpus.
//!
//! Each text contributes its `ar`, `fr` and `en` values joined by a single space.
//! That string is split on whitespace, empty tokens are dropped, and tokens are
//! counted by exact, case-sensitive value. Since the separator is itself
//! whitespace, counting each language value separately gives the same tally.
//!
//! ## Single Pass
//!
//! [`WordTally`] is fed one text at a time (see `DataStore::scan`), so the
//! corpus is never materialized. It keeps one entry per distinct word.
//!
//! ## Ties
//!
//! When several words share the highest count, the one seen first wins. "First"
//! is scan order: texts in store order, then `ar`, `fr`, `en`, then left to right.

use crate::model::Content;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Default)]
struct Entry {
    count: usize,
    first_seen: usize,
}

#[derive(Debug, Default)]
pub struct WordTally {
    words: HashMap<String, Entry>,
    seen: usize,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(&mut self, text: &str) {
        for token in text.split_whitespace() {
            let position = self.seen;
            self.seen += 1;
            if let Some(entry) = self.words.get_mut(token) {
                entry.count += 1;
            } else {
                self.words.insert(
                    token.to_string(),
                    Entry {
                        count: 1,
                        first_seen: position,
                    },
                );
            }
        }
    }

    pub fn add_content(&mut self, content: &Content) {
        content.for_each(|_, text| self.add_text(text));
    }

    pub fn distinct_words(&self) -> usize {
        self.words.len()
    }

    pub fn most_frequent(&self) -> Option<WordFrequency> {
        self.words
            .iter()
            .min_by(|(_, a), (_, b)| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.first_seen.cmp(&b.first_seen))
            })
            .map(|(word, entry)| WordFrequency {
                word: word.clone(),
                count: entry.count,
            })
    }
}

pub fn most_frequent_word<'a, I>(corpus: I) -> Option<WordFrequency>
where
    I: IntoIterator<Item = &'a Content>,
{
    let mut tally = WordTally::new();
    for content in corpus {
        tally.add_content(content);
    }
    tally.most_frequent()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(ar: &str, fr: &str, en: &str) -> Content {
        Content::new(ar, fr, en).unwrap()
    }

    #[test]
    fn empty_corpus_has_no_winner() {
        let corpus: Vec<Content> = Vec::new();
        assert_eq!(most_frequent_word(&corpus), None);
        assert_eq!(WordTally::new().most_frequent(), None);
    }

    #[test]
    fn counts_across_texts_and_languages() {
        let corpus = [content("a a", "b", "c"), content("a", "b b", "c c c")];
        // a: 3, b: 3, c: 4
        assert_eq!(
            most_frequent_word(&corpus),
            Some(WordFrequency {
                word: "c".into(),
                count: 4
            })
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let corpus = [content("Word word", "WORD", "word")];
        assert_eq!(
            most_frequent_word(&corpus),
            Some(WordFrequency {
                word: "word".into(),
                count: 2
            })
        );
    }

    #[test]
    fn ties_go_to_first_seen_word() {
        let corpus = [content("x y", "y x", "z")];
        assert_eq!(most_frequent_word(&corpus).unwrap().word, "x");

        // Order across texts follows the scan order too.
        let corpus = [content("q", "r", "s"), content("s", "r", "q")];
        assert_eq!(most_frequent_word(&corpus).unwrap().word, "q");

        // ar is scanned before fr and en.
        let corpus = [content("b", "a", "a b")];
        assert_eq!(most_frequent_word(&corpus).unwrap().word, "b");
    }

    #[test]
    fn runs_of_whitespace_do_not_make_empty_words() {
        let mut tally = WordTally::new();
        tally.add_text("  a   b\t\n a ");
        tally.add_text("   ");
        assert_eq!(tally.distinct_words(), 2);
        assert_eq!(tally.most_frequent().unwrap().count, 2);
    }
}
