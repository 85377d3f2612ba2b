use crate::error::Result;
use crate::model::{Content, Language};
use std::collections::BTreeMap;

/// Number of whitespace-separated words. Blank text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_words_per_language(content: &Content) -> BTreeMap<Language, usize> {
    content
        .iter()
        .map(|(lang, text)| (lang, count_words(text)))
        .collect()
}

pub fn count_words_total(content: &Content) -> usize {
    count_words_per_language(content).values().sum()
}

/// Word count for one language given by its code (`"ar"`, `"fr"`, `"en"`).
pub fn count_words_for(content: &Content, code: &str) -> Result<usize> {
    let lang: Language = code.parse()?;
    Ok(count_words(content.get(lang)))
}
