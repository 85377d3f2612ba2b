use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::frequency::WordTally;
use crate::model::TextResource;
use crate::store::DataStore;
use tracing::debug;

/// Most frequent word across every stored text.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut tally = WordTally::new();
    store.scan(&mut |text: &TextResource| tally.add_content(&text.content))?;

    let mut result = CmdResult::default();
    result.frequent_word = tally.most_frequent();

    debug!(distinct = tally.distinct_words(), "word frequencies tallied");

    if result.frequent_word.is_none() {
        result.add_message(CmdMessage::info("No words found."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::WordFrequency;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_has_no_word() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.frequent_word, None);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn finds_most_frequent_across_texts() {
        let fixture = StoreFixture::new()
            .with_content("a a", "b", "c")
            .with_content("a", "b b", "c c c");
        assert_eq!(
            run(&fixture.store).unwrap().frequent_word,
            Some(WordFrequency {
                word: "c".into(),
                count: 4
            })
        );
    }

    #[test]
    fn tie_goes_to_first_text_in_store_order() {
        let fixture = StoreFixture::new()
            .with_content("zeta", "x", "y")
            .with_content("alpha", "x2", "y2")
            .with_content("alpha zeta", "x3", "y3");
        let word = run(&fixture.store).unwrap().frequent_word.unwrap();
        assert_eq!(word.word, "zeta");
        assert_eq!(word.count, 2);
    }
}
