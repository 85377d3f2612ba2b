use super::DataStore;
use crate::error::{Result, TextdeskError};
use crate::model::TextResource;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    texts: Vec<TextResource>,
    positions: HashMap<Uuid, usize>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TextdeskError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn count(&self) -> Result<usize> {
        Ok(self.texts.len())
    }

    fn find_by_id(&self, id: &Uuid) -> Result<Option<TextResource>> {
        Ok(self.positions.get(id).map(|&pos| self.texts[pos].clone()))
    }

    fn find_range(&self, skip: usize, limit: Option<usize>) -> Result<Vec<TextResource>> {
        let rest = self.texts.iter().skip(skip);
        Ok(match limit {
            Some(n) => rest.take(n).cloned().collect(),
            None => rest.cloned().collect(),
        })
    }

    fn insert(&mut self, text: &TextResource) -> Result<()> {
        self.check_writable()?;
        if self.positions.contains_key(&text.id()) {
            return Err(TextdeskError::Store(format!(
                "Duplicate text id: {}",
                text.id()
            )));
        }
        self.positions.insert(text.id(), self.texts.len());
        self.texts.push(text.clone());
        Ok(())
    }

    fn save(&mut self, text: &TextResource) -> Result<()> {
        self.check_writable()?;
        let pos = *self
            .positions
            .get(&text.id())
            .ok_or(TextdeskError::NotFound(text.id()))?;
        self.texts[pos] = text.clone();
        Ok(())
    }

    fn scan(&self, visit: &mut dyn FnMut(&TextResource)) -> Result<()> {
        self.texts.iter().for_each(|text| visit(text));
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Content, State};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_texts(mut self, count: usize) -> Self {
            for i in 0..count {
                let content = Content::new(
                    format!("نص {}", i + 1),
                    format!("texte {}", i + 1),
                    format!("text {}", i + 1),
                )
                .unwrap();
                self.store.insert(&TextResource::new(content)).unwrap();
            }
            self
        }

        pub fn with_content(mut self, ar: &str, fr: &str, en: &str) -> Self {
            let content = Content::new(ar, fr, en).unwrap();
            self.store.insert(&TextResource::new(content)).unwrap();
            self
        }

        pub fn with_text_in_state(mut self, state: State) -> Self {
            let content = Content::new("مرحبا", "bonjour", "hello").unwrap();
            let text = TextResource::new(content).with_state(state);
            self.store.insert(&text).unwrap();
            self
        }

        pub fn ids(&self) -> Vec<Uuid> {
            self.store
                .find_range(0, None)
                .unwrap()
                .iter()
                .map(|t| t.id())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Content;

    #[test]
    fn keeps_insertion_order() {
        let fixture = StoreFixture::new().with_texts(5);
        let ids = fixture.ids();
        let page = fixture.store.find_range(1, Some(2)).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id(), ids[1]);
        assert_eq!(page[1].id(), ids[2]);
    }

    #[test]
    fn range_past_the_end_is_empty() {
        let fixture = StoreFixture::new().with_texts(3);
        assert!(fixture.store.find_range(10, Some(2)).unwrap().is_empty());
        assert_eq!(fixture.store.find_range(1, None).unwrap().len(), 2);
    }

    #[test]
    fn save_replaces_in_place() {
        let mut fixture = StoreFixture::new().with_texts(3);
        let ids = fixture.ids();
        let mut text = fixture.store.find_by_id(&ids[1]).unwrap().unwrap();
        text.content = Content::new("x", "y", "z").unwrap();
        fixture.store.save(&text).unwrap();

        assert_eq!(fixture.ids(), ids);
        let stored = fixture.store.find_by_id(&ids[1]).unwrap().unwrap();
        assert_eq!(stored.content, text.content);
    }

    #[test]
    fn save_unknown_text_is_not_found() {
        let mut store = InMemoryStore::new();
        let text = TextResource::new(Content::new("a", "b", "c").unwrap());
        assert!(matches!(
            store.save(&text),
            Err(TextdeskError::NotFound(id)) if id == text.id()
        ));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut store = InMemoryStore::new();
        let text = TextResource::new(Content::new("a", "b", "c").unwrap());
        store.insert(&text).unwrap();
        assert!(matches!(store.insert(&text), Err(TextdeskError::Store(_))));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn simulated_write_errors() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let text = TextResource::new(Content::new("a", "b", "c").unwrap());
        assert!(store.insert(&text).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }
}
