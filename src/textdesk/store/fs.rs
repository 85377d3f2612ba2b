use super::DataStore;
use crate::error::{Result, TextdeskError};
use crate::model::TextResource;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DATA_FILENAME: &str = "texts.jsonl";

/// File-backed store: one JSON document per line, in insertion order.
///
/// Reads stream the file, so counting, range fetches and scans never hold more
/// than the requested texts in memory. Writes rewrite the whole file through a
/// temp file and a rename.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TextdeskError::Io)?;
        }
        Ok(())
    }

    /// Stream every stored text to `visit`. Stops early when `visit` returns false.
    fn for_each_stored<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(TextResource) -> bool,
    {
        let path = self.data_file();
        if !path.exists() {
            return Ok(());
        }
        let reader = BufReader::new(File::open(path).map_err(TextdeskError::Io)?);
        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<TextResource>();
        for text in stream {
            if !visit(text.map_err(TextdeskError::Serialization)?) {
                break;
            }
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<TextResource>> {
        let mut texts = Vec::new();
        self.for_each_stored(|text| {
            texts.push(text);
            true
        })?;
        Ok(texts)
    }

    fn write_all(&self, texts: &[TextResource]) -> Result<()> {
        self.ensure_dir()?;
        let tmp_file = self.root.join(format!(".texts-{}.tmp", Uuid::new_v4()));
        if let Err(e) = Self::write_lines(&tmp_file, texts) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
        fs::rename(&tmp_file, self.data_file()).map_err(|e| {
            let _ = fs::remove_file(&tmp_file);
            TextdeskError::Io(e)
        })
    }

    fn write_lines(path: &Path, texts: &[TextResource]) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path).map_err(TextdeskError::Io)?);
        for text in texts {
            serde_json::to_writer(&mut writer, text).map_err(TextdeskError::Serialization)?;
            writer.write_all(b"\n").map_err(TextdeskError::Io)?;
        }
        writer.flush().map_err(TextdeskError::Io)
    }
}

impl DataStore for FileStore {
    fn count(&self) -> Result<usize> {
        let mut count = 0;
        self.for_each_stored(|_| {
            count += 1;
            true
        })?;
        Ok(count)
    }

    fn find_by_id(&self, id: &Uuid) -> Result<Option<TextResource>> {
        let mut found = None;
        self.for_each_stored(|text| {
            if text.id() == *id {
                found = Some(text);
                return false;
            }
            true
        })?;
        Ok(found)
    }

    fn find_range(&self, skip: usize, limit: Option<usize>) -> Result<Vec<TextResource>> {
        let mut texts = Vec::new();
        let mut position = 0;
        self.for_each_stored(|text| {
            if limit.is_some_and(|n| texts.len() >= n) {
                return false;
            }
            if position >= skip {
                texts.push(text);
            }
            position += 1;
            true
        })?;
        Ok(texts)
    }

    fn insert(&mut self, text: &TextResource) -> Result<()> {
        let mut texts = self.load_all()?;
        if texts.iter().any(|t| t.id() == text.id()) {
            return Err(TextdeskError::Store(format!(
                "Duplicate text id: {}",
                text.id()
            )));
        }
        texts.push(text.clone());
        self.write_all(&texts)
    }

    fn save(&mut self, text: &TextResource) -> Result<()> {
        let mut texts = self.load_all()?;
        let slot = texts
            .iter_mut()
            .find(|t| t.id() == text.id())
            .ok_or(TextdeskError::NotFound(text.id()))?;
        *slot = text.clone();
        self.write_all(&texts)
    }

    fn scan(&self, visit: &mut dyn FnMut(&TextResource)) -> Result<()> {
        self.for_each_stored(|text| {
            visit(&text);
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Content, State};
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    fn text(n: usize) -> TextResource {
        TextResource::new(
            Content::new(format!("ar {}", n), format!("fr {}", n), format!("en {}", n)).unwrap(),
        )
    }

    #[test]
    fn empty_store_has_nothing() {
        let (_dir, store) = setup();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.find_range(0, None).unwrap().is_empty());
        assert!(store.find_by_id(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn insert_and_find() {
        let (_dir, mut store) = setup();
        let t = text(1);
        store.insert(&t).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.find_by_id(&t.id()).unwrap(), Some(t));
    }

    #[test]
    fn ranges_follow_insertion_order() {
        let (_dir, mut store) = setup();
        let texts: Vec<_> = (0..5).map(text).collect();
        for t in &texts {
            store.insert(t).unwrap();
        }

        let page = store.find_range(2, Some(2)).unwrap();
        let ids: Vec<_> = page.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![texts[2].id(), texts[3].id()]);

        assert_eq!(store.find_range(3, None).unwrap().len(), 2);
        assert!(store.find_range(7, Some(2)).unwrap().is_empty());
    }

    #[test]
    fn save_keeps_position() {
        let (_dir, mut store) = setup();
        let first = text(1);
        let mut second = text(2);
        store.insert(&first).unwrap();
        store.insert(&second).unwrap();

        second.apply(crate::lifecycle::Event::Submit).unwrap();
        store.save(&second).unwrap();

        let all = store.find_range(0, None).unwrap();
        assert_eq!(all[0].id(), first.id());
        assert_eq!(all[1].state(), State::Submitted);
    }

    #[test]
    fn scan_visits_everything_in_order() {
        let (_dir, mut store) = setup();
        let texts: Vec<_> = (0..3).map(text).collect();
        for t in &texts {
            store.insert(t).unwrap();
        }

        let mut seen = Vec::new();
        store.scan(&mut |t: &TextResource| seen.push(t.id())).unwrap();
        let expected: Vec<_> = texts.iter().map(|t| t.id()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let (_dir, mut store) = setup();
        store.insert(&text(1)).unwrap();

        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_cleans_up_tmp_file() {
        let (_dir, mut store) = setup();
        store.insert(&text(1)).unwrap();
        // A directory where the data file belongs makes the final rename fail.
        let data_file = store.root().join(DATA_FILENAME);
        fs::remove_file(&data_file).unwrap();
        fs::create_dir(&data_file).unwrap();
        fs::write(data_file.join("blocker"), b"x").unwrap();

        assert!(store.write_all(&[text(2)]).is_err());
        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn data_survives_reopen() {
        let (dir, mut store) = setup();
        let t = text(1);
        store.insert(&t).unwrap();

        let reopened = FileStore::new(dir.path().join("data"));
        assert_eq!(reopened.find_by_id(&t.id()).unwrap(), Some(t));
    }
}
