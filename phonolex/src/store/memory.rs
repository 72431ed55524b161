//! Fully-resident transcription store.

use std::io::BufRead;
use std::path::Path;

use hashbrown::HashMap;
use smol_str::SmolStr;

use super::{StoreError, TranscriptionStore};

/// In-memory word → transcription map.
///
/// Keys are lowercased on ingest. The canonical interchange format is TSV:
/// one `word<TAB>transcription` entry per line, with blank lines and `#`
/// comment lines skipped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<SmolStr, SmolStr>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Builds a store from `(word, transcription)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> MemoryStore
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut store = MemoryStore::new();
        for (word, transcription) in entries {
            store.insert(word.as_ref(), transcription.as_ref());
        }
        store
    }

    /// Reads TSV dictionary lines from `reader`.
    pub fn from_tsv_reader<R: BufRead>(reader: R) -> Result<MemoryStore, StoreError> {
        let mut store = MemoryStore::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((word, transcription)) = line.split_once('\t') {
                store.insert(word.trim(), transcription.trim());
            }
        }

        log::debug!("loaded {} dictionary entries", store.len());
        Ok(store)
    }

    /// Reads a TSV dictionary file.
    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> Result<MemoryStore, StoreError> {
        let file = std::fs::File::open(path)?;
        MemoryStore::from_tsv_reader(std::io::BufReader::new(file))
    }

    /// Inserts one entry, lowercasing the word.
    pub fn insert(&mut self, word: &str, transcription: &str) {
        self.entries
            .insert(SmolStr::new(word.to_lowercase()), SmolStr::new(transcription));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranscriptionStore for MemoryStore {
    fn lookup(&self, word: &str) -> Option<SmolStr> {
        self.entries.get(word).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_loading() {
        let tsv = "\
# comment line
cat\t/kæt/

DOG\t/dɒg/
malformed line without tab
box\t/bɒks/
";
        let store = MemoryStore::from_tsv_reader(tsv.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.lookup("cat").unwrap(), "/kæt/");
        assert_eq!(store.lookup("dog").unwrap(), "/dɒg/");
        assert_eq!(store.lookup("DOG"), None);
        assert_eq!(store.lookup("fish"), None);
    }

    #[test]
    fn from_entries_lowercases() {
        let store = MemoryStore::from_entries(vec![("Cat", "/kæt/")]);
        assert_eq!(store.lookup("cat").unwrap(), "/kæt/");
    }
}
