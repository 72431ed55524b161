//! On-demand chunk-loaded transcription store.
//!
//! The dictionary is split into per-initial-letter JSON files
//! (`a.json` … `z.json`), each a flat object of word → transcription. A
//! chunk loads on the first lookup of a word with that initial and stays
//! resident afterwards; a missing or unreadable chunk file is remembered as
//! an empty chunk so the filesystem is probed at most once per initial.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use smol_str::SmolStr;

use super::{StoreError, TranscriptionStore};

type Chunk = HashMap<SmolStr, SmolStr>;

/// Lazily-loaded dictionary directory.
#[derive(Debug)]
pub struct ChunkedStore {
    dir: PathBuf,
    chunks: RwLock<HashMap<char, Arc<Chunk>>>,
}

impl ChunkedStore {
    /// Opens a chunk directory. The directory must exist; individual chunk
    /// files may not, and are treated as empty when queried.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<ChunkedStore, StoreError> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.is_dir() {
            return Err(StoreError::MissingDirectory(dir));
        }

        Ok(ChunkedStore {
            dir,
            chunks: RwLock::new(HashMap::new()),
        })
    }

    /// Number of chunks loaded so far.
    pub fn loaded_chunks(&self) -> usize {
        self.chunks.read().len()
    }

    fn chunk_for(&self, initial: char) -> Arc<Chunk> {
        if let Some(chunk) = self.chunks.read().get(&initial) {
            return chunk.clone();
        }

        let loaded = Arc::new(self.load_chunk(initial));

        // Another thread may have loaded the same chunk in the meantime;
        // keep whichever got there first.
        let mut chunks = self.chunks.write();
        chunks.entry(initial).or_insert(loaded).clone()
    }

    fn load_chunk(&self, initial: char) -> Chunk {
        let path = self.dir.join(format!("{}.json", initial));

        let file = match std::fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                log::debug!("no chunk for '{}': {}", initial, err);
                return Chunk::new();
            }
        };

        match serde_json::from_reader::<_, Chunk>(std::io::BufReader::new(file)) {
            Ok(chunk) => {
                log::debug!("loaded chunk '{}' with {} entries", initial, chunk.len());
                chunk
            }
            Err(err) => {
                log::warn!("malformed chunk {}: {}", path.display(), err);
                Chunk::new()
            }
        }
    }
}

impl TranscriptionStore for ChunkedStore {
    fn lookup(&self, word: &str) -> Option<SmolStr> {
        let initial = word.chars().next()?;
        self.chunk_for(initial).get(word).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.json"),
            r#"{"apple": "/ˈæpəl/", "ant": "/ænt/"}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("c.json"), "{ not json").unwrap();
        dir
    }

    #[test]
    fn lookup_loads_on_demand() {
        let dir = chunk_dir();
        let store = ChunkedStore::open(dir.path()).unwrap();
        assert_eq!(store.loaded_chunks(), 0);

        assert_eq!(store.lookup("apple").unwrap(), "/ˈæpəl/");
        assert_eq!(store.lookup("ant").unwrap(), "/ænt/");
        assert_eq!(store.loaded_chunks(), 1);

        assert_eq!(store.lookup("aardvark"), None);
        assert_eq!(store.loaded_chunks(), 1);
    }

    #[test]
    fn missing_chunk_is_empty() {
        let dir = chunk_dir();
        let store = ChunkedStore::open(dir.path()).unwrap();

        assert_eq!(store.lookup("banana"), None);
        assert_eq!(store.lookup("berry"), None);
        assert_eq!(store.loaded_chunks(), 1);
    }

    #[test]
    fn malformed_chunk_is_empty() {
        let dir = chunk_dir();
        let store = ChunkedStore::open(dir.path()).unwrap();

        assert_eq!(store.lookup("cat"), None);
        assert_eq!(store.loaded_chunks(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = ChunkedStore::open("/nonexistent/phonolex-chunks").unwrap_err();
        assert!(matches!(err, StoreError::MissingDirectory(_)));
    }
}
