/*! Transcription stores.

A store is the injected lookup capability the resolver runs against: an
exact-match mapping from lowercase word to the raw transcription text the
backing dictionary holds. The resolver parses that text itself and treats
malformed entries as misses, so stores stay dumb. A store may be fully
resident ([`memory::MemoryStore`]) or load lazily on demand
([`chunked::ChunkedStore`]) behind the same signature.
*/

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

pub mod chunked;
pub mod memory;

/// Errors opening or loading a dictionary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
    /// The chunk directory does not exist or is not a directory.
    #[error("not a chunk directory: {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Exact-match lookup from a lowercase word to raw transcription text.
pub trait TranscriptionStore {
    /// Returns the stored transcription text for the word, verbatim.
    fn lookup(&self, word: &str) -> Option<SmolStr>;
}

impl<S: TranscriptionStore + ?Sized> TranscriptionStore for &S {
    fn lookup(&self, word: &str) -> Option<SmolStr> {
        (**self).lookup(word)
    }
}

impl<S: TranscriptionStore + ?Sized> TranscriptionStore for Box<S> {
    fn lookup(&self, word: &str) -> Option<SmolStr> {
        (**self).lookup(word)
    }
}

impl<S: TranscriptionStore + ?Sized> TranscriptionStore for std::sync::Arc<S> {
    fn lookup(&self, word: &str) -> Option<SmolStr> {
        (**self).lookup(word)
    }
}
