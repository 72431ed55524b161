/*! Resolution orchestration.

Sequences normalization → direct lookup → memo → suffix categories →
remote fallback. Absence of a transcription is a valid terminal state, not
an error: every internal failure (malformed input, malformed store text,
remote timeout) is absorbed into the returned [`ResolutionResult`], and the
public surface never returns `Result` or panics.
*/

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use unic_ucd_category::GeneralCategory;

use self::cache::LookupCache;
use crate::inflect::detect::DETECTORS;
use crate::inflect::{transform, SuffixRule};
use crate::remote::RemoteLookup;
use crate::store::TranscriptionStore;
use crate::transcription::Transcription;

pub mod cache;

/// How a resolution was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// The word itself was in the store.
    DirectDictionary,
    /// Derived from the primary reconstructed base of a suffix category.
    InflectedPrimary,
    /// Derived from the alternative reconstructed base.
    InflectedAlternative,
    /// Answered by the remote fallback.
    ExternalLookup,
    /// Nothing matched; the caller decides what a blank annotation means.
    Unresolved,
}

/// Outcome of resolving one surface word, with enough provenance for
/// diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The resolved transcription, absent when unresolved.
    pub transcription: Option<Transcription>,
    /// How the transcription was produced.
    pub origin: Origin,
    /// The base form that matched, for inflected resolutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_base: Option<SmolStr>,
    /// The suffix rule that fired, for inflected resolutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<SuffixRule>,
}

impl ResolutionResult {
    /// The terminal "nothing matched" result.
    pub fn unresolved() -> ResolutionResult {
        ResolutionResult {
            transcription: None,
            origin: Origin::Unresolved,
            matched_base: None,
            rule: None,
        }
    }

    fn direct(transcription: Transcription) -> ResolutionResult {
        ResolutionResult {
            transcription: Some(transcription),
            origin: Origin::DirectDictionary,
            matched_base: None,
            rule: None,
        }
    }

    fn inflected(
        origin: Origin,
        transcription: Transcription,
        base: SmolStr,
        rule: SuffixRule,
    ) -> ResolutionResult {
        ResolutionResult {
            transcription: Some(transcription),
            origin,
            matched_base: Some(base),
            rule: Some(rule),
        }
    }
}

/// Resolver settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Memo capacity; `None` disables memoization entirely.
    pub cache_size: Option<usize>,
}

impl ResolverConfig {
    /// The default configuration.
    pub const fn default() -> ResolverConfig {
        ResolverConfig {
            cache_size: Some(1024),
        }
    }
}

/// The resolution orchestrator.
///
/// Owns a [`TranscriptionStore`], an optional remote fallback and an
/// optional memo. Thread-safe behind `&self`.
pub struct Resolver<S: TranscriptionStore> {
    store: S,
    remote: Option<Box<dyn RemoteLookup + Send + Sync>>,
    cache: Option<LookupCache>,
}

impl<S: TranscriptionStore> Resolver<S> {
    /// Creates a resolver with the default configuration and no remote
    /// fallback.
    pub fn new(store: S) -> Resolver<S> {
        Resolver::with_config(store, &ResolverConfig::default())
    }

    /// Creates a resolver with explicit settings.
    pub fn with_config(store: S, config: &ResolverConfig) -> Resolver<S> {
        Resolver {
            store,
            remote: None,
            cache: config.cache_size.map(LookupCache::new),
        }
    }

    /// Attaches a remote fallback source.
    pub fn with_remote(mut self, remote: Box<dyn RemoteLookup + Send + Sync>) -> Resolver<S> {
        self.remote = Some(remote);
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves one surface word to its transcription.
    pub fn resolve(&self, word: &str) -> ResolutionResult {
        let word = match normalize(word) {
            Some(word) => word,
            None => return ResolutionResult::unresolved(),
        };

        if let Some(transcription) = self.lookup_parsed(&word) {
            return ResolutionResult::direct(transcription);
        }

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&word) {
                log::trace!("memo hit for {:?}", word);
                return hit;
            }
        }

        let result = match self.resolve_inflected(&word) {
            Some(result) => result,
            None => self.resolve_remote(&word),
        };

        if let Some(cache) = &self.cache {
            cache.insert(word, result.clone());
        }

        result
    }

    /// Store lookup plus well-formedness check; malformed dictionary text is
    /// a miss, not an error.
    fn lookup_parsed(&self, word: &str) -> Option<Transcription> {
        let raw = self.store.lookup(word)?;

        match Transcription::parse(&raw) {
            Some(transcription) => Some(transcription),
            None => {
                log::warn!("malformed transcription for {:?}: {:?}", word, raw);
                None
            }
        }
    }

    fn resolve_inflected(&self, word: &str) -> Option<ResolutionResult> {
        for detect in DETECTORS {
            let candidate = match detect(word) {
                Some(candidate) => candidate,
                None => continue,
            };

            if let Some(base) = self.lookup_parsed(&candidate.base) {
                if let Some(transcription) = transform::apply(candidate.rule, &base) {
                    return Some(ResolutionResult::inflected(
                        Origin::InflectedPrimary,
                        transcription,
                        candidate.base,
                        candidate.rule,
                    ));
                }
            }

            if let Some(alternative) = candidate.alternative {
                if let Some(base) = self.lookup_parsed(&alternative) {
                    if let Some(transcription) = transform::apply(candidate.rule, &base) {
                        return Some(ResolutionResult::inflected(
                            Origin::InflectedAlternative,
                            transcription,
                            alternative,
                            candidate.rule,
                        ));
                    }
                }
            }

            // Both bases missed: the next category gets its turn.
        }

        None
    }

    fn resolve_remote(&self, word: &str) -> ResolutionResult {
        let remote = match &self.remote {
            Some(remote) => remote,
            None => return ResolutionResult::unresolved(),
        };

        match remote.query(word) {
            Some(transcription) => ResolutionResult {
                transcription: Some(transcription),
                origin: Origin::ExternalLookup,
                matched_base: None,
                rule: None,
            },
            None => ResolutionResult::unresolved(),
        }
    }
}

/// Lowercases and trims surrounding non-letters. Returns `None` for input
/// that has no letters at all or carries characters outside the permitted
/// alphabet (ASCII letters plus internal apostrophes and hyphens).
fn normalize(word: &str) -> Option<SmolStr> {
    let trimmed = word.trim_matches(|ch: char| !GeneralCategory::of(ch).is_letter());

    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();

    if !lowered
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch == '\'' || ch == '-')
    {
        return None;
    }

    Some(SmolStr::new(lowered))
}
