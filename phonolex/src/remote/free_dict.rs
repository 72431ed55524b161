//! Adapter for JSON dictionary APIs of the FreeDictionary shape.
//!
//! The wire format is an array of entries, each carrying an optional
//! top-level `phonetic` field and an optional `phonetics` list of variants
//! with an optional `text` each. The adapter takes the first non-empty
//! phonetic text and normalizes it to the delimiter convention.

use std::time::Duration;

use serde::Deserialize;

use super::{RateLimiter, RemoteLookup};
use crate::transcription::Transcription;

/// Default API endpoint, completed with `/<word>`.
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Connection and rate-limiting settings for a remote dictionary source.
#[derive(Clone, Debug)]
pub struct RemoteConfig {
    /// Endpoint the word is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum concurrent outbound requests.
    pub max_in_flight: usize,
    /// Minimum spacing between request admissions.
    pub min_spacing: Duration,
}

impl Default for RemoteConfig {
    fn default() -> RemoteConfig {
        RemoteConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(6),
            max_in_flight: 2,
            min_spacing: Duration::from_millis(500),
        }
    }
}

/// Blocking client for a FreeDictionary-style API.
pub struct FreeDictClient {
    agent: ureq::Agent,
    base_url: String,
    limiter: RateLimiter,
}

impl FreeDictClient {
    /// Creates a client with [`RemoteConfig::default`].
    pub fn new() -> FreeDictClient {
        FreeDictClient::with_config(RemoteConfig::default())
    }

    /// Creates a client with explicit settings.
    pub fn with_config(config: RemoteConfig) -> FreeDictClient {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(3))
            .timeout(config.timeout)
            .build();

        FreeDictClient {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::new(config.max_in_flight, config.min_spacing),
        }
    }
}

impl Default for FreeDictClient {
    fn default() -> FreeDictClient {
        FreeDictClient::new()
    }
}

impl RemoteLookup for FreeDictClient {
    fn query(&self, word: &str) -> Option<Transcription> {
        let _permit = self.limiter.acquire();
        let url = format!("{}/{}", self.base_url, word);

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(err) => {
                log::debug!("remote lookup failed for {:?}: {}", word, err);
                return None;
            }
        };

        let entries: Vec<ApiEntry> = match response.into_json() {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!("unparseable remote response for {:?}: {}", word, err);
                return None;
            }
        };

        first_phonetic(&entries).and_then(normalize_phonetic)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
}

fn first_phonetic(entries: &[ApiEntry]) -> Option<&str> {
    entries.iter().find_map(|entry| {
        entry
            .phonetic
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .or_else(|| {
                entry
                    .phonetics
                    .iter()
                    .find_map(|p| p.text.as_deref().filter(|text| !text.trim().is_empty()))
            })
    })
}

/// Phonetic text arrives with slashes, with brackets, or bare; normalize to
/// the delimited convention.
fn normalize_phonetic(text: &str) -> Option<Transcription> {
    let text = text.trim().trim_matches(|ch: char| ch == '[' || ch == ']').trim();

    if text.starts_with('/') {
        Transcription::parse(text)
    } else {
        Transcription::from_interior(text)
    }
}
