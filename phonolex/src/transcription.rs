//! Phonemic transcription values and last-sound classification.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::{
    ALVEOLAR_STOPS, DIACRITICS, DIGRAPHS, SIBILANTS, TRANSCRIPTION_DELIMITER, VOICELESS,
};

/// A well-formed phonemic transcription.
///
/// Always bounded by matching delimiter characters with a non-empty interior;
/// the only way to obtain one is through [`Transcription::parse`] or
/// [`Transcription::from_interior`], so downstream phonological rules never
/// re-validate. Dictionary text that fails to parse is treated as a lookup
/// miss by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcription(SmolStr);

impl Transcription {
    /// Parses raw dictionary text. Returns `None` unless the text is bounded
    /// by the delimiter pair with at least one symbol in between.
    pub fn parse(raw: &str) -> Option<Transcription> {
        let raw = raw.trim();

        if raw.len() < 3
            || !raw.starts_with(TRANSCRIPTION_DELIMITER)
            || !raw.ends_with(TRANSCRIPTION_DELIMITER)
        {
            return None;
        }

        Some(Transcription(SmolStr::new(raw)))
    }

    /// Wraps a bare phoneme sequence in the delimiter pair.
    pub fn from_interior(interior: &str) -> Option<Transcription> {
        if interior.is_empty() {
            return None;
        }

        let mut out = String::with_capacity(interior.len() + 2);
        out.push(TRANSCRIPTION_DELIMITER);
        out.push_str(interior);
        out.push(TRANSCRIPTION_DELIMITER);
        Some(Transcription(SmolStr::new(out)))
    }

    /// The delimited transcription text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The phoneme sequence without the delimiters.
    pub fn interior(&self) -> &str {
        &self.0[TRANSCRIPTION_DELIMITER.len_utf8()..self.0.len() - TRANSCRIPTION_DELIMITER.len_utf8()]
    }

    /// Appends a suffix phoneme sequence, re-wrapping the delimiters.
    pub fn with_suffix(&self, suffix: &str) -> Transcription {
        let mut out = String::with_capacity(self.0.len() + suffix.len());
        out.push(TRANSCRIPTION_DELIMITER);
        out.push_str(self.interior());
        out.push_str(suffix);
        out.push(TRANSCRIPTION_DELIMITER);
        Transcription(SmolStr::new(out))
    }

    /// Rewrites the interior through `f`. Returns `None` if the rewrite
    /// empties it.
    pub(crate) fn map_interior<F>(&self, f: F) -> Option<Transcription>
    where
        F: FnOnce(&str) -> String,
    {
        Transcription::from_interior(&f(self.interior()))
    }

    /// The final phoneme, with stress and length marks stripped. Digraph
    /// symbols are recognized ahead of single characters, so `/naɪ/` ends in
    /// `aɪ`, not `ɪ`.
    pub fn last_sound(&self) -> Option<Sound> {
        let cleaned = strip_diacritics(self.interior());

        for digraph in DIGRAPHS {
            if cleaned.ends_with(digraph) {
                return Some(Sound(SmolStr::new(digraph)));
            }
        }

        cleaned
            .chars()
            .last()
            .map(|ch| Sound(SmolStr::new(ch.to_string())))
    }
}

impl std::fmt::Display for Transcription {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[inline(always)]
pub(crate) fn strip_diacritics(s: &str) -> String {
    s.chars().filter(|ch| !DIACRITICS.contains(ch)).collect()
}

/// A single phoneme symbol, classified for the suffix voicing rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sound(SmolStr);

impl Sound {
    /// The phoneme symbol itself (one character, or a digraph).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the phoneme is in the closed voiceless set. Anything not in
    /// that set, vowels included, is voiced for the purposes of the "-ed"
    /// and "-s" rules.
    pub fn is_voiceless(&self) -> bool {
        VOICELESS.contains(&self.0.as_str())
    }

    /// Whether the phoneme is sibilant (s-like, z-like, sh-like, zh-like, or
    /// an affricate), triggering epenthesis before "-s".
    pub fn is_sibilant(&self) -> bool {
        SIBILANTS.contains(&self.0.as_str())
    }

    /// Whether the phoneme is an alveolar stop, triggering epenthesis before
    /// "-ed".
    pub fn is_alveolar_stop(&self) -> bool {
        ALVEOLAR_STOPS.contains(&self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_delimited() {
        assert!(Transcription::parse("/kæt/").is_some());
        assert!(Transcription::parse("  /kæt/\n").is_some());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Transcription::parse(""), None);
        assert_eq!(Transcription::parse("//"), None);
        assert_eq!(Transcription::parse("kæt"), None);
        assert_eq!(Transcription::parse("/kæt"), None);
        assert_eq!(Transcription::parse("kæt/"), None);
    }

    #[test]
    fn interior_strips_delimiters() {
        let t = Transcription::parse("/ˈbɒks/").unwrap();
        assert_eq!(t.interior(), "ˈbɒks");
    }

    #[test]
    fn with_suffix_appends_inside_delimiters() {
        let t = Transcription::parse("/dɒg/").unwrap();
        assert_eq!(t.with_suffix("z").as_str(), "/dɒgz/");
    }

    #[test]
    fn last_sound_ignores_stress_and_length() {
        let t = Transcription::parse("/kəˈmjuːnɪtˈ/").unwrap();
        assert_eq!(t.last_sound().unwrap().as_str(), "t");

        let t = Transcription::parse("/siː/").unwrap();
        assert_eq!(t.last_sound().unwrap().as_str(), "i");
    }

    #[test]
    fn last_sound_prefers_digraphs() {
        let t = Transcription::parse("/traɪ/").unwrap();
        let sound = t.last_sound().unwrap();
        assert_eq!(sound.as_str(), "aɪ");
        assert!(!sound.is_voiceless());

        let t = Transcription::parse("/kætʃ/").unwrap();
        let sound = t.last_sound().unwrap();
        assert_eq!(sound.as_str(), "tʃ");
        assert!(sound.is_voiceless());
        assert!(sound.is_sibilant());
    }

    #[test]
    fn sound_classes() {
        let t = Transcription::parse("/kæt/").unwrap();
        let sound = t.last_sound().unwrap();
        assert!(sound.is_voiceless());
        assert!(sound.is_alveolar_stop());
        assert!(!sound.is_sibilant());

        let t = Transcription::parse("/dɒg/").unwrap();
        assert!(!t.last_sound().unwrap().is_voiceless());
    }
}
