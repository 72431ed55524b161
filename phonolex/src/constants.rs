pub const TRANSCRIPTION_DELIMITER: char = '/';

/// Two-character phoneme symbols. Checked before single characters when
/// extracting the final sound of a transcription.
pub const DIGRAPHS: [&str; 11] = [
    "tʃ", "dʒ", "aɪ", "aʊ", "ɔɪ", "eɪ", "oʊ", "əʊ", "ɪə", "eə", "ʊə",
];

/// Stress and length marks that may be interspersed with phoneme symbols.
pub const DIACRITICS: [char; 6] = ['ˈ', 'ˌ', 'ː', 'ˑ', '.', '\u{0329}'];

/// Phonemes with no voiced quality. Everything else, vowels included, counts
/// as voiced for the suffix voicing rules.
pub const VOICELESS: [&str; 9] = ["p", "t", "k", "f", "θ", "s", "ʃ", "tʃ", "h"];

/// Sibilant and affricate phonemes that trigger epenthesis before "-s".
pub const SIBILANTS: [&str; 6] = ["s", "z", "ʃ", "ʒ", "tʃ", "dʒ"];

/// The two alveolar stops that trigger epenthesis before "-ed".
pub const ALVEOLAR_STOPS: [&str; 2] = ["t", "d"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digraphs_are_two_codepoints() {
        for d in DIGRAPHS {
            assert_eq!(d.chars().count(), 2, "{}", d);
        }
    }

    #[test]
    fn voiceless_affricate_is_a_digraph() {
        assert!(VOICELESS.contains(&"tʃ"));
        assert!(DIGRAPHS.contains(&"tʃ"));
    }

    #[test]
    fn sibilants_and_stops_are_known_symbols() {
        for s in SIBILANTS.iter().chain(ALVEOLAR_STOPS.iter()) {
            assert!(s.chars().count() <= 2);
            assert!(!DIACRITICS.iter().any(|d| s.contains(*d)));
        }
    }
}
