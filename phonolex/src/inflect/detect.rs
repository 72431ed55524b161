//! Suffix detection over surface spellings.
//!
//! One pure function per inflectional category. Each takes a normalized
//! (lowercase ASCII) word and returns at most one candidate; the resolver
//! tries the categories in [`DETECTORS`] order and commits to the first one
//! that fires, falling through to the next only when both of its bases miss
//! in the store.

use smol_str::SmolStr;

use super::{InflectionCandidate, SuffixRule};

/// A detector for one inflectional category.
pub type Detector = fn(&str) -> Option<InflectionCandidate>;

/// Fixed priority order. Several surface forms are spelling-ambiguous across
/// categories: "-ity" must come before "-y", "-est" before "-er".
pub const DETECTORS: [Detector; 8] = [
    detect_ity, detect_ly, detect_est, detect_er, detect_ing, detect_ed, detect_y, detect_s,
];

/// Words ending in "ed" that are not "-ed" past tenses.
const NON_PAST_ED: [&str; 22] = [
    "naked", "wicked", "sacred", "hatred", "hundred", "kindred", "indeed", "bleed", "breed",
    "creed", "greed", "speed", "steed", "fled", "bred", "sped", "shed", "shred", "sled", "embed",
    "exceed", "proceed",
];

/// Words ending in "s" that are not "-s" plurals or third-person forms.
const NON_PLURAL_S: [&str; 19] = [
    "always", "perhaps", "whereas", "besides", "its", "his", "hers", "ours", "yours", "theirs",
    "this", "thus", "news", "series", "species", "lens", "bus", "gas", "yes",
];

#[inline(always)]
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn ends_with_doubled_consonant(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    n >= 2 && bytes[n - 1] == bytes[n - 2] && bytes[n - 1].is_ascii_alphabetic() && !is_vowel(bytes[n - 1])
}

/// Drop-one / restore-"y" spelling repair shared by "-est", "-er" and "-ed".
fn repair_stem(stem: &str) -> String {
    if ends_with_doubled_consonant(stem) {
        stem[..stem.len() - 1].to_string()
    } else if let Some(prefix) = stem.strip_suffix('i') {
        format!("{}y", prefix)
    } else {
        stem.to_string()
    }
}

fn candidate(base: &str, rule: SuffixRule, alternative: Option<&str>) -> Option<InflectionCandidate> {
    // An empty reconstruction must never reach the store.
    if base.is_empty() {
        return None;
    }

    Some(InflectionCandidate {
        base: SmolStr::new(base),
        rule,
        alternative: alternative.filter(|alt| !alt.is_empty()).map(SmolStr::new),
    })
}

/// "-ity" nominalizations: "capability" → "capable", "nationality" →
/// "nation" (or "national").
pub fn detect_ity(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 5 || !word.ends_with("ity") {
        return None;
    }

    let stem = &word[..word.len() - 3];

    if let Some(prefix) = stem.strip_suffix("abil") {
        return candidate(&format!("{}able", prefix), SuffixRule::NounIty, None);
    }
    if let Some(prefix) = stem.strip_suffix("ibil") {
        return candidate(&format!("{}ible", prefix), SuffixRule::NounIty, None);
    }
    if let Some(prefix) = stem.strip_suffix("al") {
        if !prefix.is_empty() {
            return candidate(prefix, SuffixRule::NounIty, Some(stem));
        }
    }

    candidate(stem, SuffixRule::NounIty, None)
}

/// "-ly" adverbs: "happily" → "happy", "simply" → "simpl"/"simple".
pub fn detect_ly(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 4 || !word.ends_with("ly") {
        return None;
    }

    let stem = &word[..word.len() - 2];

    if let Some(prefix) = stem.strip_suffix('i') {
        return candidate(&format!("{}y", prefix), SuffixRule::AdverbLy, None);
    }

    candidate(stem, SuffixRule::AdverbLy, Some(&format!("{}e", stem)))
}

/// "-est" superlatives: "biggest" → "big", "happiest" → "happy".
pub fn detect_est(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 5 || !word.ends_with("est") {
        return None;
    }

    candidate(&repair_stem(&word[..word.len() - 3]), SuffixRule::Superlative, None)
}

/// "-er" comparatives: "bigger" → "big", "happier" → "happy".
pub fn detect_er(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 4 || !word.ends_with("er") {
        return None;
    }

    candidate(&repair_stem(&word[..word.len() - 2]), SuffixRule::Comparative, None)
}

/// "-ing" gerunds: "running" → "run", "making" → "make"/"mak".
pub fn detect_ing(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 5 || !word.ends_with("ing") {
        return None;
    }

    let stem = &word[..word.len() - 3];

    if ends_with_doubled_consonant(stem) {
        return candidate(&stem[..stem.len() - 1], SuffixRule::Gerund, None);
    }

    candidate(&format!("{}e", stem), SuffixRule::Gerund, Some(stem))
}

/// "-ed" past tenses: "stopped" → "stop", "tried" → "try", "walked" → "walk".
pub fn detect_ed(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 4 || !word.ends_with("ed") || NON_PAST_ED.contains(&word) {
        return None;
    }

    candidate(&repair_stem(&word[..word.len() - 2]), SuffixRule::PastTense, None)
}

/// "-y" adjectives: "sunny" → "sun", "noisy" → "noise"/"nois".
pub fn detect_y(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 3 || !word.ends_with('y') {
        return None;
    }

    let stem = &word[..word.len() - 1];

    if ends_with_doubled_consonant(stem) {
        return candidate(&stem[..stem.len() - 1], SuffixRule::AdjectiveY, None);
    }

    candidate(&format!("{}e", stem), SuffixRule::AdjectiveY, Some(stem))
}

/// "-s"/"-es" plurals and third-person forms: "tries" → "try", "boxes" →
/// "box", "knives" → "knife"/"knif", "cats" → "cat".
pub fn detect_s(word: &str) -> Option<InflectionCandidate> {
    if word.len() < 3 || !word.ends_with('s') || NON_PLURAL_S.contains(&word) {
        return None;
    }

    // A word ending in a double "s" is never a plural.
    if word.ends_with("ss") {
        return None;
    }

    if word.len() >= 4 {
        if let Some(prefix) = word.strip_suffix("ies") {
            return candidate(&format!("{}y", prefix), SuffixRule::Plural, None);
        }
        if word.ends_with("oes") {
            return candidate(&word[..word.len() - 2], SuffixRule::Plural, None);
        }
        if let Some(prefix) = word.strip_suffix("ves") {
            return candidate(
                &format!("{}fe", prefix),
                SuffixRule::PluralVes,
                Some(&format!("{}f", prefix)),
            );
        }
        if let Some(stem) = word.strip_suffix("es") {
            let sibilant_stem = stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with("ss")
                || stem.ends_with('x')
                || stem.ends_with('z');
            if sibilant_stem {
                return candidate(stem, SuffixRule::Plural, None);
            }
        }
    }

    candidate(&word[..word.len() - 1], SuffixRule::Plural, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(word: &str) -> Option<(String, Option<String>)> {
        for detect in DETECTORS {
            if let Some(c) = detect(word) {
                return Some((
                    c.base.to_string(),
                    c.alternative.as_ref().map(|a| a.to_string()),
                ));
            }
        }
        None
    }

    fn first_rule(word: &str) -> Option<SuffixRule> {
        DETECTORS.iter().find_map(|detect| detect(word)).map(|c| c.rule)
    }

    #[test]
    fn ity() {
        assert_eq!(bases("capability").unwrap(), ("capable".into(), None));
        assert_eq!(bases("possibility").unwrap(), ("possible".into(), None));
        assert_eq!(
            bases("nationality").unwrap(),
            ("nation".into(), Some("national".into()))
        );
        assert_eq!(bases("ability").unwrap(), ("able".into(), None));
        // "-ity" takes priority over "-y".
        assert_eq!(first_rule("quality").unwrap(), SuffixRule::NounIty);
        assert_eq!(detect_ity("city"), None);
    }

    #[test]
    fn ly() {
        assert_eq!(bases("happily").unwrap(), ("happy".into(), None));
        assert_eq!(
            bases("quickly").unwrap(),
            ("quick".into(), Some("quicke".into()))
        );
        assert_eq!(
            bases("simply").unwrap(),
            ("simpl".into(), Some("simple".into()))
        );
        assert_eq!(detect_ly("fly"), None);
    }

    #[test]
    fn est_and_er() {
        assert_eq!(bases("biggest").unwrap(), ("big".into(), None));
        assert_eq!(bases("happiest").unwrap(), ("happy".into(), None));
        assert_eq!(bases("greatest").unwrap(), ("great".into(), None));
        assert_eq!(first_rule("biggest").unwrap(), SuffixRule::Superlative);

        assert_eq!(bases("bigger").unwrap(), ("big".into(), None));
        assert_eq!(bases("happier").unwrap(), ("happy".into(), None));
        assert_eq!(first_rule("taller").unwrap(), SuffixRule::Comparative);
    }

    #[test]
    fn ing() {
        assert_eq!(bases("running").unwrap(), ("run".into(), None));
        assert_eq!(
            bases("making").unwrap(),
            ("make".into(), Some("mak".into()))
        );
        assert_eq!(
            bases("going").unwrap(),
            ("goe".into(), Some("go".into()))
        );
        assert_eq!(bases("ring"), None);
    }

    #[test]
    fn ed() {
        assert_eq!(bases("walked").unwrap(), ("walk".into(), None));
        assert_eq!(bases("stopped").unwrap(), ("stop".into(), None));
        assert_eq!(bases("tried").unwrap(), ("try".into(), None));
        assert_eq!(detect_ed("naked"), None);
        assert_eq!(detect_ed("hundred"), None);
        assert_eq!(detect_ed("red"), None);
    }

    #[test]
    fn adjective_y() {
        assert_eq!(bases("sunny").unwrap(), ("sun".into(), None));
        assert_eq!(
            bases("noisy").unwrap(),
            ("noise".into(), Some("nois".into()))
        );
        assert_eq!(
            bases("rainy").unwrap(),
            ("raine".into(), Some("rain".into()))
        );
    }

    #[test]
    fn plural() {
        assert_eq!(bases("cats").unwrap(), ("cat".into(), None));
        assert_eq!(bases("tries").unwrap(), ("try".into(), None));
        assert_eq!(bases("potatoes").unwrap(), ("potato".into(), None));
        assert_eq!(bases("boxes").unwrap(), ("box".into(), None));
        assert_eq!(bases("churches").unwrap(), ("church".into(), None));
        assert_eq!(bases("glasses").unwrap(), ("glass".into(), None));
        assert_eq!(bases("buzzes").unwrap(), ("buzz".into(), None));
        assert_eq!(
            bases("knives").unwrap(),
            ("knife".into(), Some("knif".into()))
        );
        assert_eq!(
            bases("wolves").unwrap(),
            ("wolfe".into(), Some("wolf".into()))
        );
        assert_eq!(first_rule("knives").unwrap(), SuffixRule::PluralVes);
    }

    #[test]
    fn plural_exclusions() {
        assert_eq!(detect_s("always"), None);
        assert_eq!(detect_s("this"), None);
        assert_eq!(detect_s("glass"), None);
        assert_eq!(detect_s("as"), None);
    }

    #[test]
    fn short_words_never_match() {
        for word in ["a", "is", "it", "an", "ed", "s"] {
            assert_eq!(bases(word), None, "{}", word);
        }
    }

    #[test]
    fn doubled_consonants() {
        assert!(ends_with_doubled_consonant("bigg"));
        assert!(ends_with_doubled_consonant("runn"));
        assert!(ends_with_doubled_consonant("small"));
        assert!(!ends_with_doubled_consonant("see"));
        assert!(!ends_with_doubled_consonant("big"));
        assert!(!ends_with_doubled_consonant("t"));
    }
}
