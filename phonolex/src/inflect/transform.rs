//! Phonemic derivation of inflected transcriptions.
//!
//! Fixed suffixes for the vocalic endings; voicing assimilation with
//! sibilant/stop epenthesis for "-s" and "-ed". Input transcriptions are
//! well-formed by construction ([`Transcription`] cannot hold malformed
//! text), so the rules here only have to reason about sounds.

use super::SuffixRule;
use crate::transcription::Transcription;

/// Derives the inflected transcription from the base form's.
///
/// Returns `None` when the base has no extractable final sound (an interior
/// consisting solely of stress/length marks).
pub fn apply(rule: SuffixRule, base: &Transcription) -> Option<Transcription> {
    match rule {
        SuffixRule::Gerund => Some(base.with_suffix("ɪŋ")),
        SuffixRule::AdverbLy => Some(base.with_suffix("li")),
        SuffixRule::Comparative => Some(base.with_suffix("ər")),
        SuffixRule::Superlative => Some(base.with_suffix("ɪst")),
        SuffixRule::NounIty => Some(base.with_suffix("əti")),
        SuffixRule::AdjectiveY => Some(base.with_suffix("i")),
        SuffixRule::PastTense => past_tense(base),
        SuffixRule::Plural => plural(base),
        SuffixRule::PluralVes => plural(&soften_final_f(base)?),
    }
}

fn past_tense(base: &Transcription) -> Option<Transcription> {
    let last = base.last_sound()?;

    let suffix = if last.is_alveolar_stop() {
        "ɪd"
    } else if last.is_voiceless() {
        "t"
    } else {
        "d"
    };

    Some(base.with_suffix(suffix))
}

fn plural(base: &Transcription) -> Option<Transcription> {
    // Sibilance wins over the voiced/voiceless split: "boxes" takes the
    // epenthetic vowel even though /s/ is voiceless.
    let last = base.last_sound()?;

    let suffix = if last.is_sibilant() {
        "ɪz"
    } else if last.is_voiceless() {
        "s"
    } else {
        "z"
    };

    Some(base.with_suffix(suffix))
}

/// "-ves" plurals soften the base-final /f/ to /v/ before the voicing rule,
/// so "knives" over /naɪf/ comes out /naɪvz/ rather than /naɪfs/. A base not
/// ending in /f/ passes through unchanged.
fn soften_final_f(base: &Transcription) -> Option<Transcription> {
    match base.last_sound() {
        None => None,
        Some(sound) if sound.as_str() == "f" => base.map_interior(|interior| {
            match interior.rfind('f') {
                Some(at) => {
                    let mut out = String::with_capacity(interior.len());
                    out.push_str(&interior[..at]);
                    out.push('v');
                    out.push_str(&interior[at + 'f'.len_utf8()..]);
                    out
                }
                None => interior.to_string(),
            }
        }),
        Some(_) => Some(base.clone()),
    }
}
