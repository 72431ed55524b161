/*! Inflectional suffix handling.

Detection works on spelling alone and never touches the dictionary; it
proposes the base form(s) a surface word was most likely inflected from.
Transformation works on transcriptions alone and derives the inflected
pronunciation from the base form's pronunciation. The resolver wires the two
together around store lookups.
*/

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub mod detect;
pub mod transform;

/// Which inflectional suffix a surface word carries, and therefore which
/// phonological rule derives its transcription from the base form's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixRule {
    /// "-ity" nominalization ("capability").
    NounIty,
    /// "-ly" adverb ("happily").
    AdverbLy,
    /// "-est" superlative ("biggest").
    Superlative,
    /// "-er" comparative ("bigger").
    Comparative,
    /// "-ing" gerund/participle ("running").
    Gerund,
    /// "-ed" past tense ("walked").
    PastTense,
    /// "-y" adjective ("noisy").
    AdjectiveY,
    /// "-s"/"-es" plural or third person ("cats", "boxes").
    Plural,
    /// "-ves" plural over an "f"/"fe" stem ("knives"); the transform
    /// additionally softens the base-final /f/ to /v/.
    PluralVes,
}

/// A reconstructed base form proposed by a detector.
///
/// Created per detection call and consumed immediately by the resolver;
/// never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InflectionCandidate {
    /// The most probable dictionary spelling of the base form.
    pub base: SmolStr,
    /// The rule that maps the base transcription to the inflected one.
    pub rule: SuffixRule,
    /// A competing reconstruction, tried only when `base` misses.
    pub alternative: Option<SmolStr>,
}
