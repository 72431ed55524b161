/*! IPA annotation for English words.

Resolves the pronunciation of a surface word against a phonemic dictionary,
falling back to rule-based inflection handling when the word itself is not
listed: the likely suffix is detected from the spelling, candidate base forms
are reconstructed and looked up, and the inflected transcription is derived
from the base by phonological rule (voicing assimilation, epenthesis).

# Usage example

```
use phonolex::resolver::Resolver;
use phonolex::store::memory::MemoryStore;

let store = MemoryStore::from_entries(vec![("cat", "/kæt/")]);
let resolver = Resolver::new(store);

let result = resolver.resolve("cats");
assert_eq!(result.transcription.unwrap().as_str(), "/kæts/");
```

Further examples of how to use the phonolex library can be found in
`phonolex-bin` in the same repository.
*/

#![warn(missing_docs)]

pub mod inflect;
pub mod remote;
pub mod resolver;
pub mod store;
pub mod tokenizer;
pub mod transcription;

pub(crate) mod constants;
