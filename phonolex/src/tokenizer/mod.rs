/*! Word tokenization for annotation.

Splits running text into words and separators. A word is a maximal run of
alphabetic characters, with apostrophes and hyphens allowed between letters
("don't", "well-known"). Word-bound iteration is lossless: concatenating the
tokens reproduces the input, which lets an annotator re-emit text with
transcriptions spliced in after each word.
*/

/// Tokenization methods on text.
pub trait Tokenize {
    /// Iterates `(byte_index, word)` pairs, words only.
    fn word_indices(&self) -> Words<'_>;

    /// Iterates `(byte_index, token)` pairs over words and separators alike.
    fn word_bound_indices(&self) -> WordBounds<'_>;
}

impl Tokenize for str {
    fn word_indices(&self) -> Words<'_> {
        Words {
            bounds: self.word_bound_indices(),
        }
    }

    fn word_bound_indices(&self) -> WordBounds<'_> {
        WordBounds { text: self, pos: 0 }
    }
}

/// Iterator over words and separators, in input order.
pub struct WordBounds<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for WordBounds<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<(usize, &'a str)> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;

        let len = if first.is_alphabetic() {
            word_len(rest)
        } else {
            separator_len(rest)
        };

        let start = self.pos;
        self.pos += len;
        Some((start, &rest[..len]))
    }
}

/// Iterator over the words of a text.
pub struct Words<'a> {
    bounds: WordBounds<'a>,
}

impl<'a> Iterator for Words<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<(usize, &'a str)> {
        self.bounds
            .by_ref()
            .find(|(_, token)| token.chars().next().map_or(false, |ch| ch.is_alphabetic()))
    }
}

/// Byte length of the word at the start of `s` (first char is alphabetic).
fn word_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.char_indices().peekable();

    while let Some((at, ch)) = chars.next() {
        if ch.is_alphabetic() {
            len = at + ch.len_utf8();
            continue;
        }

        // Connectors only join two letters.
        if ch == '\'' || ch == '-' {
            if let Some(&(_, next)) = chars.peek() {
                if next.is_alphabetic() {
                    len = at + ch.len_utf8();
                    continue;
                }
            }
        }

        break;
    }

    len
}

/// Byte length of the separator run at the start of `s`.
fn separator_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(at, ch)| at > 0 && ch.is_alphabetic())
        .map(|(at, _)| at)
        .unwrap_or_else(|| s.len())
}
