use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Maximal runs of ASCII letters; length filtering happens after matching.
static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("letter-run pattern is valid"));

/// Occurrence counter that remembers the order in which words were first seen.
#[derive(Debug, Default)]
pub struct WordCounter {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordCounter {
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.order[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.order.len());
                self.order.push((word.to_string(), 1));
            }
        }
    }

    /// The `n` most frequent words, ties kept in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.order.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Most common alphabetic words across `texts`, formatted as `"word (count)"`.
///
/// Texts are case-folded, then split into runs of ASCII letters. Digits,
/// punctuation and non-ASCII letters all end a run; runs shorter than
/// `min_length` letters are ignored.
pub fn common_words<'a, I>(texts: I, min_length: usize, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counter = WordCounter::default();

    for text in texts {
        let folded = text.to_lowercase();
        for token in LETTER_RUN.find_iter(&folded) {
            if token.len() >= min_length {
                counter.add(&token.as_str().to_ascii_lowercase());
            }
        }
    }

    counter
        .most_common(limit)
        .into_iter()
        .map(|(word, count)| format!("{} ({})", word, count))
        .collect()
}
