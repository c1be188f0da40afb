//! Word sets and the ordering every writer emits them in.

use std::cmp::Ordering;

use ahash::AHashSet;

/// A set of dictionary words.
///
/// Uniqueness is the only invariant; iteration order is unspecified. Words are
/// stored verbatim, so `"Word"` and `"word"` are distinct entries.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: AHashSet<String>,
}

impl WordSet {
    /// Create a new empty word set.
    pub fn new() -> Self {
        WordSet {
            words: AHashSet::new(),
        }
    }

    /// Insert a word, returning `true` if it was not present yet.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        self.words.insert(word.into())
    }

    /// Union another set into this one.
    pub fn extend_from(&mut self, other: WordSet) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in writer order: case-insensitive ascending, ties broken by the
    /// original bytes. See [`compare_words`].
    pub fn sorted(&self) -> Vec<&str> {
        // Fold each word once instead of once per comparison.
        let mut keyed: Vec<(String, &str)> =
            self.iter().map(|word| (fold_case(word), word)).collect();
        keyed.sort_unstable_by(|a, b| compare_folded(&a.0, a.1, &b.0, b.1));
        keyed.into_iter().map(|(_, word)| word).collect()
    }
}

impl PartialEq for WordSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|word| other.contains(word))
    }
}

impl Eq for WordSet {}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for WordSet {
    type Item = String;
    type IntoIter = <AHashSet<String> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Case-fold a word for comparison.
///
/// The rule is fixed and platform independent: the Unicode default lowercase
/// mapping, then the full-folding expansions lowercase leaves alone (sharp s,
/// long s, final sigma and the Latin ligatures).
pub fn fold_case(word: &str) -> String {
    let mut folded = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            'ß' | 'ẞ' => folded.push_str("ss"),
            'ſ' => folded.push('s'),
            'ς' => folded.push('σ'),
            'ﬀ' => folded.push_str("ff"),
            'ﬁ' => folded.push_str("fi"),
            'ﬂ' => folded.push_str("fl"),
            'ﬃ' => folded.push_str("ffi"),
            'ﬄ' => folded.push_str("ffl"),
            'ﬅ' | 'ﬆ' => folded.push_str("st"),
            _ => folded.extend(c.to_lowercase()),
        }
    }
    folded
}

/// Total order used by every writer.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    compare_folded(&fold_case(a), a, &fold_case(b), b)
}

/// Folded forms first, original bytes on ties.
fn compare_folded(a_folded: &str, a: &str, b_folded: &str, b: &str) -> Ordering {
    a_folded
        .cmp(b_folded)
        .then_with(|| a.as_bytes().cmp(b.as_bytes()))
}
