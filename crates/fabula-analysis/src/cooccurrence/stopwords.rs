//! Stopword sets applied before co-occurrence windowing.

use fabula_core::types::{FxHashSet, Language};

const ITALIAN: &[&str] = &[
    "a", "ad", "al", "alla", "alle", "allo", "ai", "agli", "anche", "che", "chi", "ci", "come",
    "con", "da", "dal", "dalla", "dei", "del", "della", "delle", "dello", "di", "e", "ed", "è",
    "gli", "ha", "hanno", "i", "il", "in", "io", "la", "le", "lei", "li", "lo", "loro", "lui",
    "ma", "mi", "ne", "nei", "nel", "nella", "noi", "non", "o", "per", "più", "quella", "quello",
    "se", "si", "sono", "su", "sua", "sue", "suo", "sul", "sulla", "ti", "tra", "tu", "un",
    "una", "uno", "vi", "voi",
];

const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has", "have",
    "he", "her", "his", "i", "in", "is", "it", "its", "of", "on", "or", "she", "so", "that",
    "the", "their", "them", "they", "this", "to", "was", "we", "were", "with", "you",
];

/// Lower-cased words excluded from analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Built-in list for `language`.
    pub fn for_language(language: Language) -> Self {
        let list = match language {
            Language::Italian => ITALIAN,
            Language::English => ENGLISH,
        };
        Self::from_words(list.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Add words; blanks are skipped.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }

    /// Expects an already lower-cased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
