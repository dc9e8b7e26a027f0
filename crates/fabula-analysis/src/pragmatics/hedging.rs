//! Hedging vocabulary per language.

use fabula_core::types::{Language, Token};

const ITALIAN: &[&str] = &[
    "credo",
    "penso",
    "forse",
    "magari",
    "sembra",
    "parrebbe",
    "apparentemente",
    "in un certo senso",
    "tipo",
    "cioè",
    "insomma",
];

const ENGLISH: &[&str] = &[
    "i think",
    "i guess",
    "maybe",
    "perhaps",
    "probably",
    "apparently",
    "seems",
    "sort of",
    "kind of",
    "somewhat",
    "arguably",
];

/// Hedging terms, each stored as a lower-cased word sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HedgingLexicon {
    terms: Vec<Vec<String>>,
}

impl HedgingLexicon {
    /// Built-in list for `language`.
    pub fn for_language(language: Language) -> Self {
        let list = match language {
            Language::Italian => ITALIAN,
            Language::English => ENGLISH,
        };
        let mut lexicon = Self::default();
        lexicon.extend(list.iter().copied());
        lexicon
    }

    /// Add terms; blanks and duplicates are skipped.
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let words: Vec<String> = term
                .as_ref()
                .split_whitespace()
                .map(str::to_lowercase)
                .collect();
            if !words.is_empty() && !self.terms.contains(&words) {
                self.terms.push(words);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms present in `tokens`, in lexicon order. Multi-word terms must
    /// appear as consecutive word tokens; punctuation breaks a sequence.
    pub fn find(&self, tokens: &[Token]) -> Vec<String> {
        let words: Vec<Option<String>> = tokens
            .iter()
            .map(|t| (!t.is_punctuation()).then(|| t.text.to_lowercase()))
            .collect();
        self.terms
            .iter()
            .filter(|term| {
                words.windows(term.len()).any(|window| {
                    window
                        .iter()
                        .zip(term.iter())
                        .all(|(word, expected)| word.as_deref() == Some(expected.as_str()))
                })
            })
            .map(|term| term.join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<Token> {
        text.split_whitespace().map(|w| Token::word(w)).collect()
    }

    #[test]
    fn test_single_and_multi_word_terms() {
        let lexicon = HedgingLexicon::for_language(Language::Italian);
        let found = lexicon.find(&words("Forse il re aveva in un certo senso ragione"));
        assert_eq!(found, vec!["forse", "in un certo senso"]);
    }

    #[test]
    fn test_punctuation_breaks_sequence() {
        let lexicon = HedgingLexicon::for_language(Language::English);
        let tokens = vec![Token::word("sort"), Token::punctuation(","), Token::word("of")];
        assert!(lexicon.find(&tokens).is_empty());
    }

    #[test]
    fn test_extend_skips_duplicates_and_blanks() {
        let mut lexicon = HedgingLexicon::for_language(Language::Italian);
        let before = lexicon.len();
        lexicon.extend(["Forse", "  ", "a quanto pare"]);
        assert_eq!(lexicon.len(), before + 1);
        assert_eq!(
            lexicon.find(&words("A quanto pare no")),
            vec!["a quanto pare"]
        );
    }
}
