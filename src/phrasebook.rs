// 📖 Phrasebook - static canonical phrases with per-language translations
//
// Lookup is fuzzy: the input is normalized and matched against the phrase
// keys by similarity ratio, so "thank u!" still resolves to "thank you".

use crate::config::phrases::{PRIMARY_CUTOFF, SUGGESTION_CUTOFF, SUGGESTION_LIMIT};
use crate::text::{close_matches, normalize_text, title_case};

#[derive(Debug, Clone, PartialEq)]
pub struct PhraseEntry {
    pub phrase: &'static str,
    pub translations: &'static [(&'static str, &'static str)],
}

impl PhraseEntry {
    pub fn translation(&self, language: &str) -> Option<&'static str> {
        self.translations
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, text)| *text)
    }

    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.translations.iter().map(|(lang, _)| *lang)
    }
}

const BUILTIN: &[PhraseEntry] = &[
    PhraseEntry {
        phrase: "hello",
        translations: &[("French", "Bonjour"), ("Spanish", "Hola"), ("Telugu", "Namaskaram")],
    },
    PhraseEntry {
        phrase: "thank you",
        translations: &[("French", "Merci"), ("Spanish", "Gracias"), ("Telugu", "Dhanyavadalu")],
    },
    PhraseEntry {
        phrase: "how much",
        translations: &[("French", "Combien"), ("Spanish", "Cuánto"), ("Telugu", "Enta")],
    },
    PhraseEntry {
        phrase: "where is",
        translations: &[("French", "Où est"), ("Spanish", "Dónde está"), ("Telugu", "Ekkada undi")],
    },
    PhraseEntry {
        phrase: "i need a taxi",
        translations: &[
            ("French", "J'ai besoin d'un taxi"),
            ("Spanish", "Necesito un taxi"),
            ("Telugu", "Naku taxi kavali"),
        ],
    },
];

// ============================================================================
// TRANSLATION OUTCOME
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// Phrase resolved and the language is in the book
    Translated {
        phrase: &'static str,
        language: String,
        text: &'static str,
    },

    /// Phrase resolved but there is no entry for this language
    LanguageUnavailable { phrase: &'static str, language: String },

    /// Nothing close enough; nearest phrases (may be empty)
    NoMatch { suggestions: Vec<&'static str> },
}

// ============================================================================
// PHRASEBOOK
// ============================================================================

#[derive(Debug, Clone)]
pub struct Phrasebook {
    entries: &'static [PhraseEntry],
}

impl Phrasebook {
    pub fn builtin() -> Self {
        Phrasebook { entries: BUILTIN }
    }

    pub fn phrases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.phrase)
    }

    /// Closest entry with similarity >= 0.6
    pub fn lookup(&self, phrase: &str) -> Option<&'static PhraseEntry> {
        let normalized = normalize_text(phrase);
        let entries: &'static [PhraseEntry] = self.entries;
        let best = close_matches(&normalized, self.phrases(), 1, PRIMARY_CUTOFF);
        best.first()
            .and_then(|key| entries.iter().find(|e| e.phrase == *key))
    }

    /// Up to three "did you mean" phrases with similarity >= 0.4
    pub fn suggest(&self, phrase: &str) -> Vec<&'static str> {
        let normalized = normalize_text(phrase);
        close_matches(&normalized, self.phrases(), SUGGESTION_LIMIT, SUGGESTION_CUTOFF)
    }

    pub fn translate(&self, phrase: &str, target_language: &str) -> Translation {
        let entry = match self.lookup(phrase) {
            Some(entry) => entry,
            None => {
                log::debug!("No phrase match for {:?}", phrase);
                return Translation::NoMatch { suggestions: self.suggest(phrase) };
            }
        };

        let language = title_case(target_language);
        match entry.translation(&language) {
            Some(text) => Translation::Translated { phrase: entry.phrase, language, text },
            None => Translation::LanguageUnavailable { phrase: entry.phrase, language },
        }
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_hello_french() {
        let book = Phrasebook::builtin();
        assert_eq!(
            book.translate("hello", "French"),
            Translation::Translated {
                phrase: "hello",
                language: "French".to_string(),
                text: "Bonjour",
            }
        );
    }

    #[test]
    fn test_translate_normalizes_inputs() {
        let book = Phrasebook::builtin();

        match book.translate("  Thank u!! ", " spanish ") {
            Translation::Translated { phrase, language, text } => {
                assert_eq!(phrase, "thank you");
                assert_eq!(language, "Spanish");
                assert_eq!(text, "Gracias");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_translate_unknown_language() {
        let book = Phrasebook::builtin();
        assert_eq!(
            book.translate("hello", "Klingon"),
            Translation::LanguageUnavailable { phrase: "hello", language: "Klingon".to_string() }
        );
    }

    #[test]
    fn test_translate_no_match() {
        let book = Phrasebook::builtin();
        assert_eq!(
            book.translate("xyzzy", "French"),
            Translation::NoMatch { suggestions: vec![] }
        );
    }

    #[test]
    fn test_no_match_carries_suggestions() {
        let book = Phrasebook::builtin();
        assert_eq!(
            book.translate("how", "French"),
            Translation::NoMatch { suggestions: vec!["how much", "hello"] }
        );
    }

    #[test]
    fn test_lookup_and_entry_helpers() {
        let book = Phrasebook::builtin();
        let entry = book.lookup("Where is?").unwrap();

        assert_eq!(entry.phrase, "where is");
        assert_eq!(entry.translation("Spanish"), Some("Dónde está"));
        assert_eq!(entry.translation("German"), None);
        assert_eq!(entry.languages().collect::<Vec<_>>(), vec!["French", "Spanish", "Telugu"]);
        assert_eq!(book.phrases().count(), 5);
    }

    #[test]
    fn test_lookup_near_misses() {
        let book = Phrasebook::builtin();

        assert_eq!(book.lookup("a the taxi").map(|e| e.phrase), Some("i need a taxi"));
        assert!(book.lookup("the cab taxi").is_none());
        assert_eq!(book.suggest("uoho"), vec!["hello"]);
    }
}
