// 🌐 Language Detection - advisory guess of the language a phrase is in
//
// Two implementations behind one trait:
// - StatisticalDetector: whatlang trigram model (feature "langdetect")
// - HeuristicDetector: marker-word containment, always available
//
// Detection never fails; anything unrecognised is `Unknown`.

use crate::config::DetectorMode;

// ============================================================================
// DETECTED LANGUAGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedLanguage {
    French,
    Spanish,
    Telugu,
    English,
    Unknown,
}

impl DetectedLanguage {
    /// Label as used by providers and the phrasebook, None for Unknown
    pub fn label(&self) -> Option<&'static str> {
        match self {
            DetectedLanguage::French => Some("French"),
            DetectedLanguage::Spanish => Some("Spanish"),
            DetectedLanguage::Telugu => Some("Telugu"),
            DetectedLanguage::English => Some("English"),
            DetectedLanguage::Unknown => None,
        }
    }

    /// Map an ISO 639 code (two or three letters)
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "fr" | "fra" | "fre" => DetectedLanguage::French,
            "es" | "spa" => DetectedLanguage::Spanish,
            "te" | "tel" => DetectedLanguage::Telugu,
            "en" | "eng" => DetectedLanguage::English,
            _ => DetectedLanguage::Unknown,
        }
    }
}

// ============================================================================
// DETECTOR CAPABILITY
// ============================================================================

pub trait LanguageDetector {
    fn name(&self) -> &'static str;

    fn detect(&self, text: &str) -> DetectedLanguage;
}

/// Marker words per language; the first language with a hit wins
const MARKERS: &[(DetectedLanguage, &[&str])] = &[
    (DetectedLanguage::French, &["bonjour", "merci", "où", "combien"]),
    (DetectedLanguage::Spanish, &["hola", "gracias", "dónde", "cuánto"]),
    (DetectedLanguage::Telugu, &["namaskaram", "dhanyavadalu", "enta", "ekkada"]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicDetector;

impl LanguageDetector for HeuristicDetector {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn detect(&self, text: &str) -> DetectedLanguage {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return DetectedLanguage::Unknown;
        }

        MARKERS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map(|(lang, _)| *lang)
            .unwrap_or(DetectedLanguage::Unknown)
    }
}

#[cfg(feature = "langdetect")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StatisticalDetector;

#[cfg(feature = "langdetect")]
impl LanguageDetector for StatisticalDetector {
    fn name(&self) -> &'static str {
        "whatlang"
    }

    fn detect(&self, text: &str) -> DetectedLanguage {
        let text = text.trim();
        if text.is_empty() {
            return DetectedLanguage::Unknown;
        }

        match whatlang::detect(text) {
            Some(info) => DetectedLanguage::from_code(info.lang().code()),
            None => {
                log::debug!("whatlang could not classify {:?}", text);
                DetectedLanguage::Unknown
            }
        }
    }
}

/// Pick the detector once at startup so callers never branch on availability
pub fn select_detector(mode: DetectorMode) -> Box<dyn LanguageDetector> {
    match mode {
        DetectorMode::Heuristic => Box::new(HeuristicDetector),
        DetectorMode::Auto => default_detector(),
    }
}

#[cfg(feature = "langdetect")]
fn default_detector() -> Box<dyn LanguageDetector> {
    Box::new(StatisticalDetector)
}

#[cfg(not(feature = "langdetect"))]
fn default_detector() -> Box<dyn LanguageDetector> {
    Box::new(HeuristicDetector)
}

// ============================================================================
// TESTS
// ============================================================================
