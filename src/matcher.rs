// 🎯 Provider Matching - filter and rank providers for a tourist
//
// score = rating
//       + 100 when the provider speaks the preferred language
//       + 0.1 per review, capped at 1.0
//
// The language bonus is larger than any rating spread, so a language match
// always outranks a non-match that passes the same filters.

use crate::config::matching::{LANGUAGE_MATCH_BONUS, REVIEW_BONUS_CAP, REVIEW_BONUS_PER_REVIEW};
use crate::entities::Provider;
use crate::text::title_case;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    pub preferred_language: Option<String>,

    /// Case-insensitive substring of the service label
    pub service: Option<String>,

    pub only_available: bool,
}

impl MatchQuery {
    /// Blank strings count as "no preference"
    pub fn new(preferred_language: Option<&str>, service: Option<&str>, only_available: bool) -> Self {
        let non_blank = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        MatchQuery {
            preferred_language: non_blank(preferred_language),
            service: non_blank(service),
            only_available,
        }
    }

    /// Same preferences without the availability requirement
    pub fn widened(&self) -> Self {
        MatchQuery { only_available: false, ..self.clone() }
    }

    pub fn accepts(&self, provider: &Provider) -> bool {
        if self.only_available && !provider.available {
            return false;
        }
        match &self.service {
            Some(service) => provider.service.to_lowercase().contains(&service.to_lowercase()),
            None => true,
        }
    }
}

impl Default for MatchQuery {
    fn default() -> Self {
        MatchQuery { preferred_language: None, service: None, only_available: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedProvider<'a> {
    pub provider: &'a Provider,
    pub score: f64,
}

/// Composite ranking score of one provider
pub fn score_provider(provider: &Provider, preferred_language: Option<&str>) -> f64 {
    let mut score = provider.rating;

    if let Some(lang) = preferred_language {
        if title_case(&provider.language) == title_case(lang) {
            score += LANGUAGE_MATCH_BONUS;
        }
    }

    score += (provider.reviews.len() as f64 * REVIEW_BONUS_PER_REVIEW).min(REVIEW_BONUS_CAP);
    score
}

/// Providers passing the filters, highest score first.
///
/// Equal scores keep their original order. An empty result is not an error;
/// callers may retry with `query.widened()`.
pub fn match_providers<'a>(providers: &'a [Provider], query: &MatchQuery) -> Vec<RankedProvider<'a>> {
    let mut ranked: Vec<RankedProvider<'a>> = providers
        .iter()
        .filter(|p| query.accepts(p))
        .map(|provider| RankedProvider {
            provider,
            score: score_provider(provider, query.preferred_language.as_deref()),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    log::debug!(
        "Matched {} of {} providers for {:?}",
        ranked.len(),
        providers.len(),
        query
    );
    ranked
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{default_providers, Review};
    use chrono::Utc;

    fn ids(ranked: &[RankedProvider]) -> Vec<String> {
        ranked.iter().map(|r| r.provider.id.clone()).collect()
    }

    #[test]
    fn test_rank_by_rating_without_preferences() {
        let providers = default_providers();
        let ranked = match_providers(&providers, &MatchQuery::default());

        assert_eq!(ids(&ranked), vec!["p2", "p1", "p3"]);
        assert_eq!(ranked[0].score, 4.9);
    }

    #[test]
    fn test_language_match_dominates() {
        let providers = default_providers();
        let query = MatchQuery::new(Some(" spanish "), None, true);
        let ranked = match_providers(&providers, &query);

        assert_eq!(ranked[0].provider.id, "p3");
        assert!((ranked[0].score - 104.7).abs() < 1e-9);
    }

    #[test]
    fn test_language_match_beats_any_rating() {
        let mut providers = vec![
            Provider::new("a", "A", "Guide", "English", 5.0),
            Provider::new("b", "B", "Guide", "telugu", 1.0),
        ];
        for _ in 0..20 {
            providers[0].reviews.push(Review { rating: 5.0, comment: String::new(), ts: Utc::now() });
        }

        let ranked = match_providers(&providers, &MatchQuery::new(Some("TELUGU"), None, true));
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_service_filter_is_case_insensitive_substring() {
        let providers = default_providers();
        let ranked = match_providers(&providers, &MatchQuery::new(None, Some("TOUR"), true));

        assert_eq!(ids(&ranked), vec!["p2", "p3"]);
        assert!(ranked.iter().all(|r| r.provider.service.to_lowercase().contains("tour")));
    }

    #[test]
    fn test_availability_filter_and_widening() {
        let mut providers = default_providers();
        providers[0].available = false;

        let query = MatchQuery::new(None, Some("taxi"), true);
        assert!(match_providers(&providers, &query).is_empty());

        let widened = match_providers(&providers, &query.widened());
        assert_eq!(ids(&widened), vec!["p1"]);
    }

    #[test]
    fn test_review_bonus_is_capped() {
        let mut provider = Provider::new("x", "X", "Taxi", "French", 4.0);
        assert_eq!(score_provider(&provider, None), 4.0);

        for _ in 0..3 {
            provider.reviews.push(Review { rating: 4.0, comment: String::new(), ts: Utc::now() });
        }
        assert!((score_provider(&provider, None) - 4.3).abs() < 1e-9);

        for _ in 0..20 {
            provider.reviews.push(Review { rating: 4.0, comment: String::new(), ts: Utc::now() });
        }
        assert_eq!(score_provider(&provider, None), 5.0);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let providers = vec![
            Provider::new("first", "F", "Taxi", "French", 4.5),
            Provider::new("second", "S", "Taxi", "French", 4.5),
            Provider::new("third", "T", "Taxi", "French", 4.5),
        ];
        let ranked = match_providers(&providers, &MatchQuery::default());
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_blank_preferences_are_ignored() {
        let query = MatchQuery::new(Some("  "), Some(""), false);
        assert_eq!(query.preferred_language, None);
        assert_eq!(query.service, None);
    }
}
