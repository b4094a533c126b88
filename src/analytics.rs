// 📊 Analytics - read-side aggregation over bookings and providers
//
// Recomputed on every call; nothing is stored.

use crate::entities::{round2, Booking, Provider};

// ============================================================================
// FREQUENCY TABLE
// ============================================================================

/// Counts per key in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable { entries: Vec::new() }
    }

    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Top `n` keys by count; equal counts keep first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for key in iter {
            table.add(key);
        }
        table
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_bookings: usize,
    pub by_language: FrequencyTable,
    pub by_service: FrequencyTable,
    pub by_provider: FrequencyTable,

    /// Mean provider rating (2 decimals), None without providers
    pub average_rating: Option<f64>,
}

/// None when there are no bookings yet
pub fn summarize(bookings: &[Booking], providers: &[Provider]) -> Option<AnalyticsSummary> {
    if bookings.is_empty() {
        return None;
    }

    Some(AnalyticsSummary {
        total_bookings: bookings.len(),
        by_language: bookings.iter().map(|b| b.language.as_str()).collect(),
        by_service: bookings.iter().map(|b| b.service.as_str()).collect(),
        by_provider: bookings.iter().map(|b| b.provider_name.as_str()).collect(),
        average_rating: average_rating(providers),
    })
}

pub fn average_rating(providers: &[Provider]) -> Option<f64> {
    if providers.is_empty() {
        return None;
    }
    let total: f64 = providers.iter().map(|p| p.rating).sum();
    Some(round2(total / providers.len() as f64))
}

// ============================================================================
// TESTS
// ============================================================================
