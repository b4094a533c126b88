// 🖥️ Console front end - numbered menu over line-oriented input/output
//
// Generic over BufRead/Write so whole sessions can be scripted in tests.
// Bad input aborts the current flow back to the menu; end of input ends the
// session like an interrupt would.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::analytics::{self, AnalyticsSummary};
use crate::config;
use crate::entities::Provider;
use crate::error::TravelError;
use crate::export::export_bookings_csv;
use crate::language::LanguageDetector;
use crate::maps::{map_url, UrlOpener};
use crate::matcher::{match_providers, MatchQuery};
use crate::notify::Notification;
use crate::phrasebook::{Phrasebook, Translation};
use crate::reviews::validate_rating;
use crate::store::TravelStore;
use crate::text::title_case;

/// Raised by `prompt` when stdin is exhausted
#[derive(Debug)]
struct EndOfInput;

impl std::fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "end of input")
    }
}

impl std::error::Error for EndOfInput {}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<EndOfInput>().is_some()
}

/// "3" -> Some(3); anything that is not all digits -> None
fn parse_number(choice: &str) -> Option<usize> {
    if choice.is_empty() || !choice.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(choice.parse().unwrap_or(usize::MAX))
}

fn yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

pub struct Console<'a, R, W> {
    store: &'a mut TravelStore,
    phrasebook: &'a Phrasebook,
    detector: &'a dyn LanguageDetector,
    opener: &'a dyn UrlOpener,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(
        store: &'a mut TravelStore,
        phrasebook: &'a Phrasebook,
        detector: &'a dyn LanguageDetector,
        opener: &'a dyn UrlOpener,
        input: R,
        output: W,
    ) -> Self {
        Console { store, phrasebook, detector, opener, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Main menu loop; returns when the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        for recovered in self.store.recovered_files().to_vec() {
            match &recovered.backup {
                Some(backup) => writeln!(
                    self.output,
                    "⚠️  Could not read {}; started from defaults (original kept as {}).",
                    recovered.path.display(),
                    backup.display()
                )?,
                None => writeln!(
                    self.output,
                    "⚠️  Could not read {}; started from defaults. It will not be overwritten.",
                    recovered.path.display()
                )?,
            }
        }

        loop {
            writeln!(self.output, "\n🌍 SMART TRAVEL ASSISTANT")?;
            writeln!(self.output, "1. Translate Message")?;
            writeln!(self.output, "2. View Local Providers")?;
            writeln!(self.output, "3. Book a Service")?;
            writeln!(self.output, "4. View Bookings")?;
            writeln!(self.output, "5. Admin")?;
            writeln!(self.output, "6. Exit")?;

            let result = match self.prompt("Choose option: ") {
                Ok(option) => match option.as_str() {
                    "1" => self.translate_flow(),
                    "2" => self.show_all_providers(),
                    "3" => self.book_flow(),
                    "4" => self.view_bookings(),
                    "5" => self.admin_menu(),
                    "6" => {
                        writeln!(self.output, "Thank you for using Smart Travel Assistant!")?;
                        return Ok(());
                    }
                    _ => writeln!(self.output, "Invalid option. Try again.").map_err(Into::into),
                },
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => {
                    writeln!(self.output, "\nExiting. Goodbye!")?;
                    return Ok(());
                }
                Err(e) => {
                    log::error!("{:#}", e);
                    writeln!(self.output, "❌ Error: {:#}", e)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        Ok(line.trim().to_string())
    }

    // ========================================================================
    // TRANSLATE
    // ========================================================================

    fn translate_flow(&mut self) -> Result<()> {
        let phrase = self.prompt("Enter message (e.g., hello / thank you / how much / where is): ")?;
        if phrase.is_empty() {
            writeln!(self.output, "No input provided.")?;
            return Ok(());
        }

        let detected = self.detector.detect(&phrase).label();
        if let Some(lang) = detected {
            writeln!(self.output, "Detected language: {}", lang)?;
        }

        let mut target = self.prompt(
            "Translate to (French / Spanish / Telugu) or press Enter to use detected language: ",
        )?;
        if target.is_empty() {
            match detected {
                Some(lang) => target = lang.to_string(),
                None => {
                    writeln!(self.output, "No target language given.")?;
                    return Ok(());
                }
            }
        }

        match self.phrasebook.translate(&phrase, &target) {
            Translation::Translated { phrase, language, text } => {
                writeln!(self.output, "\nTranslated ({} → {}): {}", phrase, language, text)?;
            }
            Translation::LanguageUnavailable { phrase, language } => {
                writeln!(self.output, "\nNo translation for '{}' in {}.", phrase, language)?;
            }
            Translation::NoMatch { suggestions } if !suggestions.is_empty() => {
                writeln!(
                    self.output,
                    "\nCould not find an exact phrase. Did you mean: {}",
                    suggestions.join(", ")
                )?;
            }
            Translation::NoMatch { .. } => {
                writeln!(self.output, "\nTranslation not available in demo version.")?;
            }
        }
        Ok(())
    }

    // ========================================================================
    // PROVIDERS
    // ========================================================================

    fn write_providers(&mut self, providers: &[Provider]) -> Result<()> {
        writeln!(self.output, "\nAvailable Local Service Providers")?;
        for (i, p) in providers.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} - {} [{}] ⭐{} | {}",
                i + 1,
                p.name,
                p.service,
                p.language,
                p.rating,
                p.availability_label()
            )?;
        }
        Ok(())
    }

    fn show_all_providers(&mut self) -> Result<()> {
        let providers = self.store.providers().to_vec();
        self.write_providers(&providers)
    }

    // ========================================================================
    // BOOK
    // ========================================================================

    fn book_flow(&mut self) -> Result<()> {
        let name = self.prompt("Enter your name: ")?;
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(());
        }

        let phone = self.prompt("Phone (optional, for mock notification): ")?;
        let phone = Some(phone).filter(|p| !p.is_empty());

        let language = title_case(&self.prompt("Preferred language (optional): ")?);
        let language = Some(language).filter(|l| !l.is_empty());

        let service = self
            .prompt("What service do you want (taxi / tour / city) or leave blank for any: ")?
            .to_lowercase();

        let query = MatchQuery::new(language.as_deref(), Some(service.as_str()), true);
        let mut matched: Vec<Provider> = match_providers(self.store.providers(), &query)
            .into_iter()
            .map(|r| r.provider.clone())
            .collect();

        if matched.is_empty() {
            writeln!(
                self.output,
                "No immediate providers match your preferences. Showing all providers (including busy)."
            )?;
            matched = match_providers(self.store.providers(), &query.widened())
                .into_iter()
                .map(|r| r.provider.clone())
                .collect();
        }

        if matched.is_empty() {
            writeln!(self.output, "No providers offer that service.")?;
            return Ok(());
        }

        self.write_providers(&matched)?;

        let choice = self.prompt("Select provider number to book (or 'c' to cancel): ")?;
        if choice.eq_ignore_ascii_case("c") {
            writeln!(self.output, "Booking cancelled.")?;
            return Ok(());
        }

        let index = match parse_number(&choice) {
            Some(n) => n,
            None => {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                return Ok(());
            }
        };
        let provider = match index.checked_sub(1).and_then(|i| matched.get(i)) {
            Some(p) => p.clone(),
            None => {
                writeln!(self.output, "Invalid selection.")?;
                return Ok(());
            }
        };

        if !provider.available {
            writeln!(self.output, "Provider is currently unavailable ({}).", provider.availability_label())?;
            let schedule = self.prompt("Schedule for next available time? (y/n): ")?;
            if !yes(&schedule) {
                writeln!(self.output, "Booking cancelled.")?;
                return Ok(());
            }
            if let Some(slot) = self.store.schedule_next_available(&provider.id)? {
                writeln!(self.output, "Scheduled for {}.", slot.format("%Y-%m-%d %H:%M UTC"))?;
            }
        }

        let booking = self
            .store
            .create_booking(&name, &provider.id, language.as_deref(), phone.as_deref())?;

        writeln!(self.output, "\nBooking Confirmed!")?;
        writeln!(self.output, "Booking ID: {}", booking.id)?;
        writeln!(self.output, "Tourist: {}", booking.tourist)?;
        writeln!(self.output, "Provider: {}", booking.provider_name)?;
        writeln!(self.output, "Service: {}", booking.service)?;
        writeln!(self.output, "Status: {}", booking.status)?;

        let notification = Notification::new(
            phone.as_deref(),
            format!("Booking {} confirmed with {}", booking.id, provider.name),
        );
        notification.dispatch();
        writeln!(self.output, "\n{}", notification)?;

        let open_map = self.prompt("Open provider location in maps? (y/n): ")?;
        if yes(&open_map) {
            self.open_provider_map(&provider)?;
        }

        let complete = self.prompt("Simulate trip completion now and leave a rating? (y/n): ")?;
        if yes(&complete) {
            self.review_flow(&provider.id)?;
        }
        Ok(())
    }

    fn open_provider_map(&mut self, provider: &Provider) -> Result<()> {
        let location = match &provider.location {
            Some(loc) => loc,
            None => {
                writeln!(self.output, "No location available for this provider.")?;
                return Ok(());
            }
        };

        let url = map_url(location);
        writeln!(self.output, "Opening map: {}", url)?;
        if let Err(e) = self.opener.open(&url) {
            log::warn!("Could not open map: {:#}", e);
        }
        Ok(())
    }

    fn review_flow(&mut self, provider_id: &str) -> Result<()> {
        let answer = self.prompt("Rate your experience (1-5): ")?;
        let rating: f64 = match answer.parse() {
            Ok(r) => r,
            Err(_) => {
                writeln!(self.output, "Invalid rating; skipping.")?;
                return Ok(());
            }
        };
        if validate_rating(rating).is_err() {
            writeln!(self.output, "Rating out of range; skipping.")?;
            return Ok(());
        }

        let comment = self.prompt("Optional comment: ")?;
        match self.store.add_review(provider_id, rating, &comment) {
            Ok(Some(avg)) => writeln!(self.output, "Thanks! Updated provider rating: {}", avg)?,
            Ok(None) => writeln!(self.output, "Provider no longer exists; review skipped.")?,
            Err(e) => match e.downcast_ref::<TravelError>() {
                Some(err) => writeln!(self.output, "{}; skipping.", err)?,
                None => return Err(e),
            },
        }
        Ok(())
    }

    // ========================================================================
    // BOOKINGS
    // ========================================================================

    fn view_bookings(&mut self) -> Result<()> {
        if self.store.bookings().is_empty() {
            writeln!(self.output, "No bookings yet.")?;
            return Ok(());
        }

        writeln!(self.output, "\nAll Bookings")?;
        for b in self.store.bookings() {
            writeln!(
                self.output,
                "- {} | {} → {} | {} | {} | {}",
                b.id,
                b.tourist,
                b.provider_name,
                b.service,
                b.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
                b.status
            )?;
        }
        Ok(())
    }

    // ========================================================================
    // ADMIN
    // ========================================================================

    fn admin_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Admin Menu ===")?;
        writeln!(self.output, "1. Show analytics")?;
        writeln!(self.output, "2. Toggle provider availability")?;
        writeln!(self.output, "3. Show providers")?;
        writeln!(self.output, "4. Export bookings to CSV")?;
        writeln!(self.output, "5. Back")?;

        match self.prompt("Choose: ")?.as_str() {
            "1" => self.show_analytics(),
            "2" => self.toggle_availability_flow(),
            "3" => self.show_all_providers(),
            "4" => self.export_flow(),
            _ => Ok(()),
        }
    }

    fn show_analytics(&mut self) -> Result<()> {
        let summary = match analytics::summarize(self.store.bookings(), self.store.providers()) {
            Some(s) => s,
            None => {
                writeln!(self.output, "\nNo bookings yet; analytics will appear after bookings.")?;
                return Ok(());
            }
        };
        self.write_summary(&summary)
    }

    fn write_summary(&mut self, summary: &AnalyticsSummary) -> Result<()> {
        let top = config::analytics::TOP_N;
        let join = |entries: &[(String, usize)]| {
            entries
                .iter()
                .map(|(k, c)| format!("{} ({})", k, c))
                .collect::<Vec<_>>()
                .join(", ")
        };

        writeln!(self.output, "\n=== Analytics Summary ===")?;
        writeln!(self.output, "Total bookings: {}", summary.total_bookings)?;
        writeln!(self.output, "Bookings by language: {}", join(summary.by_language.entries()))?;
        writeln!(self.output, "Top services: {}", join(&summary.by_service.most_common(top)))?;
        writeln!(self.output, "Top providers: {}", join(&summary.by_provider.most_common(top)))?;
        match summary.average_rating {
            Some(avg) => writeln!(self.output, "Average provider rating: {}", avg)?,
            None => writeln!(self.output, "Average provider rating: n/a")?,
        }
        Ok(())
    }

    fn toggle_availability_flow(&mut self) -> Result<()> {
        self.show_all_providers()?;

        let choice = self.prompt("Select provider number to toggle availability: ")?;
        let index = match parse_number(&choice) {
            Some(n) => n,
            None => {
                writeln!(self.output, "Invalid input.")?;
                return Ok(());
            }
        };
        let provider = match index.checked_sub(1).and_then(|i| self.store.providers().get(i)) {
            Some(p) => p.clone(),
            None => {
                writeln!(self.output, "Invalid selection.")?;
                return Ok(());
            }
        };

        if let Some(available) = self.store.toggle_provider_availability(&provider.id)? {
            writeln!(self.output, "Provider {} availability set to {}.", provider.name, available)?;
        }
        Ok(())
    }

    fn export_flow(&mut self) -> Result<()> {
        let default_path = self.store.paths().default_export_file();
        let answer = self.prompt(&format!("Export file [{}]: ", default_path.display()))?;
        let path = if answer.is_empty() { default_path } else { PathBuf::from(answer) };

        let count = export_bookings_csv(self.store.bookings(), &path)?;
        writeln!(self.output, "Exported {} bookings to {}", count, path.display())?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::temp_paths;
    use crate::language::HeuristicDetector;
    use crate::maps::NoBrowser;
    use std::fs;
    use std::io::Cursor;

    fn run_script(store: &mut TravelStore, script: &str) -> String {
        let book = Phrasebook::builtin();
        let mut console = Console::new(
            store,
            &book,
            &HeuristicDetector,
            &NoBrowser,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_exit() {
        let mut store = TravelStore::open(temp_paths());
        let out = run_script(&mut store, "6\n");
        assert!(out.contains("1. Translate Message"));
        assert!(out.contains("Thank you for using Smart Travel Assistant!"));
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let mut store = TravelStore::open(temp_paths());
        let out = run_script(&mut store, "");
        assert!(out.contains("Exiting. Goodbye!"));

        // mid-flow as well
        let out = run_script(&mut store, "3\nAlice\n");
        assert!(out.contains("Exiting. Goodbye!"));
        assert!(store.bookings().is_empty());
    }

    #[test]
    fn test_invalid_option() {
        let mut store = TravelStore::open(temp_paths());
        let out = run_script(&mut store, "9\n6\n");
        assert!(out.contains("Invalid option. Try again."));
    }

    #[test]
    fn test_translate_flow() {
        let mut store = TravelStore::open(temp_paths());
        let out = run_script(&mut store, "1\nhello\nFrench\n6\n");
        assert!(out.contains("Translated (hello → French): Bonjour"));
    }

    #[test]
    fn test_translate_uses_detected_language() {
        let mut store = TravelStore::open(temp_paths());
        let out = run_script(&mut store, "1\nthank you merci\n\n6\n");
        assert!(out.contains("Detected language: French"));
        assert!(out.contains("Translated (thank you → French): Merci"));
    }

    #[test]
    fn test_translate_unavailable_and_suggestions() {
        let mut store = TravelStore::open(temp_paths());

        let out = run_script(&mut store, "1\nhello\nklingon\n6\n");
        assert!(out.contains("No translation for 'hello' in Klingon."));

        let out = run_script(&mut store, "1\nhow\nFrench\n6\n");
        assert!(out.contains("Did you mean: how much, hello"));

        let out = run_script(&mut store, "1\nxyzzy\nFrench\n6\n");
        assert!(out.contains("Translation not available in demo version."));

        let out = run_script(&mut store, "1\nxyzzy\n\n6\n");
        assert!(out.contains("No target language given."));
    }

    #[test]
    fn test_view_providers() {
        let mut store = TravelStore::open(temp_paths());
        let out = run_script(&mut store, "2\n6\n");
        assert!(out.contains("1. Ravi - Taxi Driver [Telugu] ⭐4.8 | Available"));
        assert!(out.contains("2. Maria - Tour Guide [French] ⭐4.9 | Available"));
    }

    #[test]
    fn test_book_flow() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        let out = run_script(&mut store, "3\nAlice\n555\nfrench\ntour\n1\nn\nn\n6\n");

        assert!(out.contains("Booking Confirmed!"));
        assert!(out.contains("Provider: Maria"));
        assert!(out.contains("[NOTIFICATION MOCK] To: 555 | Message: Booking"));
        assert_eq!(store.bookings().len(), 1);
        let booking = &store.bookings()[0];
        assert_eq!(booking.provider_id, "p2");
        assert_eq!(booking.language, "French");
        assert_eq!(booking.phone.as_deref(), Some("555"));
        assert!(paths.bookings_file.exists());

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_book_flow_language_ranks_first() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        run_script(&mut store, "3\nBob\n\nspanish\ntour\n1\nn\nn\n6\n");
        assert_eq!(store.bookings()[0].provider_name, "Carlos");

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_book_flow_with_review_and_map() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        let out = run_script(&mut store, "3\nAlice\n\n\ntaxi\n1\ny\ny\n5\nLovely\n6\n");

        assert!(out.contains("Opening map: https://www.google.com/maps/search/?api=1&query=17.45%2C78.45"));
        assert!(out.contains("Thanks! Updated provider rating: 5"));
        let ravi = store.find_provider("p1").unwrap();
        assert_eq!(ravi.reviews.len(), 1);
        assert_eq!(ravi.reviews[0].comment, "Lovely");

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_review_rejections() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        let out = run_script(&mut store, "3\nA\n\n\ntaxi\n1\nn\ny\n9\n6\n");
        assert!(out.contains("Rating out of range; skipping."));

        let out = run_script(&mut store, "3\nA\n\n\ntaxi\n1\nn\ny\ngreat\n6\n");
        assert!(out.contains("Invalid rating; skipping."));

        assert!(store.find_provider("p1").unwrap().reviews.is_empty());
        assert_eq!(store.bookings().len(), 2);

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_book_busy_provider_widens_and_schedules() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());
        store.update_provider_availability("p1", false, None).unwrap();

        let out = run_script(&mut store, "3\nBob\n\n\ntaxi\n1\ny\nn\nn\n6\n");

        assert!(out.contains("Showing all providers (including busy)"));
        assert!(out.contains("Scheduled for"));
        assert!(out.contains("Booking Confirmed!"));
        let ravi = store.find_provider("p1").unwrap();
        assert!(!ravi.available);
        assert!(ravi.next_available.is_some());

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_book_busy_provider_declined() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());
        store.update_provider_availability("p1", false, None).unwrap();

        let out = run_script(&mut store, "3\nBob\n\n\ntaxi\n1\nn\n6\n");
        assert!(out.contains("Booking cancelled."));
        assert!(store.bookings().is_empty());

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_book_invalid_choices() {
        let mut store = TravelStore::open(temp_paths());

        assert!(run_script(&mut store, "3\n\n6\n").contains("Name cannot be empty."));
        assert!(run_script(&mut store, "3\nA\n\n\n\nc\n6\n").contains("Booking cancelled."));
        assert!(run_script(&mut store, "3\nA\n\n\n\nx\n6\n").contains("Invalid input. Please enter a number."));
        assert!(run_script(&mut store, "3\nA\n\n\n\n7\n6\n").contains("Invalid selection."));
        assert!(run_script(&mut store, "3\nA\n\n\nboat\n6\n").contains("No providers offer that service."));
        assert!(store.bookings().is_empty());
    }

    #[test]
    fn test_view_bookings() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        assert!(run_script(&mut store, "4\n6\n").contains("No bookings yet."));

        let booking = store.create_booking("Alice", "p3", None, None).unwrap();
        let out = run_script(&mut store, "4\n6\n");
        assert!(out.contains(&format!("- {} | Alice → Carlos | City Tour |", booking.id)));
        assert!(out.contains("| Confirmed"));

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_admin_toggle() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        let out = run_script(&mut store, "5\n2\n1\n6\n");
        assert!(out.contains("Provider Ravi availability set to false."));
        assert!(!store.find_provider("p1").unwrap().available);

        let out = run_script(&mut store, "5\n2\n1\n6\n");
        assert!(out.contains("Provider Ravi availability set to true."));
        assert_eq!(store.find_provider("p1").unwrap().next_available, None);

        assert!(run_script(&mut store, "5\n2\n0\n6\n").contains("Invalid selection."));
        assert!(run_script(&mut store, "5\n2\nfirst\n6\n").contains("Invalid input."));

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_admin_analytics() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());

        assert!(run_script(&mut store, "5\n1\n6\n").contains("No bookings yet; analytics"));

        store.create_booking("A", "p2", None, None).unwrap();
        store.create_booking("B", "p2", Some("English"), None).unwrap();
        store.create_booking("C", "p1", None, None).unwrap();

        let out = run_script(&mut store, "5\n1\n6\n");
        assert!(out.contains("Total bookings: 3"));
        assert!(out.contains("Bookings by language: French (1), English (1), Telugu (1)"));
        assert!(out.contains("Top services: Tour Guide (2), Taxi Driver (1)"));
        assert!(out.contains("Top providers: Maria (2), Ravi (1)"));
        assert!(out.contains("Average provider rating: 4.8"));

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_admin_export() {
        let paths = temp_paths();
        let mut store = TravelStore::open(paths.clone());
        store.create_booking("A", "p2", None, None).unwrap();

        let out = run_script(&mut store, "5\n4\n\n6\n");
        assert!(out.contains("Exported 1 bookings to"));
        assert!(paths.default_export_file().exists());

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_recovered_files_are_reported() {
        let paths = temp_paths();
        fs::create_dir_all(&paths.data_dir).unwrap();
        fs::write(&paths.bookings_file, "not json").unwrap();

        let mut store = TravelStore::open(paths.clone());
        let out = run_script(&mut store, "6\n");
        assert!(out.contains("Could not read"));
        assert!(out.contains("bookings.json.bak"));
        let backup = format!("{}.bak", paths.bookings_file.display());
        assert_eq!(fs::read_to_string(backup).unwrap(), "not json");

        fs::remove_dir_all(&paths.data_dir).ok();
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), Some(3));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("1a"), None);
        assert_eq!(parse_number("99999999999999999999999"), Some(usize::MAX));
    }
}
