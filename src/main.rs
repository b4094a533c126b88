use anyhow::Result;
use std::env;
use std::io;
use std::path::PathBuf;

use smart_travel::{
    export_bookings_csv, logging, select_detector, select_opener, AppConfig, Console, Phrasebook,
    TravelStore,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = AppConfig::from_env();

    // Keep the handle alive until exit so the log file gets flushed
    let _logger = match logging::init_logging(&config) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("⚠️  File logging disabled: {:#}", e);
            None
        }
    };

    let mut store = TravelStore::open(config.paths.clone());

    match args.get(1).map(String::as_str) {
        Some("export") => run_export(&store, args.get(2).map(PathBuf::from)),
        Some("dashboard") => run_dashboard(&store),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            eprintln!("   Usage: smart-travel [dashboard | export [path]]");
            std::process::exit(2);
        }
        None => run_console(&mut store, &config),
    }
}

fn run_console(store: &mut TravelStore, config: &AppConfig) -> Result<()> {
    // Write both snapshots up front so persistence exists from the first run;
    // unreadable ones were backed up by `TravelStore::open`
    store.persist_all()?;

    let phrasebook = Phrasebook::builtin();
    let detector = select_detector(config.detector);
    let opener = select_opener(config.open_browser);
    log::info!("Language detector: {}", detector.name());

    let stdin = io::stdin();
    let mut console = Console::new(
        store,
        &phrasebook,
        detector.as_ref(),
        opener.as_ref(),
        stdin.lock(),
        io::stdout(),
    );
    console.run()?;

    log::info!("Session ended");
    Ok(())
}

fn run_export(store: &TravelStore, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| store.paths().default_export_file());

    println!("📤 Exporting bookings...");
    let count = export_bookings_csv(store.bookings(), &path)?;
    println!("✓ Wrote {} bookings to {}", count, path.display());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_dashboard(store: &TravelStore) -> Result<()> {
    use smart_travel::ui;

    println!("🖥️  Loading Smart Travel dashboard...\n");

    let mut app = ui::App::new(store.providers().to_vec(), store.bookings().to_vec());
    ui::run_ui(&mut app)?;

    println!("\n✅ Dashboard closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_dashboard(_store: &TravelStore) -> Result<()> {
    eprintln!("❌ Dashboard not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
