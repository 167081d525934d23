use std::io;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rgbw_panel::cli::Args;
use rgbw_panel::console::run_until_shutdown;
use rgbw_panel::hal::SerialSink;
use rgbw_panel::{SerialPanel, SettingsStore};

/// Main Entry Point
///
/// Lädt Defaults, öffnet den Serial Port, wartet auf das Board und startet
/// dann das Terminal-Panel. Am Ende wird der Port explizit geschlossen.
fn main() -> Result<()> {
    // .env zuerst laden, damit RUST_LOG und RGBW_* aus der Datei greifen
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let args = Args::parse();

    // Ungültige Settings-Datei ist fatal: lieber abbrechen als still mit 0 starten
    let store = SettingsStore::new(args.settings_path());
    let defaults = store.load().with_context(|| {
        format!(
            "Failed to load default settings from {}",
            store.path().display()
        )
    })?;
    info!("Loaded defaults: {}", defaults.levels());

    let serial = args.serial_config();
    let sink = SerialSink::open(&serial)
        .with_context(|| format!("Failed to open serial port {}", serial.port_name))?;

    // Kein Handshake: das Board braucht nach dem Öffnen nur etwas Zeit
    info!(
        "Waiting {:?} for the device on {}",
        args.startup_delay(),
        sink.name()
    );
    thread::sleep(args.startup_delay());

    let mut panel = SerialPanel::new(sink, store, defaults);

    // Port wird auch bei Terminal-Fehlern explizit geschlossen
    let stdin = io::stdin();
    run_until_shutdown(&mut panel, stdin.lock(), io::stdout().lock())
}
