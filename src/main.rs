// ZeroDecay - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (console + Log tab)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use zerodecay::app;
pub use zerodecay::platform;
pub use zerodecay::ui;
pub use zerodecay::util;

use clap::Parser;
use std::path::PathBuf;
use util::error::Result;

/// ZeroDecay - Monitor the health of redundant file copies.
///
/// Shows every monitored file as a card with one coloured square per copy;
/// the search box filters cards by regex (or literal text).
#[derive(Parser, Debug)]
#[command(name = "ZeroDecay", version, about)]
struct Cli {
    /// Initial search pattern for the Monitoring tab.
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ZeroDecay GUI: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Config is read before logging exists, so its warnings are replayed
    // once the subscriber is installed.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    let log_receiver = util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ZeroDecay starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let config_path = config_dir.join(util::constants::CONFIG_FILE_NAME);
    let dark_mode = config.dark_mode;
    let mut state = app::state::AppState::new(config, config_path, cli.debug);

    if let Some(ref pattern) = cli.search {
        state.set_search(pattern);
    }

    tracing::info!(
        cards = state.cards.len(),
        visible = state.visible_count(),
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::ZeroDecayApp::new(state, log_receiver)))
        }),
    )?;

    Ok(())
}
