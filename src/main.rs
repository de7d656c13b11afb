// ipscmon - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config loading and validation
// 4. Session restore and eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use ipscmon::app;
pub use ipscmon::core;
pub use ipscmon::platform;
pub use ipscmon::ui;
pub use ipscmon::util;

use clap::Parser;
use std::path::PathBuf;

/// ipscmon - IPSC repeater inventory dashboard.
///
/// Point ipscmon at an inventory CSV to classify every repeater into its
/// logical system, map synchronisation roles across sites, and audit the
/// configuration for anomalies.
#[derive(Parser, Debug)]
#[command(name = "ipscmon", version, about)]
struct Cli {
    /// Inventory CSV to open (restores the previous session if omitted).
    path: Option<PathBuf>,

    /// Number of preamble lines before the header row.
    #[arg(short = 's', long = "skip-rows")]
    skip_rows: Option<usize>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and configuration before logging init so the
    // configured level can take effect.
    let paths = platform::config::PlatformPaths::resolve();
    let config = match platform::config::load_config(&paths.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}; using default configuration");
            platform::config::AppConfig::default()
        }
    };

    util::logging::init(cli.debug, config.logging.level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ipscmon starting"
    );

    let mut config = config;
    if let Some(skip_rows) = cli.skip_rows {
        config.loader.skip_rows = skip_rows;
    }
    let font_size = config.ui.font_size;

    // Create application state; a CLI path overrides the saved session.
    let mut state = app::state::AppState::new(config, paths, cli.debug);
    match cli.path {
        Some(path) => state.open_inventory(path),
        None => state.restore_session(),
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_text_size(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::IpscMonApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ipscmon GUI: {e}");
        std::process::exit(1);
    }
}

/// Apply the configured body font size to all text styles proportionally.
fn configure_text_size(ctx: &egui::Context, font_size: f32) {
    let scale = font_size / util::constants::DEFAULT_FONT_SIZE;
    ctx.style_mut(|style| {
        for font_id in style.text_styles.values_mut() {
            font_id.size *= scale;
        }
    });
}
