//! Desktop library entry point.
//!
//! Exposes a `run` helper so the binary stays a thin shell around argument
//! parsing, tracing setup, and `eframe` launch.

mod app;
/// Backend worker + protocol types used by the UI and headless tests.
pub mod backend;
mod clipboard;

use app::RyoPasteApp;
use eframe::egui;
use ryopaste_core::Config;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "ryopaste=warn,ryopaste_gui=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LaunchMode {
    /// Open a blank editor.
    Editor,
    /// Open the viewer for an existing paste.
    Viewer(String),
    /// Print usage and exit.
    Help,
}

fn parse_launch_args(args: &[String]) -> Result<LaunchMode, String> {
    let mut target: Option<String> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return Ok(LaunchMode::Help),
            value if value.starts_with('-') => {
                return Err(format!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                ));
            }
            value => {
                if target.is_some() {
                    return Err(
                        "Expected at most one paste id or link. Use --help for usage.".to_string(),
                    );
                }
                target = Some(value.to_string());
            }
        }
    }
    Ok(match target {
        Some(value) => LaunchMode::Viewer(extract_paste_id(&value)),
        None => LaunchMode::Editor,
    })
}

/// Accepts a bare identifier or a full paste link; the id is the last path
/// segment either way.
fn extract_paste_id(target: &str) -> String {
    target
        .trim()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(target)
        .to_string()
}

fn print_help() {
    println!("ryopaste - minimal pastebin client");
    println!();
    println!("Usage: ryopaste [paste-id-or-link]");
    println!();
    println!("With no argument, opens a blank editor. With a paste id (or a");
    println!("full paste link) opens the viewer for that paste.");
    println!();
    println!("Environment:");
    println!("  STORE_URL     Base URL of the hosted table service");
    println!("  STORE_KEY     API key for the table service");
    println!("  PUBLIC_URL    Public base URL used in shareable links");
    println!("  HISTORY_PATH  View history file (default ~/.cache/ryopaste/history.json)");
}

/// Start the desktop UI with tracing enabled.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error; argument errors
/// are reported through the same channel so the binary exits non-zero.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mode = parse_launch_args(&args)
        .map_err(|message| eframe::Error::AppCreation(message.into()))?;
    if mode == LaunchMode::Help {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let initial_paste = match mode {
        LaunchMode::Viewer(id) => Some(id),
        _ => None,
    };
    let app = RyoPasteApp::new(config, initial_paste);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title(app::APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(APP_ID, options, Box::new(|_cc| Ok(Box::new(app))))
}

const APP_ID: &str = "RyoPaste";
