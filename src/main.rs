use clap::Parser;
use gtk4::prelude::*;
use gtk4::{Application, CssProvider};
use hueboard::config::AppConfig;
use hueboard::ui;
use log::{info, warn};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const APP_ID: &str = "io.github.hueboard";

/// hueboard - a minimal fullscreen colour picker
#[derive(Parser, Debug, Clone)]
#[command(name = "hueboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Launch in fullscreen mode
    #[arg(short = 'f', long = "fullscreen")]
    fullscreen: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file to use instead of the default location
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    let cli = Cli::parse();

    // Allow RUST_LOG to override the -d/--debug level
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting hueboard v{}", env!("CARGO_PKG_VERSION"));

    CLI_OPTIONS.set(cli).expect("CLI options already set");

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["hueboard"]);
}

fn build_ui(app: &Application) {
    info!("Building UI");

    let cli = CLI_OPTIONS.get().cloned().unwrap_or(Cli {
        fullscreen: false,
        debug: 0,
        config_file: None,
    });

    load_css();

    // Load configuration; a missing or corrupt file is not fatal, the
    // defaults carry a random colour.
    let config = if let Some(ref path) = cli.config_file {
        match AppConfig::load_from_path(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config file '{}': {}", path.display(), e);
                AppConfig::default()
            }
        }
    } else {
        match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            }
        }
    };

    let start_fullscreen = cli.fullscreen || config.window.fullscreen_enabled;
    let config = Rc::new(RefCell::new(config));

    let window = ui::build_window(app, config);
    if start_fullscreen {
        window.fullscreen();
    }
    window.present();
}

/// Load CSS styling for the application
fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(
        "
        window.on-dark {
            color: white;
        }

        window.on-light {
            color: black;
        }

        .picker-card {
            border-radius: 6px;
            box-shadow: 0 2px 8px alpha(black, 0.35);
        }

        .picker-card drawingarea {
            border-radius: 0;
        }

        .swatch {
            border-radius: 50%;
            border: 2px solid currentColor;
            background: alpha(currentColor, 0.15);
        }

        spinbutton {
            background: alpha(currentColor, 0.12);
            border-radius: 10px;
        }
        ",
    );

    if let Some(display) = gdk4::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
