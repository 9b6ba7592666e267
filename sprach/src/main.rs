//! Marifa language-learning TUI.
//!
//! A terminal front end for the memory game, the picture vocabulary, the A1
//! story pages and the hard-level story tests, in German or Arabic.
//!
//! ```bash
//! SPRACH_LOCALE=ar cargo run -p sprach
//! ```

mod app;
mod events;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sprach_core::runtime::DEFAULT_DRIVE_PERIOD;
use sprach_core::{init_logging, spawn_clock, AppConfig, AppSession};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info};

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

/// How long to wait for input before redrawing the timers.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const LOG_FILE_NAME: &str = "sprach.log";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // The terminal is taken over, so logs go to a file.
    let log_path = log_file_path(&config);
    if let Err(e) = init_logging(&config.log_filter, Some(&log_path)) {
        eprintln!("Warning: logging disabled: {e}");
    }
    info!(locale = ?config.locale, data_dir = ?config.data_dir, "starting");

    let session = Arc::new(Mutex::new(AppSession::new(config)));
    let clock = spawn_clock(Arc::clone(&session), DEFAULT_DRIVE_PERIOD);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(), &session).await;
    clock.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "app loop failed");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn log_file_path(config: &AppConfig) -> PathBuf {
    config
        .data_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    session: &Mutex<AppSession>,
) -> io::Result<()> {
    loop {
        // Render
        {
            let session = session.lock().await;
            terminal.draw(|f| render(f, &app, &session))?;
        }

        // Poll with a timeout so the timers keep moving on screen
        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            let mut session = session.lock().await;
            if handle_event(&mut app, &mut session, ev) == EventResult::Quit {
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("Marifa - learn German and Arabic in the terminal");
    println!();
    println!("USAGE:");
    println!("  sprach [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!();
    println!("ENVIRONMENT (also read from .env):");
    println!("  SPRACH_LOCALE           Display language: de or ar (default: de)");
    println!("  SPRACH_DATA_DIR         Directory for scores.json and sprach.log");
    println!("  SPRACH_COUNTDOWN_SECS   Memory game time budget (default: 60)");
    println!("  SPRACH_LOG              Log filter, e.g. debug or sprach_core=trace");
    println!();
    println!("KEYS:");
    println!("  F2       Switch language");
    println!("  Esc      Back to the start screen (quit from there)");
    println!("  Ctrl+C   Quit");
}
