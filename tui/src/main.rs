//! Yearbook TUI binary
//!
//! A terminal rendition of the scrapbook: the scroll driver decides where
//! the presentation is, the TUI paints it.
//!
//! Usage:
//!   yearbook [CONTENT_PATH]
//!
//! Environment:
//!   YEARBOOK_CONTENT  Content map path (default: content/content_map.json)
//!   YEARBOOK_LOG      Log file for tracing output (stdout is the UI)
//!   RUST_LOG          Filter directives for tracing

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yearbook_core::{ContentMap, DriverConfig, ScrollDriver};
use yearbook_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging. Stdout belongs to the alternate screen, so tracing
    // goes to a file when YEARBOOK_LOG is set and is discarded otherwise.
    if let Ok(path) = std::env::var("YEARBOOK_LOG") {
        let file = File::create(&path)?;
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    // Check for a TTY before touching terminal modes.
    use std::io::IsTerminal;
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: yearbook requires a terminal (TTY)");
        std::process::exit(1);
    }

    let content = load_content();

    // Restore the terminal before printing any panic.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, content).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    content: ContentMap,
) -> anyhow::Result<()> {
    let driver = ScrollDriver::new(DriverConfig::from_env());
    let mut app = App::new(driver, content);
    app.run(terminal).await
}

/// Resolve the content map: CLI argument, then environment, then the
/// default path, falling back to the built-in demo content.
fn load_content() -> ContentMap {
    let path: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("YEARBOOK_CONTENT").ok())
        .unwrap_or_else(|| "content/content_map.json".to_string())
        .into();

    match ContentMap::load(&path) {
        Ok(map) => map,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "content map unavailable, using demo");
            ContentMap::demo()
        }
    }
}
