//! workoutlog - Workout Tracker
//!
//! A TUI for logging workouts.
//!
//! Features:
//! - List logged workouts, newest first
//! - Create and edit workouts (name, type, image)
//! - Attach an image file to a workout
//! - Delete workouts
//!
//! Usage: workoutlog [--no-save]

mod app;
mod config;
mod navigation;
mod screens;
mod storage;
mod store;
mod types;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let no_save = args.iter().any(|a| a == "--no-save" || a == "-n");

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("workoutlog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    if let Err(e) = run_app(no_save) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"workoutlog - Workout Tracker

USAGE:
    workoutlog [OPTIONS]

OPTIONS:
    -n, --no-save    Do not write changes to disk
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS (list):
    n                New workout
    Enter            Edit selected workout
    j/k              Navigate up/down
    t                Cycle theme
    q                Quit

KEYBINDINGS (edit):
    Tab / Shift-Tab  Move between fields and buttons
    Enter            Press focused button
    Ctrl+S           Create / Save
    Esc              Back

FILES:
    ~/.config/workoutlog/config.toml
    <data dir>/workoutlog/workouts.json
    <data dir>/workoutlog/workoutlog.log   (RUST_LOG sets the level)
"#
    );
}

/// Log to a file; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let dir = config::data_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;

    let path = dir.join("workoutlog.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "workoutlog=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn run_app(no_save: bool) -> Result<()> {
    let config = config::Config::load().context("Failed to load configuration")?;
    let data_file = config.data_file()?;
    info!(data_file = %data_file.display(), no_save, "starting workoutlog");

    let mut app = App::new(config, data_file, no_save).context("Failed to initialize application")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("exiting");
    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        app.tick();

        // Poll with timeout so flash messages expire
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
