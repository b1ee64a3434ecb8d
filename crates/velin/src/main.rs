mod app;
mod buffer;
mod command;
mod config;
mod file_manager;
mod input;
mod status;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{env, io, path::PathBuf};

fn main() -> Result<()> {
    // Initialize logger with debug fallback for development
    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        logger.filter_level(LevelFilter::Info);
        logger.filter_module("velin", LevelFilter::Debug);
    }
    logger.init();

    let config = config::Config::load()?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        eprintln!("Failed to set up terminal: {}", e);
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new();
    if config.editor.line_numbers {
        app.set_gutter_width(ui::GUTTER_WIDTH);
    }

    // Load file from command line if provided
    let args: Vec<String> = env::args().collect();
    if let Some(arg) = args.get(1) {
        let path = PathBuf::from(arg);
        if let Err(e) = app.load_file(path) {
            log::error!("Failed to load file '{}': {}", arg, e);
            app.set_error_message(format!("Error loading file: {}", e));
        }
    } else {
        log::info!("No file specified, starting with empty buffer");
    }

    let res = run_app(&mut terminal, app, &config);

    restore_terminal()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        log::error!("Application error: {}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: app::App,
    config: &config::Config,
) -> Result<()> {
    // One event is fully processed and the screen redrawn before the next
    // event is read.
    loop {
        terminal.draw(|f| ui::draw(f, &mut app, config))?;

        if app.should_quit() {
            log::info!("Application shutdown requested");
            break;
        }

        let raw = event::read()?;
        if let Some(event) = input::translate(&raw) {
            app.handle_event(event);
        }
    }

    Ok(())
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    let _ = execute!(stdout, crossterm::cursor::Show);
    Ok(())
}
