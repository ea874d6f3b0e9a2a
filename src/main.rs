//! memegen - Caption a random meme template from your terminal
//!
//! A terminal UI with two caption fields. Submitting picks a random template
//! from the imgflip listing (cached for a day) and shows it with the captions
//! overlaid. With `--top` and `--bottom` it renders once and prints instead.

use std::io;
use std::panic;
use std::process;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use memegen::app::{App, FetchOutcome, SubmitStep, SubmitTrigger};
use memegen::cli::{Cli, StartupConfig};
use memegen::logging;
use memegen::page::{OutputContainer, OutputElement, OverlayAnchor};
use memegen::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    ui::render_editor(frame, app);
    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Prints a rendered meme as plain text
fn print_output(output: &OutputContainer) {
    for child in &output.children {
        match child {
            OutputElement::Image {
                url,
                alt,
                width,
                height,
            } => {
                println!("name:   {}", alt);
                println!("image:  {} ({}x{})", url, width, height);
            }
            OutputElement::Overlay { anchor, text, .. } => match anchor {
                OverlayAnchor::Top => println!("top:    {}", text),
                OverlayAnchor::Bottom => println!("bottom: {}", text),
            },
        }
    }
}

/// Runs a single submission without the terminal UI
async fn run_once(config: StartupConfig, top: String, bottom: String) -> i32 {
    logging::init_stderr_logging();

    let mut app = App::with_config(&config);
    app.page.top_input.value = top;
    app.page.bottom_input.value = bottom;

    match app.submit(SubmitTrigger::click()).await {
        Ok(()) => {
            print_output(&app.page.output);
            0
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            1
        }
    }
}

/// Runs the interactive editor until the user quits
async fn run_editor(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Without a home directory the editor runs without logs
    if let Some(path) = config.log_file.clone().or_else(logging::default_log_path) {
        logging::init_file_logging(&path)?;
    }
    info!(endpoint = %config.endpoint, "Starting editor");

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_config(&config);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FetchOutcome>(16);

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if let Some(trigger) = app.take_submit() {
            if let SubmitStep::Fetch(job) = app.begin_submit(trigger, Utc::now()) {
                let tx = outcome_tx.clone();
                tokio::spawn(async move {
                    if tx.send(job.run().await).await.is_err() {
                        warn!("Editor closed before fetch finished");
                    }
                });
            }
        }

        // Apply finished fetches in arrival order
        while let Ok(outcome) = outcome_rx.try_recv() {
            let _ = app.complete_submit(outcome);
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    info!("Editor closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    if let Some((top, bottom)) = config.one_shot.clone() {
        let code = run_once(config, top, bottom).await;
        process::exit(code);
    }

    run_editor(config).await
}
