mod app;
mod config;
mod domain;
mod input;
mod logging;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use config::{default_config_path, init_config, load_config, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{sample_plants, Checklist, ReminderField, WaterDays};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "plants")]
#[command(about = "A calm, terminal-based houseplant watering checklist", long_about = None)]
struct Cli {
    /// Config file. Defaults to ~/.plants/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Start with no plants (shows the welcome screen)
    #[arg(long, global = true)]
    empty: bool,
    /// Use ASCII icons instead of emoji
    #[arg(long, global = true)]
    no_emoji: bool,
    /// Append logs to this file (or set PLANTS_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the options offered by each reminder chooser
    Options,
    /// Print today's watering status for the starting garden
    Status,
    /// Write a default config file
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_path) = logging::resolve_log_path(cli.log_file.clone()) {
        logging::init(&log_path)?;
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    match &cli.command {
        Some(Commands::InitConfig) => {
            init_config(&config_path)?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        Some(Commands::Options) => {
            for field in ReminderField::all() {
                println!("{}:", field.title());
                if *field == ReminderField::WaterDays {
                    for (idx, days) in WaterDays::all().iter().enumerate() {
                        println!("  {}. {} ({}d)", idx + 1, days.label(), days.interval_days());
                    }
                    continue;
                }
                for (idx, label) in field.option_labels().iter().enumerate() {
                    println!("  {}. {}", idx + 1, label);
                }
            }
            Ok(())
        }
        Some(Commands::Status) => {
            let config = effective_config(&cli, &config_path)?;
            let checklist = Checklist::new(starting_plants(&config));
            println!("{}", checklist.status_text());
            println!(
                "{}/{} watered ({:.0}%)",
                checklist.checked_count(),
                checklist.len(),
                checklist.percent_checked()
            );
            Ok(())
        }
        None => {
            // Run the normal TUI application
            let config = effective_config(&cli, &config_path)?;
            run_tui(&config)
        }
    }
}

/// Config file overlaid with command-line flags
fn effective_config(cli: &Cli, config_path: &Path) -> Result<Config> {
    let mut config = load_config(config_path)?;
    if cli.empty {
        config.start_empty = true;
    }
    if cli.no_emoji {
        config.use_emoji = false;
    }
    Ok(config)
}

fn starting_plants(config: &Config) -> Vec<domain::PlantRecord> {
    if config.start_empty {
        Vec::new()
    } else {
        sample_plants()
    }
}

fn run_tui(config: &Config) -> Result<()> {
    let mut app = AppState::new(starting_plants(config), config);
    info!(plants = app.checklist.len(), "starting session");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, Duration::from_millis(config.poll_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        warn!(error = %err, "session ended with an error");
        eprintln!("Error: {}", err);
    }

    info!("session closed");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    poll: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}
