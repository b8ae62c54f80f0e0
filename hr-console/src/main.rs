//! HR console
//!
//! Renders one of the HR record screens as a text table, then optionally
//! replays a script of clicks against it and renders the result.
//!
//! ```bash
//! hr-console --screen requests --click action:0:0 --click toggle-all
//! hr-console --screen attendance --search grace --sort date:asc --bordered
//! ```

mod console;
mod data;
mod error;
mod output;
mod paths;
mod sample;
mod screens;
mod settings;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use datatable::SortConfig;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::console::{Click, Console, parse_sort};
use crate::error::ConsoleError;
use crate::output::Printer;
use crate::screens::Screen;
use crate::settings::{ConsoleSettings, JsonFileBackend, MemoryBackend, SettingsProvider};

#[derive(Parser)]
#[command(name = "hr-console")]
#[command(about = "Browse HR records as a searchable, sortable table", long_about = None)]
#[command(version)]
struct Cli {
    /// Screen to show
    #[arg(short, long, value_enum, default_value = "attendance")]
    screen: Screen,

    /// JSON array of records to show instead of the built-in sample
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Initial search text
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Initial page, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page (overrides settings)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Initial sort, as key[:asc|desc]
    #[arg(long, value_name = "KEY", value_parser = parse_sort)]
    sort: Option<SortConfig>,

    /// Show no sort even when the screen has a default one
    #[arg(long, conflicts_with = "sort")]
    unsorted: bool,

    /// Record ids to start selected
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    select: Vec<String>,

    /// Show the loading state
    #[arg(long)]
    loading: bool,

    /// Show the error state with this message
    #[arg(long, value_name = "MESSAGE")]
    error: Option<String>,

    /// Clicks to replay after the first render, in order (can be repeated)
    #[arg(short, long, value_name = "CLICK")]
    click: Vec<Click>,

    /// Draw cell borders
    #[arg(long)]
    bordered: bool,

    /// Drop the spacer lines
    #[arg(long)]
    compact: bool,

    /// Number the rows
    #[arg(long)]
    row_numbers: bool,

    /// Print without colors
    #[arg(long)]
    no_color: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store the effective page size and style as the new defaults
    #[arg(long)]
    save_settings: bool,

    /// Forget stored table settings before starting
    #[arg(long, conflicts_with = "save_settings")]
    reset_settings: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The settings provider and where its settings live.
fn settings_provider(cli: &Cli) -> Result<(SettingsProvider, String), ConsoleError> {
    match cli.config.clone().or_else(paths::settings_file) {
        Some(path) => {
            let backend = JsonFileBackend::open(path)?;
            let source = backend.path().display().to_string();
            Ok((SettingsProvider::new(backend), source))
        }
        None => Ok((SettingsProvider::new(MemoryBackend::new()), "memory".to_string())),
    }
}

fn init_logging(level: LevelFilter) -> Result<(), ConsoleError> {
    let Some(log_file) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(level, Config::default(), File::create(&log_file)?)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), ConsoleError> {
    let (provider, source) = settings_provider(&cli)?;
    let reset = if cli.reset_settings {
        ConsoleSettings::reset_table(&provider)?
    } else {
        0
    };
    let mut settings = ConsoleSettings::load(&provider)?;

    let level = match cli.verbose {
        0 => settings.log_level,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logging(level)?;
    info!("settings from {source}");
    if cli.reset_settings {
        info!("reset {reset} table settings");
    }
    info!("showing {:?}", cli.screen);

    if let Some(size) = cli.page_size.filter(|&size| size > 0) {
        settings.page_size = size;
    }
    settings.style.bordered |= cli.bordered;
    settings.style.compact |= cli.compact;
    settings.style.show_row_numbers |= cli.row_numbers;
    if cli.save_settings {
        settings.save(&provider)?;
        info!("saved settings");
    }

    let records = data::load_records(cli.screen, cli.data.as_deref())?;
    let mut console = Console::new(cli.screen, records, settings)?;
    if cli.unsorted {
        console.set_sort(None);
    } else if let Some(sort) = cli.sort {
        console.set_sort(Some(sort));
    }
    console.select_ids(&cli.select)?;
    {
        let state = console.state_mut();
        state.query = cli.search.unwrap_or_default();
        state.page = cli.page.max(1);
        state.loading = cli.loading;
        state.error = cli.error;
    }

    let mut printer = Printer::new(io::stdout().lock(), !cli.no_color);
    printer.frame(&console.render()?)?;
    if cli.click.is_empty() {
        return Ok(());
    }

    for click in &cli.click {
        if !console.click(click)?.is_handled() {
            eprintln!("ignored: {click:?}");
        }
    }
    for entry in console.history() {
        eprintln!("> {entry}");
    }
    println!();
    printer.frame(&console.render()?)?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
