mod grades;
mod session;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use grades::GradeStore;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use session::{Dialog, Session};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use ui::{ConsoleDialog, TuiDialog};

#[derive(Parser, Debug)]
#[command(name = "gradecalc")]
#[command(about = "Track grades and see your running average", long_about = None)]
struct Args {
    /// Use plain line-based prompts instead of the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Write a session log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level for --log-file
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(args: &Args) -> Result<()> {
    // The TUI owns stdout, so logs only ever go to a file
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(args.log_level.into(), Config::default(), file)
            .map_err(|e| anyhow!("Failed to set up logging: {}", e))?;
    }
    Ok(())
}

fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run one session; a front-end failure is logged and handed back to `main`.
fn run_session<D: Dialog>(dialog: &mut D, store: &mut GradeStore) -> Result<()> {
    let res = Session::new(dialog, store).run();
    if let Err(err) = &res {
        info!("Session aborted: {:#}", err);
    }
    res
}

fn run_plain(store: &mut GradeStore) -> Result<()> {
    let stdin = io::stdin();
    let mut dialog = ConsoleDialog::new(stdin.lock(), io::stdout());
    run_session(&mut dialog, store)
}

fn run_tui(store: &mut GradeStore) -> Result<()> {
    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut dialog = TuiDialog::new(Terminal::new(backend)?);

    let res = run_session(&mut dialog, store);

    // Restore terminal
    cleanup_terminal();
    dialog.terminal_mut().show_cursor()?;

    res
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    info!("Starting gradecalc (plain: {})", args.plain);

    let mut store = GradeStore::new();
    if args.plain {
        run_plain(&mut store)
    } else {
        run_tui(&mut store)
    }
}
