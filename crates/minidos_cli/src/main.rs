use anyhow::Context;
use clap::Parser;
use minidos_core::logging::{self, LoggingConfig};
use minidos_core::Session;
use minidos_hal::SystemElevator;
use minidos_ui::{open_reader, LineEditorConfig, PlainReader, Repl, Terminal};
use std::path::PathBuf;

/// MiniDOS: DOS-style commands on the real file system.
#[derive(Parser, Debug)]
#[command(author, version, about = "MiniDOS command interpreter", long_about = None)]
struct Cli {
    /// Command line to execute instead of starting the interactive session.
    #[arg()]
    command: Option<String>,

    /// Read plain lines without the history-capable editor.
    #[arg(long)]
    no_history: bool,

    /// Number of commands kept for Up/Down recall.
    #[arg(long, default_value_t = 1000, value_name = "N")]
    history_size: usize,

    /// Use vi key bindings in the line editor.
    #[arg(long)]
    vi: bool,

    /// Log filter used when MINIDOS_LOG is unset.
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    log_level: String,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Program used by `sudo` (default: the system's sudo).
    #[arg(long, value_name = "PROGRAM")]
    elevator: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&LoggingConfig {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
    })?;

    let session = Session::new().context("Failed to read the current directory")?;
    let elevator = match &cli.elevator {
        Some(program) => SystemElevator::new(program.as_str()),
        None => SystemElevator::detect(),
    };
    tracing::debug!(?cli, "starting");

    if let Some(line) = cli.command {
        let terminal = Terminal::stdout(PlainReader::stdio());
        let mut repl = Repl::new(session, terminal, Box::new(elevator));
        repl.run_line(&line);
        return Ok(());
    }

    let config = LineEditorConfig {
        enabled: !cli.no_history,
        history_size: cli.history_size,
        vi_mode: cli.vi,
    };
    let reader = open_reader(&config, session.vocabulary());
    let mut repl = Repl::new(session, Terminal::stdout(reader), Box::new(elevator));
    repl.greet();
    repl.run();

    Ok(())
}
