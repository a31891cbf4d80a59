use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Mutex,
};

use app::App;
use board::render_lines;
use clap::Parser;
use config::{Glyphs, ReplayConfig};
use error::AppError;
use goban::{EmptyHistory, GameRecord, History};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub mod app;
pub mod board;
pub mod config;
pub mod error;

const DEFAULT_LOG_FILTER: &str = "goban=info,goban_tui=info";

/// Step through a recorded game turn by turn.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Game record: `<size>;<black>;<white>;<move>;...`
    record: PathBuf,

    /// RON file with viewer settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every turn to stdout instead of opening the viewer
    #[arg(long)]
    dump: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(&cli);
    ExitCode::from(report(result, &mut io::stdout(), &mut io::stderr()))
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Prints the outcome of a run exactly once and picks the exit status.
fn report(
    result: Result<(), AppError>,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> u8 {
    // Nothing sensible is left to do if printing the report itself fails
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(AppError::EmptyHistory(err)) => {
            let _ = writeln!(out, "{err}");
            EXIT_SUCCESS
        }
        Err(err) => {
            error!(%err, "replay failed");
            let _ = writeln!(err_out, "{err}");
            EXIT_FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref())?;
    let config = ReplayConfig::load(cli.config.as_deref())?;
    let raw = std::fs::read_to_string(&cli.record).map_err(|source| AppError::Unreadable {
        path: cli.record.clone(),
        source,
    })?;
    let record = GameRecord::parse(&raw)?;
    let history = History::from_record(&record);
    info!(
        record = %cli.record.display(),
        size = record.size,
        moves = record.moves.len(),
        turns = history.len(),
        "loaded game"
    );

    if cli.dump {
        return print_turns(&record, &history, &config.glyphs);
    }

    let app = App::new(record, history, config)?;
    let terminal = ratatui::try_init()?;
    let result = app.run(terminal);
    ratatui::try_restore()?;
    Ok(result?)
}

fn print_turns(record: &GameRecord, history: &History, glyphs: &Glyphs) -> Result<(), AppError> {
    write_turns(record, history, glyphs, &mut io::stdout().lock())
}

fn write_turns(
    record: &GameRecord,
    history: &History,
    glyphs: &Glyphs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if history.is_empty() {
        return Err(EmptyHistory.into());
    }
    for (idx, turn) in history.iter().enumerate() {
        let lines = render_lines(
            &turn.snapshot,
            idx,
            history.len(),
            &record.black_name,
            &record.white_name,
            glyphs,
        );
        for line in lines {
            writeln!(out, "{line}").map_err(AppError::Output)?;
        }
        writeln!(out).map_err(AppError::Output)?;
    }
    out.flush().map_err(AppError::Output)
}

/// Logs go to `log_file` when given and are discarded otherwise. Failures are
/// reported once on stderr by `report`, and the viewer's screen stays intact.
fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::try_parse_from([
            "goban-tui",
            "game.txt",
            "--dump",
            "--config",
            "viewer.ron",
        ])
        .unwrap();
        assert_eq!(cli.record, PathBuf::from("game.txt"));
        assert!(cli.dump);
        assert_eq!(cli.config, Some(PathBuf::from("viewer.ron")));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn record_is_required() {
        assert!(Cli::try_parse_from(["goban-tui"]).is_err());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn reported(result: Result<(), AppError>) -> (u8, String, String) {
        let (mut out, mut err_out) = (Vec::new(), Vec::new());
        let code = report(result, &mut out, &mut err_out);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err_out).unwrap(),
        )
    }

    #[test]
    fn bad_record_is_reported_once() {
        let err = GameRecord::parse("2;Ann;Bob;+b:c1").unwrap_err();
        let (code, out, err_out) = reported(Err(err.into()));
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(err_out, "move 1 at c1 is outside the 2x2 board\n");
    }

    #[test]
    fn success_prints_nothing() {
        let (code, out, err_out) = reported(Ok(()));
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.is_empty() && err_out.is_empty());
    }

    #[test]
    fn empty_history_is_not_a_failure() {
        let (code, out, err_out) = reported(Err(EmptyHistory.into()));
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, "the game has no turns to display\n");
        assert!(err_out.is_empty());
    }

    #[test]
    fn terminal_setup_failure_exits_with_failure() {
        let err = io::Error::other("no such device or address");
        let (code, _, err_out) = reported(Err(err.into()));
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(err_out, "terminal error: no such device or address\n");
    }

    #[test]
    fn dump_writes_every_turn() {
        let record = GameRecord::parse("3;Ann;Bob;+b:a1;+w:c3x").unwrap();
        let history = History::from_record(&record);
        let mut out = Vec::new();
        write_turns(&record, &history, &Glyphs::default(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Turn: 1/2 │"));
        assert!(out.contains("Turn: 2/2 │"));
    }

    #[test]
    fn dump_write_failure_is_an_output_error() {
        let record = GameRecord::parse("3;Ann;Bob;+b:a1").unwrap();
        let history = History::from_record(&record);
        let err = write_turns(&record, &history, &Glyphs::default(), &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, AppError::Output(_)));
        assert!(err.to_string().starts_with("failed to write turns: "));
    }

    #[test]
    fn dump_of_empty_game_reports_no_turns() {
        let record = GameRecord::parse("4;Ann;Bob").unwrap();
        let history = History::from_record(&record);
        assert!(matches!(
            write_turns(&record, &history, &Glyphs::default(), &mut Vec::new()),
            Err(AppError::EmptyHistory(EmptyHistory))
        ));
    }
}
