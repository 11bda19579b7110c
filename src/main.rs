mod app;
mod command;
mod config;
mod consts;
mod game;
mod sound;
mod ticker;
mod util;
use crate::app::App;
use crate::config::{Config, ConfigError};
use crate::game::{Game, Grid};
use crate::sound::TerminalBell;
use crate::ticker::MonotonicClock;
use anyhow::Context;
use lexopt::{Arg, Parser};
use log::{info, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

static USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal.  Steer with the arrow keys, w/a/s/d, or h/j/k/l.
Quit with q or Esc.

Options:
  -c, --config <path>   Read configuration from the given file
      --log-file <path> Write log messages to the given file
  -h, --help            Show this help message and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl CliCommand {
    fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}

fn main() -> ExitCode {
    match CliCommand::from_parser(Parser::from_env()) {
        Ok(CliCommand::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{NAME}: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(CliCommand::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("{NAME} {VERSION}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{NAME}: {e}");
            eprintln!("Run `{NAME} --help` for usage");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(path) = args.log_file.as_deref().or(config.log.file.as_deref()) {
        init_logging(path, config.log.level)?;
    }
    info!("Starting {NAME} {VERSION} with {config:?}");
    let game = Game::new(Grid::new(config.game.cell_count));
    let app = App::new(
        game,
        config.game.tick_interval,
        MonotonicClock::new(),
        TerminalBell::new(config.sound.bell, io::stdout()),
    );
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}

/// Load the configuration from `path` if given, otherwise from the default
/// location if it exists
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let r = match path {
        Some(p) => Config::load(p, false),
        None => match Config::default_path() {
            Ok(p) => Config::load(&p, true),
            Err(ConfigError::NoPath) => Ok(Config::default()),
            Err(e) => Err(e),
        },
    };
    r.context("failed to load configuration")
}

fn init_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to initialize logger")
}
