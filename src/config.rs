use crate::consts;
use crate::sound::BellMode;
use log::LevelFilter;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings that affect gameplay
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about sound effects
    #[serde(default)]
    pub(crate) sound: SoundConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of cells along each side of the grid
    pub(crate) cell_count: u16,

    /// Time between movements of the snake
    pub(crate) tick_interval: Duration,
}

impl GameConfig {
    /// The snake starts at x = 6, y = 9, so the grid must be at least this
    /// big.
    const CELL_COUNT_RANGE: RangeInclusive<u16> = 10..=40;

    const TICK_INTERVAL_MS_RANGE: RangeInclusive<u64> = 20..=2000;
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            cell_count: consts::CELL_COUNT,
            tick_interval: consts::TICK_INTERVAL,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    cell_count: u16,
    tick_interval_ms: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            cell_count: consts::CELL_COUNT,
            tick_interval_ms: u64::try_from(consts::TICK_INTERVAL.as_millis()).unwrap_or(200),
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidValue;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidValue> {
        if !GameConfig::CELL_COUNT_RANGE.contains(&value.cell_count) {
            return Err(InvalidValue::CellCount(value.cell_count));
        }
        if !GameConfig::TICK_INTERVAL_MS_RANGE.contains(&value.tick_interval_ms) {
            return Err(InvalidValue::TickInterval(value.tick_interval_ms));
        }
        Ok(GameConfig {
            cell_count: value.cell_count,
            tick_interval: Duration::from_millis(value.tick_interval_ms),
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct SoundConfig {
    /// Which events ring the terminal bell
    pub(crate) bell: BellMode,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLogConfig {
    file: Option<String>,
    level: String,
}

impl Default for RawLogConfig {
    fn default() -> RawLogConfig {
        RawLogConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = InvalidValue;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, InvalidValue> {
        let level = value
            .level
            .parse::<LevelFilter>()
            .map_err(|_| InvalidValue::LogLevel(value.level))?;
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level,
        })
    }
}

/// Error for a configuration value that is well-formed but not acceptable
#[derive(Debug, Error)]
pub(crate) enum InvalidValue {
    #[error("cell-count must be between 10 and 40, got {0}")]
    CellCount(u16),
    #[error("tick-interval-ms must be between 20 and 2000, got {0}")]
    TickInterval(u64),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
    #[error("failed to expand log file path")]
    Path(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(src: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(src)
    }

    #[test]
    fn empty() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.game.cell_count, 25);
        assert_eq!(cfg.game.tick_interval, Duration::from_millis(200));
        assert_eq!(cfg.sound.bell, BellMode::Fail);
        assert_eq!(cfg.log.file, None);
        assert_eq!(cfg.log.level, LevelFilter::Info);
    }

    #[test]
    fn full() {
        let cfg = parse(concat!(
            "[game]\n",
            "cell-count = 30\n",
            "tick-interval-ms = 150\n",
            "\n",
            "[sound]\n",
            "bell = \"all\"\n",
            "\n",
            "[log]\n",
            "file = \"/var/tmp/gridsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                game: GameConfig {
                    cell_count: 30,
                    tick_interval: Duration::from_millis(150),
                },
                sound: SoundConfig {
                    bell: BellMode::All
                },
                log: LogConfig {
                    file: Some(PathBuf::from("/var/tmp/gridsnake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
    }

    #[test]
    fn partial_game() {
        let cfg = parse("[game]\ntick-interval-ms = 100\n").unwrap();
        assert_eq!(cfg.game.cell_count, 25);
        assert_eq!(cfg.game.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn bad_cell_count() {
        assert!(parse("[game]\ncell-count = 5\n").is_err());
        assert!(parse("[game]\ncell-count = 41\n").is_err());
    }

    #[test]
    fn bad_tick_interval() {
        assert!(parse("[game]\ntick-interval-ms = 0\n").is_err());
    }

    #[test]
    fn bad_bell() {
        assert!(parse("[sound]\nbell = \"loud\"\n").is_err());
    }

    #[test]
    fn bad_log_level() {
        assert!(parse("[log]\nlevel = \"chatty\"\n").is_err());
    }

    #[test]
    fn load_file() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        writeln!(tmpfile, "[sound]\nbell = \"none\"").unwrap();
        tmpfile.flush().unwrap();
        let cfg = Config::load(tmpfile.path(), false).unwrap();
        assert_eq!(cfg.sound.bell, BellMode::None);
        assert_eq!(cfg.game, GameConfig::default());
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_invalid() {
        let mut tmpfile = NamedTempFile::new().unwrap();
        writeln!(tmpfile, "[game]\ncell-count = \"big\"").unwrap();
        tmpfile.flush().unwrap();
        assert!(matches!(
            Config::load(tmpfile.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }
}
