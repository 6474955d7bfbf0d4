//! Runtime configuration and logging setup for the `cidr-calc` binary.
//!
//! Settings come from command line flags, with environment variables (optionally
//! loaded from a `.env` file) as fallback. Logging goes through `log4rs`, from
//! `log4rs.yml` when present.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How results are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Csv,
    Json,
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    pub log_config: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new(
        format: OutputFormat,
        no_color: bool,
        log_config: &Path,
        log_level: &str,
    ) -> Result<Config, Box<dyn Error>> {
        let log_level = LevelFilter::from_str(log_level)
            .map_err(|_| format!("Invalid log level '{log_level}'"))?;
        Ok(Config {
            format,
            // only plain text is colored
            color: !no_color && format == OutputFormat::Plain,
            log_config: log_config.to_path_buf(),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Plain,
            color: false,
            log_config: PathBuf::from("log4rs.yml"),
            log_level: LevelFilter::Warn,
        }
    }
}

/// Initialise log4rs from the configured file, or a stderr logger at the configured level.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                config.log_config.display()
            )
        })?;
        log::debug!("Logging configured from {}", config.log_config.display());
        return Ok(());
    }

    log4rs::init_config(console_log_config(config.log_level)?)?;
    log::warn!(
        "Log config {} not found, logging to stderr at {}",
        config.log_config.display(),
        config.log_level
    );
    Ok(())
}

fn console_log_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new(OutputFormat::Plain, false, Path::new("log4rs.yml"), "debug")
            .expect("valid config");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.color);

        let config = Config::new(OutputFormat::Json, false, Path::new("x.yml"), "WARN").unwrap();
        assert!(!config.color, "json output is never colored");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_config_invalid_level() {
        assert!(Config::new(OutputFormat::Csv, true, Path::new("log4rs.yml"), "loud").is_err());
    }

    #[test]
    fn test_console_log_config_builds() {
        assert!(console_log_config(LevelFilter::Info).is_ok());
    }
}
