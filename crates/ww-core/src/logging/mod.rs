//! Structured logging foundation for ww-core.
//!
//! Dual-mode logging in the usual shape:
//! - Human-readable console output for interactive use
//! - Machine-parseable JSON lines for scripted runs
//!
//! stdout is reserved for command payloads; all log output goes to
//! stderr. The filter honors `WW_LOG`, then `RUST_LOG`, then the level
//! derived from the CLI's `-v`/`-q` flags.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console format (default).
    #[default]
    Human,
    /// Machine-parseable JSON lines.
    Jsonl,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "console" | "pretty" => Ok(LogFormat::Human),
            "jsonl" | "json" | "structured" => Ok(LogFormat::Jsonl),
            _ => Err(format!("unknown log format: {s}")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Fallback filter directive when no environment filter is set.
    pub level: tracing::Level,
}

impl LogConfig {
    /// Derive a config from the CLI's verbosity flags.
    pub fn from_flags(verbose: u8, quiet: bool, format: LogFormat) -> Self {
        let level = if quiet {
            tracing::Level::ERROR
        } else {
            match verbose {
                0 => tracing::Level::WARN,
                1 => tracing::Level::INFO,
                2 => tracing::Level::DEBUG,
                _ => tracing::Level::TRACE,
            }
        };
        Self { format, level }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("WW_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("ww_core={}", config.level)));

    match config.format {
        LogFormat::Human => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogFormat::Jsonl => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flag_mapping() {
        assert_eq!(
            LogConfig::from_flags(0, false, LogFormat::Human).level,
            tracing::Level::WARN
        );
        assert_eq!(
            LogConfig::from_flags(1, false, LogFormat::Human).level,
            tracing::Level::INFO
        );
        assert_eq!(
            LogConfig::from_flags(3, false, LogFormat::Human).level,
            tracing::Level::TRACE
        );
        assert_eq!(
            LogConfig::from_flags(2, true, LogFormat::Human).level,
            tracing::Level::ERROR
        );
    }

    #[test]
    fn format_parsing() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Jsonl);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
