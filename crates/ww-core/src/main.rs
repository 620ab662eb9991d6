//! Whale Watch - sighting inference CLI
//!
//! Thin shell over the engine:
//! - Loads the sighting history and engine parameters
//! - Dispatches one query per subcommand
//! - Prints a single payload (text or JSON) on stdout
//!
//! Logs and prompts go to stderr; exit codes are a stable contract
//! (see `exit_codes`).

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use ww_common::{Error, GeoPoint, OutputFormat, Result};
use ww_core::collect;
use ww_core::config::Params;
use ww_core::engine::SightingEngine;
use ww_core::exit_codes::ExitCode;
use ww_core::logging::{init_logging, LogConfig, LogFormat};
use ww_core::output::{self, MonthReport};

/// Whale Watch - where is the whale, and which whale is it?
#[derive(Parser)]
#[command(name = "ww-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to the sighting record CSV
    #[arg(long, global = true, env = "WW_DATA")]
    data: Option<PathBuf>,

    /// Path to an engine parameter file (JSON); falls back to WW_PARAMS
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    format: OutputFormat,

    /// Fixed RNG seed for reproducible probability estimates
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log format (human or jsonl)
    #[arg(long, global = true, default_value = "human")]
    log_format: LogFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Most likely encounter location for a month
    Locate {
        /// Month to search, 1-12; prompted for when omitted
        #[arg(long)]
        month: Option<u32>,
    },

    /// Encounter probability at a location during a month
    Probability {
        #[arg(long)]
        month: Option<u32>,
        /// Candidate latitude; defaults to the month's peak location
        #[arg(long, requires = "long", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Candidate longitude; defaults to the month's peak location
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        long: Option<f64>,
    },

    /// Most likely pod at a location during a month
    Pods {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long, requires = "long", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        long: Option<f64>,
    },

    /// Expected wait and tail probability until the next sighting
    Wait {
        /// Waiting time in hours for the tail-probability query
        #[arg(long, allow_hyphen_values = true)]
        hours: f64,
    },

    /// Full month report: location, probability, pods, waiting time
    Report {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long, requires = "long", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        long: Option<f64>,
        /// Tail-probability horizon in hours
        #[arg(long, default_value_t = 24.0)]
        hours: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig::from_flags(
        cli.global.verbose,
        cli.global.quiet,
        cli.global.log_format,
    );
    init_logging(&log_config);

    match run(cli) {
        Ok(payload) => {
            println!("{payload}");
            process::exit(ExitCode::Ok.into());
        }
        Err(error) => {
            eprintln!("error[{}]: {error}", error.code());
            process::exit(i32::from(ExitCode::from(&error)));
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut params = Params::resolve(cli.global.params.as_deref())?;
    if cli.global.seed.is_some() {
        params.seed = cli.global.seed;
    }

    let data_path = cli.global.data.as_ref().ok_or_else(|| {
        Error::InvalidArgument("no sighting data: pass --data or set WW_DATA".to_string())
    })?;
    let events = collect::load_sightings_path(data_path)?;
    let engine = SightingEngine::new(events, params)?;
    let format = cli.global.format;

    match cli.command {
        Commands::Locate { month } => {
            let month = resolve_month(month)?;
            let peak = engine.peak_location(month)?;
            output::render_peak(&peak, format)
        }
        Commands::Probability { month, lat, long } => {
            let month = resolve_month(month)?;
            let location = resolve_location(&engine, month, lat, long)?;
            let estimate = engine.encounter_probability(location, month)?;
            output::render_probability(&estimate, format)
        }
        Commands::Pods { month, lat, long } => {
            let month = resolve_month(month)?;
            let location = resolve_location(&engine, month, lat, long)?;
            let posterior = engine.pod_posterior(location, month)?;
            output::render_pods(&posterior, format)
        }
        Commands::Wait { hours } => {
            let wait = engine.waiting_time(hours)?;
            output::render_wait(&wait, format)
        }
        Commands::Report {
            month,
            lat,
            long,
            hours,
        } => {
            let month = resolve_month(month)?;
            let peak = engine.peak_location(month)?;
            let location = match (lat, long) {
                (Some(lat), Some(long)) => GeoPoint::new(lat, long),
                _ => peak.location,
            };
            let report = MonthReport {
                month,
                probability: engine.encounter_probability(location, month)?,
                pods: engine.pod_posterior(location, month)?,
                wait: engine.waiting_time(hours)?,
                peak,
            };
            output::render_report(&report, format)
        }
    }
}

/// Month from the flag, or an interactive prompt on stderr.
fn resolve_month(month: Option<u32>) -> Result<u32> {
    match month {
        Some(month) => Ok(month),
        None => {
            let stdin = std::io::stdin();
            let stderr = std::io::stderr();
            read_month(stdin.lock(), stderr.lock())
        }
    }
}

/// Explicit candidate location, or the month's computed peak.
fn resolve_location(
    engine: &SightingEngine,
    month: u32,
    lat: Option<f64>,
    long: Option<f64>,
) -> Result<GeoPoint> {
    match (lat, long) {
        (Some(lat), Some(long)) => Ok(GeoPoint::new(lat, long)),
        _ => Ok(engine.peak_location(month)?.location),
    }
}

/// Keep asking until the input parses as a month.
///
/// An explicit loop, not recursion: repeated bad input must not grow
/// the stack. EOF ends the session with an error.
fn read_month<R: BufRead, W: Write>(mut input: R, mut prompt_sink: W) -> Result<u32> {
    loop {
        let _ = write!(prompt_sink, "Month to search for sightings (1-12): ");
        let _ = prompt_sink.flush();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InvalidArgument(
                "no interactive input for month".to_string(),
            ));
        }
        match line.trim().parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => return Ok(month),
            _ => {
                let _ = writeln!(prompt_sink, "Invalid month {:?}; try again.", line.trim());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_month_accepts_first_valid_line() {
        let mut prompts = Vec::new();
        let month = read_month(Cursor::new("7\n"), &mut prompts).unwrap();
        assert_eq!(month, 7);
    }

    #[test]
    fn read_month_retries_until_valid() {
        let mut prompts = Vec::new();
        let month = read_month(Cursor::new("whale\n13\n 8 \n"), &mut prompts).unwrap();
        assert_eq!(month, 8);
        let text = String::from_utf8(prompts).unwrap();
        assert!(text.matches("try again").count() == 2);
    }

    #[test]
    fn read_month_errors_on_eof() {
        let mut prompts = Vec::new();
        let err = read_month(Cursor::new(""), &mut prompts).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
