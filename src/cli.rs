use clap::Parser;
use std::path::PathBuf;

use crate::core::Error;

#[derive(Parser, Debug)]
#[command(name = "spreader-detector")]
#[command(about = "Estimate infection probabilities from a contact log and report risk tiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the roster (`<name> <id> <age>` per line)
    #[arg(value_name = "PEOPLE")]
    pub people: PathBuf,

    /// Path to the contact log (seed id, then `<infector> <infected> <distance> <duration>` groups)
    #[arg(value_name = "MEETINGS")]
    pub meetings: PathBuf,

    /// Configuration file (defaults to the nearest .spreader-detector.toml)
    #[arg(long, env = "SPREADER_DETECTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON tier summary to stdout after a successful run
    #[arg(long)]
    pub summary: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Log filter matching the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Map a clap parse failure onto the crate's usage error.
///
/// Help and version requests are not failures and yield `None`; the caller
/// lets clap print them and exit normally.
pub fn usage_error(err: &clap::Error) -> Option<Error> {
    if !err.use_stderr() {
        return None;
    }
    Some(Error::Usage(err.to_string().trim_end().to_string()))
}
