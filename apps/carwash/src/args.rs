//! Command-line arguments.
//!
//! Parsing never fails the process.  Tokens are scanned one at a time:
//! unrecognised ones are logged and skipped, so a stray word never costs the
//! flags around it.  The clap definition below supplies the help text.
//!
//! `-m` consumes the next token only if it starts with a readable integer.
//! Otherwise the bound falls back to the default and the token is scanned as
//! an argument of its own, so `-m -h` still shows help.

use std::ffi::OsString;
use std::io::Write;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing::{debug, warn};

use cw_core::{DEFAULT_MAX_MINUTES, SweepConfig};

/// How the sweep report is rendered on stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Simulate a car wash queue.
#[derive(Parser, Debug, Default)]
#[command(
    name = "carwash",
    disable_help_flag = true,
    help_template = "{usage-heading} {usage}\n{about}\n\n{all-args}\n"
)]
pub struct Args {
    /// Set simulation upper limit (default: 43200)
    #[arg(short = 'm', value_name = "MINUTES")]
    pub max_minutes: Option<u64>,

    /// Show this help message and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Fix the random seed for a reproducible report
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// `argv[0]`, echoed in the usage line.
    #[arg(skip)]
    pub program: String,
}

impl Args {
    /// Scan `argv` (program name first) token by token.
    pub fn parse_lenient<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut tokens = argv
            .into_iter()
            .map(|t| t.into().to_string_lossy().into_owned());
        let mut args = Self {
            program: tokens.next().unwrap_or_else(|| "carwash".to_owned()),
            ..Self::default()
        };

        let mut tokens = tokens.peekable();
        while let Some(token) = tokens.next() {
            match token.as_str() {
                "-h" | "--help" => args.help = true,

                // A trailing `-m` leaves the bound untouched.
                "-m" => match tokens.peek().map(|v| SweepConfig::try_max_minutes_from_arg(v)) {
                    Some(Some(minutes)) => {
                        args.max_minutes = Some(minutes);
                        tokens.next();
                    }
                    Some(None) => {
                        debug!("unreadable -m value; using default bound");
                        args.max_minutes = Some(DEFAULT_MAX_MINUTES);
                    }
                    None => {}
                },

                "--seed" => match tokens.peek().and_then(|v| v.parse::<u64>().ok()) {
                    Some(seed) => {
                        args.seed = Some(seed);
                        tokens.next();
                    }
                    None => warn!("--seed expects an unsigned integer; ignoring"),
                },

                "--format" => match tokens.peek().and_then(|v| ReportFormat::from_str(v, true).ok()) {
                    Some(format) => {
                        args.format = format;
                        tokens.next();
                    }
                    None => warn!("--format expects table, csv or json; ignoring"),
                },

                other => warn!(argument = other, "ignoring unrecognised argument"),
            }
        }
        args
    }

    /// Resolve the sweep configuration.  The last readable `-m` wins.
    pub fn sweep_config(&self) -> SweepConfig {
        let config = SweepConfig::new(self.max_minutes, self.seed);
        debug!(max_minutes = config.max_minutes, seed = ?config.seed, "resolved sweep config");
        config
    }

    /// Help text, opening with `Usage: <argv[0]> [-m MINUTES] [-h]`.
    pub fn usage_text(&self) -> String {
        Self::command()
            .override_usage(format!("{} [-m MINUTES] [-h]", self.program))
            .render_help()
            .to_string()
    }

    pub fn print_usage(&self) -> std::io::Result<()> {
        std::io::stdout().write_all(self.usage_text().as_bytes())
    }
}
