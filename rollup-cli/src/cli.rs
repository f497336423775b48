//! Contains structures and functionality for the binary
use std::path::PathBuf;

/// Default field separator.
const DEFAULT_DELIMITER: char = ',';

/// Aggregation performed on the input records.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Count, minimum, maximum and mean of the value column, per key if a key column is given
    Summary,
    /// Number of occurrences of every key (the value column if no key column is given)
    Tally,
    /// Entries of the value column, grouped by the key column
    Gather,
}

impl Command {
    /// Name of the command as given on the command line
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Tally => "tally",
            Self::Gather => "gather",
        }
    }
}

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `ROLLUP_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("ROLLUP_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                3 => log::LevelFilter::Trace,
                _ => log::LevelFilter::Warn,
            });
        }
        builder.init();
    }
}

/// Cli arguments describing how input records are split into columns
#[derive(clap::Args, Debug)]
pub(crate) struct RecordArgs {
    /// Character separating the fields of a record
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    pub(crate) delimiter: char,
    /// Zero-based index of the column to group by
    #[arg(short, long = "key-column")]
    pub(crate) key_column: Option<usize>,
    /// Zero-based index of the column to aggregate
    #[arg(short = 'c', long = "value-column", default_value_t = 0)]
    pub(crate) value_column: usize,
    /// Ignore the first line of the input
    #[arg(long = "skip-header")]
    pub(crate) skip_header: bool,
}

/// Rollup CLI
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct CliApp {
    /// Aggregation to perform
    #[arg(value_enum)]
    pub(crate) command: Command,
    /// Input file with one record per line; standard input is read if omitted
    #[arg(value_parser)]
    pub(crate) input: Option<PathBuf>,
    /// Arguments related to the input records
    #[command(flatten)]
    pub(crate) records: RecordArgs,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}
