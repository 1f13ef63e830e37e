mod cli_error;
mod normalize;
use clap::Parser;
use clap::Subcommand;
use cli_error::CliError;
use normalize::normalize_lines;
use normalize::Line;
use normalize::Number;
use normalize::Sequence;
use normalize::Text;
use phantom_types::Matching;
use phantom_types::Tagged;
use phantom_types::Truncated;
use phantom_types::WithinRange;
use simple_log::log::info;
use simple_log::log::warn;
use simple_log::LogConfigBuilder;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

/// Reads one JSON value per line, keeps each within a constraint and prints the normalized values.
#[derive(Parser, Debug)]
struct Args {
    /// File with one JSON value per line. Reads stdin if no path is provided.
    #[arg(short, long, default_value = None)]
    path: Option<PathBuf>,

    /// Write the log to this file. Logs to the console if no path is provided.
    #[arg(long, default_value = None)]
    log_path: Option<PathBuf>,

    /// One of trace, debug, info, warn or error.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clamp integers into the range lower..=upper.
    Clamp {
        #[arg(short, long, allow_hyphen_values = true)]
        lower: i64,

        #[arg(short, long, allow_hyphen_values = true)]
        upper: i64,

        /// Value held before the first line is read. Defaults to zero.
        #[arg(short, long, allow_hyphen_values = true, default_value = None)]
        initial: Option<i64>,
    },

    /// Cut strings and arrays down to at most max-length elements.
    Truncate {
        #[arg(short, long, allow_hyphen_values = true)]
        max_length: i64,
    },

    /// Keep strings that fully match a regular expression. A line that does not match echoes
    /// the last line that did.
    Match {
        #[arg(short, long)]
        pattern: String,

        /// Value held until the first matching line. Defaults to the empty string.
        #[arg(short, long, default_value = None)]
        initial: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    setup_logger(args.log_path.as_ref(), &args.log_level)?;

    let input: Box<dyn BufRead> = if let Some(p) = &args.path {
        info!("using data from file {:?}", p);
        Box::new(BufReader::new(File::open(p)?))
    } else {
        info!("using data from stdin");
        Box::new(std::io::stdin().lock())
    };
    let output = std::io::stdout().lock();

    let count = match args.command {
        Commands::Clamp {
            lower,
            upper,
            initial,
        } => {
            info!("clamping into {lower}..={upper}");
            let initial = Number::new(initial.unwrap_or_default());
            let mut range =
                WithinRange::new(initial, lower..=upper).inspect_err(|e| warn!("{e}"))?;
            normalize_lines(input, output, |line: Option<Number>| {
                if let Some(n) = line {
                    range.set(n);
                }
                *range.get()
            })?
        }

        Commands::Truncate { max_length } => {
            info!("truncating to {max_length} elements");
            let mut text =
                Truncated::<Text>::from_identity(max_length).inspect_err(|e| warn!("{e}"))?;
            let mut items =
                Truncated::<Tagged<Line, Vec<serde_json::Value>>>::from_identity(max_length)?;
            normalize_lines(input, output, |line: Option<Sequence>| match line {
                Some(Sequence::Text(t)) => {
                    text.set(t);
                    Sequence::Text(text.get().clone())
                }
                Some(Sequence::Items(v)) => {
                    items.set(v);
                    Sequence::Items(items.get().clone())
                }
                None => Sequence::Text(text.get().clone()),
            })?
        }

        Commands::Match { pattern, initial } => {
            info!("matching against {pattern}");
            let mut matching = match initial {
                Some(i) => Matching::new(Text::from(i), &pattern),
                None => Matching::<Text>::from_identity(&pattern),
            }
            .inspect_err(|e| warn!("{e}"))?;
            normalize_lines(input, output, |line: Option<Text>| {
                if let Some(t) = line {
                    matching.set(t);
                }
                matching.get().clone()
            })?
        }
    };

    info!("normalized {count} lines");
    Ok(())
}

fn setup_logger(log_path: Option<&PathBuf>, level: &str) -> Result<(), CliError> {
    let builder = LogConfigBuilder::builder()
        .size(100)
        .roll_count(10)
        .time_format("%Y-%m-%d %H:%M:%S")
        .level(level)
        .map_err(|e| CliError::Logger(e.to_string()))?;

    let config = match log_path {
        Some(p) => {
            let log_path = p.to_string_lossy().into_owned();
            builder.path(&log_path).output_file().build()
        }
        None => builder.output_console().build(),
    };

    simple_log::new(config).map_err(|e| CliError::Logger(e.to_string()))
}
