mod logging;
mod settings;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use thiserror::Error;
use tracing::{error, info};

use settings::{DEFAULT_LOG_FILTER, LogFormat, Settings, load_settings};
use txgen_dispatch::{
    DEFAULT_REGION, DispatchError, DispatchOptions, Dispatcher, EventBridgeSink, SinkConfig,
    print_json_lines, write_send_banner,
};
use txgen_generate::{
    Catalog, GenerationError, TimeWindow, TransactionGenerator, random_seed, seeded_rng,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] settings::SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("{0}")]
    Dispatch(#[from] DispatchError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "txgen",
    version,
    about = "Generate synthetic retail transactions and print or send them"
)]
struct Cli {
    /// Set the action: 'print' to print JSON to the console, 'send' to send messages to EventBridge.
    #[arg(long, default_value = "")]
    action: String,
    /// Number of records to generate.
    #[arg(
        short = 'n',
        long = "count",
        alias = "n",
        default_value_t = 100,
        allow_negative_numbers = true
    )]
    count: i64,
    /// Set the AWS region.
    #[arg(long)]
    region: Option<String>,
    /// Seed for the random source; a fresh one is drawn and logged when absent.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional TOML settings file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log output format.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Print,
    Send,
}

impl Action {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "print" => Some(Self::Print),
            "send" => Some(Self::Send),
            _ => None,
        }
    }
}

/// Settings for one run after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    action: Action,
    count: i64,
    seed: u64,
    sink: SinkConfig,
    log_format: LogFormat,
    log_filter: String,
}

impl RunOptions {
    fn resolve(cli: Cli, action: Action, settings: Settings) -> Self {
        Self {
            action,
            count: cli.count,
            seed: cli.seed.unwrap_or_else(random_seed),
            sink: SinkConfig {
                region: cli
                    .region
                    .or(settings.region)
                    .unwrap_or_else(|| DEFAULT_REGION.to_string()),
                event_bus_name: settings.event_bus_name,
            },
            log_format: cli.log_format.or(settings.log_format).unwrap_or_default(),
            log_filter: settings
                .log_filter
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Long flags that are also accepted with a single dash (`-action print`).
const SINGLE_DASH_FLAGS: [&str; 6] = ["action", "count", "region", "seed", "config", "log-format"];

/// Rewrite single-dash long flags (`-region`, `-action=send`) into their
/// double-dash form. Every other argument passes through untouched.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(event = "run_finished", status = "failed", error = %err);
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the run from flags and settings, install logging, then execute.
/// An unrecognized action writes usage to `out` and does nothing else.
async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    let Some(action) = Action::parse(&cli.action) else {
        Cli::command().write_help(out)?;
        out.flush()?;
        return Ok(());
    };

    let settings = load_settings(cli.config.as_deref())?;
    let options = RunOptions::resolve(cli, action, settings);
    logging::init_logging(options.log_format, &options.log_filter).map_err(CliError::Logging)?;

    execute(&options, out).await
}

async fn execute<W: Write>(options: &RunOptions, out: &mut W) -> Result<(), CliError> {
    info!(
        event = "run_started",
        action = ?options.action,
        count = options.count,
        seed = options.seed
    );
    let timer = Instant::now();

    let catalog = Catalog::embedded()?;
    let window = TimeWindow::today(chrono::Utc::now());
    let mut rng = seeded_rng(options.seed);
    let transactions = TransactionGenerator::new(catalog, window).generate(options.count, &mut rng);

    match options.action {
        Action::Print => {
            let lines = print_json_lines(&transactions, out)?;
            info!(event = "records_printed", lines);
        }
        Action::Send => {
            write_send_banner(options.count, out)?;
            let sink = EventBridgeSink::connect(&options.sink).await?;
            info!(
                event = "session_created",
                region = %options.sink.region,
                event_bus = options.sink.event_bus_name.as_deref().unwrap_or("default")
            );
            let dispatcher = Dispatcher::new(sink, DispatchOptions::default())?;
            let report = dispatcher.send(&transactions, out).await?;
            info!(
                event = "records_sent",
                batches = report.batches,
                records = report.records_sent,
                failed_entries = report.failed_entries
            );
        }
    }

    let duration_ms = timer.elapsed().as_millis();
    info!(event = "run_finished", status = "success", duration_ms = duration_ms);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use txgen_core::{Transaction, validate_transaction};

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("txgen")
            .chain(args.iter().copied())
            .map(OsString::from);
        Cli::try_parse_from(normalize_args(argv)).expect("parse args")
    }

    fn print_options(count: i64) -> RunOptions {
        RunOptions {
            action: Action::Print,
            count,
            seed: 17,
            sink: SinkConfig::default(),
            log_format: LogFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn defaults_match_documented_flags() {
        let cli = parse(&[]);
        assert_eq!(cli.action, "");
        assert_eq!(cli.count, 100);
        assert_eq!(cli.region, None);
        assert_eq!(Action::parse(&cli.action), None);
    }

    #[test]
    fn accepts_negative_counts() {
        let cli = parse(&["--action", "print", "-n", "-3"]);
        assert_eq!(cli.count, -3);
        assert_eq!(Action::parse(&cli.action), Some(Action::Print));
    }

    #[test]
    fn unknown_action_is_not_an_action() {
        assert_eq!(Action::parse("publish"), None);
        assert_eq!(Action::parse("PRINT"), None);
        assert_eq!(Action::parse("send"), Some(Action::Send));
    }

    #[test]
    fn flags_override_settings() {
        let cli = parse(&["--action", "send", "--region", "us-west-2", "--seed", "42"]);
        let settings = Settings {
            region: Some("eu-central-1".to_string()),
            event_bus_name: Some("retail".to_string()),
            log_filter: None,
            log_format: Some(LogFormat::Json),
        };

        let options = RunOptions::resolve(cli, Action::Send, settings);
        assert_eq!(options.seed, 42);
        assert_eq!(options.sink.region, "us-west-2");
        assert_eq!(options.sink.event_bus_name.as_deref(), Some("retail"));
        assert_eq!(options.log_format, LogFormat::Json);
        assert_eq!(options.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn region_falls_back_to_default() {
        let cli = parse(&["--action", "send"]);
        let options = RunOptions::resolve(cli, Action::Send, Settings::default());
        assert_eq!(options.sink.region, DEFAULT_REGION);
        assert_eq!(options.log_format, LogFormat::Text);
    }

    #[test]
    fn accepts_single_dash_long_flags() {
        let cli = parse(&["-action", "send", "-region", "us-east-1", "-n", "25"]);
        assert_eq!(Action::parse(&cli.action), Some(Action::Send));
        assert_eq!(cli.region.as_deref(), Some("us-east-1"));
        assert_eq!(cli.count, 25);

        let cli = parse(&["-action=print", "-seed", "9", "-count", "-1"]);
        assert_eq!(Action::parse(&cli.action), Some(Action::Print));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.count, -1);
    }

    #[test]
    fn accepts_double_dash_n() {
        let cli = parse(&["--action", "print", "--n", "3"]);
        assert_eq!(cli.count, 3);
    }

    #[test]
    fn leaves_values_and_short_flags_alone() {
        let args: Vec<OsString> = ["txgen", "-n", "-5", "--region", "eu-west-1"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(normalize_args(args.clone()), args);
    }

    #[tokio::test]
    async fn unknown_action_prints_usage_only() {
        let mut out = Vec::new();
        run(parse(&["-action", "publish", "-n", "5"]), &mut out)
            .await
            .expect("usage fallback succeeds");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Usage: txgen"));
        assert!(text.contains("--action"));
        assert!(!text.contains("customerName"));
    }

    #[tokio::test]
    async fn print_with_zero_records_writes_nothing() {
        let mut out = Vec::new();
        execute(&print_options(0), &mut out).await.expect("print run");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn print_writes_one_valid_transaction_per_line() {
        let mut out = Vec::new();
        execute(&print_options(3), &mut out).await.expect("print run");

        let text = String::from_utf8(out).expect("utf8");
        let transactions: Vec<Transaction> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("parse transaction"))
            .collect();

        assert_eq!(transactions.len(), 3);
        for (index, tx) in transactions.iter().enumerate() {
            assert_eq!(tx.id, index.to_string());
            validate_transaction(tx).expect("printed transaction is valid");
        }
    }
}
