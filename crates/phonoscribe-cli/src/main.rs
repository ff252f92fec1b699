use anyhow::Result;
use clap::Parser;
use phonoscribe_model::PipelineConfig;

mod pipeline;

#[derive(Parser)]
#[command(name = "phonoscribe")]
#[command(about = "Scrapes phonetic transcriptions for a word list into a spreadsheet")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Pipeline configuration file (JSON); compiled-in defaults if omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Input spreadsheet path (overrides the config)
    #[arg(short, long)]
    input: Option<String>,

    /// Output spreadsheet path (overrides the config)
    #[arg(short, long)]
    output: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTTP internals at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,hyper_util=info,rustls=info",
        LogLevel::Trace => "trace,hyper_util=info,rustls=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path, "Loading pipeline config");
            PipelineConfig::load(path)?
        }
        None => PipelineConfig::default(),
    };
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let summary = pipeline::run(&config).await?;

    tracing::info!("{} words have been matched with their phonetics", summary.matched);
    tracing::info!("{} words failed", summary.failed);

    Ok(())
}
