use clap::Parser;
use phone_masker::config::{load_options, CliOverrides};
use phone_masker::errors::AppError;
use phone_masker::logger::{self, LogFormat};
use phone_masker::metrics::{render, Metrics};
use phone_masker::stream::{mask_args, mask_stream, InputFormat};
use prometheus::Registry;
use std::path::Path;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser)]
#[command(name = "phone-mask", version)]
struct Cli {
    /// Numbers to mask. Reads stdin when none are given.
    phones: Vec<String>,

    #[arg(short, long, conflicts_with = "phones")]
    input: Option<String>,

    /// Options file (JSON or YAML)
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long)]
    mask_char: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    show_first: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    show_last: Option<i64>,

    /// Always-visible digit positions, e.g. `0-2,8-9`
    #[arg(long)]
    ranges: Option<String>,

    #[arg(long)]
    preserve_format: bool,

    /// Treat each input line as a JSON value
    #[arg(long)]
    json_lines: bool,

    /// Print prometheus metrics to stderr when done
    #[arg(long)]
    metrics: bool,

    /// `json` or `pretty`
    #[arg(long, default_value = "json")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logger::init_logging(cli.log_format);

    let overrides = CliOverrides {
        mask_char: cli.mask_char.clone(),
        show_first: cli.show_first,
        show_last: cli.show_last,
        ranges: cli.ranges.clone(),
        preserve_format: cli.preserve_format,
    };
    let options = load_options(cli.config.as_deref(), &overrides)?;

    let registry = Registry::new();
    let metrics = Metrics::new(&registry)?;

    let format = if cli.json_lines {
        InputFormat::JsonLines
    } else {
        InputFormat::Plain
    };
    let stdout = tokio::io::stdout();

    let summary = if !cli.phones.is_empty() {
        info!(count = cli.phones.len(), "masking numbers from arguments");
        mask_args(&cli.phones, stdout, &options, format).await?
    } else if let Some(path_str) = cli.input.as_deref() {
        info!("Reading numbers from {}", path_str);
        let file = tokio::fs::File::open(Path::new(path_str)).await?;
        mask_stream(BufReader::new(file), stdout, &options, format).await?
    } else {
        info!("Reading numbers from stdin");
        mask_stream(BufReader::new(tokio::io::stdin()), stdout, &options, format).await?
    };

    metrics.record(&summary);
    info!(
        lines = summary.lines,
        masked = summary.masked,
        bypassed = summary.bypassed,
        invalid_json = summary.invalid_json,
        "done"
    );

    if cli.metrics {
        eprint!("{}", render(&registry)?);
    }
    Ok(())
}
