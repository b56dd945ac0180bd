use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::TimeConverter;
use infrastructure::SimplifierConfig;
use snak_cli::{DEFAULT_LOG_FILTER, Document};

#[derive(Parser, Debug)]
#[command(author, version, about = "Simplify Wikibase snaks and data values", long_about = None)]
struct Args {
    /// JSON file to read (stdin when omitted)
    #[arg(long)]
    input: Option<String>,

    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Datatype for a bare data value (defaults to the value's own type)
    #[arg(long)]
    datatype: Option<String>,

    /// Keep full structures instead of simplified scalars
    #[arg(long)]
    keep_rich_values: bool,

    /// Prefix prepended to entity ids, e.g. `wd`
    #[arg(long)]
    entity_prefix: Option<String>,

    /// Time converter: iso, epoch, simple-day or none
    #[arg(long)]
    time_converter: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing; stdout is reserved for the output document
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // 1. Load configuration, CLI flags take precedence
    let config = SimplifierConfig::load(&args.config_dir)?;
    let mut options = config.options.to_options();
    if args.keep_rich_values {
        options.keep_rich_values = true;
    }
    if let Some(prefix) = args.entity_prefix {
        options.entity_prefix = Some(prefix);
    }
    if let Some(key) = args.time_converter {
        options.time_converter = TimeConverter::named(key);
    }
    debug!(?options, "Resolved simplification options");

    // 2. Read and classify the input
    let raw = read_input(args.input.as_deref())?;
    let json: serde_json::Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let document = Document::detect(json)?;
    info!(kind = document.kind(), "Simplifying input");

    if args.datatype.is_some() && !matches!(document, Document::DataValue(_)) {
        warn!("--datatype only applies to bare data values, ignoring it");
    }

    // 3. Simplify and print
    let simplified = document.simplify(args.datatype.as_deref(), &options)?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&simplified)?
    } else {
        serde_json::to_string(&simplified)?
    };
    println!("{}", output);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {:?}", e);
        std::process::exit(1);
    }
}
