use clap::Parser;
use message_insight::app::report::{render_all, OutputFormat};
use message_insight::core::{ConfigProvider, Storage};
use message_insight::utils::{logger, validation::Validate};
use message_insight::{InsightEngine, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-insight")]
#[command(about = "Run a batch of message queries described in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "insight.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the input file from config
    #[arg(long)]
    file: Option<String>,

    /// Dry run - show the queries without loading the file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(file) = args.file {
        tracing::info!("🔧 Input overridden to: {}", file);
        config.input.path = Some(file);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let queries = config.build_queries()?;
    display_config_summary(&config, queries.len());

    if args.dry_run {
        eprintln!("🔍 Dry run:");
        for query in &queries {
            eprintln!("  {:?}", query);
        }
        return Ok(());
    }

    let format: OutputFormat = config.output_format().parse()?;
    let engine = InsightEngine::new(LocalStorage::default());
    engine.ingest(config.input_path()).await?;

    let outcomes: Vec<_> = queries.iter().map(|query| engine.run(query)).collect();
    let rendered = render_all(&outcomes, format)?;

    match config.output_path() {
        Some(path) => {
            engine.storage().write_file(path, rendered.as_bytes()).await?;
            eprintln!("📁 Output saved to: {}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

// 摘要寫到 stderr，stdout 只放查詢結果
fn display_config_summary(config: &TomlConfig, query_count: usize) {
    eprintln!("📋 Analysis: {}", config.analysis.name);
    if let Some(description) = &config.analysis.description {
        eprintln!("  {}", description);
    }
    eprintln!("  Input: {}", config.input_path());
    eprintln!("  Queries: {}", query_count);
    eprintln!("  Format: {}", config.output_format());
    eprintln!();
}
