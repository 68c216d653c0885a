use clap::Parser;
use message_insight::app::report::{render, OutputFormat};
use message_insight::core::{ConfigProvider, Storage};
use message_insight::utils::error::{ErrorSeverity, InsightError};
use message_insight::utils::{logger, validation::Validate};
use message_insight::{CliConfig, InsightEngine, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting message-insight CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

async fn run(config: &CliConfig) -> Result<(), InsightError> {
    config.validate()?;
    let format: OutputFormat = config.output_format().parse()?;

    let engine = InsightEngine::new(LocalStorage::default());
    engine.ingest(config.input_path()).await?;

    let outcome = engine.run_selector(&config.action, config.cadena.as_deref(), config.top_n())?;
    let rendered = render(&outcome, format)?;

    match config.output_path() {
        Some(path) => {
            engine.storage().write_file(path, rendered.as_bytes()).await?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn exit_code(e: &InsightError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 使用者查詢錯誤
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}
