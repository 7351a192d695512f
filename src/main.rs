use clap::Parser;
use number_classifier::adapters::http;
use number_classifier::utils::{logger, validation::Validate};
use number_classifier::{
    ConfigProvider, NumberClassifier, NumbersApiLookup, ServerConfig, TomlConfig,
};
use std::sync::Arc;

async fn run<C: ConfigProvider + Validate>(config: C) -> number_classifier::Result<()> {
    // 驗證配置
    config.validate()?;

    let trivia = NumbersApiLookup::from_config(&config)?;
    let classifier = Arc::new(NumberClassifier::new(trivia, config.reject_negatives()));

    tracing::info!(
        "Trivia endpoint: {} (timeout {:?})",
        config.trivia_endpoint(),
        config.trivia_timeout()
    );
    if classifier.rejects_negatives() {
        tracing::info!("Negative numbers will be rejected");
    }

    let addr = config.bind_address();
    http::serve(&addr, classifier).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = ServerConfig::parse();

    // 載入 TOML 配置 (若有指定)
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting number-classifier");

    let outcome = match file_config {
        Some(mut config) => {
            tracing::info!("📁 Using configuration file: {:?}", cli.config);
            if cli.reject_negatives {
                config.classification.reject_negatives = Some(true);
                tracing::info!("🔧 reject_negatives overridden to: true");
            }
            run(config).await
        }
        None => {
            if verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }
            run(cli).await
        }
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
