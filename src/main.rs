use clap::Parser;
use roman_numerals::utils::{logger, validation::Validate};
use roman_numerals::{CliConfig, ConversionEngine, ConversionPipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // Storage is rooted at the output directory; the input path stays relative to the cwd.
    if let Some(input) = config.input.take() {
        config.input = Some(std::env::current_dir()?.join(input).display().to_string());
    }

    let storage = LocalStorage::new(config.output_path.clone().unwrap_or_else(|| ".".to_string()));
    let pipeline = ConversionPipeline::new(storage, config);
    let engine = ConversionEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            for conversion in &summary.result.conversions {
                println!("{}\t{}", conversion.number, conversion.numeral);
            }
            for rejection in &summary.result.rejections {
                eprintln!(
                    "⚠️  Skipped '{}' ({}:{}): {}",
                    rejection.raw, rejection.origin, rejection.line, rejection.reason
                );
            }
            for location in &summary.written {
                eprintln!("📁 Output saved to: {}", location);
            }
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
