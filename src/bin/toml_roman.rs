use clap::Parser;
use roman_numerals::config::toml_config::TomlConfig;
use roman_numerals::core::{ConfigProvider, InvalidInputPolicy};
use roman_numerals::utils::{logger, validation::Validate};
use roman_numerals::{ConversionEngine, ConversionPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-roman")]
#[command(about = "Roman numeral batch conversion driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "roman-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override error_handling.on_invalid from config
    #[arg(long)]
    skip_invalid: Option<bool>,

    /// Show what would be converted without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(args.verbose, config.log_level(), config.json_logs());

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(skip) = args.skip_invalid {
        let policy = if skip {
            InvalidInputPolicy::Skip
        } else {
            InvalidInputPolicy::Fail
        };
        config.set_invalid_input_policy(policy);
        tracing::info!("🔧 Invalid input policy overridden to: {:?}", policy);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Some(file) = config.input.file.take() {
        config.input.file = Some(std::env::current_dir()?.join(file).display().to_string());
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ConversionPipeline::new(storage, config);
    let engine = ConversionEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!(
                "✅ Converted {} numbers ({} skipped)",
                summary.result.conversions.len(),
                summary.result.rejections.len()
            );
            for location in &summary.written {
                println!("📁 Output saved to: {}", location);
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }
    println!("  Inline numbers: {}", config.input.numbers.len());
    if let Some(file) = config.input_file() {
        println!("  Input file: {}", file);
    }
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output.formats.join(", "));
    println!("  On invalid: {:?}", config.invalid_input_policy());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
