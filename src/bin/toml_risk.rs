use clap::Parser;
use social_risk::config::toml_config::TomlConfig;
use social_risk::core::ConfigProvider;
use social_risk::utils::error::ErrorSeverity;
use social_risk::utils::{logger, validation::Validate};
use social_risk::{AnalysisEngine, LocalStorage, MinutesPipeline};

#[derive(Parser)]
#[command(name = "toml-risk")]
#[command(about = "Social risk analysis driven by a TOML project file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "risk-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be analyzed without running
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based social-risk tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    let storage = LocalStorage::new(".");
    let pipeline = match MinutesPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let engine = AnalysisEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Analysis completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Analysis completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Analysis failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Project: {}", config.project.name);

    if let Some(technology) = config.technology_type() {
        println!("  Technology: {}", technology);
    }
    if let Some(location) = config.project_location() {
        println!("  Location: {}", location);
    }
    if let Some(engagement) = config.engagement_level() {
        println!("  Engagement: {}", engagement);
    }

    println!("  Input: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Stopword language: {}", config.language());

    if !config.extra_stopwords().is_empty() {
        println!("  Extra stopwords: {}", config.extra_stopwords().join(", "));
    }

    println!();
}
