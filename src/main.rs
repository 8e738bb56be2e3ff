use brand_export::utils::logger;
use brand_export::{CliConfig, RunSummary};
use clap::Parser;

async fn execute(cli: &CliConfig) -> brand_export::Result<RunSummary> {
    let config = cli.resolve()?;
    tracing::debug!("Resolved config: {:?}", config);
    brand_export::run(config).await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting brand-export");
    tracing::debug!("CLI args: {:?}", cli);

    match execute(&cli).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Exported {} of {} records to {}",
                summary.exported,
                summary.fetched,
                summary.output_path
            );
            println!("📁 Output saved to: {}", summary.output_path);
        }
        Err(e) => {
            tracing::error!("❌ {} stage failed: {}", e.stage(), e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
