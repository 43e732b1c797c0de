use clap::Parser;
use rwa_dashboard::config::data_file::{load_reference_data, to_toml_string};
use rwa_dashboard::utils::error::{DashboardError, ErrorSeverity};
use rwa_dashboard::utils::{logger, validation::Validate};
use rwa_dashboard::{CliConfig, DashboardPipeline, LocalStorage, ReferenceData, ReportEngine};

fn exit_with(e: &DashboardError) -> ! {
    tracing::error!(
        "❌ Dashboard build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting rwa-dashboard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if config.print_data_template {
        let data = match &config.data {
            Some(path) => load_reference_data(path),
            None => Ok(ReferenceData::builtin()),
        };
        match data.and_then(|data| to_toml_string(&data)) {
            Ok(text) => print!("{}", text),
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = DashboardPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            print!("{}", outcome.rendered);
            if let Some(path) = outcome.export_path {
                eprintln!("📁 Export saved to: {}", path);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
