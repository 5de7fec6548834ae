use clap::Parser;
use colored::*;
use error_common::{log_error, CareError};
use ops_cli::{exit_status, App, AppConfig, Cli};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            let status = match err.downcast_ref::<CareError>() {
                Some(care) => {
                    log_error("sagarcare", care);
                    exit_status(care)
                }
                None => 2,
            };
            ExitCode::from(status)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = AppConfig::load(&cli.config).map_err(|e| CareError::Config(e.to_string()))?;
    if let Some(url) = cli.database {
        config.store.url = url;
    }
    if cli.verbose {
        config.logging.log_level = "debug".to_string();
    }

    logger_redacted::init_logging(&config.logging)?;
    debug!(config = %cli.config.display(), "Configuration loaded");

    let app = App::open(&config).await?;
    let result = app.execute(cli.command).await;
    app.close().await;

    Ok(result?)
}
