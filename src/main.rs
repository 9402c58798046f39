use anyhow::{Context, Result};
use tracing::error;

use bff_server::app;
use bff_server::cli::{self, Command, MeasureArgs};
use bff_server::domains::perf::services::run_batch;
use bff_server::shared::clients::BffClient;
use bff_server::shared::config::AppConfig;
use bff_server::shared::logging;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("{err:#}");
        eprintln!("bff-server: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::parse(&args)? {
        Command::Help => cli::print_help(),
        Command::Version => println!("{}", env!("CARGO_PKG_VERSION")),
        Command::Serve => {
            logging::init()?;
            let config = AppConfig::from_env().context("Failed to load configuration")?;
            app::serve(config).await?;
        }
        Command::Measure(measure) => {
            logging::init()?;
            let config = AppConfig::from_env().context("Failed to load configuration")?;
            measure_batches(&config, measure).await?;
        }
    }

    Ok(())
}

// 순차/병렬 배치를 실행하고 JSON 으로 출력
async fn measure_batches(config: &AppConfig, measure: MeasureArgs) -> Result<()> {
    let url = measure.url.as_deref().unwrap_or(&config.bff_api_url);
    let client =
        BffClient::new(url).with_context(|| format!("Failed to create BFF client for {url}"))?;

    for &strategy in measure.mode.strategies() {
        let report = run_batch(&client, measure.count, strategy)
            .await
            .with_context(|| format!("{strategy} batch against {url} failed"))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
