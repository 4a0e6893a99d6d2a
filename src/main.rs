use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use quizbox::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    quizbox::logging::init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    tracing::info!(
        url = %config.source.url,
        question_seconds = config.quiz.question_seconds,
        "Starting quiz"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let ledger = quizbox::ui::runtime::run(&config, runtime.handle())
        .context("Terminal UI failed")?;
    runtime.shutdown_timeout(Duration::from_millis(200));

    if cli.print_results {
        let json = serde_json::to_string_pretty(&ledger).context("Failed to encode results")?;
        println!("{json}");
    }
    Ok(())
}
