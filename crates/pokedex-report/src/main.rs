mod config;
mod detail;
mod error;
mod grouping;
mod listing;
mod model;
mod pipeline;
mod projector;
mod report;
#[cfg(test)]
mod test_support;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting pokedex-report");

    let config = Config::from_env()?;
    info!(
        base_url = %config.base_url,
        page_size = config.page_size,
        start_offset = config.start_offset,
        max_concurrency = config.max_concurrency,
        timeout_ms = config.request_timeout.as_millis(),
        "configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = pipeline::run(&config, &mut out).await.inspect_err(|e| {
        tracing::error!(error = %e, "report run failed");
    })?;

    info!(
        listed = summary.listed,
        fetched = summary.fetched,
        dropped = summary.dropped,
        projected = summary.projected,
        categories = summary.categories,
        "report complete"
    );
    Ok(())
}
