/// The fetch-and-aggregate run: listing, details, projection, grouping, report.
use std::io::Write;

use catalog_common::client::CatalogClient;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::{detail, grouping, listing, projector, report};

/// Counts from one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub listed: usize,
    pub fetched: usize,
    pub dropped: usize,
    pub projected: usize,
    pub categories: usize,
}

pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, AppError> {
    let client = CatalogClient::new(config.client_config())?;

    // 1. Summaries from every listing page
    let summaries = listing::fetch_summaries(&client, config.page_size, config.start_offset).await?;

    // 2. Detail payloads, failures dropped
    let batch = detail::fetch_details(&client, &summaries, config.max_concurrency).await;

    // 3. Flatten, then group by type
    let records = projector::project(&batch.payloads)?;
    let categories = grouping::extract_categories(&records);
    let grouped = grouping::group(&categories, &records);
    info!(
        records = records.len(),
        categories = categories.len(),
        "records grouped"
    );

    // 4. Report
    report::render(&grouped, out)?;

    Ok(RunSummary {
        listed: summaries.len(),
        fetched: batch.payloads.len(),
        dropped: batch.dropped,
        projected: records.len(),
        categories: categories.len(),
    })
}
