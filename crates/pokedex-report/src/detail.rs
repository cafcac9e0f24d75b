/// Concurrent, best-effort retrieval of detail payloads.
use catalog_common::client::{CatalogClient, SummaryRecord};
use catalog_common::error::ClientError;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{info, warn};

/// Outcome of fetching every summary's detail record.
#[derive(Debug, Default)]
pub struct DetailBatch {
    /// Successfully fetched payloads, in the same relative order as the summaries.
    pub payloads: Vec<Value>,
    /// Number of summaries whose detail request failed.
    pub dropped: usize,
}

/// Fetch one detail record per summary with at most `max_concurrency` requests in flight.
///
/// Failed requests are logged and dropped, never retried. The batch itself cannot fail.
pub async fn fetch_details(
    client: &CatalogClient,
    summaries: &[SummaryRecord],
    max_concurrency: usize,
) -> DetailBatch {
    info!(
        requests = summaries.len(),
        max_concurrency, "fetching detail records"
    );

    let outcomes: Vec<Result<Value, ClientError>> = stream::iter(summaries)
        .map(|summary| fetch_one(client, summary))
        .buffered(max_concurrency.max(1))
        .collect()
        .await;

    let mut batch = DetailBatch {
        payloads: Vec::with_capacity(outcomes.len()),
        dropped: 0,
    };
    for outcome in outcomes {
        match outcome {
            Ok(payload) => batch.payloads.push(payload),
            Err(_) => batch.dropped += 1,
        }
    }

    if batch.dropped > 0 {
        warn!(
            fetched = batch.payloads.len(),
            dropped = batch.dropped,
            "some detail records could not be fetched"
        );
    } else {
        info!(fetched = batch.payloads.len(), "all detail records fetched");
    }
    batch
}

async fn fetch_one(client: &CatalogClient, summary: &SummaryRecord) -> Result<Value, ClientError> {
    client
        .get_detail(&summary.detail_url)
        .await
        .inspect_err(|e| {
            warn!(
                name = %summary.name,
                url = %summary.detail_url,
                status = ?e.status(),
                error = %e,
                "detail request was unsuccessful, dropping entry"
            )
        })
}
