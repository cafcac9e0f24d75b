/// Paginated retrieval of the catalog's summary records.
use catalog_common::client::{CatalogClient, SummaryRecord};
use catalog_common::error::ClientError;
use tracing::{info, warn};

use crate::error::AppError;

/// Walk the listing endpoint from `start_offset` until a page comes back shorter
/// than `page_size`, concatenating every page's entries.
///
/// A non-success status ends the walk early and the pages gathered so far are
/// returned as-is. Transport and decoding failures are fatal.
pub async fn fetch_summaries(
    client: &CatalogClient,
    page_size: u64,
    start_offset: u64,
) -> Result<Vec<SummaryRecord>, AppError> {
    let mut summaries = Vec::new();
    let mut offset = start_offset;

    loop {
        let page = match client.list_page(offset, page_size).await {
            Ok(page) => page,
            Err(ClientError::Upstream { status, .. }) => {
                warn!(
                    %status,
                    offset,
                    collected = summaries.len(),
                    "listing request was unsuccessful, keeping partial results"
                );
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let received = page.results.len() as u64;
        summaries.extend(page.results);
        info!(offset, received, total = summaries.len(), "listing page fetched");

        if received < page_size {
            break;
        }
        // Saves the trailing empty request when the total is an exact multiple.
        if page.count.is_some_and(|count| offset + received >= count) {
            break;
        }
        offset += page_size;
    }

    info!(
        base_url = %client.config().base_url,
        summaries = summaries.len(),
        "listing complete"
    );
    Ok(summaries)
}
