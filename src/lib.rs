use tokio::time::Duration;
use tracing::{debug, info, warn};

pub mod config;
pub mod fetch;
pub mod notify;
pub mod sscom;
pub mod store;

mod error;

pub use error::MonitorError;

use fetch::Fetch;
use notify::Notify;
use sscom::{extract_listings, INDEX_URL};
use store::KnownListings;

/// One poll: fetch the index, extract listings, notify and persist every
/// listing not yet in the store. Returns how many notifications were
/// attempted.
///
/// A listing is marked known once its notification has been attempted; a
/// failed delivery is logged but never retried.
pub async fn run_cycle<F, N>(
    fetcher: &F,
    notifier: &N,
    store: &mut KnownListings,
) -> Result<usize, MonitorError>
where
    F: Fetch,
    N: Notify,
{
    let index_html = match fetcher.get(INDEX_URL).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Error fetching index page: {}", e);
            return Ok(0);
        }
    };

    let listings = extract_listings(fetcher, &index_html).await;
    debug!("Extracted {} listings", listings.len());

    let mut notified = 0;
    for listing in listings {
        if store.contains(&listing.id) {
            continue;
        }

        info!("New ad found: {}", listing);
        if let Err(e) = notifier.notify(&listing).await {
            warn!("Error sending notification for {}: {}", listing.title, e);
        }

        store.insert(&listing.id);
        store.save()?;
        notified += 1;
    }

    Ok(notified)
}

/// Endless fixed-interval polling over [`run_cycle`]. The first cycle runs
/// immediately; cancellation is the caller's business (see `main`).
pub async fn run_monitor<F, N>(
    fetcher: &F,
    notifier: &N,
    store: &mut KnownListings,
    poll_interval: Duration,
) -> Result<(), MonitorError>
where
    F: Fetch,
    N: Notify,
{
    let mut ticker = tokio::time::interval(poll_interval);
    loop {
        ticker.tick().await;
        info!("Checking for new ads...");
        run_cycle(fetcher, notifier, store).await?;
    }
}
