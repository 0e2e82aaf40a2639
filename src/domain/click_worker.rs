//! Background worker applying click counter updates.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Outcome of a single click update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Recorded,
    Failed,
    TimedOut,
}

/// Consumes click events until every sender is dropped.
///
/// At most `concurrency` updates run at once; each is bounded by `timeout`.
/// Failed or timed-out updates are logged and counted, never retried. On
/// shutdown the worker waits for updates already in flight before returning.
pub async fn run_click_worker<L>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<L>,
    concurrency: usize,
    timeout: Duration,
) where
    L: LinkRepository + ?Sized + 'static,
{
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let repository = repository.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            record_click(repository.as_ref(), &event, timeout).await
        });

        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}

    info!("Click worker stopped");
}

/// Applies one click update under `timeout`.
pub async fn record_click<L>(repository: &L, event: &ClickEvent, timeout: Duration) -> ClickOutcome
where
    L: LinkRepository + ?Sized,
{
    match tokio::time::timeout(timeout, repository.increment_clicks(event.link_id)).await {
        Ok(Ok(())) => {
            metrics::counter!("clicks_recorded_total").increment(1);
            debug!(code = %event.code, "Click recorded");
            ClickOutcome::Recorded
        }
        Ok(Err(e)) => {
            metrics::counter!("clicks_failed_total").increment(1);
            warn!(code = %event.code, error = %e, "Failed to record click");
            ClickOutcome::Failed
        }
        Err(_) => {
            metrics::counter!("clicks_failed_total").increment(1);
            warn!(
                code = %event.code,
                timeout_ms = timeout.as_millis() as u64,
                "Click update timed out"
            );
            ClickOutcome::TimedOut
        }
    }
}
