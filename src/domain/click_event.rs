//! Click event model for asynchronous click tracking.

use uuid::Uuid;

/// A request to bump one link's click counter.
///
/// Sent from [`crate::application::services::LinkService::resolve`] over a
/// bounded channel so the redirect response never waits on the database write.
/// Consumed by [`crate::domain::click_worker::run_click_worker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: Uuid,
    /// Short code that was followed; carried for logging only.
    pub code: String,
}

impl ClickEvent {
    pub fn new(link_id: Uuid, code: impl Into<String>) -> Self {
        Self {
            link_id,
            code: code.into(),
        }
    }
}
