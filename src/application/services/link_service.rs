//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, generate_code};
use crate::utils::url_validator::validate_url;

/// Service for creating and resolving shortened links.
///
/// Codes are random and not checked against the store before insert; a
/// collision comes back from the repository as [`AppError::Conflict`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `click_sender` feeds the background click worker.
    pub fn new(link_repository: Arc<L>, click_sender: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            link_repository,
            click_sender,
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// The URL is stored exactly as given once it passes validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S) URL.
    /// Returns [`AppError::Conflict`] if the generated code is already taken.
    /// Returns [`AppError::Internal`] on random source or database errors.
    pub async fn create_short_link(&self, original_url: String) -> Result<Link, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let code = generate_code(CODE_LENGTH)?;
        let new_link = NewLink::with_random_id(code, original_url);

        let link = self.link_repository.create(new_link).await?;
        metrics::counter!("links_created_total").increment(1);
        debug!(code = %link.short_code, "Short link created");

        Ok(link)
    }

    /// Resolves a short code to its original URL.
    ///
    /// On a hit, a click event is queued for the background worker without
    /// waiting; if the queue is full or closed the click is dropped.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(link) = self.link_repository.find_by_code(code).await? else {
            debug!(code, "Short code not found");
            return Ok(None);
        };

        metrics::counter!("redirects_total").increment(1);
        self.dispatch_click(ClickEvent::new(link.id, link.short_code));

        Ok(Some(link.original_url))
    }

    /// Checks database connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    fn dispatch_click(&self, event: ClickEvent) {
        match self.click_sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(code = %event.code, "Click queue full, dropping click");
            }
            Err(TrySendError::Closed(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(code = %event.code, "Click queue closed, dropping click");
            }
        }
    }
}
