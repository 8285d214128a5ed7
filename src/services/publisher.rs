//! Publish collaborator stub. Logs the listing payload and accepts it.

use async_trait::async_trait;
use log::{info, warn};
use uuid::Uuid;

use super::collaborator::{CollaboratorError, ListingPublisher};
use crate::core::draft::DraftSnapshot;
use crate::core::publish::ListingReceipt;

pub struct LoggingPublisher;

#[async_trait]
impl ListingPublisher for LoggingPublisher {
    async fn submit(&self, snapshot: &DraftSnapshot) -> Result<ListingReceipt, CollaboratorError> {
        match serde_json::to_string(snapshot) {
            Ok(json) => info!("Publishing listing: {json}"),
            Err(e) => warn!("Could not serialize listing for the log: {e}"),
        }
        let receipt = ListingReceipt {
            listing_id: format!("lst_{}", Uuid::new_v4().simple()),
        };
        info!(
            "Listing {} published (session {})",
            receipt.listing_id, snapshot.session_id
        );
        Ok(receipt)
    }
}
