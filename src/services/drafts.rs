//! Draft-persistence collaborator stub. Logs the snapshot it was asked to keep.

use async_trait::async_trait;
use log::info;

use super::collaborator::{CollaboratorError, DraftSink};
use crate::core::draft::DraftSnapshot;

pub struct LoggingDraftSink;

#[async_trait]
impl DraftSink for LoggingDraftSink {
    async fn save(&self, snapshot: &DraftSnapshot) -> Result<(), CollaboratorError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| CollaboratorError::Rejected(format!("unserializable draft: {e}")))?;
        info!("Saving draft for session {}: {json}", snapshot.session_id);
        Ok(())
    }
}
