//! # Collaborators
//!
//! Everything the wizard delegates outside the process: the camera and photo
//! library, the location sensor, the listing backend and draft storage. Each is
//! an async trait so the host adapter can run it off the event thread; the
//! implementations here are stubs that log what a real backend would receive.

pub mod collaborator;
pub mod drafts;
pub mod location;
pub mod media;
pub mod publisher;

use std::sync::Arc;

pub use collaborator::{
    Capability, CollaboratorError, DraftSink, ListingPublisher, Locator, MediaPicker, MediaSource,
};
pub use drafts::LoggingDraftSink;
pub use location::StubLocator;
pub use media::StubMediaPicker;
pub use publisher::LoggingPublisher;

use crate::core::config::ResolvedConfig;

/// The set of collaborators one wizard session talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub media: Arc<dyn MediaPicker>,
    pub locator: Arc<dyn Locator>,
    pub publisher: Arc<dyn ListingPublisher>,
    pub drafts: Arc<dyn DraftSink>,
}

impl Collaborators {
    /// Stub collaborators configured from the resolved config.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            media: Arc::new(StubMediaPicker::from_config(config)),
            locator: Arc::new(StubLocator::from_config(config)),
            publisher: Arc::new(LoggingPublisher),
            drafts: Arc::new(LoggingDraftSink),
        }
    }
}
