use std::fmt;

use async_trait::async_trait;

use crate::core::draft::{DraftSnapshot, Location, MediaRef};
use crate::core::publish::ListingReceipt;

/// Device capabilities the wizard asks permission for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
    Gallery,
    Location,
}

impl Capability {
    pub fn label(self) -> &'static str {
        match self {
            Capability::Camera => "camera",
            Capability::Gallery => "photo library",
            Capability::Location => "location",
        }
    }
}

/// Where new photos come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSource {
    Camera,
    Gallery,
}

impl MediaSource {
    pub fn capability(self) -> Capability {
        match self {
            MediaSource::Camera => Capability::Camera,
            MediaSource::Gallery => Capability::Gallery,
        }
    }
}

/// Errors reported by collaborators. None of them are fatal to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The user (or OS) refused access to a device capability.
    PermissionDenied(Capability),
    /// The collaborator could not produce a result (no fix, no backend).
    Unavailable(String),
    /// The collaborator answered but refused the request.
    Rejected(String),
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::PermissionDenied(cap) => {
                write!(f, "{} access was denied", cap.label())
            }
            CollaboratorError::Unavailable(msg) => write!(f, "unavailable: {msg}"),
            CollaboratorError::Rejected(msg) => write!(f, "rejected: {msg}"),
        }
    }
}

impl std::error::Error for CollaboratorError {}

#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Capture or pick up to `max` photos. May return fewer, including none
    /// when the user cancels the picker.
    async fn pick(&self, source: MediaSource, max: usize) -> Result<Vec<MediaRef>, CollaboratorError>;
}

#[async_trait]
pub trait Locator: Send + Sync {
    /// Current position, reverse-geocoded to a postal location.
    async fn locate(&self) -> Result<Location, CollaboratorError>;
}

#[async_trait]
pub trait ListingPublisher: Send + Sync {
    async fn submit(&self, snapshot: &DraftSnapshot) -> Result<ListingReceipt, CollaboratorError>;
}

#[async_trait]
pub trait DraftSink: Send + Sync {
    async fn save(&self, snapshot: &DraftSnapshot) -> Result<(), CollaboratorError>;
}
