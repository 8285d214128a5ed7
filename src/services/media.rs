//! # Stub Media Picker
//!
//! Stands in for the device camera and photo library. The camera "captures"
//! one freshly named photo per request; the gallery offers a configured list of
//! sample references. Either source can be configured as permission-denied.

use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use uuid::Uuid;

use super::collaborator::{CollaboratorError, MediaPicker, MediaSource};
use crate::core::config::ResolvedConfig;
use crate::core::draft::MediaRef;

pub struct StubMediaPicker {
    camera_permission: bool,
    gallery_permission: bool,
    gallery: Vec<MediaRef>,
    latency: Duration,
}

impl StubMediaPicker {
    pub fn new(camera_permission: bool, gallery_permission: bool, gallery: Vec<MediaRef>) -> Self {
        Self {
            camera_permission,
            gallery_permission,
            gallery,
            latency: Duration::ZERO,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            camera_permission: config.camera_permission,
            gallery_permission: config.gallery_permission,
            gallery: config.gallery.iter().map(MediaRef::new).collect(),
            latency: config.collaborator_latency,
        }
    }
}

#[async_trait]
impl MediaPicker for StubMediaPicker {
    async fn pick(&self, source: MediaSource, max: usize) -> Result<Vec<MediaRef>, CollaboratorError> {
        let allowed = match source {
            MediaSource::Camera => self.camera_permission,
            MediaSource::Gallery => self.gallery_permission,
        };
        if !allowed {
            warn!("{:?} permission denied", source);
            return Err(CollaboratorError::PermissionDenied(source.capability()));
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let picked: Vec<MediaRef> = match source {
            MediaSource::Camera if max > 0 => {
                vec![MediaRef::new(format!("camera-{}.jpg", Uuid::new_v4().simple()))]
            }
            MediaSource::Camera => Vec::new(),
            MediaSource::Gallery => self.gallery.iter().take(max).cloned().collect(),
        };
        info!("{:?} returned {} photo(s) (max {})", source, picked.len(), max);
        Ok(picked)
    }
}
