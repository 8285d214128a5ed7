//! Stub locator: reports a configured fix instead of reading a GPS sensor.

use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};

use super::collaborator::{Capability, CollaboratorError, Locator};
use crate::core::config::ResolvedConfig;
use crate::core::draft::Location;

pub struct StubLocator {
    permission: bool,
    fix: Option<Location>,
    latency: Duration,
}

impl StubLocator {
    pub fn new(permission: bool, fix: Option<Location>) -> Self {
        Self {
            permission,
            fix,
            latency: Duration::ZERO,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            permission: config.location_permission,
            fix: config.location_fix.clone(),
            latency: config.collaborator_latency,
        }
    }
}

#[async_trait]
impl Locator for StubLocator {
    async fn locate(&self) -> Result<Location, CollaboratorError> {
        if !self.permission {
            warn!("Location permission denied");
            return Err(CollaboratorError::PermissionDenied(Capability::Location));
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.fix {
            Some(fix) => {
                info!("Resolved location: {}, {}", fix.city, fix.state);
                Ok(fix.clone())
            }
            None => {
                warn!("No location fix configured");
                Err(CollaboratorError::Unavailable(
                    "could not determine your location".to_string(),
                ))
            }
        }
    }
}
