//! # Initial Drafts
//!
//! Load a `ListingDraft` from a JSON file so a session can resume where an
//! earlier one left off. The file uses the same camelCase shape the
//! collaborators receive; missing fields take their defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::core::draft::ListingDraft;

#[derive(Debug)]
pub enum DraftFileError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DraftFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftFileError::Io(e) => write!(f, "failed to read draft file: {}", e),
            DraftFileError::Parse(e) => write!(f, "failed to parse draft file: {}", e),
        }
    }
}

impl std::error::Error for DraftFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DraftFileError::Io(e) => Some(e),
            DraftFileError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for DraftFileError {
    fn from(e: io::Error) -> Self {
        DraftFileError::Io(e)
    }
}

impl From<serde_json::Error> for DraftFileError {
    fn from(e: serde_json::Error) -> Self {
        DraftFileError::Parse(e)
    }
}

pub fn load_draft(path: &Path) -> Result<ListingDraft, DraftFileError> {
    let contents = fs::read_to_string(path)?;
    let draft = parse_draft(&contents)?;
    debug!("Loaded initial draft from {}", path.display());
    Ok(draft)
}

pub fn parse_draft(json: &str) -> Result<ListingDraft, DraftFileError> {
    Ok(serde_json::from_str(json)?)
}
