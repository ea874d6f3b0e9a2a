//! Core data models for memegen
//!
//! This module contains the meme template record returned by the imgflip API
//! and the client used to fetch the template list.

pub mod imgflip;

pub use imgflip::{MemeApiError, MemeClient, DEFAULT_ENDPOINT};

use serde::{Deserialize, Serialize};

/// A meme template as returned by the listing API
///
/// Records are never modified after they are received; a new fetch replaces
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeRecord {
    /// Template identifier assigned by the API
    pub id: String,
    /// Human-readable template name
    pub name: String,
    /// Location of the template image
    pub url: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of caption boxes the template was designed for
    pub box_count: u32,
    /// How many times the template has been captioned
    #[serde(default)]
    pub captions: u64,
}
