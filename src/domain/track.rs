use super::display_name::extract_display_name;
use chrono::DateTime;
use serde::Deserialize;
use std::fmt::Display;

/// Digit string identifying a track, pulled out of its locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        TrackId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a listing as the index API returns it.
///
/// Only the locator and timestamp are stored; the id and the display name
/// are derived from the locator every time they are asked for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackRecord {
    pub url: String,
    #[serde(default)]
    pub last_modified: String,
}

impl TrackRecord {
    pub fn new(url: impl Into<String>, last_modified: impl Into<String>) -> Self {
        TrackRecord {
            url: url.into(),
            last_modified: last_modified.into(),
        }
    }

    pub fn track_id(&self) -> Option<TrackId> {
        extract_track_id(&self.url)
    }

    pub fn display_name(&self) -> String {
        extract_display_name(&self.url)
    }

    /// `Oct 14, 2026` style date, or the raw timestamp when it does not parse.
    pub fn upload_date(&self) -> String {
        match DateTime::parse_from_rfc3339(self.last_modified.trim()) {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => self.last_modified.clone(),
        }
    }
}

const DOWNLOAD_SEGMENT: &str = "/download/";

/// Returns the digit run of the first `/download/<digits>/` segment.
pub fn extract_track_id(locator: &str) -> Option<TrackId> {
    let mut rest = locator;

    while let Some(start) = rest.find(DOWNLOAD_SEGMENT) {
        let after = &rest[start + DOWNLOAD_SEGMENT.len()..];
        let digits = after
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(after.len());

        if digits > 0 && after[digits..].starts_with('/') {
            return Some(TrackId::new(&after[..digits]));
        }

        // "/download/" may itself end another candidate, e.g. "/download/download/5/"
        rest = &rest[start + DOWNLOAD_SEGMENT.len() - 1..];
    }

    None
}

pub fn download_url(domain: &str, id: &TrackId) -> String {
    format!("https://{domain}/files/download/id/{id}")
}
