use super::{TrackId, TrackRecord, download_url};
use std::sync::Arc;

/// Everything needed to bind a track to the media handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRequest {
    pub id: TrackId,
    pub url: String,
    pub title: String,
    pub site: String,
}

/// The records of the last successful load, in server order.
///
/// Cloning shares the same backing slice. A new load replaces the whole
/// playlist instead of editing it.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Arc<[TrackRecord]>,
    domain: String,
    site: String,
}

impl Playlist {
    pub fn new(tracks: Vec<TrackRecord>, domain: impl Into<String>, site: impl Into<String>) -> Self {
        Playlist {
            tracks: tracks.into(),
            domain: domain.into(),
            site: site.into(),
        }
    }

    pub fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn position(&self, id: &TrackId) -> Option<usize> {
        self.tracks
            .iter()
            .position(|t| t.track_id().as_ref() == Some(id))
    }

    /// `None` when the index is out of range or the record has no id.
    pub fn request_for(&self, index: usize) -> Option<TrackRequest> {
        let record = self.tracks.get(index)?;
        let id = record.track_id()?;

        Some(TrackRequest {
            url: download_url(&self.domain, &id),
            title: record.display_name(),
            site: self.site.clone(),
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Playlist {
        Playlist::new(
            vec![
                TrackRecord::new("https://a.tld/download/5/first-song.html", ""),
                TrackRecord::new("https://a.tld/no-id/second.html", ""),
                TrackRecord::new("https://a.tld/download/7/third-song.html", ""),
            ],
            "files.tld",
            "odiadj",
        )
    }

    #[test]
    fn test_position_searches_by_id() {
        let playlist = sample();
        assert_eq!(playlist.position(&TrackId::new("7")), Some(2));
        assert_eq!(playlist.position(&TrackId::new("99")), None);
    }

    #[test]
    fn test_request_for_builds_download_url() {
        let request = sample().request_for(0).unwrap();
        assert_eq!(request.id, TrackId::new("5"));
        assert_eq!(request.url, "https://files.tld/files/download/id/5");
        assert_eq!(request.title, "First Song");
        assert_eq!(request.site, "odiadj");
    }

    #[test]
    fn test_request_for_skips_records_without_id() {
        let playlist = sample();
        assert!(playlist.request_for(1).is_none());
        assert!(playlist.request_for(3).is_none());
    }

    #[test]
    fn test_clones_share_tracks() {
        let playlist = sample();
        let copy = playlist.clone();
        assert!(std::ptr::eq(playlist.tracks(), copy.tracks()));
    }
}
