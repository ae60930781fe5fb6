use crate::domain::{Playlist, TrackRecord};
use serde::Deserialize;

/// Body of a `browse` or `search` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<TrackRecord>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: 1,
            limit: 20,
            total: 0,
            pages: 0,
            has_prev: false,
            has_next: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub domain: String,
}

impl Listing {
    pub fn to_playlist(&self, site: &str) -> Playlist {
        Playlist::new(self.data.clone(), self.metadata.domain.clone(), site)
    }

    /// One-based position of the `index`th record across all pages.
    pub fn rank(&self, index: usize) -> u64 {
        let page = self.pagination.page.max(1) as u64;
        (page - 1) * self.pagination.limit as u64 + index as u64 + 1
    }

    /// First and last rank shown on this page, and the total.
    pub fn showing(&self) -> (u64, u64, u64) {
        let page = self.pagination.page.max(1) as u64;
        let limit = self.pagination.limit as u64;
        let total = self.pagination.total;

        if total == 0 {
            return (0, 0, 0);
        }

        let start = ((page - 1) * limit + 1).min(total);
        let end = (page * limit).min(total);
        (start, end, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_take_defaults() -> anyhow::Result<()> {
        let listing: Listing = serde_json::from_str(r#"{"success": true, "data": []}"#)?;

        assert!(listing.success);
        assert_eq!(listing.pagination, Pagination::default());
        assert_eq!(listing.metadata.domain, "");
        Ok(())
    }

    #[test]
    fn test_unknown_fields_are_ignored() -> anyhow::Result<()> {
        let body = r#"{
            "success": true,
            "data": [{"url": "https://a.tld/download/5/x.html", "last_modified": "2024-01-01T00:00:00Z", "size": 12}],
            "pagination": {"page": 2, "limit": 10, "total": 35, "pages": 4, "has_prev": true, "has_next": true},
            "metadata": {"domain": "files.tld", "site": "odiadj"},
            "took_ms": 4
        }"#;
        let listing: Listing = serde_json::from_str(body)?;

        assert_eq!(listing.data.len(), 1);
        assert_eq!(listing.pagination.pages, 4);
        assert_eq!(listing.metadata.domain, "files.tld");
        Ok(())
    }

    #[test]
    fn test_rank_continues_across_pages() {
        let listing = Listing {
            pagination: Pagination {
                page: 3,
                limit: 20,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(listing.rank(0), 41);
        assert_eq!(listing.rank(19), 60);
    }

    #[test]
    fn test_showing_clamps_last_page() {
        let listing = Listing {
            pagination: Pagination {
                page: 4,
                limit: 10,
                total: 35,
                pages: 4,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(listing.showing(), (31, 35, 35));
    }

    #[test]
    fn test_to_playlist_keeps_domain_and_site() {
        let listing = Listing {
            data: vec![TrackRecord::new("https://a.tld/download/5/x.html", "")],
            metadata: Metadata {
                domain: "files.tld".into(),
            },
            ..Default::default()
        };
        let playlist = listing.to_playlist("odiadj");

        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.domain(), "files.tld");
        assert_eq!(playlist.site(), "odiadj");
    }
}
