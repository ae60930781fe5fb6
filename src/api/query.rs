use super::ApiError;
use url::Url;

/// Pool the random pick is drawn from.
pub const RANDOM_POOL_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum ListingQuery {
    Browse {
        site: String,
        page: u32,
        limit: u32,
    },
    Search {
        text: String,
        site: String,
        page: u32,
        limit: u32,
        min_score: f64,
    },
}

impl ListingQuery {
    pub fn browse(site: impl Into<String>, page: u32, limit: u32) -> Self {
        ListingQuery::Browse {
            site: site.into(),
            page,
            limit,
        }
    }

    pub fn search(
        text: impl Into<String>,
        site: impl Into<String>,
        page: u32,
        limit: u32,
        min_score: f64,
    ) -> Self {
        ListingQuery::Search {
            text: text.into(),
            site: site.into(),
            page,
            limit,
            min_score,
        }
    }

    pub fn random_pool(site: impl Into<String>) -> Self {
        Self::browse(site, 1, RANDOM_POOL_SIZE)
    }

    pub fn site(&self) -> &str {
        match self {
            ListingQuery::Browse { site, .. } | ListingQuery::Search { site, .. } => site,
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            ListingQuery::Browse { page, .. } | ListingQuery::Search { page, .. } => *page,
        }
    }

    pub fn with_page(&self, new_page: u32) -> Self {
        let mut query = self.clone();
        match &mut query {
            ListingQuery::Browse { page, .. } | ListingQuery::Search { page, .. } => {
                *page = new_page.max(1)
            }
        }
        query
    }

    pub fn is_search(&self) -> bool {
        matches!(self, ListingQuery::Search { .. })
    }

    pub fn url(&self, base: &str) -> Result<Url, ApiError> {
        let url = match self {
            ListingQuery::Browse { site, page, limit } => Url::parse_with_params(
                &format!("{base}/browse"),
                &[
                    ("site", site.clone()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                ],
            )?,
            ListingQuery::Search {
                text,
                site,
                page,
                limit,
                min_score,
            } => Url::parse_with_params(
                &format!("{base}/search"),
                &[
                    ("q", text.clone()),
                    ("site", site.clone()),
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                    ("min_score", format_score(*min_score)),
                ],
            )?,
        };

        Ok(url)
    }
}

/// `0.5`, `0.75`, `1`: at most two decimals, clamped to the unit range.
pub(crate) fn format_score(score: f64) -> String {
    let rounded = (score.clamp(0.0, 1.0) * 100.0).round() / 100.0;
    format!("{rounded}")
}
