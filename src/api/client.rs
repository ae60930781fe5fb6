use super::{ApiError, Listing, ListingQuery};
use crate::domain::audio_extension;
use log::{debug, info};
use rand::{Rng, seq::IndexedRandom};
use reqwest::blocking::{Client, Response};
use std::path::{Path, PathBuf};

/// Blocking client for the track index API.
///
/// Requests carry no timeout; a hung server keeps its listing in the
/// loading state until the user issues another request.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let base = base.trim().trim_end_matches('/').to_string();

        if base.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .user_agent(concat!("odeon/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(ApiClient { http, base })
    }

    pub fn fetch(&self, query: &ListingQuery) -> Result<Listing, ApiError> {
        let url = query.url(&self.base)?;
        debug!("GET {url}");

        let body = check_status(self.http.get(url).send()?)?.text()?;
        let listing = parse_listing(&body)?;

        info!(
            "Loaded {} records (page {}/{}) from {}",
            listing.data.len(),
            listing.pagination.page,
            listing.pagination.pages,
            self.base
        );
        Ok(listing)
    }

    /// Draws one record from the first page of `site`. `None` when the pool
    /// is empty.
    pub fn random(&self, site: &str) -> Result<Option<Listing>, ApiError> {
        let pool = self.fetch(&ListingQuery::random_pool(site))?;
        Ok(pick_random(pool, &mut rand::rng()))
    }

    /// Saves the body of `url` into `dir` as `{title}.{ext}`.
    pub fn download(&self, url: &str, dir: &Path, title: &str) -> Result<PathBuf, ApiError> {
        debug!("Downloading {url}");
        let response = check_status(self.http.get(url).send()?)?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes()?;

        std::fs::create_dir_all(dir)?;
        let path = unique_path(dir, &sanitize_file_name(title), extension_for(content_type.as_deref()));
        std::fs::write(&path, &bytes)?;

        info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    match status.is_success() {
        true => Ok(response),
        false => Err(ApiError::Status {
            status: status.as_u16(),
            message: response.text().unwrap_or_default(),
        }),
    }
}

pub(crate) fn parse_listing(body: &str) -> Result<Listing, ApiError> {
    let listing: Listing =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    match listing.success {
        true => Ok(listing),
        false => Err(ApiError::Rejected),
    }
}

/// Narrows `pool` to a single uniformly chosen record.
pub fn pick_random<R: Rng + ?Sized>(mut pool: Listing, rng: &mut R) -> Option<Listing> {
    let pick = pool.data.choose(rng)?.clone();
    pool.data = vec![pick];
    Some(pool)
}

/// File extension for a response content type, `mp3` when unknown.
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    content_type.and_then(audio_extension).unwrap_or("mp3")
}

pub fn sanitize_file_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim().trim_matches('.').trim();
    match cleaned.is_empty() {
        true => "track".to_string(),
        false => cleaned.to_string(),
    }
}

fn unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let first = dir.join(format!("{stem}.{ext}"));
    if !first.exists() {
        return first;
    }

    (1..)
        .map(|n| dir.join(format!("{stem} ({n}).{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrackRecord;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_base_url_is_normalized() -> anyhow::Result<()> {
        let client = ApiClient::new(" https://api.example.dev/api/ ")?;
        assert_eq!(client.base, "https://api.example.dev/api");
        Ok(())
    }

    #[test]
    fn test_base_url_must_be_http() {
        assert!(matches!(ApiClient::new(""), Err(ApiError::InvalidUrl(_))));
        assert!(matches!(
            ApiClient::new("ftp://api.example.dev"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_unsuccessful_body_is_rejected() {
        let result = parse_listing(r#"{"success": false, "data": []}"#);
        assert!(matches!(result, Err(ApiError::Rejected)));

        let result = parse_listing(r#"{"data": []}"#);
        assert!(matches!(result, Err(ApiError::Rejected)));
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        assert!(matches!(parse_listing("<html>"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_pick_random_narrows_to_one_record_from_pool() {
        let pool = Listing {
            success: true,
            data: (0..10)
                .map(|n| TrackRecord::new(format!("https://a.tld/download/{n}/t.html"), ""))
                .collect(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let picked = pick_random(pool.clone(), &mut rng).unwrap();
            assert_eq!(picked.data.len(), 1);
            assert!(pool.data.contains(&picked.data[0]));
        }
    }

    #[test]
    fn test_pick_random_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_random(Listing::default(), &mut rng).is_none());
    }

    #[test]
    fn test_extension_from_content_type() {
        assert_eq!(extension_for(Some("audio/mpeg")), "mp3");
        assert_eq!(extension_for(Some("audio/mp4; charset=binary")), "m4a");
        assert_eq!(extension_for(Some("Audio/FLAC")), "flac");
        assert_eq!(extension_for(Some("text/plain")), "mp3");
        assert_eq!(extension_for(None), "mp3");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("AC/DC: Live?"), "AC_DC_ Live_");
        assert_eq!(sanitize_file_name(" .. "), "track");
        assert_eq!(sanitize_file_name("Hello-world Mix"), "Hello-world Mix");
    }

    #[test]
    fn test_unique_path_skips_existing_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("Song.mp3"), b"x")?;
        std::fs::write(dir.path().join("Song (1).mp3"), b"x")?;

        assert_eq!(unique_path(dir.path(), "Song", "mp3"), dir.path().join("Song (2).mp3"));
        assert_eq!(unique_path(dir.path(), "Other", "mp3"), dir.path().join("Other.mp3"));
        Ok(())
    }
}
