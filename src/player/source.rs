use super::SourceError;
use crate::domain::{audio_extension, locator_extension};
use log::debug;
use reqwest::{blocking::Client, header::CONTENT_TYPE};

pub(crate) struct FetchedSource {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Where the player thread gets encoded audio from.
pub(crate) trait SourceLoader {
    fn fetch(&mut self, url: &str) -> Result<FetchedSource, SourceError>;
}

pub(crate) struct HttpLoader {
    http: Client,
}

impl HttpLoader {
    pub fn new() -> Result<Self, SourceError> {
        let http = Client::builder()
            .user_agent(concat!("odeon/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(HttpLoader { http })
    }
}

impl SourceLoader for HttpLoader {
    fn fetch(&mut self, url: &str) -> Result<FetchedSource, SourceError> {
        debug!("Fetching audio from {url}");
        let response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes()?.to_vec();

        debug!("Fetched {} bytes ({content_type:?})", bytes.len());
        Ok(FetchedSource {
            bytes,
            content_type,
        })
    }
}

/// Decoder hint from the response content type, else from the locator's
/// extension. `None` leaves format probing to the decoder.
pub(crate) fn decode_hint(content_type: Option<&str>, url: &str) -> Option<&'static str> {
    content_type
        .and_then(audio_extension)
        .or_else(|| locator_extension(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_prefers_content_type() {
        assert_eq!(
            decode_hint(Some("audio/mp4"), "https://a.tld/x.mp3"),
            Some("m4a")
        );
        assert_eq!(
            decode_hint(Some("audio/mpeg; charset=binary"), "https://a.tld/files/download/id/5"),
            Some("mp3")
        );
    }

    #[test]
    fn test_hint_falls_back_to_extension() {
        assert_eq!(
            decode_hint(Some("application/octet-stream"), "https://a.tld/song.M4A?x=1"),
            Some("m4a")
        );
        assert_eq!(decode_hint(None, "https://a.tld/files/download/id/5"), None);
    }

    #[test]
    fn test_hint_matches_download_extension() {
        let locator = "https://a.tld/files/download/id/5";
        for mime in ["audio/mpeg", "audio/mp4", "audio/opus", "audio/ogg", "audio/flac"] {
            assert_eq!(
                decode_hint(Some(mime), locator),
                Some(crate::api::extension_for(Some(mime))),
                "{mime}"
            );
        }
    }
}
