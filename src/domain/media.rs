/// Preferred extensions where the MIME table lists several or none.
const PREFERRED: &[(&str, &str)] = &[
    ("audio/mpeg", "mp3"),
    ("audio/mp3", "mp3"),
    ("audio/mp4", "m4a"),
    ("audio/m4a", "m4a"),
    ("audio/x-m4a", "m4a"),
    ("video/mp4", "m4a"),
    ("audio/ogg", "ogg"),
    ("audio/opus", "opus"),
];

/// File extension for an audio content type. Parameters and case are ignored.
pub fn audio_extension(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();

    if let Some(ext) = PREFERRED.iter().find(|(m, _)| *m == mime).map(|(_, ext)| *ext) {
        return Some(ext);
    }
    if !mime.starts_with("audio/") {
        return None;
    }
    mime_guess::get_mime_extensions_str(&mime)?.first().copied()
}

/// Audio extension named by the last path segment of `locator`.
pub fn locator_extension(locator: &str) -> Option<&'static str> {
    let path = locator.split(['?', '#']).next().unwrap_or(locator);
    let ext = path.rsplit('/').next()?.rsplit_once('.')?.1.to_ascii_lowercase();

    let mime = mime_guess::from_ext(&ext).first()?;
    audio_extension(mime.essence_str())
}
