//! Content classification for media payloads.
//!
//! Media can be sent either as an http(s) URL the server downloads, or
//! inline as Base64 text (optionally wrapped in a `data:<mime>;base64,`
//! URI). These helpers tell the two apart and measure inline payloads
//! without decoding them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Url;

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// How a media payload is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// Absolute http or https URL.
    Url,
    /// Inline Base64 text, with or without a data-URI prefix.
    Base64,
}

/// Remove a leading `data:<mime>;base64,` prefix, if present.
///
/// The mime part is matched up to the first `;base64,` and may not span
/// lines.
pub fn strip_data_uri(content: &str) -> &str {
    if let Some(rest) = content.strip_prefix(DATA_URI_PREFIX) {
        if let Some(idx) = rest.find(BASE64_MARKER) {
            if !rest[..idx].contains('\n') {
                return &rest[idx + BASE64_MARKER.len()..];
            }
        }
    }
    content
}

/// Whether `s` is an absolute URL with an `http` or `https` scheme.
pub fn is_valid_url(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    Url::parse(s)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Whether `content` is strict Base64 once any data-URI prefix is removed.
pub fn is_base64(content: &str) -> bool {
    if content.is_empty() {
        return false;
    }
    STANDARD.decode(strip_data_uri(content)).is_ok()
}

/// Decoded byte length of Base64 `content`, computed from its length and
/// padding alone.
pub fn base64_decoded_size(content: &str) -> u64 {
    if content.is_empty() {
        return 0;
    }
    let encoded = strip_data_uri(content);
    let padding = if encoded.ends_with("==") {
        2
    } else if encoded.ends_with('=') {
        1
    } else {
        0
    };
    (encoded.len() as u64 * 3 / 4).saturating_sub(padding)
}

/// Classify a media payload. URLs win over Base64.
pub fn detect_encoding(content: &str) -> Option<ContentEncoding> {
    if is_valid_url(content) {
        Some(ContentEncoding::Url)
    } else if is_base64(content) {
        Some(ContentEncoding::Base64)
    } else {
        None
    }
}

/// Lowercased extension of a filename, without the dot.
pub fn file_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() || ext.contains(['/', '\\']) {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Lowercased extension of the last path segment of a URL. Query strings
/// and fragments are ignored.
pub fn url_extension(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let last = url.path_segments()?.last()?;
    file_extension(last)
}
