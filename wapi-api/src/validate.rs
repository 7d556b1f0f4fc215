//! Pre-flight input validation.
//!
//! Every operation runs these checks before building its request, so a
//! rejected call never reaches the network. All failures are Validation
//! errors; media checks add a `FileErrorKind`.

use wapi_core::constants::{
    ALLOWED_OFFICE_FORMATS, ALLOWED_VIDEO_FORMATS, MAX_CAPTION_LENGTH, MAX_FILENAME_LENGTH,
    MAX_FILE_SIZE,
};
use wapi_core::error::{FileErrorKind, WapiError, WapiResult};

use crate::content::{self, ContentEncoding};

/// Media category, used to word validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
    Video,
    Document,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "PDF",
            Self::Video => "video",
            Self::Document => "document",
        }
    }
}

fn require(value: &str, message: &str) -> WapiResult<()> {
    if value.is_empty() {
        return Err(WapiError::validation(message));
    }
    Ok(())
}

pub fn require_session_id(session_id: &str) -> WapiResult<()> {
    require(session_id, "session id is required")
}

pub fn require_recipient(to: &str) -> WapiResult<()> {
    require(to, "recipient is required")
}

pub fn require_phone(phone: &str) -> WapiResult<()> {
    require(phone, "phone number is required")
}

pub fn require_message(message: &str) -> WapiResult<()> {
    require(message, "message cannot be empty")
}

/// Check a filename's presence and length, and optionally its extension
/// (case-insensitive suffix match, e.g. `".pdf"`).
pub fn validate_filename(filename: &str, expected_extension: Option<&str>) -> WapiResult<()> {
    require(filename, "filename is required")?;

    if filename.chars().count() > MAX_FILENAME_LENGTH {
        return Err(WapiError::validation(format!(
            "filename exceeds {MAX_FILENAME_LENGTH} characters"
        )));
    }

    if let Some(ext) = expected_extension {
        if !filename.to_lowercase().ends_with(&ext.to_lowercase()) {
            return Err(WapiError::file_validation(
                format!("file must have the {ext} extension"),
                FileErrorKind::InvalidFormat,
            ));
        }
    }

    Ok(())
}

/// Optional captions are limited to `MAX_CAPTION_LENGTH` characters.
pub fn validate_caption(caption: Option<&str>) -> WapiResult<()> {
    match caption {
        Some(c) if c.chars().count() > MAX_CAPTION_LENGTH => Err(WapiError::validation(format!(
            "caption exceeds {MAX_CAPTION_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

/// Check media content is a URL or Base64 within the size limit, and
/// report which one it is.
pub fn validate_media_content(content: &str, kind: MediaKind) -> WapiResult<ContentEncoding> {
    let label = kind.label();
    if content.is_empty() {
        return Err(WapiError::validation(format!("{label} content is required")));
    }

    let encoding = content::detect_encoding(content).ok_or_else(|| {
        WapiError::file_validation(
            format!("{label} content must be a valid URL or a Base64 string"),
            FileErrorKind::InvalidContent,
        )
    })?;

    if encoding == ContentEncoding::Base64 {
        let size = content::base64_decoded_size(content);
        if size == 0 {
            return Err(WapiError::file_validation(
                format!("{label} content is empty"),
                FileErrorKind::EmptyFile,
            ));
        }
        if size > MAX_FILE_SIZE {
            return Err(WapiError::file_validation(
                format!(
                    "{label} exceeds the maximum size of {}MB",
                    MAX_FILE_SIZE / (1024 * 1024)
                ),
                FileErrorKind::SizeExceeded,
            ));
        }
    }

    Ok(encoding)
}

/// Media checks plus the allowed-format rule for URL videos. Base64 videos
/// are not format-checked.
pub fn validate_video_content(content: &str) -> WapiResult<ContentEncoding> {
    let encoding = validate_media_content(content, MediaKind::Video)?;

    if encoding == ContentEncoding::Url {
        let allowed = content::url_extension(content)
            .is_some_and(|ext| ALLOWED_VIDEO_FORMATS.contains(&ext.as_str()));
        if !allowed {
            return Err(WapiError::file_validation(
                format!(
                    "invalid video format. Allowed formats: {}",
                    ALLOWED_VIDEO_FORMATS.join(", ")
                ),
                FileErrorKind::InvalidFormat,
            ));
        }
    }

    Ok(encoding)
}

/// Filename rules plus the office-extension allow list.
pub fn validate_office_filename(filename: &str) -> WapiResult<()> {
    validate_filename(filename, None)?;

    let allowed = content::file_extension(filename)
        .is_some_and(|ext| ALLOWED_OFFICE_FORMATS.contains(&ext.as_str()));
    if !allowed {
        return Err(WapiError::file_validation(
            format!(
                "invalid document format. Allowed formats: {}",
                ALLOWED_OFFICE_FORMATS.join(", ")
            ),
            FileErrorKind::InvalidFormat,
        ));
    }

    Ok(())
}

/// Latitude in [-90, 90], longitude in [-180, 180]; NaN is rejected.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> WapiResult<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(WapiError::validation("latitude must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(WapiError::validation(
            "longitude must be between -180 and 180",
        ));
    }
    Ok(())
}
