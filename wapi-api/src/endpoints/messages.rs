//! Messaging endpoints.
//!
//! Media may be given as an http(s) URL or as Base64 text (optionally a
//! `data:` URI). Inline media is limited to 16 MiB decoded.

use serde::Serialize;
use serde_json::Value;
use wapi_core::error::WapiResult;

use crate::client::WapiClient;
use crate::response::ApiResponse;
use crate::validate::{self, MediaKind};

#[derive(Serialize)]
struct TextMessage<'a> {
    message: &'a str,
}

/// Image message body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMessage {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageMessage {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// PDF message body. `filename` must end in `.pdf`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfMessage {
    pub pdf: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl PdfMessage {
    pub fn new(pdf: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            pdf: pdf.into(),
            filename: filename.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Video message body. URL videos must be mp4, 3gp or mov.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoMessage {
    pub video: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl VideoMessage {
    pub fn new(video: impl Into<String>) -> Self {
        Self {
            video: video.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Office document message body (doc, docx, xls, xlsx, ppt, pptx).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfficeDocumentMessage {
    pub document: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl OfficeDocumentMessage {
    pub fn new(document: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            filename: filename.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Location message body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMessage {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocationMessage {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl WapiClient {
    /// Send a text message.
    pub async fn send_message(
        &self,
        to: &str,
        message: &str,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Value>> {
        validate::require_message(message)?;
        validate::require_recipient(to)?;
        validate::require_session_id(session_id)?;

        let url = self.endpoint(&["chat", to, "message"], Some(session_id))?;
        self.post(url, &TextMessage { message }).await
    }

    /// Send an image.
    ///
    /// A caption longer than 1024 characters is rejected before sending.
    pub async fn send_image(
        &self,
        to: &str,
        message: &ImageMessage,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Value>> {
        validate::require_recipient(to)?;
        validate::require_session_id(session_id)?;
        validate::validate_media_content(&message.image, MediaKind::Image)?;
        validate::validate_caption(message.caption.as_deref())?;

        let url = self.endpoint(&["chat", to, "image"], Some(session_id))?;
        self.post(url, message).await
    }

    /// Send a PDF document.
    ///
    /// A caption longer than 1024 characters is rejected before sending.
    pub async fn send_pdf(
        &self,
        to: &str,
        message: &PdfMessage,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Value>> {
        validate::require_recipient(to)?;
        validate::require_session_id(session_id)?;
        validate::validate_media_content(&message.pdf, MediaKind::Pdf)?;
        validate::validate_filename(&message.filename, Some(".pdf"))?;
        validate::validate_caption(message.caption.as_deref())?;

        let url = self.endpoint(&["chat", to, "pdf"], Some(session_id))?;
        self.post(url, message).await
    }

    /// Send a video.
    ///
    /// A caption longer than 1024 characters is rejected before sending.
    pub async fn send_video(
        &self,
        to: &str,
        message: &VideoMessage,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Value>> {
        validate::require_recipient(to)?;
        validate::require_session_id(session_id)?;
        validate::validate_video_content(&message.video)?;
        validate::validate_caption(message.caption.as_deref())?;

        let url = self.endpoint(&["chat", to, "video"], Some(session_id))?;
        self.post(url, message).await
    }

    /// Send a Word, Excel or PowerPoint document.
    ///
    /// A caption longer than 1024 characters is rejected before sending.
    pub async fn send_office_document(
        &self,
        to: &str,
        message: &OfficeDocumentMessage,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Value>> {
        validate::require_recipient(to)?;
        validate::require_session_id(session_id)?;
        validate::validate_media_content(&message.document, MediaKind::Document)?;
        validate::validate_office_filename(&message.filename)?;
        validate::validate_caption(message.caption.as_deref())?;

        let url = self.endpoint(&["chat", to, "office"], Some(session_id))?;
        self.post(url, message).await
    }

    /// Send a location pin.
    pub async fn send_location(
        &self,
        to: &str,
        message: &LocationMessage,
        session_id: &str,
    ) -> WapiResult<ApiResponse<Value>> {
        validate::require_recipient(to)?;
        validate::require_session_id(session_id)?;
        validate::validate_coordinates(message.latitude, message.longitude)?;

        let url = self.endpoint(&["chat", to, "location"], Some(session_id))?;
        self.post(url, message).await
    }
}
