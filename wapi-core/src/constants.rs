//! Process-wide constants.

/// SDK name, used in the default user agent.
pub const SDK_NAME: &str = "wapi2-rust";

/// SDK version.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://wapi2.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Maximum filename length in characters.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Maximum caption length in characters.
pub const MAX_CAPTION_LENGTH: usize = 1024;

/// Maximum decoded size of inline Base64 media (16 MiB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Video extensions accepted for URL-supplied videos.
pub const ALLOWED_VIDEO_FORMATS: &[&str] = &["mp4", "3gp", "mov"];

/// Office document extensions accepted for document messages.
pub const ALLOWED_OFFICE_FORMATS: &[&str] = &["doc", "docx", "xls", "xlsx", "ppt", "pptx"];

/// Default user agent sent with every request.
pub fn default_user_agent() -> String {
    format!("{SDK_NAME}/{SDK_VERSION}")
}
