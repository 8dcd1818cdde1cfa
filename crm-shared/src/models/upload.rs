//! Upload endpoint responses.

use serde::{Deserialize, Serialize};

/// Body of `POST /upload/image` and `POST /upload/document`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public URL of the stored file.
    pub url: String,
    /// Name the server stored it under.
    #[serde(default)]
    pub filename: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Detected MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_url_is_required() {
        let upload: UploadResponse =
            serde_json::from_str(r#"{"url":"https://cdn.example.com/a.png","publicId":"x"}"#).unwrap();

        assert_eq!(upload.url, "https://cdn.example.com/a.png");
        assert_eq!(upload.size, None);
    }
}
