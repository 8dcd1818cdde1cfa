use reqwest::multipart::{Form, Part};

use super::{ApiError, CrmClient};
use crate::models::UploadResponse;

/// A file read into memory, ready to be sent as multipart form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent in the multipart part.
    pub name: String,
    /// Content type; omitted when unknown.
    pub mime_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    fn into_form(self) -> Result<Form, ApiError> {
        let mut part = Part::bytes(self.bytes).file_name(self.name);
        if let Some(mime) = self.mime_type.filter(|mime| !mime.is_empty()) {
            part = part.mime_str(&mime)?;
        }
        Ok(Form::new().part("file", part))
    }
}

impl CrmClient {
    /// # Errors
    /// Propagates the backend's failure message, or the generic one when the
    /// MIME type cannot be encoded.
    pub async fn upload_image(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.post_multipart("upload/image", file.into_form()?)
            .await
    }

    /// # Errors
    /// Propagates the backend's failure message, or the generic one when the
    /// MIME type cannot be encoded.
    pub async fn upload_document(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.post_multipart("upload/document", file.into_form()?)
            .await
    }
}
