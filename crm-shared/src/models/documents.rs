//! Documents shared with customers.

use serde::{Deserialize, Serialize};

use super::{Timestamp, UploadResponse};

/// A stored file shared between staff and a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form notes.
    #[serde(default)]
    pub description: Option<String>,
    /// Where the file can be downloaded.
    pub file_url: String,
    /// MIME type reported at upload.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Customer the file is assigned to.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Account that uploaded the file.
    #[serde(default)]
    pub uploaded_by: Option<String>,
    /// Upload time.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Document {
    /// File size in the largest whole unit, e.g. `1.5 MB`.
    #[must_use]
    pub fn size_label(&self) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let Some(bytes) = self.file_size else {
            return "-".to_string();
        };
        #[allow(clippy::cast_precision_loss)]
        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{bytes} B")
        } else {
            format!("{value:.1} {}", UNITS[unit])
        }
    }
}

/// Create/update payload for `/documents`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    /// Display title.
    pub title: String,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL returned by `POST /upload/document`.
    pub file_url: String,
    /// MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Customer to assign the file to; `None` leaves it unassigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl DocumentInput {
    /// Record for a freshly uploaded file, titled after its name without the extension.
    #[must_use]
    pub fn from_upload(upload: &UploadResponse, file_name: &str, customer_id: Option<String>) -> Self {
        let title = match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file_name,
        };
        Self {
            title: title.to_string(),
            description: None,
            file_url: upload.url.clone(),
            file_type: upload.mime_type.clone(),
            file_size: upload.size,
            customer_id,
        }
    }
}

impl From<&Document> for DocumentInput {
    fn from(document: &Document) -> Self {
        Self {
            title: document.title.clone(),
            description: document.description.clone(),
            file_url: document.file_url.clone(),
            file_type: document.file_type.clone(),
            file_size: document.file_size,
            customer_id: document.customer_id.clone(),
        }
    }
}

/// Body of the document listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentListResponse {
    /// Documents in server order.
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// Payload for `POST /documents/bulk`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkDocumentsRequest {
    /// One record per uploaded file.
    pub documents: Vec<DocumentInput>,
}

/// Payload for `DELETE /documents/bulk`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkDeleteRequest {
    /// Documents to delete.
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(size: Option<u64>) -> Document {
        Document {
            id: "d1".to_string(),
            title: "Contract".to_string(),
            description: None,
            file_url: "https://files.example.com/d1.pdf".to_string(),
            file_type: Some("application/pdf".to_string()),
            file_size: size,
            customer_id: Some("c1".to_string()),
            uploaded_by: None,
            created_at: None,
        }
    }

    #[test]
    fn size_labels() {
        assert_eq!(document(None).size_label(), "-");
        assert_eq!(document(Some(512)).size_label(), "512 B");
        assert_eq!(document(Some(1536)).size_label(), "1.5 KB");
        assert_eq!(document(Some(5 * 1024 * 1024)).size_label(), "5.0 MB");
    }

    #[test]
    fn input_from_upload_strips_extension() {
        let upload = UploadResponse {
            url: "https://files.example.com/x".to_string(),
            filename: None,
            size: Some(2048),
            mime_type: Some("application/pdf".to_string()),
        };

        let input = DocumentInput::from_upload(&upload, "invoice.2025.pdf", Some("c1".to_string()));
        assert_eq!(input.title, "invoice.2025");
        assert_eq!(input.file_size, Some(2048));
        assert_eq!(input.customer_id.as_deref(), Some("c1"));

        assert_eq!(DocumentInput::from_upload(&upload, ".env", None).title, ".env");
        assert_eq!(DocumentInput::from_upload(&upload, "README", None).title, "README");
    }

    #[test]
    fn decodes_camel_case() {
        let json = r#"{"documents":[{"id":"d1","title":"T","fileUrl":"u","fileSize":10,"customerId":"c1"}]}"#;
        let listing: DocumentListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(listing.documents[0].file_size, Some(10));
        assert_eq!(listing.documents[0].customer_id.as_deref(), Some("c1"));
    }
}
