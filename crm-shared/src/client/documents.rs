use serde::{Deserialize, de::IgnoredAny};

use super::{ApiError, CrmClient};
use crate::models::{
    BulkDeleteRequest, BulkDocumentsRequest, Document, DocumentInput, DocumentListResponse,
};

#[derive(Deserialize)]
struct DocumentEnvelope {
    document: Document,
}

impl CrmClient {
    /// Documents visible to the caller; customers only see their own.
    ///
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_documents(&self) -> Result<DocumentListResponse, ApiError> {
        self.get("documents").await
    }

    /// Documents uploaded by the signed-in admin.
    ///
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_admin_documents(&self) -> Result<DocumentListResponse, ApiError> {
        self.get("documents/admin").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn create_document(&self, input: &DocumentInput) -> Result<Document, ApiError> {
        self.post::<DocumentEnvelope, _>("documents", input)
            .await
            .map(|envelope| envelope.document)
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn update_document(
        &self,
        id: &str,
        input: &DocumentInput,
    ) -> Result<Document, ApiError> {
        self.put::<DocumentEnvelope, _>(&format!("documents/{id}"), input)
            .await
            .map(|envelope| envelope.document)
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn delete_document(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<IgnoredAny>(&format!("documents/{id}"))
            .await
            .map(|_| ())
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn create_documents_bulk(
        &self,
        documents: Vec<DocumentInput>,
    ) -> Result<DocumentListResponse, ApiError> {
        self.post("documents/bulk", &BulkDocumentsRequest { documents })
            .await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn delete_documents_bulk(&self, ids: Vec<String>) -> Result<(), ApiError> {
        self.delete_with_body::<IgnoredAny, _>("documents/bulk", &BulkDeleteRequest { ids })
            .await
            .map(|_| ())
    }
}
