use serde::{Deserialize, de::IgnoredAny};

use super::{ApiError, CrmClient};
use crate::models::{Product, ProductInput, ProductListResponse, SelectProductRequest};

/// Single-product envelope returned by create and update.
#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

impl CrmClient {
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_products(&self) -> Result<ProductListResponse, ApiError> {
        self.get("products").await
    }

    /// Products owned by the signed-in admin.
    ///
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_admin_products(&self) -> Result<ProductListResponse, ApiError> {
        self.get("products/admin").await
    }

    /// Catalogue a customer may choose from.
    ///
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_available_products(&self) -> Result<ProductListResponse, ApiError> {
        self.get("products/available").await
    }

    /// Products the signed-in customer has selected.
    ///
    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn list_selected_products(&self) -> Result<ProductListResponse, ApiError> {
        self.get("products/select").await
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.post::<ProductEnvelope, _>("products", input)
            .await
            .map(|envelope| envelope.product)
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn update_product(&self, id: &str, input: &ProductInput) -> Result<Product, ApiError> {
        self.put::<ProductEnvelope, _>(&format!("products/{id}"), input)
            .await
            .map(|envelope| envelope.product)
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<IgnoredAny>(&format!("products/{id}"))
            .await
            .map(|_| ())
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn select_product(&self, product_id: &str) -> Result<(), ApiError> {
        let payload = SelectProductRequest {
            product_id: product_id.to_string(),
        };
        self.post::<IgnoredAny, _>("products/select", &payload)
            .await
            .map(|_| ())
    }

    /// # Errors
    /// Propagates the backend's failure message.
    pub async fn unselect_product(&self, product_id: &str) -> Result<(), ApiError> {
        self.delete::<IgnoredAny>(&format!("products/select/{product_id}"))
            .await
            .map(|_| ())
    }
}
