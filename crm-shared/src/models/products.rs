//! Product catalogue.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A catalogue entry managed by staff and selectable by customers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marketing copy.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Free-form category.
    #[serde(default)]
    pub category: Option<String>,
    /// Units on hand, if tracked.
    #[serde(default)]
    pub stock: Option<u32>,
    /// Uploaded product image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether customers can select it.
    #[serde(default = "default_available")]
    pub is_available: bool,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn default_available() -> bool {
    true
}

impl Product {
    /// Price rendered with two decimals.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Create/update payload for `/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Display name.
    pub name: String,
    /// Marketing copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, never negative.
    pub price: f64,
    /// Free-form category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Units on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// URL returned by `POST /upload/image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether customers can select it.
    pub is_available: bool,
}

impl Default for ProductInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            price: 0.0,
            category: None,
            stock: None,
            image_url: None,
            is_available: true,
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            stock: product.stock,
            image_url: product.image_url.clone(),
            is_available: product.is_available,
        }
    }
}

/// Body of the product listing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductListResponse {
    /// Products in server order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductListResponse {
    /// Whether `product_id` appears in this listing.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.products.iter().any(|product| product.id == product_id)
    }
}

/// Customer selection payload for `POST /products/select`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectProductRequest {
    /// Product being selected.
    pub product_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_defaults_when_fields_missing() {
        let product: Product = serde_json::from_str(r#"{"id":"p1","name":"Widget"}"#).unwrap();

        assert!(product.is_available);
        assert_eq!(product.price_label(), "0.00");
        assert_eq!(product.stock, None);
    }

    #[test]
    fn input_uses_camel_case() {
        let input = ProductInput {
            name: "Widget".to_string(),
            price: 9.5,
            image_url: Some("https://cdn.example.com/w.png".to_string()),
            ..ProductInput::default()
        };
        let json = serde_json::to_string(&input).unwrap();

        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"isAvailable\":true"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn listing_contains() {
        let listing: ProductListResponse =
            serde_json::from_str(r#"{"products":[{"id":"p1","name":"A","price":3}]}"#).unwrap();

        assert!(listing.contains("p1"));
        assert!(!listing.contains("p2"));
        assert_eq!(listing.products[0].price_label(), "3.00");
    }

    #[test]
    fn select_request_wire_name() {
        let request = SelectProductRequest {
            product_id: "p9".to_string(),
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"productId":"p9"}"#);
    }
}
