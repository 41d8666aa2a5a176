//! Catalog Types
//!
//! DTOs for the upstream storefront resources.

use serde::{Deserialize, Serialize};

/// A product in the upstream catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Product {
    /// Upstream-assigned id; absent when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category reference used when creating a product.
    #[serde(
        default,
        rename = "categoryId",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<i64>,
    /// Embedded category returned by reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// A category in the upstream catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Category {
    /// Upstream-assigned id; absent when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_parsing_with_embedded_category() {
        let json = r#"{
            "id": 4,
            "title": "Handmade Fresh Table",
            "price": 687.0,
            "description": "A sturdy table",
            "images": ["https://placeimg.com/640/480/any"],
            "category": {"id": 5, "name": "Furniture", "image": "https://placeimg.com/640/480/any"}
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(4));
        assert_eq!(product.title, "Handmade Fresh Table");
        assert_eq!(product.category.as_ref().unwrap().name, "Furniture");
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_new_product_serializes_without_id() {
        let product = Product {
            title: "New".to_string(),
            price: 10.0,
            category_id: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["categoryId"], 1);
    }

    #[test]
    fn test_category_round_trip() {
        let json = r#"{"id": 2, "name": "Clothes", "image": "https://example.com/c.png"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, Some(2));
        assert_eq!(category.name, "Clothes");
    }
}
