//! Impression data: a product shown in a list. Sent with `ec:addImpression`.

use ga_tracking_core::TrackingResult;
use serde::{Deserialize, Serialize};

use super::{is_blank, is_zero, is_zero_decimal, require_id_or_name, FieldObject};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImpressionFieldObject {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub category: Option<String>,
    /// List or collection the product belongs to (e.g. Search Results).
    #[serde(skip_serializing_if = "is_blank")]
    pub list: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "is_zero_decimal")]
    pub price: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub position: i32,
}

impl ImpressionFieldObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.list = Some(list.into());
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

impl FieldObject for ImpressionFieldObject {
    fn validate(&self) -> TrackingResult<()> {
        require_id_or_name(&self.id, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_comes_before_variant() {
        let impression = ImpressionFieldObject::new()
            .with_variant("black")
            .with_list("Search Results")
            .with_category("Apparel/T-Shirts")
            .with_brand("Google")
            .with_name("Android Warhol T-Shirt")
            .with_id("P12345")
            .with_position(1);
        assert_eq!(
            impression.to_command("ec:addImpression").unwrap(),
            r#"ga("ec:addImpression",{"id":"P12345","name":"Android Warhol T-Shirt","brand":"Google","category":"Apparel/T-Shirts","list":"Search Results","variant":"black","position":1});"#
        );
    }

    #[test]
    fn test_price_renders_as_decimal() {
        let impression = ImpressionFieldObject::new().with_name("Shirt").with_price(15.0);
        assert_eq!(impression.to_json().unwrap(), r#"{"name":"Shirt","price":15.0}"#);
    }

    #[test]
    fn test_missing_id_and_name() {
        let impression = ImpressionFieldObject::new().with_list("Search Results");
        assert!(impression.to_json().is_err());
    }
}
