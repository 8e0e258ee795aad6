//! Product data: an individual product that was viewed, added to the cart,
//! purchased, etc. Sent with `ec:addProduct`.

use ga_tracking_core::TrackingResult;
use serde::{Deserialize, Serialize};

use super::{is_blank, is_zero, is_zero_decimal, require_id_or_name, FieldObject};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductFieldObject {
    /// Product ID or SKU (e.g. P67890). Either this or `name` must be set.
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    /// Product name (e.g. Android T-Shirt). Either this or `id` must be set.
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub brand: Option<String>,
    /// Use `/` to delimit up to five levels, e.g. Apparel/Mens/T-Shirts.
    #[serde(skip_serializing_if = "is_blank")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "is_zero_decimal")]
    pub price: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub quantity: i32,
    #[serde(skip_serializing_if = "is_blank")]
    pub coupon: Option<String>,
    /// Position in a list or collection.
    #[serde(skip_serializing_if = "is_zero")]
    pub position: i32,
}

impl ProductFieldObject {
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

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

impl FieldObject for ProductFieldObject {
    fn validate(&self) -> TrackingResult<()> {
        require_id_or_name(&self.id, &self.name)
    }
}
