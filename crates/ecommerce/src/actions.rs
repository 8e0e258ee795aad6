//! Action types for the `ec:setAction` command.

use std::fmt;
use std::str::FromStr;

use ga_tracking_core::TrackingError;
use serde::{Deserialize, Serialize};

/// Enhanced Ecommerce action, rendered as its lowercase token.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EcommerceAction {
    /// A click on a product or product link for one or more products.
    Click,
    /// A view of product details.
    Detail,
    /// Adding one or more products to a shopping cart.
    Add,
    /// Removing one or more products from a shopping cart.
    Remove,
    /// Initiating the checkout process for one or more products.
    Checkout,
    /// Sending the option value for a given checkout step.
    CheckoutOption,
    /// The sale of one or more products.
    Purchase,
    /// The refund of one or more products.
    Refund,
    /// A click on an internal promotion.
    PromoClick,
}

impl EcommerceAction {
    pub const ALL: [EcommerceAction; 9] = [
        Self::Click,
        Self::Detail,
        Self::Add,
        Self::Remove,
        Self::Checkout,
        Self::CheckoutOption,
        Self::Purchase,
        Self::Refund,
        Self::PromoClick,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Detail => "detail",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Checkout => "checkout",
            Self::CheckoutOption => "checkout_option",
            Self::Purchase => "purchase",
            Self::Refund => "refund",
            Self::PromoClick => "promo_click",
        }
    }
}

impl fmt::Display for EcommerceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EcommerceAction {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| TrackingError::invalid(format!("unknown ecommerce action '{s}'")))
    }
}
