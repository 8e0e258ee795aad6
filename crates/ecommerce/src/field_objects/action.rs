//! Action data: transaction and checkout details passed alongside
//! `ec:setAction`.

use ga_tracking_core::{TrackingError, TrackingResult};
use serde::{Deserialize, Serialize};

use super::{is_blank, is_zero, is_zero_decimal, FieldObject};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionFieldObject {
    /// Transaction ID (e.g. T1234). Always required here, even though the
    /// API only demands it for purchase and refund.
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    /// Store or affiliation the transaction occurred in (e.g. Google Store).
    #[serde(skip_serializing_if = "is_blank")]
    pub affiliation: Option<String>,
    /// Grand total. When unset the API derives it from the products in the hit.
    #[serde(skip_serializing_if = "is_zero_decimal")]
    pub revenue: f64,
    #[serde(skip_serializing_if = "is_zero_decimal")]
    pub tax: f64,
    #[serde(skip_serializing_if = "is_zero_decimal")]
    pub shipping: f64,
    #[serde(skip_serializing_if = "is_blank")]
    pub coupon: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub list: Option<String>,
    /// Checkout step number.
    #[serde(skip_serializing_if = "is_zero")]
    pub step: i32,
    /// Checkout option, like the selected payment method.
    #[serde(skip_serializing_if = "is_blank")]
    pub option: Option<String>,
}

impl ActionFieldObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = revenue;
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = tax;
        self
    }

    pub fn with_shipping(mut self, shipping: f64) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.list = Some(list.into());
        self
    }

    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }
}

impl FieldObject for ActionFieldObject {
    fn validate(&self) -> TrackingResult<()> {
        if is_blank(&self.id) {
            return Err(TrackingError::missing("Id must be set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_only() {
        assert_eq!(ActionFieldObject::new("T1234").to_json().unwrap(), r#"{"id":"T1234"}"#);
    }

    #[test]
    fn test_purchase_fields() {
        let action = ActionFieldObject::new("T12345")
            .with_coupon("SUMMER2013")
            .with_shipping(5.34)
            .with_tax(2.85)
            .with_revenue(37.39)
            .with_affiliation("Google Store - Online");
        assert_eq!(
            action.to_json().unwrap(),
            r#"{"id":"T12345","affiliation":"Google Store - Online","revenue":37.39,"tax":2.85,"shipping":5.34,"coupon":"SUMMER2013"}"#
        );
    }

    #[test]
    fn test_checkout_step() {
        let action = ActionFieldObject::new("T1").with_step(1).with_option("Visa");
        assert_eq!(action.to_json().unwrap(), r#"{"id":"T1","step":1,"option":"Visa"}"#);
    }

    #[test]
    fn test_id_is_required_even_with_other_fields() {
        let action = ActionFieldObject {
            list: Some("List".into()),
            ..ActionFieldObject::default()
        };
        assert!(matches!(
            action.to_json(),
            Err(TrackingError::MissingRequiredField(_))
        ));
        assert!(ActionFieldObject::new("").validate().is_err());
    }

    #[test]
    fn test_non_finite_revenue_dropped() {
        let action = ActionFieldObject::new("T1").with_revenue(f64::NAN).with_tax(1.0);
        assert_eq!(action.to_json().unwrap(), r#"{"id":"T1","tax":1.0}"#);
    }
}
