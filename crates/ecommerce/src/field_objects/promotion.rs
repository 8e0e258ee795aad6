//! Promotion data: an internal promotion shown on the page. Sent with
//! `ec:addPromo`.

use ga_tracking_core::TrackingResult;
use serde::{Deserialize, Serialize};

use super::{is_blank, require_id_or_name, FieldObject};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromotionFieldObject {
    /// Promotion ID (e.g. PROMO_1234).
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// Creative associated with the promotion (e.g. summer_banner2).
    #[serde(skip_serializing_if = "is_blank")]
    pub creative: Option<String>,
    /// Slot of the creative (e.g. banner_slot_1). Text, unlike product positions.
    #[serde(skip_serializing_if = "is_blank")]
    pub position: Option<String>,
}

impl PromotionFieldObject {
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

    pub fn with_creative(mut self, creative: impl Into<String>) -> Self {
        self.creative = Some(creative.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

impl FieldObject for PromotionFieldObject {
    fn validate(&self) -> TrackingResult<()> {
        require_id_or_name(&self.id, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_promotion() {
        let promo = PromotionFieldObject::new()
            .with_id("PROMO_1234")
            .with_name("Summer Sale")
            .with_creative("summer_banner2")
            .with_position("banner_slot1");
        assert_eq!(
            promo.to_json().unwrap(),
            r#"{"id":"PROMO_1234","name":"Summer Sale","creative":"summer_banner2","position":"banner_slot1"}"#
        );
    }

    #[test]
    fn test_empty_position_omitted() {
        let promo = PromotionFieldObject::new().with_id("PROMO_1234").with_position("");
        assert_eq!(promo.to_json().unwrap(), r#"{"id":"PROMO_1234"}"#);
    }

    #[test]
    fn test_missing_id_and_name() {
        let promo = PromotionFieldObject::new().with_creative("summer_banner2");
        assert!(promo.to_command("ec:addPromo").is_err());
    }
}
