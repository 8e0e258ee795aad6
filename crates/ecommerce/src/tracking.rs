//! Named-parameter helpers that build a field object and render the
//! matching `ga()` call.

use ga_tracking_core::{TrackingConfig, TrackingResult};
use tracing::debug;

use crate::actions::EcommerceAction;
use crate::anonymize::anonymize_ip_script;
use crate::commands::{format_event, format_require, format_set_action};
use crate::field_objects::{
    ActionFieldObject, FieldObject, ImpressionFieldObject, ProductFieldObject,
    PromotionFieldObject,
};

/// Statement separator for multi-call snippets.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Script builder for Enhanced Ecommerce tracking calls.
#[derive(Debug, Clone, Default)]
pub struct Tracking {
    config: TrackingConfig,
}

impl Tracking {
    pub fn new(config: TrackingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    pub fn set_action(&self, action: EcommerceAction) -> TrackingResult<String> {
        format_set_action(action.as_str(), None)
    }

    /// `ec:setAction` with a literal action name and an optional field object
    /// given as JSON.
    pub fn set_action_with(&self, action: &str, field_object: Option<&str>) -> TrackingResult<String> {
        format_set_action(action, field_object)
    }

    /// `ec:setAction` carrying transaction or checkout details.
    pub fn track_action(
        &self,
        action: EcommerceAction,
        field_object: &ActionFieldObject,
    ) -> TrackingResult<String> {
        let json = field_object.to_json()?;
        format_set_action(action.as_str(), Some(&json))
    }

    pub fn require(&self, library: &str) -> TrackingResult<String> {
        format_require(library)
    }

    pub fn event(
        &self,
        category: &str,
        action: &str,
        label: Option<&str>,
        value: Option<i32>,
    ) -> TrackingResult<String> {
        format_event(category, action, label, value)
    }

    pub fn anonymize_ip(&self) -> String {
        anonymize_ip_script(&self.config)
    }

    /// One product impression via `ec:addImpression`.
    #[allow(clippy::too_many_arguments)]
    pub fn track_product_impression(
        &self,
        code: &str,
        name: &str,
        category: Option<&str>,
        brand: Option<&str>,
        variant: Option<&str>,
        list: Option<&str>,
        position: i32,
    ) -> TrackingResult<String> {
        let impression = ImpressionFieldObject {
            id: Some(code.to_string()),
            name: Some(name.to_string()),
            category: category.map(str::to_string),
            brand: brand.map(str::to_string),
            variant: variant.map(str::to_string),
            list: list.map(str::to_string),
            position,
            ..ImpressionFieldObject::default()
        };

        self.render(&impression, "ec:addImpression")
    }

    /// A product via `ec:addProduct`, typically followed by a `set_action`
    /// for click, detail, add, remove, checkout, purchase or refund.
    #[allow(clippy::too_many_arguments)]
    pub fn track_product_add(
        &self,
        code: &str,
        name: &str,
        category: Option<&str>,
        brand: Option<&str>,
        variant: Option<&str>,
        coupon: Option<&str>,
        position: i32,
        price: f64,
        quantity: i32,
    ) -> TrackingResult<String> {
        let product = ProductFieldObject {
            id: Some(code.to_string()),
            name: Some(name.to_string()),
            category: category.map(str::to_string),
            brand: brand.map(str::to_string),
            variant: variant.map(str::to_string),
            coupon: coupon.map(str::to_string),
            position,
            price,
            quantity,
        };

        self.render(&product, "ec:addProduct")
    }

    pub fn track_promotion_impression(
        &self,
        id: &str,
        name: &str,
        creative: Option<&str>,
        position: Option<&str>,
    ) -> TrackingResult<String> {
        let promotion = PromotionFieldObject {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            creative: creative.map(str::to_string),
            position: position.map(str::to_string),
        };

        self.render(&promotion, "ec:addPromo")
    }

    /// Promotion impression, `promo_click` action and click event, joined
    /// with CRLF. Without a label the configured promotion category is used.
    pub fn track_promotion_click(
        &self,
        id: &str,
        name: &str,
        creative: Option<&str>,
        position: Option<&str>,
        event_label: Option<&str>,
    ) -> TrackingResult<String> {
        let category = event_label
            .filter(|label| !label.is_empty())
            .unwrap_or(self.config.promotion_event_category.as_str());

        let statements = [
            self.track_promotion_impression(id, name, creative, position)?,
            self.set_action(EcommerceAction::PromoClick)?,
            format_event(category, "click", Some(name), None)?,
        ];

        Ok(statements.join(LINE_SEPARATOR))
    }

    fn render<T: FieldObject>(&self, field_object: &T, command: &str) -> TrackingResult<String> {
        let script = field_object.to_command(command)?;
        debug!(command, len = script.len(), "tracking call rendered");
        Ok(script)
    }
}
