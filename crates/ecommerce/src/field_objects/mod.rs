//! Enhanced Ecommerce field objects.
//!
//! Each object implements [`FieldObject`] and serializes to a compact JSON
//! object holding only its meaningful fields, in declaration order, with
//! camelCase keys. Text fields are dropped when unset or empty, numeric
//! fields when they equal zero. Non-finite decimals are dropped as well since
//! JSON has no literal for them.

mod action;
mod impression;
mod product;
mod promotion;

pub use action::ActionFieldObject;
pub use impression::ImpressionFieldObject;
pub use product::ProductFieldObject;
pub use promotion::PromotionFieldObject;

use ga_tracking_core::{TrackingError, TrackingResult};
use serde::Serialize;

use crate::actions::EcommerceAction;
use crate::commands::format_command;

/// A data object that can be rendered as the payload of a `ga()` call.
pub trait FieldObject: Serialize {
    /// Check the object's required-field rule.
    fn validate(&self) -> TrackingResult<()>;

    /// Validate, then serialize to a compact JSON object.
    fn to_json(&self) -> TrackingResult<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Render `ga("<command>",<json>);`.
    fn to_command(&self, command: &str) -> TrackingResult<String> {
        let json = self.to_json()?;
        format_command(command, Some(&json))
    }

    /// Render the object with an action token as the command name.
    fn to_action_command(&self, action: EcommerceAction) -> TrackingResult<String> {
        self.to_command(action.as_str())
    }
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

pub(crate) fn is_zero_decimal(value: &f64) -> bool {
    *value == 0.0 || !value.is_finite()
}

pub(crate) fn require_id_or_name(id: &Option<String>, name: &Option<String>) -> TrackingResult<()> {
    if is_blank(id) && is_blank(name) {
        return Err(TrackingError::missing("Id or Name must be set"));
    }
    Ok(())
}
