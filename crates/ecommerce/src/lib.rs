//! Enhanced Ecommerce script generation for the analytics.js `ga()` command
//! queue. Field objects are serialized to compact JSON and wrapped into call
//! expressions that a page renderer embeds verbatim into a script block.
//!
//! # Modules
//!
//! - [`field_objects`] — Product, impression, promotion and action data objects
//! - [`commands`] — Call-expression templates (`ga("cmd",{...});`, events, require)
//! - [`actions`] — Action tokens accepted by `ec:setAction`
//! - [`tracking`] — Named-parameter helpers built on the above
//! - [`anonymize`] — The `anonymizeIp` directive

pub mod actions;
pub mod anonymize;
pub mod commands;
pub mod field_objects;
pub mod tracking;

pub use actions::EcommerceAction;
pub use anonymize::anonymize_ip_script;
pub use commands::{format_command, format_event, format_require, format_set_action};
pub use field_objects::{
    ActionFieldObject, FieldObject, ImpressionFieldObject, ProductFieldObject,
    PromotionFieldObject,
};
pub use ga_tracking_core::{TrackingConfig, TrackingError, TrackingResult};
pub use tracking::Tracking;
