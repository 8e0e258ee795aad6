//! The `anonymizeIp` directive, emitted when the configuration asks for it.

use ga_tracking_core::TrackingConfig;
use tracing::debug;

pub const ANONYMIZE_IP_SCRIPT: &str = "ga('set', 'anonymizeIp', true);";

/// Returns the directive, or an empty string when anonymization is off.
pub fn anonymize_ip_script(config: &TrackingConfig) -> String {
    if !config.anonymize_ip {
        return String::new();
    }
    debug!("anonymizeIp directive rendered");
    ANONYMIZE_IP_SCRIPT.to_string()
}
