use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use tracing::debug;

/// Tracking configuration. Loaded from environment variables with the
/// prefix `GA_TRACKING__`, e.g. `GA_TRACKING__ANONYMIZE_IP=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    /// Emit the `anonymizeIp` directive in rendered pages.
    #[serde(default)]
    pub anonymize_ip: bool,
    /// Event category used for promotion clicks when the caller gives none.
    #[serde(default = "default_promotion_event_category")]
    pub promotion_event_category: String,
}

fn default_promotion_event_category() -> String {
    "Internal Promotions".to_string()
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            anonymize_ip: false,
            promotion_event_category: default_promotion_event_category(),
        }
    }
}

impl TrackingConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("GA_TRACKING")
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            anonymize_ip = config.anonymize_ip,
            promotion_event_category = %config.promotion_event_category,
            "tracking config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackingConfig::default();
        assert!(!config.anonymize_ip);
        assert_eq!(config.promotion_event_category, "Internal Promotions");
    }

    #[test]
    fn test_empty_source_falls_back_to_defaults() {
        let config = TrackingConfig::from_builder(config::Config::builder()).unwrap();
        assert!(!config.anonymize_ip);
        assert_eq!(config.promotion_event_category, "Internal Promotions");
    }

    #[test]
    fn test_overrides() {
        let builder = config::Config::builder()
            .set_override("anonymize_ip", true)
            .unwrap()
            .set_override("promotion_event_category", "Banners")
            .unwrap();
        let config = TrackingConfig::from_builder(builder).unwrap();
        assert!(config.anonymize_ip);
        assert_eq!(config.promotion_event_category, "Banners");
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let builder = config::Config::builder()
            .set_override("anonymize_ip", "sometimes")
            .unwrap();
        assert!(TrackingConfig::from_builder(builder).is_err());
    }
}
