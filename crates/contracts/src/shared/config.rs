use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub order: OrderConfig,
    pub weights: WeightsConfig,
    pub motion: MotionConfig,
}

/// Where and how the composed order is sent
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrderConfig {
    /// Messaging link base, without trailing slash
    pub endpoint: String,
    /// Fixed recipient identifier appended to the endpoint
    pub recipient: String,
    /// First line of every order message
    pub preamble: String,
    /// Unit label shown next to weights in the cart list
    pub weight_unit: String,
    /// Blocking notice shown when confirm fails
    pub weight_required_notice: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WeightsConfig {
    pub presets: Vec<String>,
}

/// Тайминги и пороги анимаций
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub hide_delay_ms: u32,
    pub show_delay_ms: u32,
    pub pulse_ms: u32,
    pub bump_ms: u32,
    pub nav_offset_px: f64,
    pub header_threshold_px: f64,
    pub grain_interval_ms: u32,
    pub fade_stagger_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[order]
endpoint = "https://wa.me"
recipient = "96181079758"
preamble = "مرحبا، أريد طلب التوابل التالية:"
weight_unit = "غرام"
weight_required_notice = "الرجاء اختيار الوزن"

[weights]
presets = ["50", "100", "250", "500", "1000"]

[motion]
hide_delay_ms = 300
show_delay_ms = 10
pulse_ms = 150
bump_ms = 300
nav_offset_px = 100.0
header_threshold_px = 100.0
grain_interval_ms = 100
fade_stagger_ms = 100
"#;

impl StoreConfig {
    /// Parse a configuration document
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid storefront configuration")
    }

    /// Load the embedded configuration.
    ///
    /// Falls back to [`StoreConfig::default`] if the embedded document does not
    /// parse, so the page still comes up.
    pub fn load() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Using built-in configuration: {:#}", e);
                Self::default()
            }
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            order: OrderConfig {
                endpoint: "https://wa.me".to_string(),
                recipient: "96181079758".to_string(),
                preamble: "مرحبا، أريد طلب التوابل التالية:".to_string(),
                weight_unit: "غرام".to_string(),
                weight_required_notice: "الرجاء اختيار الوزن".to_string(),
            },
            weights: WeightsConfig {
                presets: ["50", "100", "250", "500", "1000"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            motion: MotionConfig::default(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 300,
            show_delay_ms: 10,
            pulse_ms: 150,
            bump_ms: 300,
            nav_offset_px: 100.0,
            header_threshold_px: 100.0,
            grain_interval_ms: 100,
            fade_stagger_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = StoreConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.order.recipient, "96181079758");
        assert_eq!(config.weights.presets.len(), 5);
        assert_eq!(config.motion.hide_delay_ms, 300);
    }

    #[test]
    fn test_embedded_matches_builtin() {
        assert_eq!(StoreConfig::load(), StoreConfig::default());
    }

    #[test]
    fn test_missing_section_is_error() {
        let err = StoreConfig::from_toml("[order]\nendpoint = \"x\"\n").unwrap_err();
        assert!(format!("{:#}", err).contains("invalid storefront configuration"));
    }
}
