//! Runtime settings for PIX generation.

use crate::domain::pix::text::{DEFAULT_MERCHANT_CITY, DEFAULT_REFERENCE_LABEL};

pub const ENV_MERCHANT_CITY: &str = "PIX_MERCHANT_CITY";
pub const ENV_REFERENCE_LABEL: &str = "PIX_REFERENCE_LABEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixSettings {
    /// City used when the merchant record has none (env: PIX_MERCHANT_CITY)
    pub merchant_city: String,
    /// Value of the reference label sub-field (env: PIX_REFERENCE_LABEL)
    pub reference_label: String,
}

impl Default for PixSettings {
    fn default() -> Self {
        Self {
            merchant_city: DEFAULT_MERCHANT_CITY.to_string(),
            reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
        }
    }
}

impl PixSettings {
    /// Reads settings from the environment, keeping defaults for unset or
    /// blank variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            merchant_city: read(ENV_MERCHANT_CITY).unwrap_or(defaults.merchant_city),
            reference_label: read(ENV_REFERENCE_LABEL).unwrap_or(defaults.reference_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PixSettings::from_lookup(|_| None);
        assert_eq!(settings.merchant_city, "SAO PAULO");
        assert_eq!(settings.reference_label, "***");
    }

    #[test]
    fn test_env_overrides_and_blank_values() {
        let settings = PixSettings::from_lookup(|name| match name {
            ENV_MERCHANT_CITY => Some("Curitiba".to_string()),
            ENV_REFERENCE_LABEL => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(settings.merchant_city, "Curitiba");
        assert_eq!(settings.reference_label, "***");
    }
}
