use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::booking::Fees;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub booking: Option<BookingConfig>,
}

#[derive(Debug, Deserialize)]
pub struct BookingConfig {
    pub default_nights: Option<i64>,
    pub cleaning_fee:   Option<u32>,
    pub service_fee:    Option<u32>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = config_dir().join("config.toml");
        if path.exists() {
            Ok(toml::from_str(&std::fs::read_to_string(&path)?)?)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn fees(&self) -> Fees {
        let defaults = Fees::default();
        match &self.booking {
            Some(b) => Fees {
                cleaning: b.cleaning_fee.unwrap_or(defaults.cleaning),
                service:  b.service_fee.unwrap_or(defaults.service),
            },
            None => defaults,
        }
    }

    pub fn default_nights(&self) -> i64 {
        self.booking
            .as_ref()
            .and_then(|b| b.default_nights)
            .unwrap_or(2)
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wanderrest")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.fees(), Fees { cleaning: 15, service: 10 });
        assert_eq!(cfg.default_nights(), 2);
    }

    #[test]
    fn partial_booking_section_overrides_only_what_it_names() {
        let cfg: AppConfig = toml::from_str("[booking]\ncleaning_fee = 20\n").unwrap();
        assert_eq!(cfg.fees(), Fees { cleaning: 20, service: 10 });
        assert_eq!(cfg.default_nights(), 2);
    }
}
