//! # Store Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PAINTSHOP_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use paintshop_core::{
    CheckoutPolicy, TaxRate, DEFAULT_VAT_RATE_BPS, FREE_SHIPPING_THRESHOLD_CENTS,
    SHIPPING_FEE_CENTS,
};
use paintshop_media::validate::MAX_UPLOAD_BYTES;
use paintshop_media::{NormalizeOptions, UploadRules};

/// An environment variable is set but cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{var}: cannot use '{value}' ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown in the header and on order confirmations
    pub store_name: String,

    /// Currency symbol, printed after the amount ("1299.00₽")
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// VAT in basis points, 2000 = 20%
    pub vat_rate_bps: u32,

    /// Subtotal from which shipping is free
    pub free_shipping_threshold_cents: i64,

    pub shipping_fee_cents: i64,

    /// Bounding box for normalized product images
    pub image_max_width: u32,
    pub image_max_height: u32,

    /// JPEG quality factor, 0.0 to 1.0
    pub image_quality: f32,

    /// Largest accepted upload
    pub max_upload_bytes: u64,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "Paintshop"
    /// - Currency: ₽, 2 decimals
    /// - VAT 20%, free shipping from 3000.00, otherwise 299.00
    /// - Images: 800 × 800, quality 0.8, uploads up to 5 MiB
    fn default() -> Self {
        let image = NormalizeOptions::default();
        StoreConfig {
            store_name: "Paintshop".to_string(),
            currency_symbol: "₽".to_string(),
            currency_decimals: 2,
            vat_rate_bps: DEFAULT_VAT_RATE_BPS,
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD_CENTS,
            shipping_fee_cents: SHIPPING_FEE_CENTS,
            image_max_width: image.max_width,
            image_max_height: image.max_height,
            image_quality: image.quality,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by the process environment.
    ///
    /// ## Environment Variables
    /// - `PAINTSHOP_STORE_NAME`
    /// - `PAINTSHOP_VAT_RATE`: percent, e.g. "20" or "12.5"
    /// - `PAINTSHOP_FREE_SHIPPING_FROM`: minor units
    /// - `PAINTSHOP_SHIPPING_FEE`: minor units
    /// - `PAINTSHOP_IMAGE_MAX_WIDTH`, `PAINTSHOP_IMAGE_MAX_HEIGHT`
    /// - `PAINTSHOP_IMAGE_QUALITY`: 0.0 to 1.0
    /// - `PAINTSHOP_MAX_UPLOAD_BYTES`
    pub fn from_env() -> Result<Self, ConfigError> {
        StoreConfig::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup("PAINTSHOP_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(rate) = lookup("PAINTSHOP_VAT_RATE") {
            let pct: f64 = parse("PAINTSHOP_VAT_RATE", &rate)?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(invalid("PAINTSHOP_VAT_RATE", rate, "expected 0 to 100"));
            }
            config.vat_rate_bps = TaxRate::from_percentage(pct).bps();
        }

        if let Some(value) = lookup("PAINTSHOP_FREE_SHIPPING_FROM") {
            config.free_shipping_threshold_cents = parse_non_negative("PAINTSHOP_FREE_SHIPPING_FROM", value)?;
        }

        if let Some(value) = lookup("PAINTSHOP_SHIPPING_FEE") {
            config.shipping_fee_cents = parse_non_negative("PAINTSHOP_SHIPPING_FEE", value)?;
        }

        if let Some(value) = lookup("PAINTSHOP_IMAGE_MAX_WIDTH") {
            config.image_max_width = parse_dimension("PAINTSHOP_IMAGE_MAX_WIDTH", value)?;
        }

        if let Some(value) = lookup("PAINTSHOP_IMAGE_MAX_HEIGHT") {
            config.image_max_height = parse_dimension("PAINTSHOP_IMAGE_MAX_HEIGHT", value)?;
        }

        if let Some(value) = lookup("PAINTSHOP_IMAGE_QUALITY") {
            let quality: f32 = parse("PAINTSHOP_IMAGE_QUALITY", &value)?;
            if !(0.0..=1.0).contains(&quality) {
                return Err(invalid("PAINTSHOP_IMAGE_QUALITY", value, "expected 0.0 to 1.0"));
            }
            config.image_quality = quality;
        }

        if let Some(value) = lookup("PAINTSHOP_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse("PAINTSHOP_MAX_UPLOAD_BYTES", &value)?;
        }

        Ok(config)
    }

    pub fn checkout_policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            free_shipping_threshold_cents: self.free_shipping_threshold_cents,
            shipping_fee_cents: self.shipping_fee_cents,
            vat_rate: TaxRate::from_bps(self.vat_rate_bps),
        }
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            max_width: self.image_max_width,
            max_height: self.image_max_height,
            quality: self.image_quality,
        }
    }

    pub fn upload_rules(&self) -> UploadRules {
        UploadRules::with_max_bytes(self.max_upload_bytes)
    }

    /// Formats a minor-unit amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use paintshop_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(129_900), "1299.00₽");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            },
            self.currency_symbol,
        )
    }
}

fn invalid(var: &'static str, value: String, reason: &'static str) -> ConfigError {
    ConfigError { var, value, reason }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(var, value.to_string(), "not a number"))
}

fn parse_non_negative(var: &'static str, value: String) -> Result<i64, ConfigError> {
    let parsed: i64 = parse(var, &value)?;
    if parsed < 0 {
        return Err(invalid(var, value, "must not be negative"));
    }
    Ok(parsed)
}

fn parse_dimension(var: &'static str, value: String) -> Result<u32, ConfigError> {
    let parsed: u32 = parse(var, &value)?;
    if parsed == 0 {
        return Err(invalid(var, value, "must be positive"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(129_900), "1299.00₽");
        assert_eq!(config.format_currency(1), "0.01₽");
        assert_eq!(config.format_currency(0), "0.00₽");
        assert_eq!(config.format_currency(-29_900), "-299.00₽");
    }

    #[test]
    fn test_defaults_match_store_rules() {
        let config = StoreConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.checkout_policy(), CheckoutPolicy::default());
        assert_eq!(config.normalize_options(), NormalizeOptions::default());
        assert_eq!(config.upload_rules(), UploadRules::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("PAINTSHOP_STORE_NAME", "Краски у дома"),
            ("PAINTSHOP_VAT_RATE", "12.5"),
            ("PAINTSHOP_SHIPPING_FEE", "0"),
            ("PAINTSHOP_IMAGE_MAX_WIDTH", "1024"),
            ("PAINTSHOP_IMAGE_QUALITY", "0.6"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Краски у дома");
        assert_eq!(config.vat_rate_bps, 1250);
        assert_eq!(config.shipping_fee_cents, 0);
        assert_eq!(config.image_max_width, 1024);
        assert_eq!(config.image_max_height, 800);
        assert!((config.image_quality - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bad_values_are_reported() {
        let err = StoreConfig::from_lookup(lookup(&[("PAINTSHOP_VAT_RATE", "twenty")])).unwrap_err();
        assert_eq!(err.var, "PAINTSHOP_VAT_RATE");

        let err = StoreConfig::from_lookup(lookup(&[("PAINTSHOP_IMAGE_MAX_HEIGHT", "0")])).unwrap_err();
        assert_eq!(err.reason, "must be positive");

        let err = StoreConfig::from_lookup(lookup(&[("PAINTSHOP_IMAGE_QUALITY", "1.5")])).unwrap_err();
        assert_eq!(err.var, "PAINTSHOP_IMAGE_QUALITY");

        assert!(StoreConfig::from_lookup(lookup(&[("PAINTSHOP_SHIPPING_FEE", "-1")])).is_err());
    }
}
