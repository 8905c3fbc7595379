//! Shop configuration.
//!
//! Catalog, order-form options and contact settings live in a JSON file so
//! the page carries no hardcoded prices. [`ShopConfig::default`] reproduces
//! the stock storefront.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::contact::ContactSettings;
use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::order::{ExtraOption, ModelOption, ShippingOption};
use crate::types::ProductTag;

/// Choices offered by the custom order form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderOptions {
    pub models: Vec<ModelOption>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub extras: Vec<ExtraOption>,
    pub shipping: Vec<ShippingOption>,
}

impl Default for OrderOptions {
    fn default() -> Self {
        let model = |name: &str, pesos| ModelOption {
            name: name.to_string(),
            unit_price: Money::from_pesos(pesos),
        };
        let extra = |id: &str, label: &str, pesos| ExtraOption {
            id: id.to_string(),
            label: label.to_string(),
            unit_price: Money::from_pesos(pesos),
        };
        let shipping = |label: &str, pesos| ShippingOption {
            label: label.to_string(),
            cost: Money::from_pesos(pesos),
        };

        Self {
            models: vec![
                model("Clásica", 250),
                model("Deportiva", 320),
                model("Retro", 380),
            ],
            sizes: ["CH", "M", "G", "XG"].map(String::from).to_vec(),
            colors: ["Blanco", "Negro", "Azul marino", "Rojo"].map(String::from).to_vec(),
            extras: vec![
                extra("nombre-numero", "Nombre y número", 60),
                extra("parche-liga", "Parche de liga", 40),
            ],
            shipping: vec![
                shipping("Recoger en tienda", 0),
                shipping("Envío estándar", 99),
                shipping("Envío express", 180),
            ],
        }
    }
}

impl OrderOptions {
    pub fn model(&self, name: &str) -> Option<&ModelOption> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn extra(&self, id: &str) -> Option<&ExtraOption> {
        self.extras.iter().find(|e| e.id == id)
    }

    pub fn shipping_option(&self, label: &str) -> Option<&ShippingOption> {
        self.shipping.iter().find(|s| s.label == label)
    }
}

/// Full storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Store name shown in the header
    pub shop_name: String,
    /// Add-to-cart affordances, kept as raw tags and validated on click
    pub catalog: Vec<ProductTag>,
    pub order: OrderOptions,
    pub contact: ContactSettings,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            shop_name: "Playeras Profe Joako".to_string(),
            catalog: vec![
                ProductTag::new("classic-tee", "Playera Clásica", "250"),
                ProductTag::new("sport-tee", "Playera Deportiva", "320"),
                ProductTag::new("retro-tee", "Playera Retro", "380"),
                ProductTag::new("league-jersey", "Jersey de Liga", "450"),
            ],
            order: OrderOptions::default(),
            contact: ContactSettings::default(),
        }
    }
}

impl ShopConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> ShopResult<Self> {
        let config: ShopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Json` if it is not valid JSON for
    /// this schema, `Config` if it fails validation.
    pub fn load(path: &Path) -> ShopResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), products = config.catalog.len(), "Loaded shop config");
        Ok(config)
    }

    /// Read a config file if one is given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "Using default shop config: {}", e);
                Self::default()
            }
        }
    }

    /// Check settings that the schema alone cannot express
    pub fn validate(&self) -> ShopResult<()> {
        let contact = &self.contact;
        if contact.opens_at > 24 || contact.closes_at > 24 {
            return Err(ShopError::Config(format!(
                "business hours must be within 0..=24, got {}..{}",
                contact.opens_at, contact.closes_at
            )));
        }
        if !contact.phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(ShopError::Config("contact phone has no digits".to_string()));
        }
        if !contact.scroll_threshold.is_finite() || contact.scroll_threshold < 0.0 {
            return Err(ShopError::Config(format!(
                "scroll threshold must be a non-negative number, got {}",
                contact.scroll_threshold
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ShopResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_matches_stock_page() {
        let config = ShopConfig::default();
        assert_eq!(config.contact.phone, "527221234567");
        assert_eq!(config.contact.opens_at, 9);
        assert_eq!(config.contact.closes_at, 18);
        assert_eq!(config.contact.scroll_threshold, 300.0);
        assert!(config.order.extra("nombre-numero").is_some());
        assert!(config.order.extra("parche-liga").is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ShopConfig::from_json(r#"{ "contact": { "phone": "5215550000000" } }"#).unwrap();
        assert_eq!(config.contact.phone, "5215550000000");
        assert_eq!(config.contact.opens_at, 9);
        assert_eq!(config.order, OrderOptions::default());
    }

    #[test]
    fn test_prices_as_numbers_or_strings() {
        let json = r#"{
            "order": {
                "models": [
                    { "name": "Básica", "unit_price": 199.5 },
                    { "name": "Premium", "unit_price": "420" }
                ]
            }
        }"#;
        let config = ShopConfig::from_json(json).unwrap();
        assert_eq!(config.order.model("Básica").unwrap().unit_price, Money::from_centavos(19950));
        assert_eq!(config.order.model("Premium").unwrap().unit_price, Money::from_pesos(420));
    }

    #[test]
    fn test_invalid_hours_rejected() {
        let err = ShopConfig::from_json(r#"{ "contact": { "opens_at": 9, "closes_at": 30 } }"#)
            .unwrap_err();
        assert!(matches!(err, ShopError::Config(_)));
    }

    #[test]
    fn test_bad_option_price_reads_as_zero() {
        let json = r#"{
            "order": {
                "models": [ { "name": "X", "unit_price": -1 } ],
                "extras": [ { "id": "p", "label": "Parche", "unit_price": "cuarenta" } ]
            }
        }"#;
        let config = ShopConfig::from_json(json).unwrap();
        assert_eq!(config.order.model("X").unwrap().unit_price, Money::ZERO);
        assert_eq!(config.order.extra("p").unwrap().unit_price, Money::ZERO);
    }

    #[test]
    fn test_bad_catalog_price_kept_as_tag() {
        // Catalog tags are validated on click, not at load
        let config = ShopConfig::from_json(
            r#"{ "catalog": [ { "id": "x", "name": "X", "price": "abc" } ] }"#,
        )
        .unwrap();
        assert!(config.catalog[0].to_product().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ShopConfig::from_json("{ \"shop_name\": ").unwrap_err();
        assert!(matches!(err, ShopError::Json(_)));
    }

    #[test]
    fn test_load_roundtrip_through_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = ShopConfig::default().to_json_pretty().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = ShopConfig::load(file.path()).unwrap();
        assert_eq!(loaded, ShopConfig::default());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(ShopConfig::load_or_default(Some(&missing)), ShopConfig::default());
        assert_eq!(ShopConfig::load_or_default(None), ShopConfig::default());
    }
}
