//! Variant catalog loading
//!
//! Reads the exported configuration document:
//! `{ "goldPrice": .., "silverPrice": .., "goldVariants": [..], "silverVariants": [..] }`
//! The metal of each variant is taken from the list it appears in.

use super::{ChargeMode, MetalType, Variant};
use crate::error::CatalogError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reference rates and variant lists for both metals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Pure gold rate per 10 g
    #[serde(default)]
    pub gold_price: f64,

    /// Pure silver rate per 10 g
    #[serde(default)]
    pub silver_price: f64,

    #[serde(default)]
    pub gold_variants: Vec<Variant>,

    #[serde(default)]
    pub silver_variants: Vec<Variant>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            gold_price: 0.0,
            silver_price: 0.0,
            gold_variants: vec![
                Variant::new("916 KDM", MetalType::Gold, 91.6, 91.6)
                    .with_making_charge(500.0, ChargeMode::PerGram),
                Variant::new("750 KDM", MetalType::Gold, 75.0, 76.0)
                    .with_making_charge(500.0, ChargeMode::PerGram),
            ],
            silver_variants: vec![
                Variant::new("Silver 925", MetalType::Silver, 92.5, 95.0)
                    .with_making_charge(20.0, ChargeMode::PerGram),
                Variant::new("Silver Payal", MetalType::Silver, 70.0, 80.0)
                    .with_making_charge(150.0, ChargeMode::Fixed),
            ],
        }
    }
}

impl Catalog {
    /// Reference rate per 10 g for a metal
    pub fn reference_rate(&self, metal: MetalType) -> f64 {
        match metal {
            MetalType::Gold => self.gold_price,
            MetalType::Silver => self.silver_price,
        }
    }

    /// Override the reference rate for a metal
    pub fn set_reference_rate(&mut self, metal: MetalType, rate: f64) {
        match metal {
            MetalType::Gold => self.gold_price = rate,
            MetalType::Silver => self.silver_price = rate,
        }
    }

    /// Variants of a metal in catalog order
    pub fn variants(&self, metal: MetalType) -> &[Variant] {
        match metal {
            MetalType::Gold => &self.gold_variants,
            MetalType::Silver => &self.silver_variants,
        }
    }

    /// Find a variant by exact display name
    pub fn find(&self, metal: MetalType, name: &str) -> Option<&Variant> {
        self.variants(metal).iter().find(|v| v.name == name)
    }

    /// Tag every variant with its list's metal and check invariants
    fn normalize(mut self) -> Result<Self, CatalogError> {
        for v in &mut self.gold_variants {
            v.metal_type = MetalType::Gold;
        }
        for v in &mut self.silver_variants {
            v.metal_type = MetalType::Silver;
        }
        for v in self.gold_variants.iter().chain(self.silver_variants.iter()) {
            if let Err(e) = v.validate() {
                warn!("Rejecting catalog: {}", e);
                return Err(e.into());
            }
        }
        Ok(self)
    }
}

/// Load a catalog from any reader holding the JSON document
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_reader(reader)?;
    let catalog = catalog.normalize()?;
    info!(
        "Loaded catalog: {} gold variants, {} silver variants",
        catalog.gold_variants.len(),
        catalog.silver_variants.len()
    );
    Ok(catalog)
}

/// Load a catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let file = File::open(path)?;
    load_catalog_from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORTED: &str = r#"{
        "goldPrice": 60000,
        "silverPrice": 900,
        "goldVariants": [
            { "_id": "a1", "name": "916 KDM", "purchaseTunch": 91.6, "saleTunch": 91.6,
              "addOnPrice": 4000, "makingCharge": 500, "makingChargeType": "PER_GRAM" }
        ],
        "silverVariants": [
            { "_id": "b1", "name": "Payal", "purchaseTunch": 70, "saleTunch": 80,
              "addOnPrice": 0, "makingCharge": 150, "makingChargeType": "FIXED" }
        ]
    }"#;

    #[test]
    fn test_load_exported_document() {
        let catalog = load_catalog_from_reader(EXPORTED.as_bytes()).expect("Failed to load");

        assert_eq!(catalog.reference_rate(MetalType::Gold), 60000.0);
        assert_eq!(catalog.reference_rate(MetalType::Silver), 900.0);

        let payal = catalog.find(MetalType::Silver, "Payal").expect("missing Payal");
        assert_eq!(payal.metal_type, MetalType::Silver);
        assert_eq!(payal.charge_mode, ChargeMode::Fixed);

        let kdm = catalog.find(MetalType::Gold, "916 KDM").expect("missing 916 KDM");
        assert_eq!(kdm.metal_type, MetalType::Gold);
        assert_eq!(kdm.add_on_price, 4000.0);
    }

    #[test]
    fn test_find_is_metal_scoped() {
        let catalog = load_catalog_from_reader(EXPORTED.as_bytes()).unwrap();
        assert!(catalog.find(MetalType::Gold, "Payal").is_none());
    }

    #[test]
    fn test_invalid_variant_fails_load() {
        let json = r#"{ "goldVariants": [ { "name": "x", "purchaseTunch": 0, "saleTunch": 91.6 } ] }"#;
        let err = load_catalog_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidVariant(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = load_catalog_from_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.find(MetalType::Gold, "916 KDM").is_some());
        assert!(catalog.find(MetalType::Gold, "750 KDM").is_some());
        assert!(catalog.clone().normalize().is_ok());
        assert!(catalog.silver_variants.iter().all(|v| v.metal_type == MetalType::Silver));
    }

    #[test]
    fn test_set_reference_rate() {
        let mut catalog = Catalog::default();
        catalog.set_reference_rate(MetalType::Silver, 950.0);
        assert_eq!(catalog.reference_rate(MetalType::Silver), 950.0);
        assert_eq!(catalog.reference_rate(MetalType::Gold), 0.0);
    }
}
