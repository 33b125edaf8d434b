//! Variant profiles: purity and markup settings for a sellable item

pub mod catalog;

pub use catalog::{load_catalog, load_catalog_from_reader, Catalog};

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which reference rate a variant's tunch applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetalType {
    #[default]
    #[serde(rename = "GOLD", alias = "Gold")]
    Gold,
    #[serde(rename = "SILVER", alias = "Silver")]
    Silver,
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetalType::Gold => write!(f, "Gold"),
            MetalType::Silver => write!(f, "Silver"),
        }
    }
}

/// How a variant's making charge scales with weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargeMode {
    /// Charged for every started gram
    #[default]
    #[serde(rename = "PER_GRAM", alias = "PerGram")]
    PerGram,
    /// One flat charge regardless of weight
    #[serde(rename = "FIXED", alias = "Fixed")]
    Fixed,
}

impl fmt::Display for ChargeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeMode::PerGram => write!(f, "PER_GRAM"),
            ChargeMode::Fixed => write!(f, "FIXED"),
        }
    }
}

/// A named pricing profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Display label, e.g. "916 KDM"
    pub name: String,

    /// Purity percentage used for the acquisition price
    pub purchase_tunch: f64,

    /// Purity percentage used for the customer-facing rate
    pub sale_tunch: f64,

    /// Flat premium added per 10 g at sale time
    #[serde(default)]
    pub add_on_price: f64,

    /// Making charge, interpreted per `charge_mode`
    #[serde(default)]
    pub making_charge: f64,

    #[serde(default, alias = "makingChargeType")]
    pub charge_mode: ChargeMode,

    #[serde(default)]
    pub metal_type: MetalType,
}

impl Variant {
    /// Create a variant with no add-on and no making charge
    pub fn new(name: impl Into<String>, metal_type: MetalType, purchase_tunch: f64, sale_tunch: f64) -> Self {
        Self {
            name: name.into(),
            purchase_tunch,
            sale_tunch,
            add_on_price: 0.0,
            making_charge: 0.0,
            charge_mode: ChargeMode::PerGram,
            metal_type,
        }
    }

    pub fn with_add_on(mut self, add_on_price: f64) -> Self {
        self.add_on_price = add_on_price;
        self
    }

    pub fn with_making_charge(mut self, making_charge: f64, charge_mode: ChargeMode) -> Self {
        self.making_charge = making_charge;
        self.charge_mode = charge_mode;
        self
    }

    /// Check the positivity invariants
    ///
    /// Both tunch values must be finite and strictly positive; add-on and
    /// making charge must be finite and non-negative.
    pub fn validate(&self) -> Result<(), QuoteError> {
        let invalid = |reason: String| QuoteError::InvalidVariant {
            name: self.name.clone(),
            reason,
        };

        if !self.purchase_tunch.is_finite() || self.purchase_tunch <= 0.0 {
            return Err(invalid(format!("purchase tunch must be positive, got {}", self.purchase_tunch)));
        }
        if !self.sale_tunch.is_finite() || self.sale_tunch <= 0.0 {
            return Err(invalid(format!("sale tunch must be positive, got {}", self.sale_tunch)));
        }
        if !self.add_on_price.is_finite() || self.add_on_price < 0.0 {
            return Err(invalid(format!("add-on price must not be negative, got {}", self.add_on_price)));
        }
        if !self.making_charge.is_finite() || self.making_charge < 0.0 {
            return Err(invalid(format!("making charge must not be negative, got {}", self.making_charge)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_charges() {
        let v = Variant::new("916 KDM", MetalType::Gold, 91.6, 91.6)
            .with_add_on(4000.0)
            .with_making_charge(500.0, ChargeMode::PerGram);

        assert_eq!(v.add_on_price, 4000.0);
        assert_eq!(v.making_charge, 500.0);
        assert_eq!(v.charge_mode, ChargeMode::PerGram);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_zero_tunch_rejected() {
        let v = Variant::new("bad", MetalType::Gold, 0.0, 91.6);
        assert!(matches!(v.validate(), Err(QuoteError::InvalidVariant { .. })));

        let v = Variant::new("bad", MetalType::Silver, 80.0, -1.0);
        assert!(matches!(v.validate(), Err(QuoteError::InvalidVariant { .. })));
    }

    #[test]
    fn test_negative_charges_rejected() {
        let v = Variant::new("x", MetalType::Gold, 91.6, 91.6).with_add_on(-1.0);
        assert!(v.validate().is_err());

        let v = Variant::new("x", MetalType::Gold, 91.6, 91.6).with_making_charge(-5.0, ChargeMode::Fixed);
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "_id": "66a1",
            "name": "Payal",
            "purchaseTunch": 70,
            "saleTunch": 80,
            "addOnPrice": 0,
            "makingCharge": 150,
            "makingChargeType": "FIXED"
        }"#;
        let v: Variant = serde_json::from_str(json).unwrap();

        assert_eq!(v.name, "Payal");
        assert_eq!(v.charge_mode, ChargeMode::Fixed);
        assert_eq!(v.making_charge, 150.0);
        assert_eq!(v.metal_type, MetalType::Gold);
    }
}
