//! Rate board: headline per-10g sale rates for well-known variants

use super::{ceil_to_step, PricingConfig};
use crate::error::QuoteError;
use crate::variant::{Catalog, MetalType};
use crate::words::rupees_in_words;
use log::warn;
use serde::Serialize;

/// Label shown in place of a price when a variant is missing
pub const UNAVAILABLE_LABEL: &str = "अनुपलब्ध";

/// Variants shown on the gold board
pub const KDM_BOARD_NAMES: [&str; 2] = ["916 KDM", "750 KDM"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRow {
    pub name: String,
    /// Rounded per-10g sale rate, `None` when the variant is not in the catalog
    pub rate_per_10g: Option<f64>,
    /// Hindi rupee prose, or the unavailable label
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateBoard {
    pub metal: MetalType,
    pub reference_rate_per_10g: f64,
    pub rows: Vec<BoardRow>,
}

impl RateBoard {
    /// Build one row per requested name, in the order given
    pub fn build(
        catalog: &Catalog,
        metal: MetalType,
        names: &[&str],
        config: &PricingConfig,
    ) -> Result<Self, QuoteError> {
        let rate = catalog.reference_rate(metal);
        if !rate.is_finite() || rate < 0.0 {
            return Err(QuoteError::InvalidInput(format!("reference rate must not be negative, got {}", rate)));
        }

        let mut rows = Vec::with_capacity(names.len());
        for name in names {
            let row = match catalog.find(metal, name) {
                Some(variant) => {
                    variant.validate()?;
                    let raw = rate * variant.sale_tunch / 100.0 + variant.add_on_price;
                    let rounded = ceil_to_step(raw, config.board_rounding_step);
                    BoardRow {
                        name: variant.name.clone(),
                        rate_per_10g: Some(rounded),
                        label: rupees_in_words(rounded),
                    }
                }
                None => {
                    warn!("{} board: variant '{}' not in catalog", metal, name);
                    BoardRow {
                        name: name.to_string(),
                        rate_per_10g: None,
                        label: UNAVAILABLE_LABEL.to_string(),
                    }
                }
            };
            rows.push(row);
        }

        Ok(Self {
            metal,
            reference_rate_per_10g: rate,
            rows,
        })
    }

    /// The standard gold KDM board
    pub fn kdm(catalog: &Catalog, config: &PricingConfig) -> Result<Self, QuoteError> {
        Self::build(catalog, MetalType::Gold, &KDM_BOARD_NAMES, config)
    }
}
