//! Quote engine: reference rate + variant + weight -> purchase and sale figures

use super::{ceil_to_step, round_half_up, PricingConfig, RATE_UNIT_GRAMS};
use crate::error::QuoteError;
use crate::variant::{Catalog, ChargeMode, MetalType, Variant};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// Inputs for a single quote
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub reference_rate_per_10g: f64,
    pub variant: Variant,
    pub weight_grams: f64,
}

/// A computed quote, echoing the inputs it was built from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub variant: Variant,
    pub weight_grams: f64,
    pub reference_rate_per_10g: f64,

    /// Purchase rate per 10 g (before weight scaling and rounding)
    pub purchase_rate_per_10g: f64,
    /// Purchase price for the weight, rounded up to the configured step
    pub purchase_price: f64,

    /// Sale rate per 10 g including the add-on, unrounded
    pub selling_rate_per_10g: f64,
    pub making_charge_applied: f64,
    /// Sale total rounded half-up to the whole rupee
    pub final_selling_price: f64,
}

/// Stateless pricing rules parameterised by rounding constants
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    config: PricingConfig,
}

impl QuoteEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Compute a quote; validation happens before any arithmetic
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
        let QuoteRequest { reference_rate_per_10g: rate, variant, weight_grams: weight } = request;
        let (rate, weight) = (*rate, *weight);

        if !weight.is_finite() || weight <= 0.0 {
            return Err(QuoteError::InvalidInput(format!("weight must be a positive number of grams, got {}", weight)));
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(QuoteError::InvalidInput(format!("reference rate must not be negative, got {}", rate)));
        }
        variant.validate()?;

        let purchase_rate_per_10g = rate * variant.purchase_tunch / 100.0 + self.config.purchase_add_on;
        let purchase_price = ceil_to_step(
            purchase_rate_per_10g / RATE_UNIT_GRAMS * weight,
            self.config.purchase_rounding_step,
        );

        let mut selling_rate_per_10g = rate * variant.sale_tunch / 100.0;
        if variant.add_on_price > 0.0 {
            selling_rate_per_10g += variant.add_on_price;
        }

        let making_charge_applied = match variant.charge_mode {
            ChargeMode::PerGram => variant.making_charge * weight.ceil(),
            ChargeMode::Fixed => variant.making_charge,
        };

        let final_selling_price =
            round_half_up(selling_rate_per_10g / RATE_UNIT_GRAMS * weight + making_charge_applied);

        debug!(
            "Quote {} {}g @ {}: purchase {} sale/10g {} making {} final {}",
            variant.name,
            weight,
            rate,
            purchase_price,
            selling_rate_per_10g,
            making_charge_applied,
            final_selling_price
        );

        Ok(QuoteResult {
            variant: variant.clone(),
            weight_grams: weight,
            reference_rate_per_10g: rate,
            purchase_rate_per_10g,
            purchase_price,
            selling_rate_per_10g,
            making_charge_applied,
            final_selling_price,
        })
    }

    /// Quote a catalog variant by name using the catalog's reference rate
    pub fn quote_named(
        &self,
        catalog: &Catalog,
        metal: MetalType,
        name: &str,
        weight_grams: f64,
    ) -> Result<QuoteResult, QuoteError> {
        let variant = catalog
            .find(metal, name)
            .ok_or_else(|| QuoteError::InvalidInput(format!("no {} variant named '{}'", metal, name)))?;

        self.quote(&QuoteRequest {
            reference_rate_per_10g: catalog.reference_rate(metal),
            variant: variant.clone(),
            weight_grams,
        })
    }

    /// Quote every variant of a metal, in catalog order
    pub fn quote_all(
        &self,
        catalog: &Catalog,
        metal: MetalType,
        weight_grams: f64,
    ) -> Result<Vec<QuoteResult>, QuoteError> {
        let rate = catalog.reference_rate(metal);
        catalog
            .variants(metal)
            .par_iter()
            .map(|variant| {
                self.quote(&QuoteRequest {
                    reference_rate_per_10g: rate,
                    variant: variant.clone(),
                    weight_grams,
                })
            })
            .collect()
    }
}

/// Compute a quote with the default rounding constants
pub fn compute_quote(reference_rate_per_10g: f64, variant: &Variant, weight_grams: f64) -> Result<QuoteResult, QuoteError> {
    QuoteEngine::default().quote(&QuoteRequest {
        reference_rate_per_10g,
        variant: variant.clone(),
        weight_grams,
    })
}
