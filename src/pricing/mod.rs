//! Quote engine, rate board and the rounding rules they share

pub mod board;
pub mod engine;

pub use board::{BoardRow, RateBoard, UNAVAILABLE_LABEL};
pub use engine::{compute_quote, QuoteEngine, QuoteRequest, QuoteResult};

pub use crate::rounding::{ceil_to_hundred, ceil_to_step, round_half_up, round_to_nearest_thousand};

use crate::error::QuoteError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Default Rounding Constants
// ============================================================================
// Purchase prices are always rounded UP so acquisition cost is never
// under-quoted. Sale totals are rounded half-up to the whole rupee.

/// Default rounding step for purchase prices (nearest 100, upwards)
pub const DEFAULT_PURCHASE_ROUNDING_STEP: f64 = 100.0;

/// Default rounding step for per-10g rate board figures
pub const DEFAULT_BOARD_ROUNDING_STEP: f64 = 100.0;

/// Weight unit that reference rates are quoted in (grams)
pub const RATE_UNIT_GRAMS: f64 = 10.0;

/// Tunable constants of the pricing rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Purchase price is rounded up to a multiple of this step
    /// 1.0 reproduces whole-rupee rounding
    #[serde(default = "default_purchase_step")]
    pub purchase_rounding_step: f64,

    /// Flat amount added per 10 g to the purchase rate before rounding
    #[serde(default)]
    pub purchase_add_on: f64,

    /// Rate board figures are rounded up to a multiple of this step
    #[serde(default = "default_board_step")]
    pub board_rounding_step: f64,
}

fn default_purchase_step() -> f64 { DEFAULT_PURCHASE_ROUNDING_STEP }
fn default_board_step() -> f64 { DEFAULT_BOARD_ROUNDING_STEP }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            purchase_rounding_step: DEFAULT_PURCHASE_ROUNDING_STEP,
            purchase_add_on: 0.0,
            board_rounding_step: DEFAULT_BOARD_ROUNDING_STEP,
        }
    }
}

impl PricingConfig {
    /// Load from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let config: PricingConfig = serde_json::from_str(json)
            .map_err(|e| QuoteError::InvalidInput(format!("pricing config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuoteError> {
        for (label, step) in [
            ("purchase_rounding_step", self.purchase_rounding_step),
            ("board_rounding_step", self.board_rounding_step),
        ] {
            if !step.is_finite() || step <= 0.0 {
                return Err(QuoteError::InvalidInput(format!("{} must be positive, got {}", label, step)));
            }
        }
        if !self.purchase_add_on.is_finite() || self.purchase_add_on < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "purchase_add_on must not be negative, got {}",
                self.purchase_add_on
            )));
        }
        Ok(())
    }
}
