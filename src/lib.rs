//! Jewellery pricing: quotes from a reference metal rate and a variant
//! profile, with amounts spelled out in the Indian numbering system.

pub mod error;
pub mod pricing;
pub mod rounding;
pub mod variant;
pub mod words;

pub use error::{CatalogError, QuoteError};
pub use pricing::{compute_quote, PricingConfig, QuoteEngine, QuoteRequest, QuoteResult, RateBoard};
pub use variant::{Catalog, ChargeMode, MetalType, Variant};
pub use words::{number_to_english_words, number_to_words, rupees_in_words, Language};
