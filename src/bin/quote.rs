//! Quote a weight against a variant catalog and print the result with
//! amounts in words

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use kdm_pricing::pricing::RateBoard;
use kdm_pricing::variant::{load_catalog, Catalog, MetalType};
use kdm_pricing::words::{format_indian_grouping, rupees_in, Language};
use kdm_pricing::{PricingConfig, QuoteEngine, QuoteResult};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Metal {
    Gold,
    Silver,
}

impl From<Metal> for MetalType {
    fn from(m: Metal) -> Self {
        match m {
            Metal::Gold => MetalType::Gold,
            Metal::Silver => MetalType::Silver,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "quote", about = "Jewellery price quotes with amounts in words")]
struct Args {
    /// Metal whose reference rate and variants are used
    #[arg(long, value_enum, default_value = "gold")]
    metal: Metal,

    /// Weight in grams
    #[arg(long)]
    weight: Option<f64>,

    /// Variant name, e.g. "916 KDM"
    #[arg(long)]
    variant: Option<String>,

    /// Quote every variant of the metal
    #[arg(long)]
    all: bool,

    /// Reference rate per 10 g; overrides the catalog's
    #[arg(long)]
    rate: Option<f64>,

    /// Exported catalog JSON; built-in variants when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pricing config JSON (rounding steps, purchase add-on)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spell amounts in Indian-English instead of Hindi
    #[arg(long)]
    english: bool,

    /// Print the KDM rate board
    #[arg(long)]
    board: bool,

    /// Write quotes to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let metal: MetalType = args.metal.into();
    let language = if args.english { Language::IndianEnglish } else { Language::Hindi };

    let mut catalog = match &args.catalog {
        Some(path) => load_catalog(path).with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::default(),
    };
    if let Some(rate) = args.rate {
        catalog.set_reference_rate(metal, rate);
    }
    if catalog.reference_rate(metal) == 0.0 {
        warn!("{} reference rate is zero; pass --rate", metal);
    }

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
            PricingConfig::from_json(&json)?
        }
        None => PricingConfig::default(),
    };
    info!("Pricing config: {:?}", config);

    if args.board {
        let board = RateBoard::kdm(&catalog, &config)?;
        println!("KDM rates per 10g (pure gold {})", format_indian_grouping(board.reference_rate_per_10g, 2));
        for row in &board.rows {
            match row.rate_per_10g {
                Some(rate) => println!("  {:<10} ₹{:>14}  {}", row.name, format_indian_grouping(rate, 2), rupees_in(rate, language)),
                None => println!("  {:<10} {:>15}  {}", row.name, "-", row.label),
            }
        }
    }

    let engine = QuoteEngine::new(config);
    let quotes = match (args.weight, &args.variant, args.all) {
        (Some(weight), _, true) => engine.quote_all(&catalog, metal, weight)?,
        (Some(weight), Some(name), false) => vec![engine.quote_named(&catalog, metal, name, weight)?],
        (Some(_), None, false) => bail!("pass --variant <name> or --all"),
        (None, _, _) if args.board => return Ok(()),
        (None, _, _) => bail!("pass --weight <grams>"),
    };

    for quote in &quotes {
        print_quote(quote, language);
    }

    if let Some(path) = &args.csv {
        write_csv(path, &quotes).with_context(|| format!("writing {}", path.display()))?;
        println!("Output written to {}", path.display());
    }

    Ok(())
}

fn print_quote(quote: &QuoteResult, language: Language) {
    let v = &quote.variant;
    println!("\n{} ({}% / {}%), {} g", v.name, v.purchase_tunch, v.sale_tunch, quote.weight_grams);
    println!("  {:<22} ₹{:>14}", "Reference rate /10g", format_indian_grouping(quote.reference_rate_per_10g, 2));
    println!("  {:<22} ₹{:>14}", "Sale rate /10g", format_indian_grouping(quote.selling_rate_per_10g, 2));
    println!("  {:<22} ₹{:>14}  ({})", "Making charge", format_indian_grouping(quote.making_charge_applied, 2), v.charge_mode);
    println!("  {:<22} ₹{:>14}  {}", "Purchase price", format_indian_grouping(quote.purchase_price, 2), rupees_in(quote.purchase_price, language));
    println!("  {:<22} ₹{:>14}  {}", "Selling price", format_indian_grouping(quote.final_selling_price, 2), rupees_in(quote.final_selling_price, language));
}

fn write_csv(path: &Path, quotes: &[QuoteResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Variant",
        "Metal",
        "WeightGrams",
        "ReferenceRate10g",
        "PurchasePrice",
        "SellingRate10g",
        "MakingCharge",
        "FinalSellingPrice",
    ])?;
    for q in quotes {
        writer.write_record([
            q.variant.name.clone(),
            q.variant.metal_type.to_string(),
            q.weight_grams.to_string(),
            format!("{:.2}", q.reference_rate_per_10g),
            format!("{:.2}", q.purchase_price),
            format!("{:.2}", q.selling_rate_per_10g),
            format!("{:.2}", q.making_charge_applied),
            format!("{:.2}", q.final_selling_price),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
