use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Filter, sort, paginate and facet a product catalog snapshot
#[derive(Parser, Debug)]
#[command(name = "catalog-query")]
#[command(version)]
#[command(
    about = "Filter, sort, paginate and facet a product catalog snapshot",
    long_about = None
)]
pub struct Args {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Filter query string, e.g. "category=trading-cards&inStock=true"
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Free-text search over name, description, category, vendor and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category slug to include (repeatable)
    #[arg(short, long = "category", value_name = "SLUG")]
    pub categories: Vec<String>,

    /// Condition grade to include (repeatable)
    #[arg(long = "condition", value_name = "CONDITION")]
    pub conditions: Vec<String>,

    /// Vendor id to include (repeatable)
    #[arg(long = "vendor", value_name = "VENDOR_ID")]
    pub vendors: Vec<String>,

    /// Tag to include (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only products with stock
    #[arg(long)]
    pub in_stock: bool,

    /// Lowest price to include
    #[arg(long, value_name = "PRICE", allow_negative_numbers = true)]
    pub min_price: Option<f64>,

    /// Highest price to include
    #[arg(long, value_name = "PRICE", allow_negative_numbers = true)]
    pub max_price: Option<f64>,

    /// Sort option (newest, price-asc, name-desc, ...) or a field with --order
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction for a field sort: asc or desc
    #[arg(long)]
    pub order: Option<String>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Products per page
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub limit: Option<u16>,

    /// Include price histogram, vendor, tag and price-range facets
    #[arg(long)]
    pub facets: bool,

    /// Number of price histogram buckets
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub buckets: Option<u16>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./catalog-query.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
