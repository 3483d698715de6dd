use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cart-checkout")]
#[command(about = "Price a cart of product ids with the pairwise and volume coupons")]
#[command(version)]
pub struct Cli {
    /// Product ids to check out (defaults to the sample cart)
    #[arg(conflicts_with = "cart")]
    pub ids: Vec<String>,

    /// Catalog JSON file (defaults to the built-in drinks catalog)
    #[arg(long, short = 'c', env = "CHECKOUT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Cart JSON file holding an array of product ids
    #[arg(long)]
    pub cart: Option<PathBuf>,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, env = "CHECKOUT_LOG", default_value = "info")]
    pub log: String,
}
