use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("tasklist v", env!("CARGO_PKG_VERSION"), " - a paged todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read config from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Todos per page (overrides the config file)
    #[arg(long = "page-size", global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a list of TOTAL_ITEMS is paged
    Pages(PagesArgs),
    /// Print the config file location
    ConfigPath,
}

#[derive(Args)]
pub struct PagesArgs {
    /// Number of items in the list
    pub total_items: usize,
    /// Items per page (default: page size from config)
    #[arg(long = "per-page", value_parser = clap::value_parser!(u64).range(1..))]
    pub per_page: Option<u64>,
    /// Current page, 1-based
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
