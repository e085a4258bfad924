//! Command-line surface
//!
//! One subcommand per user action: list (with the search/filter/sort
//! controls), show, add, edit, rm, export.

use clap::{Parser, Subcommand};
use ordena_core::{OrderStatus, SortKey, StatusFilter};
use std::path::PathBuf;

fn parse_status(s: &str) -> Result<OrderStatus, String> {
    s.parse()
}

fn parse_status_filter(s: &str) -> Result<StatusFilter, String> {
    s.parse()
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse()
}

#[derive(Debug, Parser)]
#[command(name = "ordena", version, about = "Purchase-order ledger")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List orders, filtered and sorted
    List {
        /// Substring matched against id, supplier, or any item name
        #[arg(long, default_value = "")]
        query: String,

        /// `all` or one of: pending, in_progress, received, cancelled
        #[arg(long, default_value = "all", value_parser = parse_status_filter)]
        status: StatusFilter,

        /// Substring matched against the supplier name
        #[arg(long, default_value = "")]
        supplier: String,

        /// One of: date_desc, date_asc, value_desc, value_asc
        #[arg(long, default_value = "date_desc", value_parser = parse_sort_key)]
        sort: SortKey,
    },

    /// Show one order in full
    Show { id: String },

    /// Create a new order
    Add {
        #[arg(long)]
        supplier: String,

        /// ISO date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "pending", value_parser = parse_status)]
        status: OrderStatus,

        /// Line item as `name|qty|price`; repeat for multiple items
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Edit an existing order; omitted fields keep their current value
    Edit {
        id: String,

        #[arg(long)]
        supplier: Option<String>,

        /// ISO date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_parser = parse_status)]
        status: Option<OrderStatus>,

        /// Replacement line item as `name|qty|price`; repeat for multiple.
        /// When omitted the existing items are kept.
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// Delete an order
    Rm { id: String },

    /// Export the whole collection as CSV
    Export {
        /// Output path
        #[arg(long, default_value = "ordens.csv")]
        out: PathBuf,
    },
}
