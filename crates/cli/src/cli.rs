use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use shopfloor_inventory::{MovementType, SortField};
use shopfloor_production::ProductionStatus;
use shopfloor_workforce::EmployeeStatus;

/// Manufacturing operations: inventory ledger, production orders, workforce
/// and customers. Prints JSON on stdout; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "shopfloor", version, about)]
pub struct Cli {
    /// Directory of the file store (overrides SHOPFLOOR_DATA_DIR).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Use a throwaway in-memory store (sample data only).
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stock items.
    Items(ItemsArgs),
    /// Distinct item categories.
    Categories,
    /// Items at or below their reorder point.
    LowStock,
    /// Movement log, newest first.
    Movements {
        /// Only movements for this item.
        #[arg(long)]
        item: Option<String>,
    },
    /// Create a stock item (records its initial movement).
    AddItem(AddItemArgs),
    /// Record a stock movement against an item.
    Record(RecordArgs),
    /// Items whose quantity disagrees with their movement log.
    Reconcile,
    /// List production orders (read-only view).
    Orders {
        #[arg(long)]
        status: Option<ProductionStatus>,
        #[arg(long)]
        search: Option<String>,
    },
    /// List employees (read-only view).
    Employees {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        status: Option<EmployeeStatus>,
        #[arg(long)]
        search: Option<String>,
    },
    /// List customers (read-only view).
    Customers,
    /// Dashboard aggregates over all collections.
    Report,
}

#[derive(Debug, Args)]
pub struct ItemsArgs {
    #[arg(long)]
    pub category: Option<String>,
    /// Matches name, description, supplier or id.
    #[arg(long)]
    pub search: Option<String>,
    /// name | category | quantity | cost
    #[arg(long, default_value = "name")]
    pub sort: SortField,
    #[arg(long)]
    pub desc: bool,
}

#[derive(Debug, Args)]
pub struct AddItemArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub quantity: f64,
    #[arg(long)]
    pub unit: String,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub reorder_point: Option<f64>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub supplier: Option<String>,
    #[arg(long)]
    pub cost: Option<f64>,
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Item id.
    #[arg(long)]
    pub item: String,
    /// initial | addition | withdrawal | adjustment
    #[arg(long = "type")]
    pub kind: MovementType,
    /// Amount moved, or the new absolute quantity for an adjustment.
    #[arg(long)]
    pub quantity: f64,
    /// Effective date (YYYY-MM-DD); defaults to today (UTC).
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub notes: Option<String>,
}
