use anyhow::Context;
use serde_json::Value as JsonValue;

use shopfloor_infra::Shopfloor;
use shopfloor_inventory::{ItemQuery, NewMovement, NewStockItem, SortDirection};
use shopfloor_production::OrderQuery;
use shopfloor_workforce::EmployeeQuery;

use crate::cli::{AddItemArgs, Command, ItemsArgs, RecordArgs};

/// Execute one command and return its JSON result.
pub fn run(app: &Shopfloor, command: Command) -> anyhow::Result<JsonValue> {
    let out = match command {
        Command::Items(args) => serde_json::to_value(app.inventory.query_items(&item_query(args))?)?,
        Command::Categories => serde_json::to_value(app.inventory.categories()?)?,
        Command::LowStock => serde_json::to_value(app.inventory.low_stock_items()?)?,
        Command::Movements { item } => serde_json::to_value(app.inventory.history(item.as_deref())?)?,
        Command::AddItem(args) => {
            let item = app
                .inventory
                .create_item(new_item(args))
                .context("could not create item")?;
            serde_json::to_value(item)?
        }
        Command::Record(args) => {
            let movement = app
                .inventory
                .record_movement(new_movement(args))
                .context("could not record movement")?;
            serde_json::to_value(movement)?
        }
        Command::Reconcile => serde_json::to_value(app.inventory.reconcile()?)?,
        Command::Orders { status, search } => {
            serde_json::to_value(app.production.query_orders(&OrderQuery { status, search })?)?
        }
        Command::Employees {
            department,
            status,
            search,
        } => serde_json::to_value(app.workforce.query_employees(&EmployeeQuery {
            search,
            department,
            status,
        })?)?,
        Command::Customers => serde_json::to_value(app.customers.list_customers()?)?,
        Command::Report => serde_json::to_value(app.dashboard()?)?,
    };
    Ok(out)
}

fn item_query(args: ItemsArgs) -> ItemQuery {
    ItemQuery {
        category: args.category,
        search: args.search,
        sort: args.sort,
        direction: if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    }
}

fn new_item(args: AddItemArgs) -> NewStockItem {
    NewStockItem {
        name: args.name,
        quantity: Some(args.quantity),
        unit: args.unit,
        category: args.category,
        description: args.description,
        reorder_point: args.reorder_point,
        location: args.location,
        supplier: args.supplier,
        cost: args.cost,
    }
}

fn new_movement(args: RecordArgs) -> NewMovement {
    let date = args.date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let movement = NewMovement::new(args.item, args.kind, args.quantity, date);
    match args.notes {
        Some(notes) => movement.with_notes(notes),
        None => movement,
    }
}
