mod cli;
mod commands;

use clap::Parser;

use shopfloor_infra::{Shopfloor, StoreBackend, StoreConfig};

fn main() -> anyhow::Result<()> {
    shopfloor_observability::init();

    let cli = cli::Cli::parse();

    let mut config = StoreConfig::from_env();
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if cli.memory {
        config.backend = StoreBackend::Memory;
    }

    let app = Shopfloor::new(config.open());
    let output = commands::run(&app, cli.command)?;

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &output)?;
    println!();
    Ok(())
}
