mod cli;
mod commands;

use clap::Parser;
use policypulse_store::CsvStore;

use crate::cli::{Cli, CollectSource, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("policypulse v{}", env!("CARGO_PKG_VERSION"));

    let args = Cli::parse();
    let store = CsvStore::new(&args.data_dir);

    match args.command {
        Command::Collect { source } => match source {
            CollectSource::Reddit {
                user_agent,
                limit,
                since,
            } => commands::collect_reddit(&store, &user_agent, limit, since).await?,
            CollectSource::Legislation { count } => {
                commands::collect_legislation(&store, count).await?;
            }
        },
        Command::Process => commands::process(&store)?,
        Command::Model { endpoint } => commands::model(&store, &endpoint).await?,
        Command::Label => commands::label(&store)?,
        Command::Link { threshold } => commands::link(&store, threshold)?,
        Command::Merge => commands::merge(&store)?,
        Command::Analyze { reports_dir } => commands::analyze(&store, &reports_dir)?,
    }

    Ok(())
}
