use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsworld::app::AppContext;
use newsworld::cli::{commands, Cli, Commands};
use newsworld::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the feed
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Commands::Categories = cli.command {
        commands::list_categories();
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(country) = cli.country {
        config.api.country = country;
    }

    let ctx = AppContext::new(&config)?;

    match cli.command {
        Commands::Headlines { filter } => {
            commands::headlines(&ctx, filter.to_filter()).await?;
        }
        Commands::Read {
            index,
            filter,
            open,
        } => {
            commands::read_article(&ctx, filter.to_filter(), index, open).await?;
        }
        Commands::Categories => {}
    }

    Ok(())
}
