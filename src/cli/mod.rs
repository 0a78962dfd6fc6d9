pub mod commands;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::filter::parse_api_date;
use crate::domain::{Category, NewsFilter};

#[derive(Parser)]
#[command(name = "newsworld")]
#[command(about = "Top news headlines in the terminal", long_about = None)]
pub struct Cli {
    /// Two-letter country code, overrides the config file
    #[arg(long, global = true)]
    pub country: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the headline feed
    Headlines {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show one article from the feed
    Read {
        /// Position in the feed, starting at 1
        index: usize,

        #[command(flatten)]
        filter: FilterArgs,

        /// Also open the article in the browser
        #[arg(long)]
        open: bool,
    },
    /// List the available categories
    Categories,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Restrict to one category (business, entertainment, general, ...)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Earliest publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_api_date)]
    pub from: Option<NaiveDate>,

    /// Latest publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_api_date)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> NewsFilter {
        let filter = NewsFilter::default().with_range(self.from, self.to);
        match self.category {
            Some(category) => filter.with_category(category),
            None => filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headlines_with_filters() {
        let cli = Cli::try_parse_from([
            "newsworld",
            "headlines",
            "--category",
            "Sports",
            "--from",
            "2024-01-01",
        ])
        .unwrap();

        match cli.command {
            Commands::Headlines { filter } => {
                let filter = filter.to_filter();
                assert_eq!(filter.category, Some(Category::Sports));
                assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert_eq!(filter.to, None);
            }
            _ => panic!("expected headlines"),
        }
    }

    #[test]
    fn test_parse_read_with_global_country() {
        let cli = Cli::try_parse_from(["newsworld", "read", "3", "--open", "--country", "gb"]).unwrap();

        assert_eq!(cli.country.as_deref(), Some("gb"));
        match cli.command {
            Commands::Read { index, filter, open } => {
                assert_eq!(index, 3);
                assert!(open);
                assert!(filter.to_filter().is_empty());
            }
            _ => panic!("expected read"),
        }
    }

    #[test]
    fn test_rejects_bad_date_and_category() {
        assert!(Cli::try_parse_from(["newsworld", "headlines", "--to", "01/02/2024"]).is_err());
        assert!(Cli::try_parse_from(["newsworld", "headlines", "-c", "weather"]).is_err());
    }
}
