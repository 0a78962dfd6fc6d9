use chrono::NaiveDate;

use super::Category;

/// Date format NewsAPI expects for `from`/`to`
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter parameters applied to the next headlines fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFilter {
    pub category: Option<Category>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl NewsFilter {
    pub fn new(category: Option<Category>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { category, from, to }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.from.is_none() && self.to.is_none()
    }
}

pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parse a `yyyy-MM-dd` date, as accepted on the command line.
pub fn parse_api_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), API_DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}
