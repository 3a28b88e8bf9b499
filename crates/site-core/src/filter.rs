use crate::constants::{FILTER_HIDDEN, FILTER_SHOWN, StyleSet};

/// Selection made with one of the portfolio `.filter-btn` buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    Category(String),
    /// Button without a `data-filter` value; matches items without a category.
    Uncategorized,
}

impl PortfolioFilter {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("all") => PortfolioFilter::All,
            Some(category) => PortfolioFilter::Category(category.to_string()),
            None => PortfolioFilter::Uncategorized,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Category(wanted) => category == Some(wanted.as_str()),
            PortfolioFilter::Uncategorized => category.is_none(),
        }
    }

    /// Inline styles for an item with `category` under this filter.
    pub fn item_style(&self, category: Option<&str>) -> StyleSet {
        if self.matches(category) {
            FILTER_SHOWN
        } else {
            FILTER_HIDDEN
        }
    }
}
