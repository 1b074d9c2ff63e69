//! The closed set of expense categories.
//!
//! Every calculator consumes this one enumeration, so the category list
//! cannot drift between the summary, tip, and chart code paths.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A spending category for an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Meals, groceries, snacks.
    Food,
    /// Buses, fuel, ride shares.
    Transport,
    /// Movies, games, going out.
    Entertainment,
    /// Clothing, books, gadgets.
    Shopping,
    /// Power, phone, internet bills.
    Utilities,
    /// Anything that does not fit the other categories.
    Other,
}

/// Every category, in declaration order.
pub const ALL_CATEGORIES: [Category; 6] = [
    Category::Food,
    Category::Transport,
    Category::Entertainment,
    Category::Shopping,
    Category::Utilities,
    Category::Other,
];

/// A light/dark color pair used when charting a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartColors {
    /// Hex color for light backgrounds.
    pub light: &'static str,
    /// Hex color for dark backgrounds.
    pub dark: &'static str,
}

impl Category {
    /// The lowercase identifier used in the API and in tip text.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
            Category::Other => "other",
        }
    }

    /// The emoji shown next to the category in expense lists.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "🍕",
            Category::Transport => "🚗",
            Category::Entertainment => "🎬",
            Category::Shopping => "🛍️",
            Category::Utilities => "💡",
            Category::Other => "📦",
        }
    }

    /// The colors used for this category's slice in charts.
    pub fn chart_colors(self) -> ChartColors {
        match self {
            Category::Food => ChartColors {
                light: "#FEC6A1",
                dark: "#F97316",
            },
            Category::Transport => ChartColors {
                light: "#D3E4FD",
                dark: "#0EA5E9",
            },
            Category::Entertainment => ChartColors {
                light: "#E5DEFF",
                dark: "#8B5CF6",
            },
            Category::Shopping => ChartColors {
                light: "#FFDEE2",
                dark: "#D946EF",
            },
            Category::Utilities => ChartColors {
                light: "#F2FCE2",
                dark: "#65A30D",
            },
            Category::Other => ChartColors {
                light: "#F1F0FB",
                dark: "#8E9196",
            },
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
