// src/category.rs
//! The six arXiv top-level subject groups a sample can be drawn from.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Physics,
    Mathematics,
    ComputerScience,
    QuantitativeBiology,
    QuantitativeFinance,
    Statistics,
}

impl Category {
    /// Snake-case slug used for snapshot file names.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Physics => "physics",
            Self::Mathematics => "mathematics",
            Self::ComputerScience => "computer_science",
            Self::QuantitativeBiology => "quantitative_biology",
            Self::QuantitativeFinance => "quantitative_finance",
            Self::Statistics => "statistics",
        }
    }

    /// File name of this category's article snapshot inside the data directory.
    #[must_use]
    pub fn snapshot_file(self) -> String {
        format!("{}_articles.json", self.slug())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Physics => "Physics",
            Self::Mathematics => "Mathematics",
            Self::ComputerScience => "Computer Science",
            Self::QuantitativeBiology => "Quantitative Biology",
            Self::QuantitativeFinance => "Quantitative Finance",
            Self::Statistics => "Statistics",
        };
        f.write_str(label)
    }
}
