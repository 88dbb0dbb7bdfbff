use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text for a unit that belongs to no category
pub const NONE_FOUND: &str = "none found";

/// A group of measurement units that can be compared against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mass,
    Volume,
    Length,
    Count,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Mass,
        Category::Volume,
        Category::Length,
        Category::Count,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Mass => "mass",
            Category::Volume => "volume",
            Category::Length => "length",
            Category::Count => "count",
        }
    }

    /// Symbol every other unit in the category is normalized to
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Mass => "g",
            Category::Volume => "ml",
            Category::Length => "cm",
            Category::Count => "piece",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selectable unit and how many base units one of it holds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub factor: f64,
}
