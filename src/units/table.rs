use crate::units::category::{Category, UnitDef, NONE_FOUND};
use lazy_static::lazy_static;
use serde::Serialize;

lazy_static! {
    /// The fixed unit table, in the order units are offered for selection
    pub static ref CATEGORY_TABLE: CategoryTable = CategoryTable::standard();
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub units: Vec<UnitDef>,
}

/// Immutable mapping from category to its ordered unit symbols.
/// A symbol appears in at most one group.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTable {
    groups: Vec<CategoryGroup>,
}

impl CategoryTable {
    fn standard() -> Self {
        let group = |category, units: &[(&'static str, f64)]| CategoryGroup {
            category,
            units: units
                .iter()
                .map(|&(symbol, factor)| UnitDef { symbol, factor })
                .collect(),
        };

        Self {
            groups: vec![
                group(Category::Mass, &[("g", 1.0), ("Kg", 1000.0)]),
                group(Category::Volume, &[("ml", 1.0), ("L", 1000.0)]),
                group(Category::Length, &[("cm", 1.0), ("m", 100.0)]),
                // No conversion between count units
                group(
                    Category::Count,
                    &[("piece", 1.0), ("box", 1.0), ("pack", 1.0)],
                ),
            ],
        }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn units(&self, category: Category) -> &[UnitDef] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.units.as_slice())
            .unwrap_or(&[])
    }

    pub fn lookup(&self, symbol: &str) -> Option<(Category, &UnitDef)> {
        self.groups.iter().find_map(|g| {
            g.units
                .iter()
                .find(|u| u.symbol == symbol)
                .map(|u| (g.category, u))
        })
    }

    pub fn category_of(&self, symbol: &str) -> Option<Category> {
        self.lookup(symbol).map(|(category, _)| category)
    }

    /// Number of base units in one `symbol`
    pub fn factor_of(&self, symbol: &str) -> Option<f64> {
        self.lookup(symbol).map(|(_, unit)| unit.factor)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups.iter().flat_map(|g| g.units.iter().map(|u| u.symbol))
    }
}

/// Resolve a unit symbol against the fixed table
pub fn category_of(symbol: &str) -> Option<Category> {
    CATEGORY_TABLE.category_of(symbol)
}

/// Category name for display, or "none found" for unknown symbols
pub fn category_name_of(symbol: &str) -> &'static str {
    category_of(symbol)
        .map(|c| c.name())
        .unwrap_or(NONE_FOUND)
}
