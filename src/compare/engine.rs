use crate::compare::entry::{ProductEntry, RawEntry};
use crate::compare::error::CompareError;
use crate::slots::Limits;
use crate::units::Category;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedEntry {
    #[serde(flatten)]
    pub entry: ProductEntry,
    /// Price per one of the entry's own unit
    pub unit_cost: f64,
    /// Price per base unit of the shared category
    pub normalized_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub category: Category,
    pub entries: Vec<CostedEntry>,
    /// Index into `entries`
    pub winner: usize,
}

impl Comparison {
    pub fn winner(&self) -> &CostedEntry {
        &self.entries[self.winner]
    }

    pub fn is_winner(&self, index: usize) -> bool {
        index == self.winner
    }

    /// True when the entries don't all use the same unit symbol
    pub fn has_mixed_units(&self) -> bool {
        mixed_units(&self.entries)
    }
}

/// Relative difference below which two per-base-unit costs are the same.
/// Converting to base units multiplies the quantity by the unit factor,
/// which can move an exact tie by a few ulps.
const COST_TOLERANCE: f64 = 1e-9;

/// Compare the entries of every slot currently on the form
pub fn compare(entries: &[RawEntry]) -> Result<Comparison, CompareError> {
    compare_with_limits(entries, &Limits::default())
}

pub fn compare_with_limits(
    entries: &[RawEntry],
    limits: &Limits,
) -> Result<Comparison, CompareError> {
    limits.check(entries.len())?;

    let products = entries
        .iter()
        .map(RawEntry::validate)
        .collect::<Result<Vec<_>, _>>()?;

    let category = shared_category(&products)?;

    let costed: Vec<CostedEntry> = products
        .into_iter()
        .map(|entry| {
            let unit_cost = entry.unit_cost();
            let normalized_cost = entry.normalized_cost();
            tracing::debug!(
                "{}: {} per {}, {} per {}",
                entry.name,
                unit_cost,
                entry.unit,
                normalized_cost,
                category.base_unit()
            );
            CostedEntry {
                entry,
                unit_cost,
                normalized_cost,
            }
        })
        .collect();

    let winner = cheapest(&costed);

    Ok(Comparison {
        category,
        entries: costed,
        winner,
    })
}

/// Category every product shares, judged against the first one
fn shared_category(products: &[ProductEntry]) -> Result<Category, CompareError> {
    let expected = products[0].category;

    for product in &products[1..] {
        if product.category != expected {
            return Err(CompareError::MixedCategories {
                product: product.id + 1,
                expected,
                found: product.category,
            });
        }
    }

    Ok(expected)
}

fn mixed_units(entries: &[CostedEntry]) -> bool {
    entries
        .split_first()
        .map(|(first, rest)| rest.iter().any(|e| e.entry.unit != first.entry.unit))
        .unwrap_or(false)
}

/// Index of the cheapest entry. Only a strictly lower cost replaces the
/// current pick, so ties go to the earliest entry. With a single unit the
/// plain unit costs are compared; across units the per-base-unit costs are,
/// with costs inside `COST_TOLERANCE` of each other counted as equal.
fn cheapest(entries: &[CostedEntry]) -> usize {
    let mixed = mixed_units(entries);

    entries
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (index, entry)| {
            let current = &entries[best];
            let lower = if mixed {
                strictly_lower(entry.normalized_cost, current.normalized_cost)
            } else {
                entry.unit_cost < current.unit_cost
            };
            if lower {
                index
            } else {
                best
            }
        })
}

fn strictly_lower(candidate: f64, best: f64) -> bool {
    if !best.is_finite() {
        return candidate < best;
    }
    candidate < best && (best - candidate) > COST_TOLERANCE * best.abs().max(candidate.abs())
}
