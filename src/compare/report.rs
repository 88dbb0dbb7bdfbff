use crate::compare::engine::Comparison;
use crate::numeric::{format_currency, CurrencyFormat};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub cost: String,
    pub unit: String,
    /// Cost per base unit of the category, e.g. "$0.02/g".
    /// Only set when the entries use different units and this one is not
    /// already in the base unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_cost: Option<String>,
    pub is_winner: bool,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.cost, self.unit)?;
        if let Some(base) = &self.base_cost {
            write!(f, " ({})", base)?;
        }
        Ok(())
    }
}

/// Text shown once a comparison succeeds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub winner: String,
    pub heading: String,
    pub lines: Vec<ReportLine>,
}

impl Report {
    pub fn new(comparison: &Comparison, currency: &CurrencyFormat) -> Self {
        let mixed = comparison.has_mixed_units();
        let base_unit = comparison.category.base_unit();

        let lines = comparison
            .entries
            .iter()
            .enumerate()
            .map(|(index, costed)| ReportLine {
                name: costed.entry.name.clone(),
                cost: format_currency(costed.unit_cost, currency),
                unit: costed.entry.unit.clone(),
                base_cost: (mixed && costed.entry.unit != base_unit).then(|| {
                    format!(
                        "{}/{}",
                        format_currency(costed.normalized_cost, currency),
                        base_unit
                    )
                }),
                is_winner: comparison.is_winner(index),
            })
            .collect();

        Self {
            winner: comparison.winner().entry.name.clone(),
            heading: format!("Costs per {}:", comparison.category),
            lines,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best option: {}", self.winner)?;
        writeln!(f, "{}", self.heading)?;
        for line in &self.lines {
            let marker = if line.is_winner { '*' } else { ' ' };
            writeln!(f, "{} {}", marker, line)?;
        }
        Ok(())
    }
}
