use crate::compare::error::CompareError;
use crate::numeric::{capitalize, Amount, NumberInput};
use crate::units::{Category, CATEGORY_TABLE};
use serde::{Deserialize, Serialize};

/// One product slot exactly as the user filled it in
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: NumberInput,
    #[serde(default)]
    pub price: NumberInput,
    // Empty means nothing was selected
    #[serde(default)]
    pub unit: String,
}

impl RawEntry {
    pub fn new(
        id: usize,
        name: impl Into<String>,
        quantity: impl Into<NumberInput>,
        unit: impl Into<String>,
        price: impl Into<NumberInput>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
            unit: unit.into(),
        }
    }

    /// Check the fields in form order: name, quantity, price, unit.
    /// The first bad field wins.
    pub fn validate(&self) -> Result<ProductEntry, CompareError> {
        let product = self.id + 1;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(CompareError::MissingName { product });
        }

        let quantity = positive(&self.quantity).ok_or(CompareError::InvalidQuantity { product })?;
        let price = positive(&self.price).ok_or(CompareError::InvalidPrice { product })?;

        let unit = self.unit.trim();
        if unit.is_empty() {
            return Err(CompareError::MissingUnit { product });
        }

        let (category, def) = CATEGORY_TABLE
            .lookup(unit)
            .ok_or_else(|| CompareError::UnknownUnit {
                product,
                unit: unit.to_string(),
            })?;

        Ok(ProductEntry {
            id: self.id,
            name: capitalize(name),
            quantity,
            price,
            unit: def.symbol.to_string(),
            category,
            factor: def.factor,
        })
    }
}

fn positive(input: &NumberInput) -> Option<f64> {
    if input.is_blank() {
        return None;
    }
    let value = input.to_number();
    (value.is_finite() && value > 0.0).then_some(value)
}

/// A validated product, ready to be costed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntry {
    pub id: usize,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub unit: String,
    pub category: Category,
    /// Base units per `unit`
    #[serde(skip)]
    pub factor: f64,
}

impl ProductEntry {
    /// Price per one `unit`
    pub fn unit_cost(&self) -> f64 {
        unit_cost(self.price, self.quantity)
    }

    /// Price per base unit of the category, e.g. per gram for "Kg"
    pub fn normalized_cost(&self) -> f64 {
        unit_cost(self.price, self.quantity * self.factor)
    }
}

pub fn unit_cost(price: f64, quantity: f64) -> f64 {
    if quantity == 0.0 {
        f64::INFINITY
    } else {
        price / quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_normalizes_name() {
        let entry = RawEntry::new(0, "  rED apples ", "1000", "g", "$20").validate().unwrap();
        assert_eq!(entry.name, "Red apples");
        assert_eq!(entry.quantity, 1000.0);
        assert_eq!(entry.price, 20.0);
        assert_eq!(entry.category, Category::Mass);
    }

    #[test]
    fn test_field_order() {
        // Everything is wrong, the name is reported first
        let raw = RawEntry::new(2, "", "", "", "");
        assert_eq!(raw.validate(), Err(CompareError::MissingName { product: 3 }));

        let raw = RawEntry::new(0, "Rice", "0", "", "abc");
        assert_eq!(raw.validate(), Err(CompareError::InvalidQuantity { product: 1 }));

        let raw = RawEntry::new(0, "Rice", "1", "", "abc");
        assert_eq!(raw.validate(), Err(CompareError::InvalidPrice { product: 1 }));

        let raw = RawEntry::new(0, "Rice", "1", " ", "10");
        assert_eq!(raw.validate(), Err(CompareError::MissingUnit { product: 1 }));
    }

    #[test]
    fn test_unknown_unit() {
        let raw = RawEntry::new(1, "Milk", 1.0, "gallon", 3.0);
        assert_eq!(
            raw.validate(),
            Err(CompareError::UnknownUnit {
                product: 2,
                unit: "gallon".to_string()
            })
        );
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        let raw = RawEntry::new(0, "Rice", f64::NAN, "g", 1.0);
        assert!(matches!(raw.validate(), Err(CompareError::InvalidQuantity { .. })));

        let raw = RawEntry::new(0, "Rice", 1.0, "g", f64::INFINITY);
        assert!(matches!(raw.validate(), Err(CompareError::InvalidPrice { .. })));
    }

    #[test]
    fn test_unit_cost() {
        assert_eq!(unit_cost(20.0, 1000.0), 0.02);
        assert_eq!(unit_cost(5.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_normalized_cost() {
        let kilo = RawEntry::new(0, "Flour", "1", "Kg", "20").validate().unwrap();
        assert_eq!(kilo.unit_cost(), 20.0);
        assert_eq!(kilo.normalized_cost(), 0.02);
    }
}
