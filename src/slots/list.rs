use crate::compare::CompareError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PRODUCTS: usize = 2;
pub const MAX_PRODUCTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Limits {
    pub min_products: usize,
    pub max_products: usize,
}

impl Limits {
    /// Whether `found` products may be compared. At least one product is
    /// always needed, whatever the configured minimum.
    pub fn check(&self, found: usize) -> Result<(), CompareError> {
        let min = self.min_products.max(1);
        if found < min {
            return Err(CompareError::TooFewProducts { min, found });
        }
        if found > self.max_products {
            return Err(CompareError::TooManyProducts {
                max: self.max_products,
                found,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_products: MIN_PRODUCTS,
            max_products: MAX_PRODUCTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Maximum {max} products allowed")]
    LimitReached { max: usize },
}

/// What the form needs to draw one product slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub id: usize,
    pub title: String,
    pub removable: bool,
}

/// Identifiers of the product slots currently shown, in display order.
/// Ids are always 0..len after any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotList {
    ids: Vec<usize>,
    #[serde(skip)]
    limits: Limits,
}

impl SlotList {
    /// A fresh form, pre-filled with the minimum number of slots
    pub fn new(limits: Limits) -> Self {
        Self {
            ids: (0..limits.min_products).collect(),
            limits,
        }
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Whether the "add product" control should be visible
    pub fn can_add(&self) -> bool {
        self.ids.len() < self.limits.max_products
    }

    pub fn add(&mut self) -> Result<usize, SlotError> {
        if !self.can_add() {
            return Err(SlotError::LimitReached {
                max: self.limits.max_products,
            });
        }

        let id = self.ids.len();
        self.ids.push(id);
        tracing::debug!("added product slot {}", id);
        Ok(id)
    }

    /// Remove a slot and renumber the rest. Returns false, leaving the list
    /// untouched, when at the minimum or when `id` is not present.
    pub fn remove(&mut self, id: usize) -> bool {
        if self.ids.len() <= self.limits.min_products {
            return false;
        }

        match self.ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                self.renumber();
                tracing::debug!("removed product slot {}, {} left", id, self.ids.len());
                true
            }
            None => false,
        }
    }

    fn renumber(&mut self) {
        for (index, id) in self.ids.iter_mut().enumerate() {
            *id = index;
        }
    }

    pub fn views(&self) -> Vec<SlotView> {
        self.ids
            .iter()
            .map(|&id| SlotView {
                id,
                title: product_label(id),
                removable: id >= self.limits.min_products,
            })
            .collect()
    }
}

impl Default for SlotList {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

/// Display name of a slot: ids start at 0, labels at 1
pub fn product_label(id: usize) -> String {
    format!("Product {}", id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_minimum() {
        let slots = SlotList::default();
        assert_eq!(slots.ids(), &[0, 1]);
        assert!(slots.can_add());
    }

    #[test]
    fn test_sixth_add_is_rejected() {
        let mut slots = SlotList::default();
        assert_eq!(slots.add(), Ok(2));
        assert_eq!(slots.add(), Ok(3));
        assert_eq!(slots.add(), Ok(4));
        assert!(!slots.can_add());

        let err = slots.add().unwrap_err();
        assert_eq!(err, SlotError::LimitReached { max: 5 });
        assert_eq!(err.to_string(), "Maximum 5 products allowed");
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn test_remove_below_minimum_is_noop() {
        let mut slots = SlotList::default();
        assert!(!slots.remove(1));
        assert!(!slots.remove(0));
        assert_eq!(slots.ids(), &[0, 1]);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut slots = SlotList::default();
        slots.add().unwrap();
        slots.add().unwrap();
        slots.add().unwrap();

        assert!(slots.remove(2));
        assert_eq!(slots.ids(), &[0, 1, 2, 3]);
        assert!(slots.can_add());

        // Next slot continues from the renumbered length
        assert_eq!(slots.add(), Ok(4));
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut slots = SlotList::default();
        slots.add().unwrap();
        assert!(!slots.remove(7));
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn test_views() {
        let mut slots = SlotList::default();
        slots.add().unwrap();
        let views = slots.views();

        assert_eq!(views[0].title, "Product 1");
        assert!(!views[0].removable);
        assert!(!views[1].removable);
        assert_eq!(views[2].title, "Product 3");
        assert!(views[2].removable);
    }

    #[test]
    fn test_limits_check() {
        let limits = Limits::default();
        assert_eq!(
            limits.check(1),
            Err(CompareError::TooFewProducts { min: 2, found: 1 })
        );
        assert_eq!(limits.check(2), Ok(()));
        assert_eq!(limits.check(5), Ok(()));
        assert_eq!(
            limits.check(6),
            Err(CompareError::TooManyProducts { max: 5, found: 6 })
        );

        let no_minimum = Limits {
            min_products: 0,
            max_products: 5,
        };
        assert_eq!(
            no_minimum.check(0),
            Err(CompareError::TooFewProducts { min: 1, found: 0 })
        );
    }

    #[test]
    fn test_custom_limits() {
        let mut slots = SlotList::new(Limits {
            min_products: 3,
            max_products: 3,
        });
        assert_eq!(slots.len(), 3);
        assert!(slots.add().is_err());
        assert!(!slots.remove(2));
    }
}
