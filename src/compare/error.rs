use crate::units::Category;
use thiserror::Error;

/// Why a comparison was refused. `product` is the 1-based label number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    #[error("Enter a name for Product {product}")]
    MissingName { product: usize },

    #[error("Enter a valid quantity for Product {product}")]
    InvalidQuantity { product: usize },

    #[error("Enter a valid price for Product {product}")]
    InvalidPrice { product: usize },

    #[error("Select a unit for Product {product}")]
    MissingUnit { product: usize },

    #[error("Unknown unit '{unit}' for Product {product}")]
    UnknownUnit { product: usize, unit: String },

    #[error("All products must use units of the same category (Product {product} is {found}, expected {expected})")]
    MixedCategories {
        product: usize,
        expected: Category,
        found: Category,
    },

    #[error("At least {min} products are needed to compare, got {found}")]
    TooFewProducts { min: usize, found: usize },

    #[error("Maximum {max} products allowed, got {found}")]
    TooManyProducts { max: usize, found: usize },
}
