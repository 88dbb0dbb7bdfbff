use crate::compare::RawEntry;
use crate::numeric::NumberInput;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read products file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid products file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid product '{spec}': expected name;quantity;unit;price")]
    BadSpec { spec: String },
}

#[derive(Debug, Deserialize)]
struct ProductsFile {
    // TOML uses [[product]] array syntax
    #[serde(rename = "product", default)]
    products: Vec<ProductRow>,
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    quantity: NumberInput,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    price: NumberInput,
}

pub fn load_entries_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawEntry>, InputError> {
    let content = std::fs::read_to_string(path)?;
    load_entries_from_str(&content)
}

/// Read `[[product]]` tables. Missing fields are left blank so that the
/// comparison reports them the same way an empty form field is reported.
pub fn load_entries_from_str(content: &str) -> Result<Vec<RawEntry>, InputError> {
    let file: ProductsFile = toml::from_str(content)?;

    Ok(file
        .products
        .into_iter()
        .enumerate()
        .map(|(id, row)| RawEntry {
            id,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            unit: row.unit,
        })
        .collect())
}

/// Parse a command line product, e.g. "Apples;1000;g;$20"
pub fn parse_product_spec(id: usize, spec: &str) -> Result<RawEntry, InputError> {
    let parts: Vec<&str> = spec.split(';').map(str::trim).collect();

    match parts.as_slice() {
        [name, quantity, unit, price] => Ok(RawEntry::new(id, *name, *quantity, *unit, *price)),
        _ => Err(InputError::BadSpec {
            spec: spec.to_string(),
        }),
    }
}

pub fn parse_product_specs<S: AsRef<str>>(specs: &[S]) -> Result<Vec<RawEntry>, InputError> {
    specs
        .iter()
        .enumerate()
        .map(|(id, spec)| parse_product_spec(id, spec.as_ref()))
        .collect()
}
