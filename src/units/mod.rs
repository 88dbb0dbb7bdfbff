pub mod category;
pub mod table;

#[cfg(test)]
mod tests;

pub use category::*;
pub use table::*;
