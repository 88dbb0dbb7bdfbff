pub mod loader;

#[cfg(test)]
mod tests;

pub use loader::*;
