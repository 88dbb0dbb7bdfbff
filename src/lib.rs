pub mod compare;
pub mod config;
pub mod form;
pub mod input;
pub mod numeric;
pub mod present;
pub mod slots;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
