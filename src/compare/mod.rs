pub mod engine;
pub mod entry;
pub mod error;
pub mod report;


pub use engine::*;
pub use entry::*;
pub use error::*;
pub use report::*;
