pub mod coerce;
pub mod format;
pub mod text;


pub use coerce::*;
pub use format::*;
pub use text::*;
