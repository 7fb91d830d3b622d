pub mod formatting;
pub mod table;

pub use formatting::{highlight, plural};
pub use table::Table;
