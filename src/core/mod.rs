pub mod filter;
pub mod loader;
pub mod raw;
pub mod report;
pub mod session;
pub mod stats;
