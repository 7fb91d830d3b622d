pub mod config;
pub mod explore;
pub mod raw;
pub mod report;
