pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{FilterMode, FilterSpec, Month};
pub use trip::{Trip, TripRecord, TripTable};
