//! Game implementations.

pub mod gravity;

pub use gravity::GravityGrid;
