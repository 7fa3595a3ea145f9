//! drone-dispatch core
//!
//! Simulates a battery-limited drone fleet serving customer orders from fixed
//! warehouses: nearest-warehouse selection, first-fit drone reuse, fleet growth
//! from an ordered catalog, and delivery time accounting.

pub mod traits;
pub mod geometry;
pub mod model;
pub mod error;
pub mod selector;
pub mod fleet;
pub mod scheduler;
pub mod playback;
pub mod dataset;
pub mod report;
pub mod batch;
