//! Domain models for the comparator engine.

mod extraction;
mod literature;
mod normalization;
mod row;

pub use extraction::*;
pub use literature::*;
pub use normalization::*;
pub use row::*;
