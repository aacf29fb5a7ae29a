//! Data types shared across the pipeline.

pub mod dataset;
pub mod field_kind;
pub mod outcome;
