//! Seams to the two external services a row touches.
//!
//! The pipeline is generic over these so tests can swap in the mocks from
//! [`crate::testing`].

pub mod agent;
pub mod searcher;
