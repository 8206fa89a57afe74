//! Crate-level scenario and determinism tests.
//!
//! - `helpers.rs`: world, context and Target Set factories shared with the
//!   unit tests of every resolver module
//! - `scenarios.rs`: end-to-end resolutions through the by-name tables
//! - `determinism.rs`: seeded random worlds resolve identically

pub mod helpers;
