//! Collision-ranking and grid-navigation core for the Rust AEB platform.
//!
//! The modules mirror the legacy AEB object tracker and robot navigator
//! while providing typed errors, explicit ordering policies, and
//! well-defined ranking operations.

pub mod nav;
pub mod prelude;
pub mod telemetry;
pub mod tracking;

pub use prelude::{DetectedObject, ObjectRanker, RankStrategy};
