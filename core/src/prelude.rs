use serde::{Deserialize, Serialize};

pub use crate::tracking::object::DetectedObject;
pub use crate::tracking::ranker::ObjectRanker;

/// Ordering policy selector shared between the core and the workflow layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RankStrategy {
    CollisionTime,
    ThreatLevel,
    MultiCriteria,
}

impl Default for RankStrategy {
    fn default() -> Self {
        RankStrategy::CollisionTime
    }
}
