//! Ordering policies for ranking detected objects.
//!
//! Each policy is a pure function returning `Ordering::Less` when the
//! first object is more critical than the second. The epsilon bands keep
//! near-equal floating values from flapping between orderings across
//! repeated comparisons.

use std::cmp::Ordering;

use crate::tracking::object::DetectedObject;

/// Threat-level differences below this are treated as a tie.
const THREAT_TIE_BAND: f32 = 0.001;
/// Multi-criteria: width of one threat-level band; objects in the same
/// band fall through to the collision-time tier.
const THREAT_TIER_BAND: f32 = 0.01;
/// Multi-criteria: width of one collision-time band; objects in the same
/// band fall through to the distance tier.
const TIME_TIER_BAND: f32 = 0.1;

/// Ranks by ascending collision time.
///
/// Finite collision times always outrank infinite ones; when both are
/// infinite, or the finite times tie exactly, the closer object ranks
/// first.
pub fn by_collision_time(a: &DetectedObject, b: &DetectedObject) -> Ordering {
    match (
        a.collision_time().is_infinite(),
        b.collision_time().is_infinite(),
    ) {
        (true, true) => a.distance().total_cmp(&b.distance()),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .collision_time()
            .total_cmp(&b.collision_time())
            .then(a.distance().total_cmp(&b.distance())),
    }
}

/// Ranks by descending threat level, breaking near-ties by distance.
pub fn by_threat_level(a: &DetectedObject, b: &DetectedObject) -> Ordering {
    if (a.threat_level() - b.threat_level()).abs() < THREAT_TIE_BAND {
        return a.distance().total_cmp(&b.distance());
    }
    b.threat_level().total_cmp(&a.threat_level())
}

/// Three-tier lexicographic ranking: threat level, then collision time,
/// then distance.
///
/// The first two tiers compare quantized band indices rather than raw
/// deltas: a pairwise delta test is not transitive (near-ties can chain
/// into a cycle), and the sort algorithms reject comparators that are
/// not a total order. Each object maps to a fixed `(threat band,
/// time band, distance)` key, so the ordering is a plain lexicographic
/// comparison of keys. Infinite collision times map to the maximum time
/// band.
pub fn multi_criteria(a: &DetectedObject, b: &DetectedObject) -> Ordering {
    threat_band(b)
        .cmp(&threat_band(a))
        .then_with(|| time_band(a).cmp(&time_band(b)))
        .then_with(|| a.distance().total_cmp(&b.distance()))
}

fn threat_band(obj: &DetectedObject) -> i32 {
    (obj.threat_level() / THREAT_TIER_BAND).floor() as i32
}

fn time_band(obj: &DetectedObject) -> i64 {
    if obj.collision_time().is_infinite() {
        return i64::MAX;
    }
    // Saturating cast: absurdly large finite times land in the top band.
    (obj.collision_time() / TIME_TIER_BAND).floor() as i64
}
