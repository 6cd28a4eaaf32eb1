use crate::telemetry::log::LogManager;
use crate::tracking::compare;
use crate::tracking::object::DetectedObject;

/// Collision-risk ranking engine over a set of detected objects.
///
/// Owns the object sequence exclusively; every sort reorders it in place,
/// so insertion order carries no meaning once any ranking has run. The
/// engine is single-threaded by design. A multi-threaded caller should
/// give each worker its own instance rather than share one.
pub struct ObjectRanker {
    objects: Vec<DetectedObject>,
    logger: LogManager,
}

impl ObjectRanker {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            logger: LogManager::new("ObjectRanker"),
        }
    }

    /// Appends a detected object. Ids are not deduplicated.
    pub fn add(&mut self, object: DetectedObject) {
        self.objects.push(object);
    }

    /// Preallocation hint with no observable effect beyond performance.
    pub fn reserve(&mut self, capacity: usize) {
        self.objects.reserve(capacity);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Read-only view of the sequence in its current order.
    pub fn objects(&self) -> &[DetectedObject] {
        &self.objects
    }

    /// Full in-place sort, most critical first, by the collision-time
    /// policy. O(n log n).
    pub fn sort_by_collision_time(&mut self) {
        self.objects.sort_unstable_by(compare::by_collision_time);
        self.logger
            .record(&format!("sorted {} objects by collision time", self.len()));
    }

    /// Full in-place sort by the threat-level policy. O(n log n).
    ///
    /// The legacy demo path wired the collision-time policy in here; this
    /// implementation applies the threat-level policy as documented.
    pub fn sort_by_threat_level(&mut self) {
        self.objects.sort_unstable_by(compare::by_threat_level);
        self.logger
            .record(&format!("sorted {} objects by threat level", self.len()));
    }

    /// Full in-place sort by the three-tier multi-criteria policy.
    /// O(n log n).
    pub fn sort_multi_criteria(&mut self) {
        self.objects.sort_unstable_by(compare::multi_criteria);
        self.logger
            .record(&format!("sorted {} objects multi-criteria", self.len()));
    }

    /// Moves the `min(max_objects, len)` most critical objects (by the
    /// collision-time policy) to the front, fully sorted; the rest of the
    /// sequence is left in unspecified order. O(n + k log k).
    pub fn partial_sort_critical(&mut self, max_objects: usize) {
        if self.objects.is_empty() || max_objects == 0 {
            return;
        }

        let count = max_objects.min(self.objects.len());
        if count < self.objects.len() {
            self.objects
                .select_nth_unstable_by(count, compare::by_collision_time);
        }
        self.objects[..count].sort_unstable_by(compare::by_collision_time);
        self.logger.record(&format!(
            "partial sort placed top {} of {} objects",
            count,
            self.len()
        ));
    }

    /// Copies the first `min(max_objects, len)` objects in current order.
    ///
    /// Does not sort; callers are expected to have ranked the sequence
    /// first via one of the sort operations.
    pub fn critical_objects(&self, max_objects: usize) -> Vec<DetectedObject> {
        let count = max_objects.min(self.objects.len());
        self.objects[..count].to_vec()
    }

    /// Copies, in current relative order, every object whose collision
    /// time is finite and within `threshold_s`.
    pub fn objects_within_time_threshold(&self, threshold_s: f32) -> Vec<DetectedObject> {
        self.objects
            .iter()
            .filter(|obj| within_threshold(obj, threshold_s))
            .copied()
            .collect()
    }

    /// First object in current order with a matching id.
    pub fn find_by_id(&self, id: i32) -> Option<&DetectedObject> {
        self.objects.iter().find(|obj| obj.id() == id)
    }

    /// True when at least one object has a finite collision time within
    /// `threshold_s`. Short-circuits on the first match.
    pub fn has_critical_objects(&self, threshold_s: f32) -> bool {
        self.objects
            .iter()
            .any(|obj| within_threshold(obj, threshold_s))
    }
}

impl Default for ObjectRanker {
    fn default() -> Self {
        Self::new()
    }
}

fn within_threshold(obj: &DetectedObject, threshold_s: f32) -> bool {
    obj.collision_time().is_finite() && obj.collision_time() <= threshold_s
}
