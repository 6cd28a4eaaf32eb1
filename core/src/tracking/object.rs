use serde::Serialize;

/// Objects with collision times above this horizon carry no threat.
const THREAT_TIME_HORIZON_S: f32 = 10.0;
/// Objects closing within this time are maximally threatening.
const THREAT_TIME_IMMINENT_S: f32 = 1.0;
/// Distance beyond which the proximity factor decays to zero.
const THREAT_DISTANCE_RANGE_M: f32 = 100.0;
/// Relative velocities above this (i.e. slower approach) count as non-closing.
const CLOSING_VELOCITY_CUTOFF: f32 = -0.1;

/// Object detected by the AEB tracking system.
///
/// Carries the raw kinematics reported by the sensor front-end plus two
/// values derived once at construction: the projected time-to-collision
/// and a [0,1] threat level combining proximity and TTC. Both derived
/// fields are fixed for the lifetime of the record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DetectedObject {
    id: i32,
    /// Meters.
    distance: f32,
    /// m/s, negative means approaching.
    relative_velocity: f32,
    /// Seconds; infinite for stationary or receding objects.
    collision_time: f32,
    /// 0.0 to 1.0.
    threat_level: f32,
}

impl DetectedObject {
    /// Builds a record and derives TTC and threat level eagerly.
    ///
    /// Inputs are taken as reported; physically nonsensical values are not
    /// rejected, the derived fields simply follow the formulas.
    pub fn new(id: i32, distance: f32, relative_velocity: f32) -> Self {
        // TTC = distance / |relative_velocity|, defined only while the
        // object is actually closing.
        let collision_time = if relative_velocity < CLOSING_VELOCITY_CUTOFF {
            distance / -relative_velocity
        } else {
            f32::INFINITY
        };
        let threat_level = compute_threat_level(distance, collision_time);

        Self {
            id,
            distance,
            relative_velocity,
            collision_time,
            threat_level,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn relative_velocity(&self) -> f32 {
        self.relative_velocity
    }

    pub fn collision_time(&self) -> f32 {
        self.collision_time
    }

    pub fn threat_level(&self) -> f32 {
        self.threat_level
    }
}

impl Default for DetectedObject {
    fn default() -> Self {
        Self::new(0, 0.0, 0.0)
    }
}

/// Identity is by id alone; two reports of the same object compare equal
/// even when their kinematics differ.
impl PartialEq for DetectedObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DetectedObject {}

fn compute_threat_level(distance: f32, collision_time: f32) -> f32 {
    if collision_time > THREAT_TIME_HORIZON_S {
        return 0.0;
    }
    if collision_time < THREAT_TIME_IMMINENT_S {
        return 1.0;
    }

    let distance_factor = (1.0 - distance / THREAT_DISTANCE_RANGE_M).max(0.0);
    let time_factor = (1.0 - collision_time / THREAT_TIME_HORIZON_S).max(0.0);
    (distance_factor + time_factor) / 2.0
}
