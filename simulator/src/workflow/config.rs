use aebcore::nav::Direction;
use aebcore::prelude::RankStrategy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw kinematics for one detected object; derived fields are computed
/// by the core at construction, never read from the file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub id: i32,
    pub distance: f32,
    pub relative_velocity: f32,
}

/// Robot route section of a scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub instructions: String,
    pub start_x: i32,
    pub start_y: i32,
    pub heading: Direction,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            instructions: String::new(),
            start_x: aebcore::nav::position::START_X,
            start_y: aebcore::nav::position::START_Y,
            heading: Direction::North,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name: String,
    /// Explicit object list; when empty the driver generates synthetic
    /// traffic instead.
    pub objects: Vec<ObjectSpec>,
    pub strategy: RankStrategy,
    pub top_k: usize,
    pub critical_threshold_s: f32,
    pub warning_threshold_s: f32,
    pub route: Option<RouteConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            objects: Vec::new(),
            strategy: RankStrategy::CollisionTime,
            top_k: 5,
            critical_threshold_s: 2.0,
            warning_threshold_s: 5.0,
            route: None,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(strategy: RankStrategy, top_k: usize, route: Option<String>) -> Self {
        Self {
            strategy,
            top_k,
            route: route.map(|instructions| RouteConfig {
                instructions,
                ..RouteConfig::default()
            }),
            ..Self::default()
        }
    }
}
