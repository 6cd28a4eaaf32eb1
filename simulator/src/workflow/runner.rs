use crate::workflow::config::{ObjectSpec, ScenarioConfig};
use aebcore::nav::{parse_route, Position, Robot};
use aebcore::prelude::{DetectedObject, ObjectRanker, RankStrategy};
use aebcore::telemetry::{LogManager, MetricsRecorder};
use anyhow::Context;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Braking decision derived from the two scenario thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrakeDecision {
    EmergencyBrake,
    PrechargeBrakes,
    Clear,
}

impl fmt::Display for BrakeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BrakeDecision::EmergencyBrake => "CRITICAL: collision imminent, emergency braking",
            BrakeDecision::PrechargeBrakes => "WARNING: close object, pre-charging brakes",
            BrakeDecision::Clear => "all clear",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    pub strategy: RankStrategy,
    pub ranked_ids: Vec<i32>,
    pub critical: Vec<DetectedObject>,
    pub within_critical_threshold: usize,
    pub decision: BrakeDecision,
    /// Illustrative only; no timing guarantee is implied.
    pub sort_micros: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavSummary {
    pub final_x: i32,
    pub final_y: i32,
    pub heading: String,
    pub actual_steps: u32,
    pub manhattan_distance: u32,
    pub efficiency_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    pub scenario: String,
    pub ranking: RankingSummary,
    pub nav: Option<NavSummary>,
}

/// Executes one scenario end to end: rank the detected objects, derive
/// the braking decision, and walk the robot route when one is configured.
pub struct Runner {
    config: ScenarioConfig,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self {
            config,
            metrics: MetricsRecorder::new(),
            logger: LogManager::new("Runner"),
        }
    }

    pub fn execute(&self, specs: &[ObjectSpec]) -> anyhow::Result<WorkflowReport> {
        match self.run(specs) {
            Ok(report) => {
                self.metrics.record_scenario();
                Ok(report)
            }
            Err(err) => {
                self.metrics.record_failure();
                Err(err)
            }
        }
    }

    /// (scenarios completed, failures).
    pub fn metrics_snapshot(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }

    fn run(&self, specs: &[ObjectSpec]) -> anyhow::Result<WorkflowReport> {
        let ranking = self.rank(specs);
        let nav = self.navigate().context("executing robot route")?;

        Ok(WorkflowReport {
            scenario: self.config.name.clone(),
            ranking,
            nav,
        })
    }

    fn rank(&self, specs: &[ObjectSpec]) -> RankingSummary {
        let mut ranker = ObjectRanker::new();
        ranker.reserve(specs.len());
        for spec in specs {
            ranker.add(DetectedObject::new(
                spec.id,
                spec.distance,
                spec.relative_velocity,
            ));
        }

        let started = Instant::now();
        match self.config.strategy {
            RankStrategy::CollisionTime => ranker.sort_by_collision_time(),
            RankStrategy::ThreatLevel => ranker.sort_by_threat_level(),
            RankStrategy::MultiCriteria => ranker.sort_multi_criteria(),
        }
        let sort_micros = started.elapsed().as_micros();
        self.logger.record(&format!(
            "ranked {} objects in {}us",
            ranker.len(),
            sort_micros
        ));

        let decision = if ranker.has_critical_objects(self.config.critical_threshold_s) {
            BrakeDecision::EmergencyBrake
        } else if ranker.has_critical_objects(self.config.warning_threshold_s) {
            BrakeDecision::PrechargeBrakes
        } else {
            BrakeDecision::Clear
        };

        RankingSummary {
            strategy: self.config.strategy,
            ranked_ids: ranker.objects().iter().map(|obj| obj.id()).collect(),
            critical: ranker.critical_objects(self.config.top_k),
            within_critical_threshold: ranker
                .objects_within_time_threshold(self.config.critical_threshold_s)
                .len(),
            decision,
            sort_micros,
        }
    }

    fn navigate(&self) -> anyhow::Result<Option<NavSummary>> {
        let route = match &self.config.route {
            Some(route) => route,
            None => return Ok(None),
        };

        let instructions = parse_route(&route.instructions)
            .with_context(|| format!("parsing route `{}`", route.instructions))?;

        let mut robot = Robot::new(Position::new(route.start_x, route.start_y), route.heading);
        robot.execute_route(&instructions);
        self.logger.record(&format!(
            "route of {} instructions ended at {}",
            instructions.len(),
            robot.position()
        ));

        Ok(Some(NavSummary {
            final_x: robot.position().x,
            final_y: robot.position().y,
            heading: robot.direction().to_string(),
            actual_steps: robot.actual_steps(),
            manhattan_distance: robot.manhattan_distance(),
            efficiency_percent: robot.efficiency_percent(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::RouteConfig;

    fn highway_specs() -> Vec<ObjectSpec> {
        vec![
            ObjectSpec {
                id: 1,
                distance: 50.0,
                relative_velocity: -10.0,
            },
            ObjectSpec {
                id: 2,
                distance: 20.0,
                relative_velocity: -20.0,
            },
            ObjectSpec {
                id: 3,
                distance: 100.0,
                relative_velocity: 5.0,
            },
            ObjectSpec {
                id: 4,
                distance: 30.0,
                relative_velocity: -15.0,
            },
            ObjectSpec {
                id: 5,
                distance: 80.0,
                relative_velocity: -8.0,
            },
        ]
    }

    #[test]
    fn runner_ranks_and_decides() {
        let runner = Runner::new(ScenarioConfig::default());
        let report = runner.execute(&highway_specs()).unwrap();
        assert_eq!(report.ranking.ranked_ids, vec![2, 4, 1, 5, 3]);
        // TTC 1.0s is inside the 2.0s critical threshold.
        assert_eq!(report.ranking.decision, BrakeDecision::EmergencyBrake);
        assert_eq!(report.ranking.within_critical_threshold, 2);
        assert_eq!(report.ranking.critical.len(), 5);
        assert!(report.nav.is_none());
        assert_eq!(runner.metrics_snapshot(), (1, 0));
    }

    #[test]
    fn top_k_limits_the_critical_snapshot() {
        let config = ScenarioConfig {
            top_k: 3,
            ..ScenarioConfig::default()
        };
        let runner = Runner::new(config);
        let report = runner.execute(&highway_specs()).unwrap();
        let critical_ids: Vec<i32> = report.ranking.critical.iter().map(|o| o.id()).collect();
        assert_eq!(critical_ids, vec![2, 4, 1]);
    }

    #[test]
    fn warning_band_precharges_brakes() {
        // TTC 4.0s: outside the 2.0s critical band, inside the 5.0s
        // warning band.
        let specs = vec![ObjectSpec {
            id: 8,
            distance: 40.0,
            relative_velocity: -10.0,
        }];
        let runner = Runner::new(ScenarioConfig::default());
        let report = runner.execute(&specs).unwrap();
        assert_eq!(report.ranking.decision, BrakeDecision::PrechargeBrakes);
    }

    #[test]
    fn receding_traffic_is_all_clear() {
        let specs = vec![ObjectSpec {
            id: 9,
            distance: 40.0,
            relative_velocity: 6.0,
        }];
        let runner = Runner::new(ScenarioConfig::default());
        let report = runner.execute(&specs).unwrap();
        assert_eq!(report.ranking.decision, BrakeDecision::Clear);
        assert_eq!(report.ranking.within_critical_threshold, 0);
    }

    #[test]
    fn route_produces_nav_summary() {
        let config = ScenarioConfig {
            route: Some(RouteConfig {
                instructions: "R2,L3,L1".to_string(),
                ..RouteConfig::default()
            }),
            ..ScenarioConfig::default()
        };
        let runner = Runner::new(config);
        let report = runner.execute(&highway_specs()).unwrap();
        let nav = report.nav.unwrap();
        assert_eq!((nav.final_x, nav.final_y), (6, 2));
        assert_eq!(nav.actual_steps, 6);
        assert_eq!(nav.manhattan_distance, 4);
    }

    #[test]
    fn malformed_route_fails_and_counts_as_failure() {
        let config = ScenarioConfig {
            route: Some(RouteConfig {
                instructions: "R2,Q3".to_string(),
                ..RouteConfig::default()
            }),
            ..ScenarioConfig::default()
        };
        let runner = Runner::new(config);
        assert!(runner.execute(&highway_specs()).is_err());
        assert_eq!(runner.metrics_snapshot(), (0, 1));
    }
}
