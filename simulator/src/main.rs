use aebcore::prelude::RankStrategy;
use anyhow::bail;
use clap::Parser;
use generator::traffic::{build_traffic_specs, TrafficConfig};
use report::{append_summary_line, write_report};
use std::path::PathBuf;
use workflow::config::ScenarioConfig;
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing AEB scenario driver")]
struct Args {
    /// Load a scenario config from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Ranking strategy: collision-time, threat-level, or multi-criteria
    #[arg(long, default_value = "collision-time")]
    strategy: String,
    #[arg(long, default_value_t = 5)]
    top_k: usize,
    /// Synthetic objects to generate when the scenario lists none
    #[arg(long, default_value_t = 6)]
    objects: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Robot route such as "R2,L3,L1"
    #[arg(long)]
    route: Option<String>,
    /// Write the full run report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
    /// Rolling one-line-per-run summary log
    #[arg(long, default_value = "tools/data/scenario_runs.log")]
    summary_log: PathBuf,
}

fn parse_strategy(name: &str) -> anyhow::Result<RankStrategy> {
    match name {
        "collision-time" => Ok(RankStrategy::CollisionTime),
        "threat-level" => Ok(RankStrategy::ThreatLevel),
        "multi-criteria" => Ok(RankStrategy::MultiCriteria),
        other => bail!("unknown ranking strategy `{}`", other),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = &args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::from_args(
            parse_strategy(&args.strategy)?,
            args.top_k,
            args.route.clone(),
        )
    };

    let specs = if config.objects.is_empty() {
        build_traffic_specs(&TrafficConfig {
            count: args.objects,
            seed: args.seed,
            ..TrafficConfig::default()
        })
    } else {
        config.objects.clone()
    };

    let runner = Runner::new(config);
    let result = runner.execute(&specs)?;

    println!(
        "Scenario {} -> ranked {} objects ({:?}) in {}us",
        result.scenario,
        result.ranking.ranked_ids.len(),
        result.ranking.strategy,
        result.ranking.sort_micros
    );
    println!("ID\tDist(m)\tTTC(s)\tThreat");
    for obj in &result.ranking.critical {
        let ttc = if obj.collision_time().is_infinite() {
            "INF".to_string()
        } else {
            format!("{:.2}", obj.collision_time())
        };
        println!(
            "{}\t{:.1}\t{}\t{:.2}",
            obj.id(),
            obj.distance(),
            ttc,
            obj.threat_level()
        );
    }
    println!(
        "{} objects inside the critical threshold -> {}",
        result.ranking.within_critical_threshold, result.ranking.decision
    );

    if let Some(nav) = &result.nav {
        println!(
            "Robot ended at ({},{}) facing {}: {} steps, manhattan {}, efficiency {:.1}%",
            nav.final_x,
            nav.final_y,
            nav.heading,
            nav.actual_steps,
            nav.manhattan_distance,
            nav.efficiency_percent
        );
    }

    if let Some(path) = &args.report {
        write_report(&result, path)?;
    }
    append_summary_line(&result, &args.summary_log)?;

    let (completed, failures) = runner.metrics_snapshot();
    log::info!("runs completed={} failures={}", completed, failures);

    Ok(())
}
