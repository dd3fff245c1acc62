use anyhow::Context;
use bridge::{StatusBridge, StatusModel};
use clap::Parser;
use generator::{TrafficConfig, TrafficGenerator};
use log::{error, info};
use notify::ConsoleNotifier;
use spottercore::catalog;
use spottercore::telemetry::MetricsRecorder;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::SpotterConfig;
use workflow::runner::Runner;
use workflow::source::SnapshotSource;

mod bridge;
mod generator;
mod notify;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Spot aircraft around a home location")]
struct Args {
    /// Load configuration from YAML; environment variables still override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Read each cycle's aircraft from this JSON file instead of synthetic traffic
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Number of fetch cycles to run, 0 runs until Ctrl+C
    #[arg(long, default_value_t = 1)]
    cycles: u64,
    /// Override the fetch interval in seconds
    #[arg(long)]
    interval: Option<u64>,
    /// Seed for synthetic traffic
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Serve /health, /metrics and /sightings on the metrics port
    #[arg(long, default_value_t = false)]
    serve: bool,
    /// Print the known aircraft type designators and exit
    #[arg(long, default_value_t = false)]
    list_types: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_types {
        for entry in catalog::entries() {
            println!("{:<6} {}", entry.identifier, entry.description);
        }
        return Ok(());
    }

    let mut config = SpotterConfig::resolve(args.config.as_deref())?;
    if let Some(interval) = args.interval {
        config.fetch_interval_secs = interval;
        config.validate()?;
    }
    info!(
        "spotting {} within {} km of {:.5},{:.5} every {}s",
        config.aircraft_types,
        config.max_range_km,
        config.latitude,
        config.longitude,
        config.fetch_interval_secs
    );

    let metrics = Arc::new(MetricsRecorder::new());
    let mut runner = Runner::new(&config, metrics.clone())?
        .with_notifier(Box::new(ConsoleNotifier::new(
            config.max_aircraft_per_message,
        )));

    let mut source = match args.snapshot {
        Some(path) => SnapshotSource::File(path),
        None => {
            let traffic = TrafficConfig {
                radius_km: (config.max_range_km.max(1) as f64) * 2.0,
                seconds_per_cycle: config.fetch_interval_secs as f64,
                seed: args.seed,
                ..Default::default()
            };
            SnapshotSource::Synthetic(TrafficGenerator::new(config.home()?, traffic)?)
        }
    };
    info!("reading aircraft from {}", source.describe());

    let bridge = StatusBridge::new();
    if args.serve {
        bridge.serve(config.metrics_port);
    }

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating runtime for the fetch loop")?;
    let period = Duration::from_secs(config.fetch_interval_secs);

    let interrupted = runtime.block_on(run_cycles(
        &mut runner,
        &mut source,
        &bridge,
        &metrics,
        period,
        args.cycles,
    ))?;

    if args.serve && !interrupted {
        info!(
            "status endpoint still up on port {} (Ctrl+C to stop)",
            config.metrics_port
        );
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    let totals = metrics.snapshot();
    println!(
        "cycles={} aircraft_seen={} sightings={} notified={} notify_errors={}",
        totals.cycles, totals.aircraft_seen, totals.sightings, totals.notified, totals.notify_errors
    );

    Ok(())
}

/// Runs fetch cycles back to back on `period`; returns whether Ctrl+C ended them.
async fn run_cycles(
    runner: &mut Runner,
    source: &mut SnapshotSource,
    bridge: &StatusBridge,
    metrics: &MetricsRecorder,
    period: Duration,
    cycles: u64,
) -> anyhow::Result<bool> {
    let mut ticker = tokio::time::interval(period);
    let mut completed = 0u64;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            result = signal::ctrl_c() => {
                result.context("awaiting Ctrl+C to exit")?;
                info!("interrupted, stopping after {} cycles", completed);
                return Ok(true);
            }
        }

        match source.next_snapshot() {
            Ok(snapshot) => {
                let result = runner.execute(&snapshot);
                bridge.publish(StatusModel {
                    cycle: result.cycle,
                    aircraft_seen: result.aircraft_seen,
                    new_this_cycle: result.new_sightings.len(),
                    sightings: result.sightings,
                    metrics: metrics.snapshot(),
                });
            }
            Err(err) => error!("retrieval error: {:#}", err),
        }

        completed += 1;
        if cycles != 0 && completed >= cycles {
            return Ok(false);
        }
    }
}
