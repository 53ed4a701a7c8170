//! ptime demo CLI
//! Self-benchmarks the registry hot paths

use ptime::{run_average, run_average_async, run_rounds, TimerName, Timers};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("ptime self-benchmark");

    let timers = Timers::new();

    // total time for a burst of table writes against a scratch registry
    let scratch = Timers::new();
    let total = run_rounds(&timers, "set/delete", 10_000, || {
        scratch.set_time(0i64).ok();
        scratch.delete_time(&TimerName::from(0i64)).ok();
    })?;
    info!("10k set/delete pairs: {total}");

    // mean overhead of a no-op round
    if let Some(mean) = run_average(&timers, "noop", 100_000, || std::hint::black_box(()))? {
        info!("noop round mean: {mean}");
    }

    // mean cost of an awaited yield
    if let Some(mean) =
        run_average_async(&timers, "yield", 10_000, || tokio::task::yield_now()).await?
    {
        info!("yield round mean: {mean}");
    }

    Ok(())
}
