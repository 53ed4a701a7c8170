//! Benchmark driver built on the timer registry
//!
//! Two measurements over a repeated operation: total wall-clock time for
//! all rounds combined (`run_rounds`) and mean time per round
//! (`run_average`), each in a synchronous and an awaited flavor. Every
//! live timer entry is held by a drop guard, so a panicking operation
//! cannot leave entries behind in the table.

use crate::error::TimerError;
use crate::format::parse_time;
use crate::registry::Timers;
use crate::types::{Elapsed, TimerName};
use std::future::Future;
use tracing::{debug, trace};

/// Scoped ownership of one live timer entry: started on construction,
/// deleted on drop on every exit path.
struct RoundGuard<'a> {
    timers: &'a Timers,
    name: TimerName,
}

impl<'a> RoundGuard<'a> {
    fn start(timers: &'a Timers, name: TimerName) -> Self {
        timers.set_raw(name.clone());
        Self { timers, name }
    }

    /// Elapsed nanoseconds for this entry; removal happens in `drop`.
    fn finish(self) -> u128 {
        self.timers.diff_raw(&self.name).unwrap_or(0)
    }
}

impl Drop for RoundGuard<'_> {
    fn drop(&mut self) {
        self.timers.remove_raw(&self.name);
    }
}

/// Invoke `op` exactly `rounds` times and measure the combined wall-clock
/// time under one timer named `name`. The entry is deleted before
/// returning.
///
/// Arguments to the measured operation are captured by the closure.
pub fn run_rounds<F>(
    timers: &Timers,
    name: impl Into<TimerName>,
    rounds: u64,
    mut op: F,
) -> Result<Elapsed, TimerError>
where
    F: FnMut(),
{
    let name = name.into();
    timers.validate(&name)?;

    let guard = RoundGuard::start(timers, name.clone());
    for _ in 0..rounds {
        op();
    }
    let total = guard.finish();

    debug!(timer = %name, rounds, total_ns = %total, "benchmark rounds complete");
    Ok(parse_time(total as i128))
}

/// [`run_rounds`] for operations that must be awaited; each invocation
/// completes before the next starts.
pub async fn run_rounds_async<F, Fut>(
    timers: &Timers,
    name: impl Into<TimerName>,
    rounds: u64,
    mut op: F,
) -> Result<Elapsed, TimerError>
where
    F: FnMut() -> Fut,
    Fut: Future,
{
    let name = name.into();
    timers.validate(&name)?;

    let guard = RoundGuard::start(timers, name.clone());
    for _ in 0..rounds {
        op().await;
    }
    let total = guard.finish();

    debug!(timer = %name, rounds, total_ns = %total, "benchmark rounds complete");
    Ok(parse_time(total as i128))
}

/// Invoke `op` `rounds` times, timing each round under its own sub-timer
/// (`name` + round index), and return the mean round duration.
///
/// Returns `Ok(None)` when `rounds == 0`: no rounds, no data. The mean is
/// integer division over the accumulated nanosecond total.
pub fn run_average<F>(
    timers: &Timers,
    name: impl Into<TimerName>,
    rounds: u64,
    mut op: F,
) -> Result<Option<Elapsed>, TimerError>
where
    F: FnMut(),
{
    let name = name.into();
    timers.validate(&name)?;
    if rounds == 0 {
        return Ok(None);
    }

    let mut total: u128 = 0;
    for round in 0..rounds {
        let guard = RoundGuard::start(timers, name.round_key(round));
        op();
        total += guard.finish();
    }

    let mean = total / rounds as u128;
    trace!(timer = %name, rounds, mean_ns = %mean, "benchmark average complete");
    Ok(Some(parse_time(mean as i128)))
}

/// [`run_average`] for operations that must be awaited.
pub async fn run_average_async<F, Fut>(
    timers: &Timers,
    name: impl Into<TimerName>,
    rounds: u64,
    mut op: F,
) -> Result<Option<Elapsed>, TimerError>
where
    F: FnMut() -> Fut,
    Fut: Future,
{
    let name = name.into();
    timers.validate(&name)?;
    if rounds == 0 {
        return Ok(None);
    }

    let mut total: u128 = 0;
    for round in 0..rounds {
        let guard = RoundGuard::start(timers, name.round_key(round));
        op().await;
        total += guard.finish();
    }

    let mean = total / rounds as u128;
    trace!(timer = %name, rounds, mean_ns = %mean, "benchmark average complete");
    Ok(Some(parse_time(mean as i128)))
}
