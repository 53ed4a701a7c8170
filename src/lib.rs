//! ptime
//!
//! Named high-resolution timer registry and micro-benchmark driver.
//!
//! ## Architecture
//! - Registry: named start timestamps over a concurrent table, with a
//!   runtime-extensible allow-list of name kinds
//! - Formatter: pure nanosecond decomposition into s/ms/ns plus a rendered
//!   string
//! - Bench: drives an operation through N rounds, reporting total or mean
//!   wall-clock time, with guaranteed cleanup of in-flight entries
//!
//! ```
//! use ptime::{Timers, TimerName};
//!
//! let timers = Timers::new();
//! timers.set_time("load")?;
//! let elapsed = timers.elapsed_time(&TimerName::from("load"))?;
//! println!("{}", elapsed.formatted);
//! # Ok::<(), ptime::TimerError>(())
//! ```

pub mod bench;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod registry;
pub mod types;

pub use bench::{run_average, run_average_async, run_rounds, run_rounds_async};
pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use config::RegistryConfig;
pub use error::TimerError;
pub use format::parse_time;
pub use registry::{global, Timers};
pub use types::{Elapsed, ElapsedData, NameKind, TimerName};
