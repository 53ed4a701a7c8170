//! Nanosecond decomposition and rendering

use crate::types::{Elapsed, ElapsedData};
use std::fmt;

pub const NANOS_PER_SEC: i128 = 1_000_000_000;
pub const NANOS_PER_MILLI: i128 = 1_000_000;

/// Decompose a raw nanosecond difference into seconds, milliseconds and the
/// nanosecond remainder, plus the rendered string.
///
/// Pure function. Division truncates toward zero, so for a negative `diff`
/// every component is negative and the identity
/// `seconds * 1e9 + milliseconds * 1e6 + nanoseconds == diff` holds for all
/// inputs.
pub fn parse_time(diff: i128) -> Elapsed {
    let seconds = diff / NANOS_PER_SEC;
    let rem = diff % NANOS_PER_SEC;
    let milliseconds = (rem / NANOS_PER_MILLI) as i32;
    let nanoseconds = (rem % NANOS_PER_MILLI) as i32;

    let data = ElapsedData {
        seconds,
        milliseconds,
        nanoseconds,
    };

    Elapsed {
        nanos_diff: diff,
        formatted: format!("+ {seconds}s {milliseconds}ms {nanoseconds}ns"),
        data,
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}
