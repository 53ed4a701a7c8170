//! Error surface of the timer registry

use crate::types::{NameKind, TimerName};
use thiserror::Error;

/// Errors raised by the registry and the benchmark driver.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The timer name's kind tag is not in the registry's allow-list.
    /// This signals a programmer error; there is nothing to retry.
    #[error("timer name kind `{kind}` is not one of the allowed kinds: {allowed}")]
    InvalidNameKind { kind: NameKind, allowed: String },

    /// An elapsed-time query against a name that was never set (or was
    /// already deleted). The table never computes against an absent start.
    #[error("timer `{name}` has not been set")]
    MissingTimer { name: TimerName },
}
