//! Core types for the timer registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind tag of a timer name
///
/// The three built-in kinds mirror the identifier shapes the registry admits
/// by default. `Custom` is the escape hatch: callers register their own tag
/// via [`crate::Timers::allow_kind`] and key timers with
/// [`TimerName::Custom`] carrying the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Int,
    Float,
    Text,
    Custom(String),
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Int => write!(f, "int"),
            NameKind::Float => write!(f, "float"),
            NameKind::Text => write!(f, "text"),
            NameKind::Custom(tag) => write!(f, "{tag}"),
        }
    }
}

/// A timer identifier
///
/// Used purely as a mapping key; equality and hashing are total, with
/// `Float` compared by bit pattern so that NaN keys behave consistently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimerName {
    Int(i128),
    Float(f64),
    Text(String),
    Custom { kind: String, key: String },
}

impl TimerName {
    /// The kind tag checked against the registry's allow-list.
    pub fn kind(&self) -> NameKind {
        match self {
            TimerName::Int(_) => NameKind::Int,
            TimerName::Float(_) => NameKind::Float,
            TimerName::Text(_) => NameKind::Text,
            TimerName::Custom { kind, .. } => NameKind::Custom(kind.clone()),
        }
    }

    /// Key for one benchmark round's sub-timer.
    pub(crate) fn round_key(&self, round: u64) -> TimerName {
        TimerName::Text(format!("{self}#{round}"))
    }
}

impl PartialEq for TimerName {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TimerName::Int(a), TimerName::Int(b)) => a == b,
            (TimerName::Float(a), TimerName::Float(b)) => a.to_bits() == b.to_bits(),
            (TimerName::Text(a), TimerName::Text(b)) => a == b,
            (
                TimerName::Custom { kind: ka, key: a },
                TimerName::Custom { kind: kb, key: b },
            ) => ka == kb && a == b,
            _ => false,
        }
    }
}

impl Eq for TimerName {}

impl Hash for TimerName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            TimerName::Int(v) => v.hash(state),
            TimerName::Float(v) => v.to_bits().hash(state),
            TimerName::Text(s) => s.hash(state),
            TimerName::Custom { kind, key } => {
                kind.hash(state);
                key.hash(state);
            }
        }
    }
}

impl fmt::Display for TimerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerName::Int(v) => write!(f, "{v}"),
            TimerName::Float(v) => write!(f, "{v}"),
            TimerName::Text(s) => write!(f, "{s}"),
            TimerName::Custom { kind, key } => write!(f, "{kind}:{key}"),
        }
    }
}

impl From<i128> for TimerName {
    fn from(v: i128) -> Self {
        TimerName::Int(v)
    }
}

impl From<i64> for TimerName {
    fn from(v: i64) -> Self {
        TimerName::Int(v as i128)
    }
}

impl From<f64> for TimerName {
    fn from(v: f64) -> Self {
        TimerName::Float(v)
    }
}

impl From<&str> for TimerName {
    fn from(s: &str) -> Self {
        TimerName::Text(s.to_string())
    }
}

impl From<String> for TimerName {
    fn from(s: String) -> Self {
        TimerName::Text(s)
    }
}

/// Decomposed duration: whole seconds, milliseconds and the nanosecond
/// remainder. All components carry the sign of the raw difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedData {
    pub seconds: i128,
    pub milliseconds: i32,
    pub nanoseconds: i32,
}

/// Result of an elapsed-time query or a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elapsed {
    /// Raw difference in nanoseconds.
    pub nanos_diff: i128,
    /// Decomposition of `nanos_diff`, satisfying
    /// `seconds * 1e9 + milliseconds * 1e6 + nanoseconds == nanos_diff`.
    pub data: ElapsedData,
    /// Human-readable rendering, e.g. `"+ 1s 500ms 0ns"`.
    pub formatted: String,
}
