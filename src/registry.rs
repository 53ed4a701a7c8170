//! Named-timer registry
//!
//! The table maps timer names to monotonic start timestamps. A name is
//! present iff it has been set and not yet deleted; setting again simply
//! overwrites. Timestamps are `u128` nanoseconds, which keeps full
//! precision for durations spanning years.

use crate::clock::{MonotonicClock, SystemClock};
use crate::config::RegistryConfig;
use crate::error::TimerError;
use crate::format::parse_time;
use crate::types::{Elapsed, NameKind, TimerName};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Named-timer registry: start timestamps keyed by [`TimerName`], plus the
/// mutable allow-list of admitted name kinds.
///
/// All operations take `&self`; the table is safe to share across threads,
/// but overlapping benchmarks that reuse one name will trample each other's
/// entries, so independent callers should pick distinct names.
pub struct Timers {
    table: DashMap<TimerName, u128>,
    allowed: RwLock<HashSet<NameKind>>,
    clock: Box<dyn MonotonicClock>,
}

impl Timers {
    /// Registry with the default allow-list and the system clock.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }

    /// Registry over an injected clock; tests pair this with
    /// [`crate::clock::ManualClock`].
    pub fn with_clock(config: RegistryConfig, clock: impl MonotonicClock + 'static) -> Self {
        Self {
            table: DashMap::new(),
            allowed: RwLock::new(config.allowed_kinds.into_iter().collect()),
            clock: Box::new(clock),
        }
    }

    /// Check a name's kind against the allow-list.
    ///
    /// Fails with [`TimerError::InvalidNameKind`] carrying the currently
    /// allowed kinds, so the message stays accurate after runtime additions.
    pub fn validate(&self, name: &TimerName) -> Result<(), TimerError> {
        let allowed = self.allowed.read();
        let kind = name.kind();
        if allowed.contains(&kind) {
            Ok(())
        } else {
            let mut kinds: Vec<String> = allowed.iter().map(ToString::to_string).collect();
            kinds.sort();
            Err(TimerError::InvalidNameKind {
                kind,
                allowed: kinds.join(", "),
            })
        }
    }

    /// Admit an additional name kind at runtime. Returns `false` if the
    /// kind was already allowed.
    pub fn allow_kind(&self, kind: NameKind) -> bool {
        self.allowed.write().insert(kind)
    }

    /// Snapshot of the allow-list, sorted by rendered name.
    pub fn allowed_kinds(&self) -> Vec<NameKind> {
        let mut kinds: Vec<NameKind> = self.allowed.read().iter().cloned().collect();
        kinds.sort_by_key(|k| k.to_string());
        kinds
    }

    /// Start (or restart) the timer under `name`, returning the stored
    /// timestamp.
    pub fn set_time(&self, name: impl Into<TimerName>) -> Result<u128, TimerError> {
        let name = name.into();
        self.validate(&name)?;
        Ok(self.set_raw(name))
    }

    /// The stored start timestamp, or `None` if never set.
    pub fn get_time(&self, name: &TimerName) -> Result<Option<u128>, TimerError> {
        self.validate(name)?;
        Ok(self.table.get(name).map(|entry| *entry))
    }

    /// Nanoseconds elapsed since `set_time(name)`.
    ///
    /// Fails with [`TimerError::MissingTimer`] when the name was never set
    /// rather than computing against an absent start.
    pub fn diff_time(&self, name: &TimerName) -> Result<u128, TimerError> {
        self.validate(name)?;
        self.diff_raw(name)
    }

    /// Remove the entry for `name`, returning the removed start timestamp.
    pub fn delete_time(&self, name: &TimerName) -> Result<Option<u128>, TimerError> {
        self.validate(name)?;
        Ok(self.remove_raw(name))
    }

    /// Elapsed time since `set_time(name)` as a decomposed [`Elapsed`].
    /// Leaves the entry in place.
    pub fn elapsed_time(&self, name: &TimerName) -> Result<Elapsed, TimerError> {
        Ok(parse_time(self.diff_time(name)? as i128))
    }

    /// Whether an entry is currently live for `name`.
    pub fn contains(&self, name: &TimerName) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn now_ns(&self) -> u128 {
        self.clock.now_ns()
    }

    pub(crate) fn set_raw(&self, name: TimerName) -> u128 {
        let now = self.clock.now_ns();
        self.table.insert(name, now);
        now
    }

    pub(crate) fn diff_raw(&self, name: &TimerName) -> Result<u128, TimerError> {
        let start = self
            .table
            .get(name)
            .map(|entry| *entry)
            .ok_or_else(|| TimerError::MissingTimer { name: name.clone() })?;
        // The clock is monotonic; saturate rather than underflow on a
        // misbehaving host.
        Ok(self.clock.now_ns().saturating_sub(start))
    }

    pub(crate) fn remove_raw(&self, name: &TimerName) -> Option<u128> {
        self.table.remove(name).map(|(_, start)| start)
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<Timers> = Lazy::new(Timers::new);

/// Process-wide convenience instance, lazily initialized on first use.
///
/// Prefer owning a [`Timers`] where practical; independent callers sharing
/// this instance must pick distinct timer names.
pub fn global() -> &'static Timers {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::sync::Arc;

    fn manual_registry() -> (Arc<ManualClock>, Timers) {
        let clock = Arc::new(ManualClock::new());
        let timers = Timers::with_clock(RegistryConfig::default(), clock.clone());
        (clock, timers)
    }

    #[test]
    fn set_then_get_returns_same_timestamp() {
        let (clock, timers) = manual_registry();
        clock.advance(1_234);
        let set = timers.set_time("my timer").unwrap();
        let got = timers.get_time(&TimerName::from("my timer")).unwrap();
        assert_eq!(got, Some(set));
        assert_eq!(set, 1_234);
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let (clock, timers) = manual_registry();
        timers.set_time("t").unwrap();
        clock.advance(500);
        let second = timers.set_time("t").unwrap();
        assert_eq!(
            timers.get_time(&TimerName::from("t")).unwrap(),
            Some(second)
        );
    }

    #[test]
    fn diff_tracks_clock_advance() {
        let (clock, timers) = manual_registry();
        let name = TimerName::from("t");
        timers.set_time("t").unwrap();
        clock.advance(150);
        assert_eq!(timers.diff_time(&name).unwrap(), 150);
    }

    #[test]
    fn elapsed_decomposes_and_keeps_entry() {
        let (clock, timers) = manual_registry();
        let name = TimerName::from("t");
        timers.set_time("t").unwrap();
        clock.advance(1_500_000_000);

        let elapsed = timers.elapsed_time(&name).unwrap();
        assert_eq!(elapsed.nanos_diff, 1_500_000_000);
        assert_eq!(elapsed.data.seconds, 1);
        assert_eq!(elapsed.data.milliseconds, 500);
        assert_eq!(elapsed.data.nanoseconds, 0);
        assert_eq!(elapsed.formatted, "+ 1s 500ms 0ns");

        // elapsed_time never deletes
        assert!(timers.contains(&name));
    }

    #[test]
    fn missing_timer_fails_loudly() {
        let timers = Timers::new();
        let err = timers.diff_time(&TimerName::from("never set")).unwrap_err();
        assert!(matches!(err, TimerError::MissingTimer { .. }));

        let got = timers.get_time(&TimerName::from("never set")).unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn disallowed_kind_reports_allowed_kinds() {
        let timers = Timers::new();
        let name = TimerName::Custom {
            kind: "session".into(),
            key: "abc".into(),
        };
        let err = timers.set_time(name.clone()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("session"));
        assert!(msg.contains("int"));
        assert!(msg.contains("float"));
        assert!(msg.contains("text"));

        // runtime extension admits the kind and shows up in later messages
        assert!(timers.allow_kind(NameKind::Custom("session".into())));
        assert!(timers.validate(&name).is_ok());
        timers.set_time(name.clone()).unwrap();
        assert!(timers.contains(&name));
    }

    #[test]
    fn delete_removes_and_returns_start() {
        let (clock, timers) = manual_registry();
        clock.advance(42);
        let name = TimerName::from(7i64);
        timers.set_time(7i64).unwrap();
        assert_eq!(timers.delete_time(&name).unwrap(), Some(42));
        assert!(!timers.contains(&name));
        assert_eq!(timers.delete_time(&name).unwrap(), None);
    }

    #[test]
    fn immediate_diff_is_close_to_zero() {
        let timers = Timers::new();
        let name = TimerName::from("roundtrip");
        timers.set_time("roundtrip").unwrap();
        let diff = timers.diff_time(&name).unwrap();
        // bounded by scheduler jitter, generous margin
        assert!(diff < 50_000_000, "diff was {diff}ns");
    }

    #[test]
    fn global_instance_is_shared() {
        let name = TimerName::from("global-test-timer");
        global().set_time("global-test-timer").unwrap();
        assert!(global().contains(&name));
        global().delete_time(&name).unwrap();
        assert!(!global().contains(&name));
    }
}
