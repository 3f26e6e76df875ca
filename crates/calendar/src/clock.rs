//! Sources of the current instant and elapsed-time measurement on top of them.
//!
//! A [`Clock`] is injected wherever "now" is needed; there is no process-wide
//! default. [`Clock::as_time_source`] turns any clock into a [`TimeSource`]
//! whose [`TimeMark`]s always measure against the clock that created them.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::trace;

use crate::error::DateTimeArithmeticError;

/// A point on the UTC time line.
pub type Instant = DateTime<Utc>;

/// A signed length of time.
pub type Duration = TimeDelta;

/// A source of the current instant.
///
/// Implementations must be callable from several threads at once.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Borrows this clock as a [`TimeSource`].
    fn as_time_source(&self) -> ClockTimeSource<&Self>
    where
        Self: Sized,
    {
        ClockTimeSource::new(self)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// The platform real-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }
}

/// A clock that is stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Instant);

impl FixedClock {
    /// Creates a clock that always returns `instant`.
    pub fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

/// A clock running a constant offset ahead of (or behind) another clock.
///
/// Readings saturate at the bounds of [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct OffsetClock<C> {
    inner: C,
    offset: Duration,
}

impl<C: Clock> OffsetClock<C> {
    /// Shifts `inner` by `offset`.
    pub fn new(inner: C, offset: Duration) -> Self {
        Self { inner, offset }
    }

    /// Returns the offset.
    pub fn offset(&self) -> Duration {
        self.offset
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn now(&self) -> Instant {
        let base = self.inner.now();
        base.checked_add_signed(self.offset).unwrap_or(if self.offset < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }
}

/// A clock that only moves when told to. Intended for tests.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Instant>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    pub fn new(start: Instant) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Moves the clock by `by`, which may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeArithmeticError`] if the new reading is not
    /// representable; the clock is left unchanged.
    pub fn advance(&self, by: Duration) -> Result<(), DateTimeArithmeticError> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let next = current.checked_add_signed(by).ok_or_else(|| {
            let message = format!("cannot advance clock at {} by {by}", *current);
            DateTimeArithmeticError::with_message(message)
        })?;
        *current = next;
        Ok(())
    }

    /// Sets the clock to `instant`.
    pub fn set(&self, instant: Instant) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Something that can capture the current moment for later measurement.
pub trait TimeSource {
    /// The captured moment.
    type Mark;

    /// Captures the current moment.
    fn mark_now(&self) -> Self::Mark;
}

/// A [`TimeSource`] reading a [`Clock`].
#[derive(Debug, Clone, Copy)]
pub struct ClockTimeSource<C> {
    clock: C,
}

impl<C: Clock> ClockTimeSource<C> {
    /// Wraps `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the wrapped clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock + Clone> TimeSource for ClockTimeSource<C> {
    type Mark = TimeMark<C>;

    fn mark_now(&self) -> TimeMark<C> {
        let instant = self.clock.now();
        trace!(%instant, "time mark captured");
        TimeMark {
            instant,
            clock: self.clock.clone(),
        }
    }
}

/// An instant captured from a clock, measured against that same clock.
///
/// Shifting a mark with [`TimeMark::plus`] or [`TimeMark::minus`] moves the
/// captured instant and keeps the clock; it never reads the clock.
#[derive(Debug, Clone, Copy)]
pub struct TimeMark<C> {
    instant: Instant,
    clock: C,
}

impl<C: Clock> TimeMark<C> {
    /// Returns the captured instant.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Returns the clock this mark measures against.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the time from this mark to the originating clock's current
    /// reading. Negative if the mark lies in the clock's future.
    pub fn elapsed_now(&self) -> Duration {
        self.clock.now().signed_duration_since(self.instant)
    }

    /// Returns `true` if the clock has reached this mark.
    pub fn has_passed_now(&self) -> bool {
        self.elapsed_now() >= Duration::zero()
    }

    /// Returns `true` if the clock has not reached this mark yet.
    pub fn has_not_passed_now(&self) -> bool {
        !self.has_passed_now()
    }

    /// Returns a mark `duration` later on the same clock.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeArithmeticError`] if the shifted instant is not
    /// representable.
    pub fn plus(&self, duration: Duration) -> Result<Self, DateTimeArithmeticError>
    where
        C: Clone,
    {
        let instant = self.instant.checked_add_signed(duration).ok_or_else(|| {
            DateTimeArithmeticError::with_message(format!(
                "time mark {} plus {duration} is out of range",
                self.instant
            ))
        })?;
        Ok(Self {
            instant,
            clock: self.clock.clone(),
        })
    }

    /// Returns a mark `duration` earlier on the same clock.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeArithmeticError`] if the shifted instant is not
    /// representable.
    pub fn minus(&self, duration: Duration) -> Result<Self, DateTimeArithmeticError>
    where
        C: Clone,
    {
        let instant = self.instant.checked_sub_signed(duration).ok_or_else(|| {
            DateTimeArithmeticError::with_message(format!(
                "time mark {} minus {duration} is out of range",
                self.instant
            ))
        })?;
        Ok(Self {
            instant,
            clock: self.clock.clone(),
        })
    }
}
