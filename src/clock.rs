//! Sources of the current instant.

use crate::{Duration, Instant};

/// A source of the current instant.
///
/// Code that needs the current time should take a `Clock` rather than read
/// the system clock directly, so that tests can substitute a
/// [`FixedClock`].
pub trait Clock {
    /// Returns the current instant.
    fn instant(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn instant(&self) -> Instant {
        (**self).instant()
    }
}

/// A clock that always returns the same instant.
///
/// # Examples
///
/// ```
/// use iso_time::{Clock, FixedClock, Instant};
///
/// let t = Instant::parse("2017-10-03T10:15:30Z").unwrap();
/// let clock = FixedClock::new(t);
/// assert_eq!(clock.instant(), t);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    /// Creates a clock fixed at the specified instant.
    pub const fn new(instant: Instant) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.instant
    }
}

/// A clock that shifts the instants of another clock by a fixed duration.
///
/// Shifted instants saturate at [`Instant::MIN`] and [`Instant::MAX`].
///
/// # Examples
///
/// ```
/// use iso_time::{Clock, Duration, FixedClock, Instant, OffsetClock};
///
/// let clock = OffsetClock::new(FixedClock::new(Instant::EPOCH), Duration::of_seconds(-5));
/// assert_eq!(clock.instant().epoch_second(), -5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OffsetClock<C> {
    clock: C,
    offset: Duration,
}

impl<C: Clock> OffsetClock<C> {
    /// Creates a clock that shifts `clock` by `offset`.
    pub const fn new(clock: C, offset: Duration) -> Self {
        Self { clock, offset }
    }

    /// Returns the offset.
    pub const fn offset(&self) -> Duration {
        self.offset
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn instant(&self) -> Instant {
        self.clock.instant().plus_saturating(self.offset)
    }
}

#[cfg(feature = "std")]
pub use system::{MonotonicClock, SystemClock};

#[cfg(feature = "std")]
mod system {
    use std::time::{Instant as WallInstant, SystemTime};

    use super::Clock;
    use crate::{Duration, Instant};

    /// The system clock.
    ///
    /// The system clock may jump backwards, for instance when it is adjusted
    /// by the user or by a time synchronization service. Instants outside the
    /// supported range saturate at [`Instant::MIN`] and [`Instant::MAX`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn instant(&self) -> Instant {
            from_system_time_saturating(SystemTime::now())
        }
    }

    /// A monotonic clock anchored to an instant.
    ///
    /// This clock internally relies on [`std::time::Instant::now`] so the
    /// instants it returns never go backwards, even if the system clock
    /// does. It is initialized once by associating an [`Instant`] to a
    /// reading of the monotonic wall clock.
    ///
    /// A `MonotonicClock` instance can be simultaneously accessed from
    /// several threads.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::thread;
    ///
    /// use iso_time::MonotonicClock;
    ///
    /// let clock = Arc::new(MonotonicClock::init_from_system_clock());
    ///
    /// // Time the execution of 2 different threads.
    /// let th1 = thread::spawn({
    ///     let clock = clock.clone();
    ///     move || clock.now()
    /// });
    /// let th2 = thread::spawn(move || clock.now());
    /// let t1 = th1.join().unwrap();
    /// let t2 = th2.join().unwrap();
    ///
    /// println!("thread 1 has completed at {}", t1);
    /// println!("thread 2 has completed at {}", t2);
    /// ```
    #[derive(Copy, Clone, Debug, Hash)]
    pub struct MonotonicClock {
        instant_ref: Instant,
        wall_clock_ref: WallInstant,
    }

    impl MonotonicClock {
        /// Initializes the clock by associating an instant to the current
        /// wall clock time.
        ///
        /// Future calls to [`now`](Self::now) will return instants that are
        /// relative to the provided instant, with a constant offset with
        /// respect to the monotonic wall clock time.
        pub fn init_at(now: Instant) -> Self {
            Self::init_from_instant(now, WallInstant::now())
        }

        /// Initializes the clock from the system clock.
        ///
        /// The monotonic clock and the system clock are read separately. This
        /// constructor attempts to find a well-correlated pair of readings by
        /// collecting several candidate samples from interleaved calls to
        /// `SystemTime::now` and `std::time::Instant::now`.
        pub fn init_from_system_clock() -> Self {
            let (system_time_ref, wall_clock_ref) = get_correlated_time_refs();

            Self::init_from_instant(from_system_time_saturating(system_time_ref), wall_clock_ref)
        }

        /// Initializes the clock by associating an instant to the provided
        /// reading of the monotonic wall clock.
        ///
        /// The `wall_clock_ref` argument may lie in the past or in the future
        /// of the current wall clock time.
        ///
        /// Future calls to [`now`](Self::now) will return `instant_ref` when
        /// the wall clock time matches `wall_clock_ref`.
        pub fn init_from_instant(instant_ref: Instant, wall_clock_ref: WallInstant) -> Self {
            Self {
                instant_ref,
                wall_clock_ref,
            }
        }

        /// Initializes the clock by associating an instant to a
        /// `SystemTime`.
        ///
        /// The `wall_clock_ref` argument may lie in the past or in the future
        /// of the current system time.
        ///
        /// Future calls to [`now`](Self::now) will return `instant_ref` when
        /// the system time matches `wall_clock_ref`, assuming that the
        /// system clock is not adjusted in the meantime.
        pub fn init_from_system_time(instant_ref: Instant, wall_clock_ref: SystemTime) -> Self {
            let (system_time_ref, instant_wall_ref) = get_correlated_time_refs();

            let instant_ref = match wall_clock_ref.duration_since(system_time_ref) {
                Ok(ahead) => rewind(instant_ref, ahead),
                Err(behind) => advance(instant_ref, behind.duration()),
            };

            Self::init_from_instant(instant_ref, instant_wall_ref)
        }

        /// Returns the instant corresponding to the current wall clock time.
        ///
        /// The returned instant will never be lower than an instant returned
        /// by a previous call to `now`.
        pub fn now(&self) -> Instant {
            let now = WallInstant::now();

            if now >= self.wall_clock_ref {
                advance(self.instant_ref, now.duration_since(self.wall_clock_ref))
            } else {
                rewind(self.instant_ref, self.wall_clock_ref.duration_since(now))
            }
        }
    }

    impl Clock for MonotonicClock {
        fn instant(&self) -> Instant {
            self.now()
        }
    }

    fn from_std(d: std::time::Duration) -> Duration {
        Duration::try_from(d).unwrap_or(Duration::MAX)
    }

    fn advance(instant: Instant, elapsed: std::time::Duration) -> Instant {
        instant.plus_saturating(from_std(elapsed))
    }

    fn rewind(instant: Instant, elapsed: std::time::Duration) -> Instant {
        instant.minus(from_std(elapsed)).unwrap_or(Instant::MIN)
    }

    fn from_system_time_saturating(system_time: SystemTime) -> Instant {
        Instant::from_system_time(&system_time).unwrap_or(
            if system_time >= SystemTime::UNIX_EPOCH {
                Instant::MAX
            } else {
                Instant::MIN
            },
        )
    }

    /// Returns a pair of well-correlated `SystemTime` and monotonic
    /// `Instant`.
    fn get_correlated_time_refs() -> (SystemTime, WallInstant) {
        const EXTRA_SAMPLES: usize = 2;

        let mut before = WallInstant::now();
        let system_time = SystemTime::now();
        let mut after = WallInstant::now();

        let delta = after.saturating_duration_since(before); // uncertainty on measurement.
        let mut measurement = (before, delta, system_time);

        for _ in 0..EXTRA_SAMPLES {
            before = after;
            let system_time = SystemTime::now();
            after = WallInstant::now();
            let delta = after.saturating_duration_since(before);

            // Prefer the measurement with the lowest uncertainty. A null
            // uncertainty most likely indicates a platform bug.
            if measurement.1.is_zero() || (delta < measurement.1 && !delta.is_zero()) {
                measurement = (before, delta, system_time);
            }
        }

        // Associate the `SystemTime` of the best measurement to the midpoint
        // of the monotonic readings taken just before and after it.
        (measurement.2, measurement.0 + measurement.1 / 2)
    }

}
