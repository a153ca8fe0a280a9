//! Counter animations driven by an injectable frame clock.
//!
//! Animated values are pure functions of elapsed time: a [`FrameClock`]
//! supplies "now" and [`CounterAnimation::value_at`] interpolates with an
//! ease-out curve. The TUI schedules one frame tick every [`FRAME_INTERVAL`]
//! while any animation is still moving; tests drive a [`VirtualClock`]
//! instead of waiting on real frames.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Delay between two rendered frames while an animation is running.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Source of monotonic time for animations.
pub trait FrameClock: Send + Sync {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// Frame clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Starts a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    elapsed_micros: Arc<AtomicU64>,
}

impl VirtualClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed_micros
            .fetch_add(duration_to_micros(by), Ordering::SeqCst);
    }
}

impl FrameClock for VirtualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.elapsed_micros.load(Ordering::SeqCst))
    }
}

fn duration_to_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Exponential ease-out: fast start, settles exactly on 1.
#[must_use]
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else if progress <= 0.0 {
        0.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * progress)
    }
}

/// Eased value between `from` and `to` at `progress` in `0..=1`.
#[must_use]
pub fn interpolate(from: f64, to: f64, progress: f64) -> f64 {
    (to - from).mul_add(ease_out_expo(progress), from)
}

/// Formats a counter value: whole numbers unless the target is fractional,
/// in which case one decimal place.
#[must_use]
pub fn format_counter(value: f64, target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// A number counting from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    started_at: Duration,
}

impl CounterAnimation {
    /// Creates an animation that starts at clock time zero.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: Duration::ZERO,
        }
    }

    /// Counts up from zero to `to`.
    #[must_use]
    pub const fn count_up(to: f64, duration: Duration) -> Self {
        Self::new(0.0, to, duration)
    }

    /// Returns the animation anchored at clock time `at`.
    #[must_use]
    pub const fn starting_at(mut self, at: Duration) -> Self {
        self.started_at = at;
        self
    }

    /// Final value.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    const fn is_degenerate(&self) -> bool {
        self.duration.is_zero() || (self.to - self.from).abs() < f64::EPSILON
    }

    /// Fraction of the animation completed at `now`, clamped to `0..=1`.
    #[must_use]
    pub const fn progress(&self, now: Duration) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Returns `true` once the value rests on the target.
    #[must_use]
    pub const fn is_settled(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Value shown at `now`.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> f64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        interpolate(self.from, self.to, progress)
    }

    /// Formatted value shown at `now`.
    #[must_use]
    pub fn display_at(&self, now: Duration) -> String {
        format_counter(self.value_at(now), self.to)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const DURATION: Duration = Duration::from_millis(1500);

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 1.0)]
    #[case(-0.5, 0.0)]
    #[case(2.0, 1.0)]
    fn ease_out_expo_is_pinned_at_the_ends(#[case] progress: f64, #[case] expected: f64) {
        assert!((ease_out_expo(progress) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn ease_out_front_loads_progress() {
        let halfway = ease_out_expo(0.5);
        assert!(halfway > 0.9, "ease-out should be nearly done halfway, got {halfway}");
        assert!(halfway < 1.0);
    }

    #[rstest]
    fn counter_reaches_target_exactly_when_duration_elapses() {
        let clock = VirtualClock::new();
        let counter = CounterAnimation::count_up(88.5, DURATION).starting_at(clock.now());

        clock.advance(Duration::from_millis(750));
        let midway = counter.value_at(clock.now());
        assert!(midway > 0.0 && midway < 88.5, "midway value {midway}");
        assert!(!counter.is_settled(clock.now()));

        clock.advance(Duration::from_millis(750));
        assert!(counter.is_settled(clock.now()));
        assert_eq!(counter.display_at(clock.now()), "88.5");
    }

    #[rstest]
    fn counter_with_equal_endpoints_settles_immediately() {
        let counter = CounterAnimation::new(42.0, 42.0, DURATION);

        assert!(counter.is_settled(Duration::ZERO));
        assert_eq!(counter.display_at(Duration::ZERO), "42");
    }

    #[rstest]
    fn counter_with_zero_duration_settles_immediately() {
        let counter = CounterAnimation::count_up(100.0, Duration::ZERO);

        assert!(counter.is_settled(Duration::ZERO));
        assert_eq!(counter.display_at(Duration::ZERO), "100");
    }

    #[rstest]
    fn counter_before_its_start_shows_origin() {
        let counter =
            CounterAnimation::count_up(30.0, DURATION).starting_at(Duration::from_secs(10));

        assert_eq!(counter.display_at(Duration::from_secs(3)), "0");
    }

    #[rstest]
    #[case(100.0, 100.0, "100")]
    #[case(29.6, 30.0, "30")]
    #[case(88.5, 88.5, "88.5")]
    #[case(12.34, 88.5, "12.3")]
    fn format_counter_follows_target_precision(
        #[case] value: f64,
        #[case] target: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(format_counter(value, target), expected);
    }

    #[rstest]
    fn virtual_clock_clones_share_time() {
        let clock = VirtualClock::new();
        let view = clock.clone();

        clock.advance(Duration::from_millis(40));

        assert_eq!(view.now(), Duration::from_millis(40));
    }
}
