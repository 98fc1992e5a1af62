//! Monotonic timestamps and gesture timing configuration.

use core::time::Duration;

/// A point on the monotonic clock, in milliseconds since boot.
///
/// The firmware builds these from `embassy_time::Instant`; tests build them
/// directly with [`Instant::from_millis`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u64);

impl Instant {
    /// Clock origin.
    pub const ZERO: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`.
    ///
    /// Saturates to zero if `earlier` is in the future, so a clock that
    /// steps backwards never produces a huge duration.
    #[inline]
    #[must_use]
    pub const fn duration_since(self, earlier: Instant) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// This instant moved forward by `millis`.
    #[inline]
    #[must_use]
    pub const fn add_millis(self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }
}

/// Error type for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The double press window must be longer than zero.
    ZeroDoublePressWindow,
    /// The long press threshold must be longer than zero.
    ZeroLongPressThreshold,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDoublePressWindow => write!(f, "double press window must be positive"),
            Self::ZeroLongPressThreshold => write!(f, "long press threshold must be positive"),
        }
    }
}

/// Timing shared by every gesture detector.
///
/// Read-only after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// How long after a short release a second press still counts as a double press.
    pub double_press_window: Duration,
    /// How long a button must be held to fire a long press.
    pub long_press_threshold: Duration,
}

impl TimingConfig {
    /// 300 ms double press window, 500 ms long press threshold.
    pub const DEFAULT: Self = Self {
        double_press_window: Duration::from_millis(300),
        long_press_threshold: Duration::from_millis(500),
    };

    /// Build a timing configuration from millisecond values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either value is zero.
    pub const fn from_millis(
        double_press_window_ms: u64,
        long_press_threshold_ms: u64,
    ) -> Result<Self, ConfigError> {
        if double_press_window_ms == 0 {
            return Err(ConfigError::ZeroDoublePressWindow);
        }
        if long_press_threshold_ms == 0 {
            return Err(ConfigError::ZeroLongPressThreshold);
        }
        Ok(Self {
            double_press_window: Duration::from_millis(double_press_window_ms),
            long_press_threshold: Duration::from_millis(long_press_threshold_ms),
        })
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimingConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "TimingConfig {{ double_press_window: {}ms, long_press_threshold: {}ms }}",
            self.double_press_window.as_millis() as u64,
            self.long_press_threshold.as_millis() as u64
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_since() {
        let a = Instant::from_millis(100);
        let b = Instant::from_millis(350);
        assert_eq!(b.duration_since(a), Duration::from_millis(250));
    }

    #[test]
    fn test_duration_since_saturates() {
        let a = Instant::from_millis(100);
        let b = Instant::from_millis(50);
        assert_eq!(b.duration_since(a), Duration::ZERO);
    }

    #[test]
    fn test_from_millis_validates() {
        assert_eq!(
            TimingConfig::from_millis(0, 500),
            Err(ConfigError::ZeroDoublePressWindow)
        );
        assert_eq!(
            TimingConfig::from_millis(300, 0),
            Err(ConfigError::ZeroLongPressThreshold)
        );
        assert_eq!(TimingConfig::from_millis(300, 500), Ok(TimingConfig::DEFAULT));
    }
}
