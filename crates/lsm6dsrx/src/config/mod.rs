//! Configuration helpers for the LSM6DSRX.

pub(crate) mod common;

pub use common::{AccelOutputDataRate, AccelRange, I3cMode};

use crate::error::Error;
use crate::interrupt::InterruptPin;
use crate::tap::{TapAxes, TapMode, TapThresholds, TapTiming};

/// Complete tap detection setup, applied once by
/// [`Lsm6dsrx::configure_tap`](crate::Lsm6dsrx::configure_tap).
///
/// The default reproduces the vendor evaluation setup: 416 Hz, +/-2 g,
/// taps on all axes at 500 mg, double tap gap ~538 ms, routed to INT2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDetectConfig {
    /// I3C setting written before anything else.
    pub i3c: I3cMode,
    /// Accelerometer output data rate.
    pub odr: AccelOutputDataRate,
    /// Accelerometer full-scale range.
    pub range: AccelRange,
    /// Axes that can trigger a tap.
    pub axes: TapAxes,
    /// Per-axis thresholds (5-bit codes, 1 LSB = FS / 32).
    pub thresholds: TapThresholds,
    /// Shock, quiet and duration windows.
    pub timing: TapTiming,
    /// Single-only or single-and-double detection.
    pub mode: TapMode,
    /// Pin that asserts on tap events. `None` leaves routing untouched.
    pub pin: Option<InterruptPin>,
}

impl TapDetectConfig {
    /// Default tap detection configuration.
    pub const DEFAULT: Self = Self {
        i3c: I3cMode::Disabled,
        odr: AccelOutputDataRate::Hz416,
        range: AccelRange::G2,
        axes: TapAxes::ALL,
        thresholds: TapThresholds::uniform(0x08),
        timing: TapTiming::DEFAULT,
        mode: TapMode::SingleAndDouble,
        pin: Some(InterruptPin::Int2),
    };

    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the accelerometer output data rate.
    #[must_use]
    pub const fn with_odr(mut self, odr: AccelOutputDataRate) -> Self {
        self.odr = odr;
        self
    }

    /// Sets the accelerometer full-scale range.
    #[must_use]
    pub const fn with_range(mut self, range: AccelRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the axes enabled for tap detection.
    #[must_use]
    pub const fn with_axes(mut self, axes: TapAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the per-axis thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: TapThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the timing windows.
    #[must_use]
    pub const fn with_timing(mut self, timing: TapTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Sets the detection mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: TapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Routes tap events to `pin`.
    #[must_use]
    pub const fn with_pin(mut self, pin: InterruptPin) -> Self {
        self.pin = Some(pin);
        self
    }

    /// Leaves interrupt routing untouched (status polling only).
    #[must_use]
    pub const fn without_pin(mut self) -> Self {
        self.pin = None;
        self
    }

    /// Sets the I3C mode.
    #[must_use]
    pub const fn with_i3c(mut self, i3c: I3cMode) -> Self {
        self.i3c = i3c;
        self
    }

    /// Checks that every field fits its register width.
    pub const fn validate(&self) -> Result<(), Error> {
        if !self.thresholds.is_valid() || !self.timing.is_valid() {
            return Err(Error::InvalidData);
        }
        Ok(())
    }

    /// Tap threshold of the X axis in milli-g for the configured range.
    pub const fn threshold_x_mg(&self) -> u32 {
        crate::tap::threshold_mg(self.thresholds.x, self.range)
    }
}

impl Default for TapDetectConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_evaluation_setup() {
        let config = TapDetectConfig::default();
        assert_eq!(config.odr, AccelOutputDataRate::Hz416);
        assert_eq!(config.range, AccelRange::G2);
        assert_eq!(config.thresholds, TapThresholds::uniform(8));
        assert_eq!(config.timing, TapTiming::new(7, 3, 3));
        assert_eq!(config.mode, TapMode::SingleAndDouble);
        assert_eq!(config.pin, Some(InterruptPin::Int2));
        assert_eq!(config.threshold_x_mg(), 500);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_wide_fields() {
        let config = TapDetectConfig::new().with_thresholds(TapThresholds::new(8, 32, 8));
        assert_eq!(config.validate(), Err(Error::InvalidData));

        let config = TapDetectConfig::new().with_timing(TapTiming::new(16, 0, 0));
        assert_eq!(config.validate(), Err(Error::InvalidData));
    }
}
