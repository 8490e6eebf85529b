//! Tap detection parameters (enables, thresholds, timing windows, mode).

use crate::config::{AccelOutputDataRate, AccelRange};
use crate::register::{int_dur2, tap_cfg0, tap_ths};

/// Axes participating in tap recognition (TAP_CFG0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapAxes {
    /// Enable taps on X.
    pub x: bool,
    /// Enable taps on Y.
    pub y: bool,
    /// Enable taps on Z.
    pub z: bool,
}

impl TapAxes {
    /// All axes enabled.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    /// No axis enabled.
    pub const NONE: Self = Self {
        x: false,
        y: false,
        z: false,
    };

    pub(crate) const fn from_tap_cfg0(value: u8) -> Self {
        Self {
            x: (value & tap_cfg0::TAP_X_EN) != 0,
            y: (value & tap_cfg0::TAP_Y_EN) != 0,
            z: (value & tap_cfg0::TAP_Z_EN) != 0,
        }
    }
}

/// Per-axis tap thresholds as 5-bit codes (1 LSB = full scale / 32).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapThresholds {
    /// X threshold code (TAP_CFG1).
    pub x: u8,
    /// Y threshold code (TAP_CFG2).
    pub y: u8,
    /// Z threshold code (TAP_THS_6D).
    pub z: u8,
}

impl TapThresholds {
    /// Creates thresholds from per-axis codes.
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Uses the same code on all axes.
    pub const fn uniform(code: u8) -> Self {
        Self::new(code, code, code)
    }

    pub(crate) const fn is_valid(self) -> bool {
        self.x <= tap_ths::MAX && self.y <= tap_ths::MAX && self.z <= tap_ths::MAX
    }
}

/// Converts a threshold code into milli-g for the given range.
pub const fn threshold_mg(code: u8, range: AccelRange) -> u32 {
    (code as u32) * (range.g() as u32) * 1000 / 32
}

/// Tap timing fields (INT_DUR2).
///
/// All three are expressed in ODR periods: duration in steps of 32
/// (0 means 16), shock in steps of 8 (0 means 4), quiet in steps of 4
/// (0 means 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapTiming {
    /// Maximum gap between the two taps of a double tap (4 bits).
    pub duration: u8,
    /// Quiet time after the first tap (2 bits).
    pub quiet: u8,
    /// Maximum duration of an over-threshold event (2 bits).
    pub shock: u8,
}

impl TapTiming {
    /// Default timing: duration 7, quiet 3, shock 3.
    pub const DEFAULT: Self = Self::new(7, 3, 3);

    /// Creates a timing configuration.
    pub const fn new(duration: u8, quiet: u8, shock: u8) -> Self {
        Self {
            duration,
            quiet,
            shock,
        }
    }

    pub(crate) const fn is_valid(self) -> bool {
        self.duration <= int_dur2::DUR_MAX
            && self.quiet <= int_dur2::QUIET_MAX
            && self.shock <= int_dur2::SHOCK_MAX
    }

    /// Converts the fields into time windows for `odr`.
    ///
    /// Returns `None` when the accelerometer is powered down.
    pub const fn windows(self, odr: AccelOutputDataRate) -> Option<TapWindows> {
        let hz_milli = odr.hz_milli() as u64;
        if hz_milli == 0 {
            return None;
        }
        let duration_ticks = if self.duration == 0 { 16 } else { self.duration as u64 * 32 };
        let shock_ticks = if self.shock == 0 { 4 } else { self.shock as u64 * 8 };
        let quiet_ticks = if self.quiet == 0 { 2 } else { self.quiet as u64 * 4 };
        Some(TapWindows {
            duration_us: (duration_ticks * 1_000_000_000 / hz_milli) as u32,
            shock_us: (shock_ticks * 1_000_000_000 / hz_milli) as u32,
            quiet_us: (quiet_ticks * 1_000_000_000 / hz_milli) as u32,
        })
    }
}

impl Default for TapTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tap timing windows in microseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapWindows {
    /// Maximum double tap gap.
    pub duration_us: u32,
    /// Shock window.
    pub shock_us: u32,
    /// Quiet window.
    pub quiet_us: u32,
}

/// Tap recognition mode (WAKE_UP_THS.SINGLE_DOUBLE_TAP).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapMode {
    /// Only single taps are recognized.
    SingleOnly,
    /// Single and double taps are recognized.
    SingleAndDouble,
}
