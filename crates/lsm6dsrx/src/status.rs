//! Interrupt source and status decoding (ALL_INT_SRC .. STATUS_REG).

use crate::register::{all_int_src, status_reg, tap_src};

/// Number of bytes read for an [`AllSources`] snapshot.
pub(crate) const ALL_SOURCES_LEN: usize = 5;

/// Axis reported by a tap event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapAxis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl TapAxis {
    /// Lower-case axis name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Sign of the acceleration that triggered a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapSign {
    /// TAP_SIGN = 0.
    Positive,
    /// TAP_SIGN = 1.
    Negative,
}

impl TapSign {
    /// Lower-case sign name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Decoded TAP_SRC register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapSource {
    /// A tap event was detected.
    pub tap_ia: bool,
    /// Single tap flag.
    pub single_tap: bool,
    /// Double tap flag.
    pub double_tap: bool,
    /// Sign flag (true = negative).
    pub tap_sign: bool,
    /// X axis involved.
    pub x_tap: bool,
    /// Y axis involved.
    pub y_tap: bool,
    /// Z axis involved.
    pub z_tap: bool,
}

impl TapSource {
    pub(crate) const fn from_reg(value: u8) -> Self {
        Self {
            tap_ia: (value & tap_src::TAP_IA) != 0,
            single_tap: (value & tap_src::SINGLE_TAP) != 0,
            double_tap: (value & tap_src::DOUBLE_TAP) != 0,
            tap_sign: (value & tap_src::TAP_SIGN) != 0,
            x_tap: (value & tap_src::X_TAP) != 0,
            y_tap: (value & tap_src::Y_TAP) != 0,
            z_tap: (value & tap_src::Z_TAP) != 0,
        }
    }

    /// Axis the tap is attributed to: X, then Y, otherwise Z.
    ///
    /// When several axis flags are set only the first match is reported.
    pub const fn axis(self) -> TapAxis {
        if self.x_tap {
            TapAxis::X
        } else if self.y_tap {
            TapAxis::Y
        } else {
            TapAxis::Z
        }
    }

    /// Sign of the tap.
    pub const fn sign(self) -> TapSign {
        if self.tap_sign {
            TapSign::Negative
        } else {
            TapSign::Positive
        }
    }
}

/// Decoded ALL_INT_SRC register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllIntSource {
    /// Timestamp end count reached.
    pub timestamp_endcount: bool,
    /// Activity/inactivity change.
    pub sleep_change: bool,
    /// 6D orientation change.
    pub six_d: bool,
    /// Double tap.
    pub double_tap: bool,
    /// Single tap.
    pub single_tap: bool,
    /// Wake-up.
    pub wake_up: bool,
    /// Free fall.
    pub free_fall: bool,
}

impl AllIntSource {
    pub(crate) const fn from_reg(value: u8) -> Self {
        Self {
            timestamp_endcount: (value & all_int_src::TIMESTAMP_ENDCOUNT) != 0,
            sleep_change: (value & all_int_src::SLEEP_CHANGE_IA) != 0,
            six_d: (value & all_int_src::D6D_IA) != 0,
            double_tap: (value & all_int_src::DOUBLE_TAP) != 0,
            single_tap: (value & all_int_src::SINGLE_TAP) != 0,
            wake_up: (value & all_int_src::WU_IA) != 0,
            free_fall: (value & all_int_src::FF_IA) != 0,
        }
    }
}

/// Data-ready flags from STATUS_REG.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    /// Accelerometer sample available.
    pub accel_ready: bool,
    /// Gyroscope sample available.
    pub gyro_ready: bool,
    /// Temperature sample available.
    pub temp_ready: bool,
}

impl DataStatus {
    pub(crate) const fn from_reg(value: u8) -> Self {
        Self {
            accel_ready: (value & status_reg::XLDA) != 0,
            gyro_ready: (value & status_reg::GDA) != 0,
            temp_ready: (value & status_reg::TDA) != 0,
        }
    }
}

/// One snapshot of every interrupt source, read in a single burst.
///
/// Valid only for the poll that fetched it; latched sources clear on read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllSources {
    /// ALL_INT_SRC.
    pub all_int: AllIntSource,
    /// Raw WAKE_UP_SRC.
    pub wake_up_src: u8,
    /// TAP_SRC.
    pub tap: TapSource,
    /// Raw D6D_SRC.
    pub d6d_src: u8,
    /// STATUS_REG.
    pub status: DataStatus,
}

impl AllSources {
    pub(crate) const fn from_regs(regs: [u8; ALL_SOURCES_LEN]) -> Self {
        Self {
            all_int: AllIntSource::from_reg(regs[0]),
            wake_up_src: regs[1],
            tap: TapSource::from_reg(regs[2]),
            d6d_src: regs[3],
            status: DataStatus::from_reg(regs[4]),
        }
    }
}
