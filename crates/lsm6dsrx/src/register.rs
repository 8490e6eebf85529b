//! LSM6DSRX register definitions.
//!
//! Only the user bank registers touched by tap detection and its status
//! readout are listed, plus their bit masks.

#![allow(dead_code)] // Bit masks mirror the datasheet; not every flag is consumed.

/// LSM6DSRX register addresses (user bank).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Embedded functions / sensor hub bank access.
    FuncCfgAccess = 0x01,
    /// INT1 pin control.
    Int1Ctrl = 0x0D,
    /// INT2 pin control.
    Int2Ctrl = 0x0E,
    /// Device identifier register.
    WhoAmI = 0x0F,
    /// Accelerometer control (ODR, full scale).
    Ctrl1Xl = 0x10,
    /// Gyroscope control.
    Ctrl2G = 0x11,
    /// Control register 3 (reset, auto-increment).
    Ctrl3C = 0x12,
    /// Control register 9 (DEN, I3C).
    Ctrl9Xl = 0x18,
    /// Source register for all interrupts.
    AllIntSrc = 0x1A,
    /// Wake-up interrupt source.
    WakeUpSrc = 0x1B,
    /// Tap source.
    TapSrc = 0x1C,
    /// Portrait/landscape/face-up/face-down source.
    D6dSrc = 0x1D,
    /// Data-ready status.
    StatusReg = 0x1E,
    /// Tap enable, latch mode.
    TapCfg0 = 0x56,
    /// X threshold, axis priority.
    TapCfg1 = 0x57,
    /// Interrupt enable, Y threshold.
    TapCfg2 = 0x58,
    /// Z threshold, 6D threshold.
    TapThs6d = 0x59,
    /// Tap duration, quiet and shock windows.
    IntDur2 = 0x5A,
    /// Wake-up threshold, single/double tap selection.
    WakeUpThs = 0x5B,
    /// Wake-up and sleep duration.
    WakeUpDur = 0x5C,
    /// Free-fall configuration.
    FreeFall = 0x5D,
    /// INT1 functions routing.
    Md1Cfg = 0x5E,
    /// INT2 functions routing.
    Md2Cfg = 0x5F,
    /// I3C bus available time selection.
    I3cBusAvb = 0x62,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected values for WHO_AM_I.
pub mod who_am_i {
    /// Expected WHO_AM_I register value.
    pub const EXPECTED: u8 = 0x6B;
}

/// CTRL1_XL register bits.
pub mod ctrl1_xl {
    /// Accelerometer output data rate mask.
    pub const ODR_XL_MASK: u8 = 0b1111_0000;
    /// Accelerometer output data rate shift.
    pub const ODR_XL_SHIFT: u8 = 4;
    /// Accelerometer full-scale mask.
    pub const FS_XL_MASK: u8 = 0b0000_1100;
    /// Accelerometer full-scale shift.
    pub const FS_XL_SHIFT: u8 = 2;
    /// Second low-pass filter enable.
    pub const LPF2_XL_EN: u8 = 0b0000_0010;
}

/// CTRL3_C register bits.
pub mod ctrl3_c {
    /// Reboot memory content.
    pub const BOOT: u8 = 0b1000_0000;
    /// Block data update.
    pub const BDU: u8 = 0b0100_0000;
    /// Interrupt active low.
    pub const H_LACTIVE: u8 = 0b0010_0000;
    /// Interrupt pins open drain.
    pub const PP_OD: u8 = 0b0001_0000;
    /// SPI 3-wire mode.
    pub const SIM: u8 = 0b0000_1000;
    /// Register address auto-increment.
    pub const IF_INC: u8 = 0b0000_0100;
    /// Software reset (self-clearing).
    pub const SW_RESET: u8 = 0b0000_0001;
}

/// CTRL9_XL register bits.
pub mod ctrl9_xl {
    /// Disable the MIPI I3C interface.
    pub const I3C_DISABLE: u8 = 0b0000_0010;
}

/// I3C_BUS_AVB register bits.
pub mod i3c_bus_avb {
    /// Bus available time selection mask.
    pub const BUS_AVB_SEL_MASK: u8 = 0b0001_1000;
    /// Bus available time selection shift.
    pub const BUS_AVB_SEL_SHIFT: u8 = 3;
    /// Disable INT1 pull-down.
    pub const PD_DIS_INT1: u8 = 0b0000_0001;
}

/// ALL_INT_SRC register bits.
pub mod all_int_src {
    /// Timestamp end count reached.
    pub const TIMESTAMP_ENDCOUNT: u8 = 0b1000_0000;
    /// Activity/inactivity change.
    pub const SLEEP_CHANGE_IA: u8 = 0b0010_0000;
    /// Orientation change.
    pub const D6D_IA: u8 = 0b0001_0000;
    /// Double tap.
    pub const DOUBLE_TAP: u8 = 0b0000_1000;
    /// Single tap.
    pub const SINGLE_TAP: u8 = 0b0000_0100;
    /// Wake-up.
    pub const WU_IA: u8 = 0b0000_0010;
    /// Free fall.
    pub const FF_IA: u8 = 0b0000_0001;
}

/// TAP_SRC register bits.
pub mod tap_src {
    /// Tap event detected.
    pub const TAP_IA: u8 = 0b0100_0000;
    /// Single tap detected.
    pub const SINGLE_TAP: u8 = 0b0010_0000;
    /// Double tap detected.
    pub const DOUBLE_TAP: u8 = 0b0001_0000;
    /// Sign of the acceleration that triggered the tap (1 = negative).
    pub const TAP_SIGN: u8 = 0b0000_1000;
    /// Tap on X.
    pub const X_TAP: u8 = 0b0000_0100;
    /// Tap on Y.
    pub const Y_TAP: u8 = 0b0000_0010;
    /// Tap on Z.
    pub const Z_TAP: u8 = 0b0000_0001;
}

/// STATUS_REG register bits.
pub mod status_reg {
    /// Temperature data available.
    pub const TDA: u8 = 0b0000_0100;
    /// Gyroscope data available.
    pub const GDA: u8 = 0b0000_0010;
    /// Accelerometer data available.
    pub const XLDA: u8 = 0b0000_0001;
}

/// TAP_CFG0 register bits.
pub mod tap_cfg0 {
    /// Clear latched interrupts on status read.
    pub const INT_CLR_ON_READ: u8 = 0b0100_0000;
    /// Enable tap on X.
    pub const TAP_X_EN: u8 = 0b0000_1000;
    /// Enable tap on Y.
    pub const TAP_Y_EN: u8 = 0b0000_0100;
    /// Enable tap on Z.
    pub const TAP_Z_EN: u8 = 0b0000_0010;
    /// Latched interrupt.
    pub const LIR: u8 = 0b0000_0001;
}

/// Tap threshold field (TAP_CFG1, TAP_CFG2, TAP_THS_6D low bits).
pub mod tap_ths {
    /// Threshold mask, shared by all three axis registers.
    pub const MASK: u8 = 0b0001_1111;
    /// Largest threshold code.
    pub const MAX: u8 = 31;
}

/// TAP_CFG2 register bits.
pub mod tap_cfg2 {
    /// Enable basic interrupts (6D/4D, free fall, wake-up, tap, inactivity).
    pub const INTERRUPTS_ENABLE: u8 = 0b1000_0000;
}

/// INT_DUR2 register bits.
pub mod int_dur2 {
    /// Double tap maximum gap mask.
    pub const DUR_MASK: u8 = 0b1111_0000;
    /// Double tap maximum gap shift.
    pub const DUR_SHIFT: u8 = 4;
    /// Largest duration code.
    pub const DUR_MAX: u8 = 15;
    /// Quiet window mask.
    pub const QUIET_MASK: u8 = 0b0000_1100;
    /// Quiet window shift.
    pub const QUIET_SHIFT: u8 = 2;
    /// Largest quiet code.
    pub const QUIET_MAX: u8 = 3;
    /// Shock window mask.
    pub const SHOCK_MASK: u8 = 0b0000_0011;
    /// Largest shock code.
    pub const SHOCK_MAX: u8 = 3;
}

/// WAKE_UP_THS register bits.
pub mod wake_up_ths {
    /// Enable double tap in addition to single tap.
    pub const SINGLE_DOUBLE_TAP: u8 = 0b1000_0000;
}

/// MD1_CFG / MD2_CFG register bits (same layout on both pins).
pub mod md_cfg {
    /// Activity/inactivity change routing.
    pub const SLEEP_CHANGE: u8 = 0b1000_0000;
    /// Single tap routing.
    pub const SINGLE_TAP: u8 = 0b0100_0000;
    /// Wake-up routing.
    pub const WU: u8 = 0b0010_0000;
    /// Free-fall routing.
    pub const FF: u8 = 0b0001_0000;
    /// Double tap routing.
    pub const DOUBLE_TAP: u8 = 0b0000_1000;
    /// 6D routing.
    pub const D6D: u8 = 0b0000_0100;
    /// Embedded functions routing.
    pub const EMB_FUNC: u8 = 0b0000_0010;
    /// Sensor hub end-of-communication (INT1) or timestamp overflow (INT2).
    pub const AUX: u8 = 0b0000_0001;
}
