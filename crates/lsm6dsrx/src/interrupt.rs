//! Interrupt pin routing (MD1_CFG / MD2_CFG).

use crate::register::{Register, md_cfg};

/// Interrupt pin selection (device pins).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPin {
    /// Interrupt pin 1.
    Int1,
    /// Interrupt pin 2.
    Int2,
}

impl InterruptPin {
    pub(crate) const fn md_cfg_register(self) -> Register {
        match self {
            Self::Int1 => Register::Md1Cfg,
            Self::Int2 => Register::Md2Cfg,
        }
    }

    pub(crate) const fn other(self) -> Self {
        match self {
            Self::Int1 => Self::Int2,
            Self::Int2 => Self::Int1,
        }
    }
}

/// Event routing for one interrupt pin.
///
/// Read it with `pin_int1_route`/`pin_int2_route`, flip the events of
/// interest and write it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptRoute {
    /// Activity/inactivity change.
    pub sleep_change: bool,
    /// Single tap.
    pub single_tap: bool,
    /// Wake-up.
    pub wake_up: bool,
    /// Free fall.
    pub free_fall: bool,
    /// Double tap.
    pub double_tap: bool,
    /// 6D orientation change.
    pub six_d: bool,
    /// Embedded functions.
    pub emb_func: bool,
    /// Sensor hub end of communication on INT1, timestamp overflow on INT2.
    pub aux: bool,
}

impl InterruptRoute {
    pub(crate) const fn from_reg(value: u8) -> Self {
        Self {
            sleep_change: (value & md_cfg::SLEEP_CHANGE) != 0,
            single_tap: (value & md_cfg::SINGLE_TAP) != 0,
            wake_up: (value & md_cfg::WU) != 0,
            free_fall: (value & md_cfg::FF) != 0,
            double_tap: (value & md_cfg::DOUBLE_TAP) != 0,
            six_d: (value & md_cfg::D6D) != 0,
            emb_func: (value & md_cfg::EMB_FUNC) != 0,
            aux: (value & md_cfg::AUX) != 0,
        }
    }

    pub(crate) const fn reg_value(self) -> u8 {
        let mut value = 0;
        if self.sleep_change {
            value |= md_cfg::SLEEP_CHANGE;
        }
        if self.single_tap {
            value |= md_cfg::SINGLE_TAP;
        }
        if self.wake_up {
            value |= md_cfg::WU;
        }
        if self.free_fall {
            value |= md_cfg::FF;
        }
        if self.double_tap {
            value |= md_cfg::DOUBLE_TAP;
        }
        if self.six_d {
            value |= md_cfg::D6D;
        }
        if self.emb_func {
            value |= md_cfg::EMB_FUNC;
        }
        if self.aux {
            value |= md_cfg::AUX;
        }
        value
    }

    /// Enables or disables both tap events on this pin.
    #[must_use]
    pub const fn with_taps(mut self, single: bool, double: bool) -> Self {
        self.single_tap = single;
        self.double_tap = double;
        self
    }

    /// Returns true if any basic-interrupt event is routed.
    ///
    /// Embedded functions and the aux bit do not need TAP_CFG2.INTERRUPTS_ENABLE.
    pub const fn any_basic(self) -> bool {
        self.sleep_change
            || self.single_tap
            || self.wake_up
            || self.free_fall
            || self.double_tap
            || self.six_d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_round_trips_md_cfg() {
        let value = md_cfg::SINGLE_TAP | md_cfg::DOUBLE_TAP | md_cfg::AUX;
        let route = InterruptRoute::from_reg(value);
        assert!(route.single_tap);
        assert!(route.double_tap);
        assert!(route.aux);
        assert!(!route.wake_up);
        assert_eq!(route.reg_value(), value);
    }

    #[test]
    fn aux_alone_is_not_a_basic_interrupt() {
        let route = InterruptRoute {
            aux: true,
            emb_func: true,
            ..InterruptRoute::default()
        };
        assert!(!route.any_basic());
        assert!(route.with_taps(false, true).any_basic());
    }
}
