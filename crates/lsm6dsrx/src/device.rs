//! Device core operations for the LSM6DSRX.

use embedded_hal_async::delay::DelayNs;

use crate::config::{AccelOutputDataRate, AccelRange, I3cMode, TapDetectConfig};
use crate::error::Error;
use crate::interface::Interface;
use crate::interrupt::{InterruptPin, InterruptRoute};
use crate::register::{
    Register, ctrl1_xl, ctrl3_c, ctrl9_xl, i3c_bus_avb, int_dur2, tap_cfg0, tap_cfg2, tap_ths,
    wake_up_ths, who_am_i,
};
use crate::status::{ALL_SOURCES_LEN, AllSources};
use crate::tap::{TapAxes, TapMode, TapThresholds, TapTiming};

/// Power-on boot time before the first register access.
const BOOT_TIME_NS: u32 = 10_000_000;
/// SW_RESET polls before giving up (~100 ms with the delay below).
const RESET_POLL_RETRIES: u16 = 1000;
const RESET_POLL_DELAY_NS: u32 = 100_000;

pub(crate) struct DeviceCore<I> {
    interface: I,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) const fn new(interface: I) -> Self {
        Self { interface }
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    /// Waits the boot time, checks WHO_AM_I, then resets and waits for
    /// SW_RESET to clear. Nothing is written if the identity check fails.
    pub(crate) async fn boot<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        delay.delay_ns(BOOT_TIME_NS).await;
        self.verify_device().await?;
        self.set_reset(true).await?;
        self.wait_reset(delay).await
    }

    pub(crate) async fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
        config: &TapDetectConfig,
    ) -> Result<(), Error> {
        // Catch bad fields before touching the device.
        config.validate()?;
        self.boot(delay).await?;
        self.configure_tap(config).await
    }

    pub(crate) async fn device_id(&mut self) -> Result<u8, Error> {
        self.read_reg(Register::WhoAmI).await
    }

    pub(crate) async fn verify_device(&mut self) -> Result<(), Error> {
        if self.device_id().await? != who_am_i::EXPECTED {
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    pub(crate) async fn set_reset(&mut self, enable: bool) -> Result<(), Error> {
        self.modify_flag(Register::Ctrl3C, ctrl3_c::SW_RESET, enable)
            .await
    }

    pub(crate) async fn reset(&mut self) -> Result<bool, Error> {
        let ctrl3 = self.read_reg(Register::Ctrl3C).await?;
        Ok((ctrl3 & ctrl3_c::SW_RESET) != 0)
    }

    /// Polls SW_RESET until the device clears it.
    pub(crate) async fn wait_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        for _ in 0..RESET_POLL_RETRIES {
            if !self.reset().await? {
                return Ok(());
            }
            delay.delay_ns(RESET_POLL_DELAY_NS).await;
        }
        Err(Error::NotReady)
    }

    pub(crate) async fn set_i3c_mode(&mut self, mode: I3cMode) -> Result<(), Error> {
        self.modify_flag(Register::Ctrl9Xl, ctrl9_xl::I3C_DISABLE, mode.disabled())
            .await?;
        self.modify_reg(
            Register::I3cBusAvb,
            i3c_bus_avb::BUS_AVB_SEL_MASK,
            mode.bus_avb_sel() << i3c_bus_avb::BUS_AVB_SEL_SHIFT,
        )
        .await
    }

    pub(crate) async fn set_accel_data_rate(
        &mut self,
        odr: AccelOutputDataRate,
    ) -> Result<(), Error> {
        self.modify_reg(Register::Ctrl1Xl, ctrl1_xl::ODR_XL_MASK, odr.ctrl1_xl_field())
            .await
    }

    pub(crate) async fn accel_data_rate(&mut self) -> Result<AccelOutputDataRate, Error> {
        let ctrl1 = self.read_reg(Register::Ctrl1Xl).await?;
        AccelOutputDataRate::from_bits(ctrl1 >> ctrl1_xl::ODR_XL_SHIFT).ok_or(Error::InvalidData)
    }

    pub(crate) async fn set_accel_full_scale(&mut self, range: AccelRange) -> Result<(), Error> {
        self.modify_reg(Register::Ctrl1Xl, ctrl1_xl::FS_XL_MASK, range.ctrl1_xl_field())
            .await
    }

    pub(crate) async fn accel_full_scale(&mut self) -> Result<AccelRange, Error> {
        let ctrl1 = self.read_reg(Register::Ctrl1Xl).await?;
        Ok(AccelRange::from_bits(
            (ctrl1 & ctrl1_xl::FS_XL_MASK) >> ctrl1_xl::FS_XL_SHIFT,
        ))
    }

    pub(crate) async fn set_tap_detection_on_x(&mut self, enable: bool) -> Result<(), Error> {
        self.modify_flag(Register::TapCfg0, tap_cfg0::TAP_X_EN, enable)
            .await
    }

    pub(crate) async fn set_tap_detection_on_y(&mut self, enable: bool) -> Result<(), Error> {
        self.modify_flag(Register::TapCfg0, tap_cfg0::TAP_Y_EN, enable)
            .await
    }

    pub(crate) async fn set_tap_detection_on_z(&mut self, enable: bool) -> Result<(), Error> {
        self.modify_flag(Register::TapCfg0, tap_cfg0::TAP_Z_EN, enable)
            .await
    }

    pub(crate) async fn tap_axes(&mut self) -> Result<TapAxes, Error> {
        let cfg0 = self.read_reg(Register::TapCfg0).await?;
        Ok(TapAxes::from_tap_cfg0(cfg0))
    }

    pub(crate) async fn set_tap_threshold_x(&mut self, code: u8) -> Result<(), Error> {
        self.write_threshold(Register::TapCfg1, code).await
    }

    pub(crate) async fn set_tap_threshold_y(&mut self, code: u8) -> Result<(), Error> {
        self.write_threshold(Register::TapCfg2, code).await
    }

    pub(crate) async fn set_tap_threshold_z(&mut self, code: u8) -> Result<(), Error> {
        self.write_threshold(Register::TapThs6d, code).await
    }

    pub(crate) async fn tap_thresholds(&mut self) -> Result<TapThresholds, Error> {
        let x = self.read_reg(Register::TapCfg1).await? & tap_ths::MASK;
        let y = self.read_reg(Register::TapCfg2).await? & tap_ths::MASK;
        let z = self.read_reg(Register::TapThs6d).await? & tap_ths::MASK;
        Ok(TapThresholds::new(x, y, z))
    }

    pub(crate) async fn set_tap_duration(&mut self, code: u8) -> Result<(), Error> {
        if code > int_dur2::DUR_MAX {
            return Err(Error::InvalidData);
        }
        self.modify_reg(Register::IntDur2, int_dur2::DUR_MASK, code << int_dur2::DUR_SHIFT)
            .await
    }

    pub(crate) async fn set_tap_quiet(&mut self, code: u8) -> Result<(), Error> {
        if code > int_dur2::QUIET_MAX {
            return Err(Error::InvalidData);
        }
        self.modify_reg(
            Register::IntDur2,
            int_dur2::QUIET_MASK,
            code << int_dur2::QUIET_SHIFT,
        )
        .await
    }

    pub(crate) async fn set_tap_shock(&mut self, code: u8) -> Result<(), Error> {
        if code > int_dur2::SHOCK_MAX {
            return Err(Error::InvalidData);
        }
        self.modify_reg(Register::IntDur2, int_dur2::SHOCK_MASK, code)
            .await
    }

    pub(crate) async fn tap_timing(&mut self) -> Result<TapTiming, Error> {
        let dur2 = self.read_reg(Register::IntDur2).await?;
        Ok(TapTiming::new(
            (dur2 & int_dur2::DUR_MASK) >> int_dur2::DUR_SHIFT,
            (dur2 & int_dur2::QUIET_MASK) >> int_dur2::QUIET_SHIFT,
            dur2 & int_dur2::SHOCK_MASK,
        ))
    }

    pub(crate) async fn set_tap_mode(&mut self, mode: TapMode) -> Result<(), Error> {
        let double = matches!(mode, TapMode::SingleAndDouble);
        self.modify_flag(Register::WakeUpThs, wake_up_ths::SINGLE_DOUBLE_TAP, double)
            .await
    }

    pub(crate) async fn tap_mode(&mut self) -> Result<TapMode, Error> {
        let ths = self.read_reg(Register::WakeUpThs).await?;
        if (ths & wake_up_ths::SINGLE_DOUBLE_TAP) != 0 {
            Ok(TapMode::SingleAndDouble)
        } else {
            Ok(TapMode::SingleOnly)
        }
    }

    pub(crate) async fn pin_route(&mut self, pin: InterruptPin) -> Result<InterruptRoute, Error> {
        let value = self.read_reg(pin.md_cfg_register()).await?;
        Ok(InterruptRoute::from_reg(value))
    }

    /// Writes the routing for `pin`, then sets or clears
    /// TAP_CFG2.INTERRUPTS_ENABLE depending on what both pins now route.
    pub(crate) async fn set_pin_route(
        &mut self,
        pin: InterruptPin,
        route: InterruptRoute,
    ) -> Result<(), Error> {
        self.write_reg(pin.md_cfg_register(), route.reg_value())
            .await?;
        let other = self.pin_route(pin.other()).await?;
        let enable = route.any_basic() || other.any_basic();
        self.modify_flag(Register::TapCfg2, tap_cfg2::INTERRUPTS_ENABLE, enable)
            .await
    }

    /// Applies the full tap setup in the order the vendor flow uses.
    ///
    /// Routing only adds tap events to the selected pin; bits already set in
    /// its MDx_CFG register are kept.
    pub(crate) async fn configure_tap(&mut self, config: &TapDetectConfig) -> Result<(), Error> {
        config.validate()?;

        self.set_i3c_mode(config.i3c).await?;
        self.set_accel_data_rate(config.odr).await?;
        self.set_accel_full_scale(config.range).await?;

        self.set_tap_detection_on_z(config.axes.z).await?;
        self.set_tap_detection_on_y(config.axes.y).await?;
        self.set_tap_detection_on_x(config.axes.x).await?;

        self.set_tap_threshold_x(config.thresholds.x).await?;
        self.set_tap_threshold_y(config.thresholds.y).await?;
        self.set_tap_threshold_z(config.thresholds.z).await?;

        self.set_tap_duration(config.timing.duration).await?;
        self.set_tap_quiet(config.timing.quiet).await?;
        self.set_tap_shock(config.timing.shock).await?;

        self.set_tap_mode(config.mode).await?;

        if let Some(pin) = config.pin {
            let mut route = self.pin_route(pin).await?;
            route.single_tap = true;
            // Single-only mode leaves an existing double tap route as is.
            if matches!(config.mode, TapMode::SingleAndDouble) {
                route.double_tap = true;
            }
            self.set_pin_route(pin, route).await?;
        }
        Ok(())
    }

    /// Reads ALL_INT_SRC through STATUS_REG in one burst.
    pub(crate) async fn all_sources(&mut self) -> Result<AllSources, Error> {
        let mut regs = [0u8; ALL_SOURCES_LEN];
        self.read_regs(Register::AllIntSrc, &mut regs).await?;
        Ok(AllSources::from_regs(regs))
    }

    async fn write_threshold(&mut self, reg: Register, code: u8) -> Result<(), Error> {
        if code > tap_ths::MAX {
            return Err(Error::InvalidData);
        }
        self.modify_reg(reg, tap_ths::MASK, code).await
    }

    async fn modify_flag(&mut self, reg: Register, mask: u8, enable: bool) -> Result<(), Error> {
        self.modify_reg(reg, mask, if enable { mask } else { 0 })
            .await
    }

    /// Read-modify-write: replaces the bits in `mask` with `bits`.
    pub(crate) async fn modify_reg(
        &mut self,
        reg: Register,
        mask: u8,
        bits: u8,
    ) -> Result<(), Error> {
        let current = self.read_reg(reg).await?;
        let value = (current & !mask) | (bits & mask);
        self.write_reg(reg, value).await
    }

    pub(crate) async fn read_reg(&mut self, reg: Register) -> Result<u8, Error> {
        self.interface.read_reg(reg.addr()).await
    }

    pub(crate) async fn read_regs(
        &mut self,
        reg: Register,
        buffer: &mut [u8],
    ) -> Result<(), Error> {
        self.interface.read_regs(reg.addr(), buffer).await
    }

    pub(crate) async fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        self.interface.write_reg(reg.addr(), value).await
    }
}
