//! LSM6DSRX driver implementation.
//!
//! This module exposes the register operations needed for tap detection
//! on top of the device core.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use embedded_hal_async::spi::SpiDevice;

use crate::config::{AccelOutputDataRate, AccelRange, I3cMode, TapDetectConfig};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::Interface;
use crate::interface::{I2cConfig, I2cInterface, SpiInterface};
use crate::interrupt::{InterruptPin, InterruptRoute};
use crate::status::AllSources;
use crate::tap::{TapAxes, TapMode, TapThresholds, TapTiming};

/// LSM6DSRX 6-axis IMU driver.
pub struct Lsm6dsrx<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the LSM6DSRX driver.
pub type Lsm6dsrxI2c<I2C> = Lsm6dsrx<I2cInterface<I2C>>;
/// SPI type alias for the LSM6DSRX driver.
pub type Lsm6dsrxSpi<SPI> = Lsm6dsrx<SpiInterface<SPI>>;

impl<I2C> Lsm6dsrx<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver on the primary address.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::with_i2c_config(i2c, I2cConfig::default())
    }

    /// Creates a new I2C-based driver with a custom address.
    pub fn with_i2c_config(i2c: I2C, i2c_config: I2cConfig) -> Self {
        let interface = I2cInterface::new(i2c, i2c_config.address);
        Self {
            core: DeviceCore::new(interface),
        }
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<SPI> Lsm6dsrx<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver.
    pub fn new_spi(spi: SPI) -> Self {
        Self {
            core: DeviceCore::new(SpiInterface::new(spi)),
        }
    }

    /// Releases the SPI device, consuming the driver.
    pub fn release(self) -> SPI {
        self.core.release().release()
    }
}

impl<I> Lsm6dsrx<I>
where
    I: Interface,
{
    /// Boots the device and applies `config`.
    ///
    /// Waits the 10 ms boot time, checks WHO_AM_I, performs a software reset
    /// and then programs the tap engine. Returns [`Error::WrongDevice`]
    /// without writing anything if the identity check fails.
    pub async fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
        config: &TapDetectConfig,
    ) -> Result<(), Error> {
        self.core.init(delay, config).await
    }

    /// Boot time, identity check and software reset, without configuration.
    pub async fn boot<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.boot(delay).await
    }

    /// Applies a complete tap configuration, field by field.
    ///
    /// Tap events are added to the configured pin without clearing the
    /// events it already routes.
    pub async fn configure_tap(&mut self, config: &TapDetectConfig) -> Result<(), Error> {
        self.core.configure_tap(config).await
    }

    /// Reads WHO_AM_I.
    pub async fn device_id(&mut self) -> Result<u8, Error> {
        self.core.device_id().await
    }

    /// Verifies the device WHO_AM_I register.
    pub async fn verify_device(&mut self) -> Result<(), Error> {
        self.core.verify_device().await
    }

    /// Sets or clears CTRL3_C.SW_RESET.
    pub async fn set_reset(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_reset(enable).await
    }

    /// Returns true while a software reset is in progress.
    pub async fn reset(&mut self) -> Result<bool, Error> {
        self.core.reset().await
    }

    /// Polls SW_RESET until it clears. Returns [`Error::NotReady`] after ~100 ms.
    pub async fn wait_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.wait_reset(delay).await
    }

    /// Enables or disables the I3C interface.
    pub async fn set_i3c_mode(&mut self, mode: I3cMode) -> Result<(), Error> {
        self.core.set_i3c_mode(mode).await
    }

    /// Sets the accelerometer output data rate.
    pub async fn set_accel_data_rate(&mut self, odr: AccelOutputDataRate) -> Result<(), Error> {
        self.core.set_accel_data_rate(odr).await
    }

    /// Reads the accelerometer output data rate.
    pub async fn accel_data_rate(&mut self) -> Result<AccelOutputDataRate, Error> {
        self.core.accel_data_rate().await
    }

    /// Sets the accelerometer full-scale range.
    pub async fn set_accel_full_scale(&mut self, range: AccelRange) -> Result<(), Error> {
        self.core.set_accel_full_scale(range).await
    }

    /// Reads the accelerometer full-scale range.
    pub async fn accel_full_scale(&mut self) -> Result<AccelRange, Error> {
        self.core.accel_full_scale().await
    }

    /// Enables tap recognition on X.
    pub async fn set_tap_detection_on_x(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_tap_detection_on_x(enable).await
    }

    /// Enables tap recognition on Y.
    pub async fn set_tap_detection_on_y(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_tap_detection_on_y(enable).await
    }

    /// Enables tap recognition on Z.
    pub async fn set_tap_detection_on_z(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_tap_detection_on_z(enable).await
    }

    /// Reads the axes enabled for tap recognition.
    pub async fn tap_axes(&mut self) -> Result<TapAxes, Error> {
        self.core.tap_axes().await
    }

    /// Sets the X threshold code (0..=31, 1 LSB = FS / 32).
    pub async fn set_tap_threshold_x(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_tap_threshold_x(code).await
    }

    /// Sets the Y threshold code (0..=31).
    pub async fn set_tap_threshold_y(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_tap_threshold_y(code).await
    }

    /// Sets the Z threshold code (0..=31).
    pub async fn set_tap_threshold_z(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_tap_threshold_z(code).await
    }

    /// Reads the per-axis threshold codes.
    pub async fn tap_thresholds(&mut self) -> Result<TapThresholds, Error> {
        self.core.tap_thresholds().await
    }

    /// Sets the double tap gap (0..=15).
    pub async fn set_tap_duration(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_tap_duration(code).await
    }

    /// Sets the quiet window (0..=3).
    pub async fn set_tap_quiet(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_tap_quiet(code).await
    }

    /// Sets the shock window (0..=3).
    pub async fn set_tap_shock(&mut self, code: u8) -> Result<(), Error> {
        self.core.set_tap_shock(code).await
    }

    /// Reads the timing fields.
    pub async fn tap_timing(&mut self) -> Result<TapTiming, Error> {
        self.core.tap_timing().await
    }

    /// Selects single-only or single-and-double detection.
    pub async fn set_tap_mode(&mut self, mode: TapMode) -> Result<(), Error> {
        self.core.set_tap_mode(mode).await
    }

    /// Reads the detection mode.
    pub async fn tap_mode(&mut self) -> Result<TapMode, Error> {
        self.core.tap_mode().await
    }

    /// Reads the INT1 routing.
    pub async fn pin_int1_route(&mut self) -> Result<InterruptRoute, Error> {
        self.core.pin_route(InterruptPin::Int1).await
    }

    /// Writes the INT1 routing and updates TAP_CFG2.INTERRUPTS_ENABLE.
    pub async fn set_pin_int1_route(&mut self, route: InterruptRoute) -> Result<(), Error> {
        self.core.set_pin_route(InterruptPin::Int1, route).await
    }

    /// Reads the INT2 routing.
    pub async fn pin_int2_route(&mut self) -> Result<InterruptRoute, Error> {
        self.core.pin_route(InterruptPin::Int2).await
    }

    /// Writes the INT2 routing and updates TAP_CFG2.INTERRUPTS_ENABLE.
    pub async fn set_pin_int2_route(&mut self, route: InterruptRoute) -> Result<(), Error> {
        self.core.set_pin_route(InterruptPin::Int2, route).await
    }

    /// Reads every interrupt source in one burst.
    ///
    /// Note: latched sources clear when read.
    pub async fn all_sources(&mut self) -> Result<AllSources, Error> {
        self.core.all_sources().await
    }
}

#[cfg(test)]
impl<I> Lsm6dsrx<I>
where
    I: Interface,
{
    pub(crate) const fn from_interface(interface: I) -> Self {
        Self {
            core: DeviceCore::new(interface),
        }
    }

    pub(crate) fn release_interface(self) -> I {
        self.core.release()
    }
}
