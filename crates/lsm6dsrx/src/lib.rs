//! Async `#![no_std]` driver for the
//! [LSM6DSRX](https://www.st.com/en/mems-and-sensors/lsm6dsrx.html) 6-axis IMU
//! from STMicroelectronics, focused on its embedded single/double tap engine.
//!
//! The driver is built on `embedded-hal-async` and works over I2C or SPI.
//! Besides the register level API it ships a small [`TapMonitor`] that polls
//! the interrupt sources and writes one text line per detected tap.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_lsm6dsrx::{I2cConfig, Lsm6dsrxAddress, Lsm6dsrxI2c, TapDetectConfig};
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_lsm6dsrx::Error> {
//! let i2c_config = I2cConfig::new(Lsm6dsrxAddress::Primary.addr());
//! let mut imu: Lsm6dsrxI2c<I2C> = Lsm6dsrxI2c::with_i2c_config(i2c, i2c_config);
//! imu.init(delay, &TapDetectConfig::default()).await?;
//!
//! let sources = imu.all_sources().await?;
//! if sources.tap.double_tap {
//!     // sources.tap.axis(), sources.tap.sign()
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Boot sequence
//!
//! [`Lsm6dsrx::init`] waits the 10 ms boot time, checks WHO_AM_I (0x6B),
//! issues a software reset and polls until it completes. A wrong identity
//! returns [`Error::WrongDevice`] before anything is written.
//!
//! # Tap defaults
//!
//! [`TapDetectConfig::DEFAULT`] programs 416 Hz, ±2 g, all axes enabled,
//! threshold code 8 on every axis (500 mg), DUR = 7, QUIET = 3, SHOCK = 3,
//! single and double tap both enabled and routed to INT2.
//!
//! # Reading sources
//!
//! TAP_SRC and the other source registers are cleared on read when latched
//! mode is used. Read them once per poll with [`Lsm6dsrx::all_sources`] and
//! work from the returned snapshot.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in clippy.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

mod config;
mod device;
mod driver;
mod error;
mod interface;
mod interrupt;
mod monitor;
mod register;
mod status;
mod tap;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Lsm6dsrxAddress;
pub use interface::{I2cConfig, I2cInterface};
pub use interface::SpiInterface;

// Configuration
pub use config::{AccelOutputDataRate, AccelRange, I3cMode, TapDetectConfig};

// Driver
pub use driver::{Lsm6dsrx, Lsm6dsrxI2c, Lsm6dsrxSpi};

// Tap engine
pub use tap::{TapAxes, TapMode, TapThresholds, TapTiming, TapWindows, threshold_mg};

// Sources and routing
pub use error::Error;
pub use interrupt::{InterruptPin, InterruptRoute};
pub use status::{AllIntSource, AllSources, DataStatus, TapAxis, TapSign, TapSource};

// Reporting
pub use monitor::{
    LINE_CAPACITY,
    MonitorConfig,
    MonitorError,
    MonitorStats,
    SerialTx,
    TapEvent,
    TapKind,
    TapMonitor,
    tap_events,
};
