//! Error type for the LSM6DSRX driver.

/// Error type for LSM6DSRX operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C, SPI, etc.).
    Bus,
    /// WHO_AM_I did not match the LSM6DSRX identifier.
    WrongDevice,
    /// The device did not finish an operation in time (e.g. software reset).
    NotReady,
    /// A register field value is out of range.
    InvalidData,
}
