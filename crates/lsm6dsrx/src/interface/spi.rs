//! SPI interface adapter for the LSM6DSRX.
//!
//! Chip-select framing is left to the [`SpiDevice`] implementation.

use embedded_hal_async::spi::{Operation, SpiDevice};

use super::{Interface, sealed};
use crate::error::Error;

/// SPI register interface (4-wire).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new SPI interface with the given device.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

const SPI_READ_MASK: u8 = 0x80;

const fn spi_addr_read(reg: u8) -> u8 {
    (reg & 0x7F) | SPI_READ_MASK
}

const fn spi_addr_write(reg: u8) -> u8 {
    reg & 0x7F
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        self.read_regs(reg, &mut buffer).await?;
        Ok(buffer[0])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        let addr_buf = [spi_addr_read(reg)];
        let mut ops = [Operation::Write(&addr_buf), Operation::Read(buffer)];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let buffer = [spi_addr_write(reg), value];
        self.spi.write(&buffer).await.map_err(|_| Error::Bus)
    }
}

impl<SPI> sealed::Sealed for SpiInterface<SPI> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spi_address_sets_read_bit() {
        assert_eq!(spi_addr_read(0x1C), 0x9C);
        assert_eq!(spi_addr_read(0x9C), 0x9C);
        assert_eq!(spi_addr_write(0x9C), 0x1C);
    }
}
