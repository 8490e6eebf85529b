//! I2C address definitions for the LSM6DSRX.

/// LSM6DSRX I2C addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lsm6dsrxAddress {
    /// Primary address: 0x6A (SDO/SA0 = low).
    Primary,
    /// Secondary address: 0x6B (SDO/SA0 = high).
    Secondary,
}

impl Lsm6dsrxAddress {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Primary => 0x6A,
            Self::Secondary => 0x6B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(Lsm6dsrxAddress::Primary.addr(), 0x6A);
        assert_eq!(Lsm6dsrxAddress::Secondary.addr(), 0x6B);
    }
}
