use crate::register::ctrl1_xl;

/// Accelerometer full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// +/-2 g range.
    G2,
    /// +/-4 g range.
    G4,
    /// +/-8 g range.
    G8,
    /// +/-16 g range.
    G16,
}

impl AccelRange {
    /// Returns the full-scale range in g.
    pub const fn g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Returns the CTRL1_XL.FS_XL bits (unshifted).
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G16 => 0b01,
            Self::G4 => 0b10,
            Self::G8 => 0b11,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G16,
            0b10 => Self::G4,
            _ => Self::G8,
        }
    }

    pub(crate) const fn ctrl1_xl_field(self) -> u8 {
        (self.bits() << ctrl1_xl::FS_XL_SHIFT) & ctrl1_xl::FS_XL_MASK
    }
}

/// Accelerometer output data rate selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOutputDataRate {
    /// Accelerometer powered down.
    Off,
    /// 1.6 Hz (low-power mode only).
    Hz1_6,
    /// 12.5 Hz.
    Hz12_5,
    /// 26 Hz.
    Hz26,
    /// 52 Hz.
    Hz52,
    /// 104 Hz.
    Hz104,
    /// 208 Hz.
    Hz208,
    /// 416 Hz (listed as 417 Hz in some vendor tables).
    Hz416,
    /// 833 Hz.
    Hz833,
    /// 1.66 kHz.
    Hz1666,
    /// 3.33 kHz.
    Hz3333,
    /// 6.66 kHz.
    Hz6666,
}

impl AccelOutputDataRate {
    /// Returns the output data rate in milli-hertz (0 when powered down).
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::Hz1_6 => 1_600,
            Self::Hz12_5 => 12_500,
            Self::Hz26 => 26_000,
            Self::Hz52 => 52_000,
            Self::Hz104 => 104_000,
            Self::Hz208 => 208_000,
            Self::Hz416 => 416_000,
            Self::Hz833 => 833_000,
            Self::Hz1666 => 1_666_000,
            Self::Hz3333 => 3_333_000,
            Self::Hz6666 => 6_666_000,
        }
    }

    /// Returns the CTRL1_XL.ODR_XL bits (unshifted).
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::Off => 0b0000,
            Self::Hz12_5 => 0b0001,
            Self::Hz26 => 0b0010,
            Self::Hz52 => 0b0011,
            Self::Hz104 => 0b0100,
            Self::Hz208 => 0b0101,
            Self::Hz416 => 0b0110,
            Self::Hz833 => 0b0111,
            Self::Hz1666 => 0b1000,
            Self::Hz3333 => 0b1001,
            Self::Hz6666 => 0b1010,
            Self::Hz1_6 => 0b1011,
        }
    }

    /// Decodes CTRL1_XL.ODR_XL bits. Reserved codes map to `None`.
    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits & 0x0F {
            0b0000 => Self::Off,
            0b0001 => Self::Hz12_5,
            0b0010 => Self::Hz26,
            0b0011 => Self::Hz52,
            0b0100 => Self::Hz104,
            0b0101 => Self::Hz208,
            0b0110 => Self::Hz416,
            0b0111 => Self::Hz833,
            0b1000 => Self::Hz1666,
            0b1001 => Self::Hz3333,
            0b1010 => Self::Hz6666,
            0b1011 => Self::Hz1_6,
            _ => return None,
        })
    }

    pub(crate) const fn ctrl1_xl_field(self) -> u8 {
        (self.bits() << ctrl1_xl::ODR_XL_SHIFT) & ctrl1_xl::ODR_XL_MASK
    }
}

/// I3C bus available time selection, applied together with the I3C enable bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I3cMode {
    /// I3C disabled. Required when the bus is plain I2C or SPI.
    Disabled,
    /// I3C enabled, bus available time 50 us.
    Enabled50us,
    /// I3C enabled, bus available time 2 us.
    Enabled2us,
    /// I3C enabled, bus available time 1 ms.
    Enabled1ms,
    /// I3C enabled, bus available time 25 ms.
    Enabled25ms,
}

impl I3cMode {
    pub(crate) const fn disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    pub(crate) const fn bus_avb_sel(self) -> u8 {
        match self {
            Self::Disabled | Self::Enabled50us => 0b00,
            Self::Enabled2us => 0b01,
            Self::Enabled1ms => 0b10,
            Self::Enabled25ms => 0b11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bits_follow_register_order() {
        for range in [AccelRange::G2, AccelRange::G4, AccelRange::G8, AccelRange::G16] {
            assert_eq!(AccelRange::from_bits(range.bits()), range);
        }
        assert_eq!(AccelRange::G16.ctrl1_xl_field(), 0b0000_0100);
        assert_eq!(AccelRange::G8.ctrl1_xl_field(), 0b0000_1100);
    }

    #[test]
    fn odr_416_hz_encodes_as_0110() {
        assert_eq!(AccelOutputDataRate::Hz416.ctrl1_xl_field(), 0b0110_0000);
        assert_eq!(AccelOutputDataRate::from_bits(0b0110), Some(AccelOutputDataRate::Hz416));
        assert_eq!(AccelOutputDataRate::from_bits(0b1100), None);
    }
}
