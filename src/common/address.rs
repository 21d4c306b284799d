// src/common/address.rs

use core::fmt;

/// Fixed 7-bit two-wire address of the SHT21 family.
pub const DEVICE_ADDRESS: u8 = 0x40;

/// Transfer direction carried in the low bit of the address byte.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Write = 0,
    Read = 1,
}

impl Direction {
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 0x01 == 0 {
            Direction::Write
        } else {
            Direction::Read
        }
    }
}

/// Builds the byte that goes on the wire after a start condition:
/// the 7-bit address shifted left by one with the direction in bit 0.
#[inline]
pub const fn address_byte(address: u8, direction: Direction) -> u8 {
    ((address & 0x7F) << 1) | direction.bit()
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Write => write!(f, "W"),
            Direction::Read => write!(f, "R"),
        }
    }
}
