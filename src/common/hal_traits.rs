// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the blocking waits the SHT21 protocol requires.
///
/// Note: `embedded_hal::delay::DelayNs` covers this; see the `impl-generic-hal` adapter.
pub trait Sht21Timer {
    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Coarse classification of a bus error, used to pick the [`Sht21Error`](super::Sht21Error) variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFault {
    /// Address or data byte was not acknowledged.
    NoAcknowledge,
    /// The bus implementation gave up waiting.
    Timeout,
    /// Anything else (arbitration loss, overrun, ...).
    Other,
}

/// Abstraction for blocking two-wire transfers to a 7-bit address.
///
/// Implementations own the direction bit: `transmit` sends a write address byte,
/// `receive` a read address byte. Retries and clock stretching are theirs to handle.
pub trait Sht21Bus {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Writes `bytes` to the device at `address`.
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Reads exactly `buffer.len()` bytes from the device at `address`.
    fn receive(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Classifies an error returned by `transmit` or `receive`.
    fn fault(error: &Self::Error) -> BusFault;
}
