// src/common/error.rs

use super::crc::CrcMismatch;

/// Every failure the driver can report.
///
/// Transport errors are carried unchanged; the bus implementation decides through
/// [`Sht21Bus::fault`](super::hal_traits::Sht21Bus::fault) which variant they land in.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Sht21Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// The sensor did not acknowledge its address or a written byte.
    #[error("No acknowledge from sensor: {0:?}")]
    NoAcknowledge(E),

    /// Any other error from the bus implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The bus implementation gave up waiting.
    #[error("Operation timed out: {0:?}")]
    Timeout(E),

    /// Received checksum does not match the one computed over the data bytes.
    #[error("Checksum mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    /// The heater did not move the readings past the configured thresholds.
    #[error("Self-test failed: temperature rose {temperature_rise} C, humidity dropped {humidity_drop} %RH")]
    SelfTestFailed {
        temperature_rise: f32,
        humidity_drop: f32,
    },
}

/// Payload-free classification of [`Sht21Error`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    NoAcknowledge,
    Bus,
    Timeout,
    ChecksumMismatch,
    SelfTestFailed,
}

impl<E: core::fmt::Debug> Sht21Error<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Sht21Error::NoAcknowledge(_) => ErrorKind::NoAcknowledge,
            Sht21Error::Io(_) => ErrorKind::Bus,
            Sht21Error::Timeout(_) => ErrorKind::Timeout,
            Sht21Error::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Sht21Error::SelfTestFailed { .. } => ErrorKind::SelfTestFailed,
        }
    }
}

impl<E: core::fmt::Debug> From<CrcMismatch> for Sht21Error<E> {
    fn from(e: CrcMismatch) -> Self {
        Sht21Error::ChecksumMismatch {
            expected: e.expected,
            calculated: e.calculated,
        }
    }
}
