// src/common/measurement.rs

use super::crc::{verify_crc, CrcMismatch};

/// Low two bits of the LSB are status flags, not data.
const STATUS_BITS_MASK: u16 = 0x0003;
const FULL_SCALE: f32 = 65536.0;

// Datasheet calibration, Sec 6.1 and 6.2.
const TEMPERATURE_OFFSET: f32 = -46.85;
const TEMPERATURE_SPAN: f32 = 175.72;
const HUMIDITY_OFFSET: f32 = -6.0;
const HUMIDITY_SPAN: f32 = 125.0;

/// Three bytes returned by a measurement: MSB, LSB, checksum.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawReading(pub [u8; 3]);

impl RawReading {
    #[inline]
    pub const fn new(bytes: [u8; 3]) -> Self {
        RawReading(bytes)
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.0[..2]
    }

    #[inline]
    pub const fn checksum(&self) -> u8 {
        self.0[2]
    }

    /// Big-endian signal with the status bits cleared.
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]]) & !STATUS_BITS_MASK
    }

    /// Checks the trailing checksum against the two data bytes.
    pub fn verify(&self) -> Result<u16, CrcMismatch> {
        verify_crc(self.data(), self.checksum())?;
        Ok(self.raw_value())
    }
}

impl From<[u8; 3]> for RawReading {
    fn from(bytes: [u8; 3]) -> Self {
        RawReading(bytes)
    }
}

#[inline]
fn scale(raw: u16, offset: f32, span: f32) -> f32 {
    offset + span * (f32::from(raw) / FULL_SCALE)
}

/// Converts a masked signal to degrees Celsius.
#[inline]
pub fn temperature_from_raw(raw: u16) -> f32 {
    scale(raw & !STATUS_BITS_MASK, TEMPERATURE_OFFSET, TEMPERATURE_SPAN)
}

/// Converts a masked signal to percent relative humidity.
#[inline]
pub fn humidity_from_raw(raw: u16) -> f32 {
    scale(raw & !STATUS_BITS_MASK, HUMIDITY_OFFSET, HUMIDITY_SPAN)
}

/// Validates the checksum and returns the temperature in °C.
pub fn to_temperature(reading: &RawReading) -> Result<f32, CrcMismatch> {
    reading.verify().map(temperature_from_raw)
}

/// Validates the checksum and returns relative humidity in %RH.
///
/// The result is not clamped; readings slightly outside 0..=100 are possible.
pub fn to_humidity(reading: &RawReading) -> Result<f32, CrcMismatch> {
    reading.verify().map(humidity_from_raw)
}
