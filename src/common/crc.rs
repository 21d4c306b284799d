// src/common/crc.rs

use crc::{Algorithm, Crc};

/// CRC-8 used by the SHT21 on every measurement it returns.
/// Polynomial: 0x131 (x^8 + x^5 + x^4 + 1), written as 0x31 with the implicit top bit
/// Initial Value: 0x00
/// Input Reflected: false
/// Output Reflected: false
/// Final XOR: 0x00
/// Check Value: 0xA2 (for "123456789")
/// Residue: 0x00
pub const SHT21_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0x00,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xA2,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SHT21_CRC);

/// Checksum over `data` failed to match the byte the sensor sent.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CrcMismatch {
    /// Checksum byte received from the sensor.
    pub expected: u8,
    /// Checksum computed locally over the data bytes.
    pub calculated: u8,
}

/// Calculates the SHT21 checksum over `data`.
///
/// Bytes are processed most-significant bit first and the accumulator carries
/// across the whole buffer.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Returns `true` when `checksum` is the CRC-8 of `data`.
#[inline]
pub fn check_crc(data: &[u8], checksum: u8) -> bool {
    calculate_crc8(data) == checksum
}

/// Like [`check_crc`] but reports both values on failure.
pub fn verify_crc(data: &[u8], checksum: u8) -> Result<(), CrcMismatch> {
    let calculated = calculate_crc8(data);
    if calculated == checksum {
        Ok(())
    } else {
        Err(CrcMismatch { expected: checksum, calculated })
    }
}
