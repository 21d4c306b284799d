// src/common/timing.rs

use core::time::Duration;

// Conversion times are the datasheet maxima for the highest resolution
// (14 bit T, 12 bit RH). Lower resolutions finish sooner but the driver does
// not shorten the wait.

// === Measurement Timing (Table 7) ===

/// Wait after a temperature trigger before reading the result.
pub const TEMPERATURE_SETTLE: Duration = Duration::from_millis(90);
/// Wait after a humidity trigger before reading the result.
pub const HUMIDITY_SETTLE: Duration = Duration::from_millis(40);

// === Reset (Sec 5.5) ===

/// Time the sensor needs to reboot after a soft reset.
pub const SOFT_RESET_RECOVERY: Duration = Duration::from_millis(15);

// === Self-test ===

/// How long the on-chip heater runs before the readings are compared.
pub const SELF_TEST_HEAT: Duration = Duration::from_millis(10_000);

/// Converts a duration to the millisecond argument the timer trait takes,
/// saturating instead of wrapping.
#[inline]
pub fn as_millis_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
