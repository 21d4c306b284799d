// src/common/user_register.rs

use core::fmt;

// Bit positions in the user register (datasheet Table 8).
const RESOLUTION_BIT_HIGH: u8 = 1 << 7;
const END_OF_BATTERY: u8 = 1 << 6;
const RESERVED: u8 = 0b0011_1000;
const ENABLE_HEATER: u8 = 1 << 2;
const DISABLE_OTP_RELOAD: u8 = 1 << 1;
const RESOLUTION_BIT_LOW: u8 = 1 << 0;
const RESOLUTION_MASK: u8 = RESOLUTION_BIT_HIGH | RESOLUTION_BIT_LOW;

/// Measurement resolution selected by bits 7 and 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// `00`: 12 bit RH, 14 bit T.
    #[default]
    Rh12T14,
    /// `01`: 8 bit RH, 12 bit T.
    Rh8T12,
    /// `10`: 10 bit RH, 13 bit T.
    Rh10T13,
    /// `11`: 11 bit RH, 11 bit T.
    Rh11T11,
}

impl Resolution {
    pub const fn humidity_bits(self) -> u8 {
        match self {
            Resolution::Rh12T14 => 12,
            Resolution::Rh8T12 => 8,
            Resolution::Rh10T13 => 10,
            Resolution::Rh11T11 => 11,
        }
    }

    pub const fn temperature_bits(self) -> u8 {
        match self {
            Resolution::Rh12T14 => 14,
            Resolution::Rh8T12 => 12,
            Resolution::Rh10T13 => 13,
            Resolution::Rh11T11 => 11,
        }
    }

    const fn from_register(reg: u8) -> Self {
        match (reg & RESOLUTION_BIT_HIGH != 0, reg & RESOLUTION_BIT_LOW != 0) {
            (false, false) => Resolution::Rh12T14,
            (false, true) => Resolution::Rh8T12,
            (true, false) => Resolution::Rh10T13,
            (true, true) => Resolution::Rh11T11,
        }
    }

    const fn register_bits(self) -> u8 {
        match self {
            Resolution::Rh12T14 => 0,
            Resolution::Rh8T12 => RESOLUTION_BIT_LOW,
            Resolution::Rh10T13 => RESOLUTION_BIT_HIGH,
            Resolution::Rh11T11 => RESOLUTION_BIT_HIGH | RESOLUTION_BIT_LOW,
        }
    }
}

/// Snapshot of the sensor's one-byte user register.
///
/// The byte read from the sensor is kept whole. Accessors decode single fields and the
/// `with_*` builders flip only their own bits, so the reserved bits 3..=5 go back to the
/// sensor exactly as they were read.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct UserRegister(u8);

impl UserRegister {
    /// Wraps a raw register byte as received from the sensor.
    #[inline]
    pub const fn parse(byte: u8) -> Self {
        UserRegister(byte)
    }

    /// Raw byte to write back, reserved bits included.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn resolution(self) -> Resolution {
        Resolution::from_register(self.0)
    }

    /// Supply voltage dropped below 2.25 V. Set by the sensor, never written.
    pub const fn end_of_battery(self) -> bool {
        self.0 & END_OF_BATTERY != 0
    }

    pub const fn heater_enabled(self) -> bool {
        self.0 & ENABLE_HEATER != 0
    }

    pub const fn otp_reload_disabled(self) -> bool {
        self.0 & DISABLE_OTP_RELOAD != 0
    }

    /// Reserved bits in their register positions.
    pub const fn reserved(self) -> u8 {
        self.0 & RESERVED
    }

    #[must_use]
    pub const fn with_resolution(self, resolution: Resolution) -> Self {
        UserRegister((self.0 & !RESOLUTION_MASK) | resolution.register_bits())
    }

    #[must_use]
    pub const fn with_heater(self, enabled: bool) -> Self {
        UserRegister(set_bit(self.0, ENABLE_HEATER, enabled))
    }

    #[must_use]
    pub const fn with_otp_reload_disabled(self, disabled: bool) -> Self {
        UserRegister(set_bit(self.0, DISABLE_OTP_RELOAD, disabled))
    }
}

#[inline]
const fn set_bit(reg: u8, mask: u8, on: bool) -> u8 {
    if on {
        reg | mask
    } else {
        reg & !mask
    }
}

impl From<u8> for UserRegister {
    fn from(byte: u8) -> Self {
        UserRegister::parse(byte)
    }
}

impl From<UserRegister> for u8 {
    fn from(reg: UserRegister) -> Self {
        reg.bits()
    }
}

impl fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegister")
            .field("bits", &format_args!("{:#010b}", self.0))
            .field("resolution", &self.resolution())
            .field("end_of_battery", &self.end_of_battery())
            .field("heater_enabled", &self.heater_enabled())
            .field("otp_reload_disabled", &self.otp_reload_disabled())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for UserRegister {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "UserRegister({=u8:#x})", self.0)
    }
}
