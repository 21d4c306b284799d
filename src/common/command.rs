//! SHT21 command definitions.
//!
//! See the SHT21 datasheet, Table 6 "Basic command set".

use core::convert::TryFrom;
use core::fmt;
use core::time::Duration;

use super::timing;

/// One sensor operation, identified on the wire by a single command byte.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Trigger T measurement, sensor holds the bus until conversion is done.
    TemperatureMeasureHold = 0xE3,
    /// Trigger RH measurement, sensor holds the bus until conversion is done.
    HumidityMeasureHold = 0xE5,
    /// Trigger T measurement, bus released during conversion.
    TemperatureMeasureNoHold = 0xF3,
    /// Trigger RH measurement, bus released during conversion.
    HumidityMeasureNoHold = 0xF5,
    WriteUserRegister = 0xE6,
    ReadUserRegister = 0xE7,
    SoftReset = 0xFE,
}

/// Byte did not match any known command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UnknownCommand(pub u8);

impl Command {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Temperature or humidity trigger, either mode.
    pub const fn is_measurement(self) -> bool {
        matches!(
            self,
            Command::TemperatureMeasureHold
                | Command::HumidityMeasureHold
                | Command::TemperatureMeasureNoHold
                | Command::HumidityMeasureNoHold
        )
    }

    pub const fn is_hold(self) -> bool {
        matches!(self, Command::TemperatureMeasureHold | Command::HumidityMeasureHold)
    }

    /// Time to wait between sending the command and reading the result.
    ///
    /// These are the maximum conversion times at the highest resolution and apply to
    /// both hold and no-hold triggers.
    pub const fn settling_time(self) -> Option<Duration> {
        match self {
            Command::TemperatureMeasureHold | Command::TemperatureMeasureNoHold => {
                Some(timing::TEMPERATURE_SETTLE)
            }
            Command::HumidityMeasureHold | Command::HumidityMeasureNoHold => {
                Some(timing::HUMIDITY_SETTLE)
            }
            _ => None,
        }
    }

    /// Number of bytes the sensor sends back, zero for write-only commands.
    pub const fn response_len(self) -> usize {
        match self {
            Command::TemperatureMeasureHold
            | Command::HumidityMeasureHold
            | Command::TemperatureMeasureNoHold
            | Command::HumidityMeasureNoHold => 3,
            Command::ReadUserRegister => 1,
            Command::WriteUserRegister | Command::SoftReset => 0,
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = UnknownCommand;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0xE3 => Ok(Command::TemperatureMeasureHold),
            0xE5 => Ok(Command::HumidityMeasureHold),
            0xF3 => Ok(Command::TemperatureMeasureNoHold),
            0xF5 => Ok(Command::HumidityMeasureNoHold),
            0xE6 => Ok(Command::WriteUserRegister),
            0xE7 => Ok(Command::ReadUserRegister),
            0xFE => Ok(Command::SoftReset),
            other => Err(UnknownCommand(other)),
        }
    }
}

impl From<Command> for u8 {
    fn from(value: Command) -> Self {
        value.code()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::TemperatureMeasureHold => "T hold",
            Command::HumidityMeasureHold => "RH hold",
            Command::TemperatureMeasureNoHold => "T no-hold",
            Command::HumidityMeasureNoHold => "RH no-hold",
            Command::WriteUserRegister => "write user register",
            Command::ReadUserRegister => "read user register",
            Command::SoftReset => "soft reset",
        };
        write!(f, "{} ({:#04x})", name, self.code())
    }
}
