// src/driver/sync_driver/mod.rs

use crate::common::{
    command::Command,
    error::Sht21Error,
    hal_traits::{Sht21Bus, Sht21Timer},
    measurement::{self, RawReading},
    timing,
    user_register::{Resolution, UserRegister},
};

mod transaction;

#[cfg(test)]
mod mock;

pub use self_test::{SelfTestConfig, SelfTestPhase};

/// Blocking SHT21 driver.
///
/// Owns the bus/timer interface for its lifetime. Every method is one or more complete
/// transactions; the sensor has no state the driver caches between calls.
#[derive(Debug)]
pub struct Sht21<IF>
where
    IF: Sht21Bus + Sht21Timer,
{
    interface: IF,
    config: SelfTestConfig,
}

impl<IF> Sht21<IF>
where
    IF: Sht21Bus + Sht21Timer,
{
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, SelfTestConfig::default())
    }

    pub fn with_config(interface: IF, config: SelfTestConfig) -> Self {
        Sht21 { interface, config }
    }

    pub fn config(&self) -> &SelfTestConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SelfTestConfig) {
        self.config = config;
    }

    /// Destroys the driver and returns the interface.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    /// Hold-mode temperature measurement in °C.
    pub fn read_temperature(&mut self) -> Result<f32, Sht21Error<IF::Error>> {
        let raw = self.read_raw(Command::TemperatureMeasureHold)?;
        convert(&raw, measurement::to_temperature)
    }

    /// Hold-mode relative humidity measurement in %RH.
    pub fn read_humidity(&mut self) -> Result<f32, Sht21Error<IF::Error>> {
        let raw = self.read_raw(Command::HumidityMeasureHold)?;
        convert(&raw, measurement::to_humidity)
    }

    /// Like [`read_temperature`](Self::read_temperature) but the bus is free while the
    /// sensor converts. The driver still waits the full conversion time before reading.
    pub fn read_temperature_no_hold(&mut self) -> Result<f32, Sht21Error<IF::Error>> {
        let raw = self.read_raw(Command::TemperatureMeasureNoHold)?;
        convert(&raw, measurement::to_temperature)
    }

    pub fn read_humidity_no_hold(&mut self) -> Result<f32, Sht21Error<IF::Error>> {
        let raw = self.read_raw(Command::HumidityMeasureNoHold)?;
        convert(&raw, measurement::to_humidity)
    }

    pub fn read_user_register(&mut self) -> Result<UserRegister, Sht21Error<IF::Error>> {
        let mut buffer = [0u8; 1];
        self.execute_read(Command::ReadUserRegister, &mut buffer)?;
        Ok(UserRegister::parse(buffer[0]))
    }

    /// Writes `register` as is.
    ///
    /// Build the value from a fresh [`read_user_register`](Self::read_user_register) so the
    /// reserved bits go back unchanged.
    pub fn write_user_register(&mut self, register: UserRegister) -> Result<(), Sht21Error<IF::Error>> {
        debug!("sht21: writing user register {:#x}", register.bits());
        self.execute_write(Command::WriteUserRegister, Some(register.bits()))
    }

    /// Reads the register, sets the heater bit to `enabled` and writes it back.
    pub fn set_heater(&mut self, enabled: bool) -> Result<(), Sht21Error<IF::Error>> {
        self.modify_user_register(|reg| reg.with_heater(enabled))
    }

    /// Reads the register, changes the resolution bits and writes it back.
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Sht21Error<IF::Error>> {
        self.modify_user_register(|reg| reg.with_resolution(resolution))
    }

    /// Reboots the sensor and waits for it to come back.
    ///
    /// All user register bits except the heater return to their defaults.
    pub fn soft_reset(&mut self) -> Result<(), Sht21Error<IF::Error>> {
        self.execute_write(Command::SoftReset, None)?;
        self.interface
            .delay_ms(timing::as_millis_u32(timing::SOFT_RESET_RECOVERY));
        Ok(())
    }

    fn modify_user_register<F>(&mut self, f: F) -> Result<(), Sht21Error<IF::Error>>
    where
        F: FnOnce(UserRegister) -> UserRegister,
    {
        let current = self.read_user_register()?;
        self.write_user_register(f(current))
    }
}

fn convert<E, F>(raw: &RawReading, f: F) -> Result<f32, Sht21Error<E>>
where
    E: core::fmt::Debug,
    F: FnOnce(&RawReading) -> Result<f32, crate::common::crc::CrcMismatch>,
{
    f(raw).map_err(|e| {
        warn!(
            "sht21: checksum mismatch, got {:#x} computed {:#x}",
            e.expected, e.calculated
        );
        Sht21Error::from(e)
    })
}
