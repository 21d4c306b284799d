// src/lib.rs

//! Protocol core for the Sensirion SHT21 humidity and temperature sensor.
//!
//! The crate builds command frames, validates the sensor's CRC-8, converts raw signals
//! to °C and %RH and sequences register read-modify-write and the heater self-test.
//! Bus transfers and delays come from the caller through [`Sht21Bus`] and
//! [`Sht21Timer`]; with the `impl-generic-hal` feature [`GenericHal`] provides both
//! over embedded-hal 1.0.
//!
//! ## Features
//!
//! - `std`: implements `std::error::Error` through `thiserror`.
//! - `impl-generic-hal`: embedded-hal 1.0 adapter.
//! - `log`: log through the `log` crate.
//! - `defmt`: log through `defmt`, and derive `defmt::Format` on public enums.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{
    Command, ErrorKind, RawReading, RequestFrame, Resolution, Sht21Bus, Sht21Error, Sht21Timer,
    UserRegister,
};
pub use driver::{SelfTestConfig, SelfTestPhase, Sht21};

#[cfg(feature = "impl-generic-hal")]
pub use common::GenericHal;
