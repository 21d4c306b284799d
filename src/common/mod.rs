// src/common/mod.rs

// Logging macros, must come first so every module below sees them.
#[macro_use]
mod fmt;

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod measurement;
pub mod timing;
pub mod user_register;

#[cfg(feature = "impl-generic-hal")]
pub mod generic_hal;

// --- Re-export key types/traits/functions for easier access ---

// From address.rs
pub use address::{Direction, DEVICE_ADDRESS};

// From command.rs
pub use command::{Command, UnknownCommand};

// From crc.rs
pub use crc::{calculate_crc8, check_crc, verify_crc, CrcMismatch};

// From error.rs
pub use error::{ErrorKind, Sht21Error};

// From frame.rs
pub use frame::RequestFrame;

// From hal_traits.rs
pub use hal_traits::{BusFault, Sht21Bus, Sht21Timer};

// From measurement.rs
pub use measurement::{to_humidity, to_temperature, RawReading};

// From user_register.rs
pub use user_register::{Resolution, UserRegister};

// --- Feature-gated re-exports ---

#[cfg(feature = "impl-generic-hal")]
pub use generic_hal::GenericHal;
