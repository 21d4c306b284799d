// src/driver/mod.rs

// Blocking driver; every call runs to completion on the caller's stack.
pub mod sync_driver;

// Re-export the public driver types
pub use sync_driver::{SelfTestConfig, SelfTestPhase, Sht21};
