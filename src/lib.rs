//! Platform-agnostic I2C driver for the InvenSense MPU-6050 6-DoF
//! accelerometer/gyroscope, built on the [`embedded-hal`] traits.
//!
//! Blocking and async drivers live in [`sensor`] and [`sensor_async`];
//! both convert the chip's raw big-endian counts into m/s², °/s and °C
//! using the full-scale range configured on the device.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![no_std]

pub mod accel;
pub mod address;
pub mod clock_source;
pub mod config;
pub mod error;
pub mod error_async;
pub mod gyro;
pub mod registers;
pub mod sample;
pub mod sensor;
pub mod sensor_async;
pub mod temperature;
