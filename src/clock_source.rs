//! MPU-6050 Clock Source Configuration
//!
//! The device can derive its timing from the internal oscillator, one of
//! the gyroscope PLLs, or an external crystal. The gyroscope PLLs are
//! considerably more stable than the internal 8 MHz oscillator and are
//! what the datasheet recommends once the gyro is running.

/// Clock source selector, written into the low bits of PWR_MGMT_1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockSource {
    /// Internal 8 MHz oscillator (power-on default, least accurate)
    Internal = 0,
    /// PLL with X-axis gyroscope reference (recommended)
    Xgyro = 1,
    /// PLL with Y-axis gyroscope reference
    Ygyro = 2,
    /// PLL with Z-axis gyroscope reference
    Zgyro = 3,
    /// PLL with external 32.768 kHz crystal
    External32768 = 4,
    /// PLL with external 19.2 MHz crystal
    External19200 = 5,
    /// Stops the clock; the sensor halts until reconfigured
    Stop = 7,
}
