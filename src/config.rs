//! MPU-6050 Digital Low-Pass Filter Configuration
//!
//! The DLPF trades bandwidth for noise: lower bandwidths smooth out
//! vibration at the cost of response delay, and any setting other than
//! the widest also drops the gyroscope output rate from 8 kHz to 1 kHz.

/// Digital low-pass filter selector, written into the CONFIG register.
///
/// Bandwidths are the accelerometer figures from the datasheet; the
/// gyroscope bandwidth at each setting is within a few Hz of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitalLowPassFilter {
    /// 260 Hz bandwidth, no filtering delay (power-on default)
    Filter0 = 0,
    /// 184 Hz bandwidth
    Filter1 = 1,
    /// 94 Hz bandwidth
    Filter2 = 2,
    /// 44 Hz bandwidth
    Filter3 = 3,
    /// 21 Hz bandwidth
    Filter4 = 4,
    /// 10 Hz bandwidth
    Filter5 = 5,
    /// 5 Hz bandwidth, maximum smoothing
    Filter6 = 6,
}

impl Default for DigitalLowPassFilter {
    fn default() -> Self {
        Self::Filter0
    }
}
