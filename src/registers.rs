//! MPU-6050 Register Map
//!
//! Only the registers this driver touches are listed, grouped as the
//! datasheet groups them:
//! - Configuration registers: sample rate, filtering, full-scale ranges
//! - Data registers: accelerometer, temperature and gyroscope output
//! - Power management and identity registers
//!
//! Every address and the device identity live here so the register
//! contract can be audited against the datasheet in one place.

/// Value the WHO_AM_I register reports for a genuine MPU-6050.
pub const DEVICE_ID: u8 = 0x68;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Sample Rate Divider register (0x19)
    /// Divides the gyroscope output rate down to the sample rate
    SmpRtDiv = 0x19,

    /// Configuration register (0x1A)
    /// Controls the digital low-pass filter and external sync
    Config = 0x1A,

    /// Gyroscope Configuration register (0x1B)
    /// Selects the gyroscope full-scale range
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// Selects the accelerometer full-scale range
    AccelConfig = 0x1C,

    // Accelerometer Data Registers (big-endian, 2 bytes per axis)
    /// High byte of X-axis acceleration
    AccelX_H = 0x3B,
    /// Low byte of X-axis acceleration
    AccelX_L = 0x3C,
    /// High byte of Y-axis acceleration
    AccelY_H = 0x3D,
    /// Low byte of Y-axis acceleration
    AccelY_L = 0x3E,
    /// High byte of Z-axis acceleration
    AccelZ_H = 0x3F,
    /// Low byte of Z-axis acceleration
    AccelZ_L = 0x40,

    // Temperature Data Registers
    /// High byte of the temperature reading
    TempOut_H = 0x41,
    /// Low byte of the temperature reading
    TempOut_L = 0x42,

    // Gyroscope Data Registers (big-endian, 2 bytes per axis)
    /// High byte of X-axis angular rate
    GyroX_H = 0x43,
    /// Low byte of X-axis angular rate
    GyroX_L = 0x44,
    /// High byte of Y-axis angular rate
    GyroY_H = 0x45,
    /// Low byte of Y-axis angular rate
    GyroY_L = 0x46,
    /// High byte of Z-axis angular rate
    GyroZ_H = 0x47,
    /// Low byte of Z-axis angular rate
    GyroZ_L = 0x48,

    /// Power Management 1 register (0x6B)
    /// Controls device reset, sleep and clock source
    PwrMgmt1 = 0x6B,

    /// WHO_AM_I register (0x75)
    /// Reads back the fixed device identity
    WhoAmI = 0x75,
}
