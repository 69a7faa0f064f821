use crate::{accel::AccelF32, gyro::GyroF32};

/// One complete measurement set from the sensor.
///
/// Produced by [`crate::sensor::Mpu6050::read_all`] from three separate
/// bus transactions, so the fields are not sampled at the same instant.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Sample {
    /// Acceleration in m/s²
    pub accel: AccelF32,
    /// Angular rate in °/s
    pub gyro: GyroF32,
    /// Die temperature in °C
    pub temp: f32,
}
