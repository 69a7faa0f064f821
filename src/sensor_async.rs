//! Asynchronous MPU-6050 driver.
//!
//! Mirrors the blocking driver in [`crate::sensor`] method-for-method on
//! top of `embedded-hal-async`, for use under async executors where bus
//! transactions should not block the core.

use crate::{
    accel::{Accel, AccelF32, AccelFullScale},
    address::Address,
    clock_source::ClockSource,
    config::DigitalLowPassFilter,
    error_async::{Error, InitError},
    gyro::{Gyro, GyroF32, GyroFullScale},
    registers::{Register, DEVICE_ID},
    sample::Sample,
    sensor::{DEFAULT_ACCEL_FULL_SCALE, DEFAULT_GYRO_FULL_SCALE, DEFAULT_SAMPLE_RATE_DIVIDER},
    temperature::Temperature,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// InvenSense MPU-6050 driver
///
/// Owns the bus peripheral and the currently configured full-scale
/// ranges, so every read applies the divisor matching what the device
/// registers actually hold.
#[derive(Debug)]
pub struct Mpu6050<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    accel_scale: AccelFullScale,
    gyro_scale: GyroFullScale,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Construct a driver and run the power-up sequence:
    /// identity check, device reset, default ranges (±2 g, ±500 °/s),
    /// widest low-pass filter, sample-rate divider, then wake from sleep
    /// with the X-gyro PLL selected as clock source.
    ///
    /// On failure the bus comes back inside [`InitError`].
    pub async fn new(
        i2c: I,
        address: Address,
        delay: &mut impl DelayNs,
    ) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            accel_scale: DEFAULT_ACCEL_FULL_SCALE,
            gyro_scale: DEFAULT_GYRO_FULL_SCALE,
        };

        if let Err(error) = sensor.initialize(delay).await {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    async fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.verify_identity().await?;
        self.reset(delay).await?;
        self.set_accel_range(DEFAULT_ACCEL_FULL_SCALE).await?;
        self.set_gyro_range(DEFAULT_GYRO_FULL_SCALE).await?;
        self.set_digital_lowpass_filter(DigitalLowPassFilter::Filter0)
            .await?;
        self.set_sample_rate_divider(DEFAULT_SAMPLE_RATE_DIVIDER)
            .await?;
        self.wake(delay).await?;
        Ok(())
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    async fn read(&mut self, register: Register, response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, &[register as u8], response)
            .await
            .map_err(|e| Error::WriteReadError(register, e))
    }

    async fn read_register(&mut self, register: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(register, &mut buf).await?;
        Ok(buf[0])
    }

    async fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, &[register as u8, value])
            .await
            .map_err(|e| Error::WriteError(register, e))
    }

    /// Check WHO_AM_I against the fixed MPU-6050 identity.
    pub async fn verify_identity(&mut self) -> Result<(), Error<I>> {
        if self.read_register(Register::WhoAmI).await? != DEVICE_ID {
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    /// Reset all device registers to their power-on values.
    pub async fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, 1 << 7).await?;
        delay.delay_ms(100).await;
        Ok(())
    }

    /// Clear the sleep bit, selecting the X-gyro PLL as clock source.
    pub async fn wake(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, ClockSource::Xgyro as u8)
            .await?;
        delay.delay_ms(100).await;
        Ok(())
    }

    /// Pick the clock source.
    pub async fn set_clock_source(&mut self, clock_source: ClockSource) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::PwrMgmt1).await?;
        value = (value & !0b111) | clock_source as u8;
        self.write_register(Register::PwrMgmt1, value).await
    }

    /// Set the accelerometer full-scale range.
    ///
    /// The stored range is committed only after the register write
    /// succeeds; a failed write leaves the previous scale in effect.
    pub async fn set_accel_range(&mut self, range: AccelFullScale) -> Result<(), Error<I>> {
        self.write_register(Register::AccelConfig, range.bits())
            .await?;
        self.accel_scale = range;
        Ok(())
    }

    /// Set the gyroscope full-scale range.
    ///
    /// Same commit ordering as [`Mpu6050::set_accel_range`].
    pub async fn set_gyro_range(&mut self, range: GyroFullScale) -> Result<(), Error<I>> {
        self.write_register(Register::GyroConfig, range.bits())
            .await?;
        self.gyro_scale = range;
        Ok(())
    }

    /// Currently configured accelerometer range.
    pub fn accel_range(&self) -> AccelFullScale {
        self.accel_scale
    }

    /// Currently configured gyroscope range.
    pub fn gyro_range(&self) -> GyroFullScale {
        self.gyro_scale
    }

    /// Select the digital low-pass filter bandwidth.
    pub async fn set_digital_lowpass_filter(
        &mut self,
        filter: DigitalLowPassFilter,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::Config, filter as u8).await
    }

    /// Set the sample-rate divider. Sample rate = gyro output rate / (1 + div).
    pub async fn set_sample_rate_divider(&mut self, div: u8) -> Result<(), Error<I>> {
        self.write_register(Register::SmpRtDiv, div).await
    }

    /// Raw accelerometer counts.
    pub async fn read_accel_raw(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read(Register::AccelX_H, &mut data).await?;
        Ok(Accel::from_bytes(data))
    }

    /// Acceleration in m/s² at the configured range.
    pub async fn read_accel(&mut self) -> Result<AccelF32, Error<I>> {
        Ok(self.read_accel_raw().await?.scaled(self.accel_scale).to_ms2())
    }

    /// Acceleration in g at the configured range.
    pub async fn read_accel_g(&mut self) -> Result<AccelF32, Error<I>> {
        Ok(self.read_accel_raw().await?.scaled(self.accel_scale))
    }

    /// Raw gyroscope counts.
    pub async fn read_gyro_raw(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read(Register::GyroX_H, &mut data).await?;
        Ok(Gyro::from_bytes(data))
    }

    /// Angular rate in °/s at the configured range.
    pub async fn read_gyro(&mut self) -> Result<GyroF32, Error<I>> {
        Ok(self.read_gyro_raw().await?.scaled(self.gyro_scale))
    }

    /// Raw temperature counts.
    pub async fn read_temperature_raw(&mut self) -> Result<Temperature, Error<I>> {
        let mut data = [0; 2];
        self.read(Register::TempOut_H, &mut data).await?;
        Ok(Temperature::from_bytes(data))
    }

    /// Die temperature in °C.
    pub async fn read_temperature(&mut self) -> Result<f32, Error<I>> {
        Ok(self.read_temperature_raw().await?.celsius())
    }

    /// Read acceleration, angular rate and temperature in one call.
    ///
    /// Three separate bus transactions; if any one fails the whole call
    /// fails and no partial sample is returned.
    pub async fn read_all(&mut self) -> Result<Sample, Error<I>> {
        let accel = self.read_accel().await?;
        let gyro = self.read_gyro().await?;
        let temp = self.read_temperature().await?;
        Ok(Sample { accel, gyro, temp })
    }
}
