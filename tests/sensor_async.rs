//! Async mirror coverage: the same core cases as the blocking suite,
//! driven through `embedded-hal-async`.

mod common;

use common::{assert_close, axis_block, new_mock, DEV_ADDR};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::{
    delay::NoopDelay,
    i2c::{Mock as I2cMock, Transaction as I2cTrans},
};
use mpu6050::{
    accel::{AccelFullScale, STANDARD_GRAVITY},
    address::Address,
    error_async::Error,
    gyro::GyroFullScale,
    registers::Register,
    sensor_async::Mpu6050,
};

async fn new_sensor(extra: &[I2cTrans]) -> Mpu6050<I2cMock> {
    Mpu6050::new(new_mock(extra), Address::default(), &mut NoopDelay)
        .await
        .expect("construction should succeed")
}

#[tokio::test]
async fn construction_runs_documented_register_sequence() {
    let sensor = new_sensor(&[]).await;
    assert_eq!(sensor.accel_range(), AccelFullScale::G2);
    assert_eq!(sensor.gyro_range(), GyroFullScale::Deg500);
    sensor.release().done();
}

#[tokio::test]
async fn construction_rejects_unknown_identity() {
    let mut i2c = I2cMock::new(&[I2cTrans::write_read(DEV_ADDR, vec![0x75], vec![0x70])]);
    let err = Mpu6050::new(i2c.clone(), Address::default(), &mut NoopDelay)
        .await
        .expect_err("construction should fail");
    assert!(matches!(err.error, Error::WrongDevice));
    i2c.done();
}

#[tokio::test]
async fn accel_applies_configured_scale() {
    let mut sensor = new_sensor(&[
        I2cTrans::write(DEV_ADDR, vec![0x1C, 0x18]),
        I2cTrans::write_read(DEV_ADDR, vec![0x3B], axis_block(2048)),
    ])
    .await;
    sensor.set_accel_range(AccelFullScale::G16).await.unwrap();
    assert_close(sensor.read_accel().await.unwrap().x(), STANDARD_GRAVITY);
    sensor.release().done();
}

#[tokio::test]
async fn gyro_applies_configured_scale() {
    let mut sensor = new_sensor(&[
        I2cTrans::write(DEV_ADDR, vec![0x1B, 0x00]),
        I2cTrans::write_read(DEV_ADDR, vec![0x43], axis_block(131)),
    ])
    .await;
    sensor.set_gyro_range(GyroFullScale::Deg250).await.unwrap();
    assert_eq!(sensor.read_gyro().await.unwrap().x(), 1.0);
    sensor.release().done();
}

#[tokio::test]
async fn failed_range_write_keeps_previous_scale() {
    let mut sensor = new_sensor(&[
        I2cTrans::write(DEV_ADDR, vec![0x1B, 0x18]).with_error(ErrorKind::Other),
        I2cTrans::write_read(DEV_ADDR, vec![0x43], axis_block(655)),
    ])
    .await;

    let err = sensor
        .set_gyro_range(GyroFullScale::Deg2000)
        .await
        .expect_err("write should fail");
    assert_eq!(err.register(), Some(Register::GyroConfig));

    // Still the ±500 °/s divisor from construction.
    assert_eq!(sensor.gyro_range(), GyroFullScale::Deg500);
    assert_close(sensor.read_gyro().await.unwrap().x(), 10.0);
    sensor.release().done();
}

#[tokio::test]
async fn read_all_is_all_or_nothing() {
    let mut sensor = new_sensor(&[
        I2cTrans::write_read(DEV_ADDR, vec![0x3B], axis_block(16384)),
        I2cTrans::write_read(DEV_ADDR, vec![0x43], axis_block(655)),
        I2cTrans::write_read(DEV_ADDR, vec![0x41], vec![0x01, 0x54]),
        I2cTrans::write_read(DEV_ADDR, vec![0x3B], axis_block(0)).with_error(ErrorKind::Other),
    ])
    .await;

    let sample = sensor.read_all().await.unwrap();
    assert_close(sample.accel.x(), STANDARD_GRAVITY);
    assert_close(sample.gyro.x(), 10.0);
    assert_close(sample.temp, 37.53);

    let err = sensor.read_all().await.expect_err("first read fails");
    assert_eq!(err.register(), Some(Register::AccelX_H));
    sensor.release().done();
}
