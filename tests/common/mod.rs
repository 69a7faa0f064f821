use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x68;

/// Register writes and reads issued by driver construction, in order:
/// identity check, reset, default ranges, filter, divider, wake.
pub fn startup_sequence() -> Vec<I2cTrans> {
    vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x75], vec![0x68]),
        I2cTrans::write(DEV_ADDR, vec![0x6B, 0x80]),
        I2cTrans::write(DEV_ADDR, vec![0x1C, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x1B, 0x08]),
        I2cTrans::write(DEV_ADDR, vec![0x1A, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x19, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x6B, 0x01]),
    ]
}

pub fn new_mock(extra: &[I2cTrans]) -> I2cMock {
    let mut transactions = startup_sequence();
    transactions.extend_from_slice(extra);
    I2cMock::new(&transactions)
}

/// 6-byte big-endian accel/gyro data block with the given X value and
/// zeroed Y/Z axes.
pub fn axis_block(x: i16) -> Vec<u8> {
    let x = x.to_be_bytes();
    vec![x[0], x[1], 0, 0, 0, 0]
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
