use crate::registers::Register;
use core::fmt::Debug;
use core::fmt::Formatter;
use embedded_hal::i2c::I2c;

/// Error during driver construction. Wraps [`Error`] and hands the bus
/// back so the caller can retry or repurpose it.
pub struct InitError<I>
where
    I: I2c,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for sensor operations.
///
/// Transport failures carry the register the transaction addressed.
pub enum Error<I>
where
    I: I2c,
{
    /// A register write was not acknowledged
    WriteError(Register, I::Error),
    /// A register read (write-read transaction) failed
    WriteReadError(Register, I::Error),
    /// WHO_AM_I did not report the MPU-6050 identity
    WrongDevice,
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteError(reg, e) => f.debug_tuple("WriteError").field(reg).field(e).finish(),
            Self::WriteReadError(reg, e) => {
                f.debug_tuple("WriteReadError").field(reg).field(e).finish()
            }
            Self::WrongDevice => f.write_str("WrongDevice"),
        }
    }
}

impl<I> Error<I>
where
    I: I2c,
{
    /// Register addressed by the failed transaction, if any.
    pub fn register(&self) -> Option<Register> {
        match self {
            Self::WriteError(reg, _) | Self::WriteReadError(reg, _) => Some(*reg),
            Self::WrongDevice => None,
        }
    }
}
