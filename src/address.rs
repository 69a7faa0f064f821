//! MPU-6050 I2C Address Configuration
//!
//! The MPU-6050 responds on one of two 7-bit addresses, selected by the
//! AD0 pin:
//! - 0x68 (default, AD0 low or floating — the pin has an internal pulldown)
//! - 0x69 (AD0 high)
//!
//! Two devices can therefore share a bus, one per AD0 level.

/// A 7-bit MPU-6050 bus address.
///
/// Note: some I2C peripherals expect the address pre-shifted into 8-bit
/// form; this type always holds the plain 7-bit value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Default for Address {
    /// The address used when AD0 is tied to GND or left floating.
    fn default() -> Self {
        Self(0x68)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    /// Wraps a raw address value, typically 0x68 or 0x69.
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
