use std::fmt;

use crate::error::{BResult, InvalidArgument};
use crate::num::Digit;

/// The radix every digit of an operand is interpreted in.
///
/// A base is not stored on the numbers themselves: each operation is
/// handed the base explicitly, and all operands of one call must share it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Base(u32);

impl Base {
    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEX: Self = Self(16);
    pub const BYTE: Self = Self(256);

    pub fn new(base: u32) -> BResult<Self> {
        if base < 2 {
            return Err(InvalidArgument::BaseTooSmall(base).into());
        }
        Ok(Self(base))
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub(crate) fn as_u64(self) -> u64 {
        u64::from(self.0)
    }

    pub(crate) fn as_i128(self) -> i128 {
        i128::from(self.0)
    }

    /// Fails on the first digit that is not in `[0, base)`.
    pub(crate) fn check_digits(self, digits: &[Digit]) -> BResult<()> {
        match digits.iter().find(|&&d| d >= self.0) {
            Some(&digit) => Err(InvalidArgument::DigitOutOfRange {
                digit,
                base: self.0,
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Only bases up to 36 have a textual form.
    pub(crate) fn check_printable(self) -> BResult<()> {
        if self.0 > 36 {
            return Err(InvalidArgument::BaseNotPrintable(self.0).into());
        }
        Ok(())
    }

    pub(crate) fn digit_as_char(digit: Digit) -> Option<char> {
        char::from_digit(digit, 36)
    }

    pub(crate) fn char_as_digit(self, ch: char) -> BResult<Digit> {
        match ch.to_digit(36) {
            Some(d) if d < self.0 => Ok(d),
            _ => Err(InvalidArgument::InvalidDigitChar(ch).into()),
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl TryFrom<u32> for Base {
    type Error = crate::error::RadixError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Self::new(base)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base {}", self.0)
    }
}
