use std::{error, fmt};

use crate::num::Digit;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RadixError {
    Interrupted,
    InvalidArgument(InvalidArgument),
    /// The operand and the modulus share a factor, so no inverse exists.
    NoInverse,
    #[cfg(feature = "config")]
    Config(String),
}

/// A violated precondition of one of the arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    BaseTooSmall(u32),
    DigitOutOfRange { digit: Digit, base: u32 },
    ZeroModulus,
    ZeroDivisor,
    BaseNotPrintable(u32),
    InvalidDigitChar(char),
    EmptyInput,
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupted => write!(f, "interrupted"),
            Self::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
            Self::NoInverse => write!(f, "modular inverse does not exist"),
            #[cfg(feature = "config")]
            Self::Config(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseTooSmall(b) => write!(f, "base must be at least 2, got {}", b),
            Self::DigitOutOfRange { digit, base } => {
                write!(f, "digit {} is out of range for base {}", digit, base)
            }
            Self::ZeroModulus => write!(f, "modulus must be greater than zero"),
            Self::ZeroDivisor => write!(f, "second operand must be nonzero"),
            Self::BaseNotPrintable(b) => {
                write!(f, "base {} cannot be written with the digits 0-9 and a-z", b)
            }
            Self::InvalidDigitChar(ch) => write!(f, "'{}' is not a valid digit", ch),
            Self::EmptyInput => write!(f, "expected at least one digit"),
        }
    }
}

impl error::Error for RadixError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }
}

impl error::Error for InvalidArgument {}

impl From<InvalidArgument> for RadixError {
    fn from(e: InvalidArgument) -> Self {
        Self::InvalidArgument(e)
    }
}

impl RadixError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type BResult<T> = Result<T, RadixError>;
