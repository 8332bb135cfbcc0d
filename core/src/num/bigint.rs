use std::fmt;
use std::ops::Neg;

use crate::error::{BResult, InvalidArgument};
use crate::num::{Base, BigNat, Digit};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or greater.
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a product or quotient of two values with these signs.
    pub fn product(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// A signed integer: a [`Sign`] together with a [`BigNat`] magnitude.
///
/// Zero is always positive.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: BigNat,
}

impl BigInt {
    pub fn new(sign: Sign, magnitude: BigNat) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    pub fn zero() -> Self {
        Self::from(BigNat::zero())
    }

    pub fn from_digits(sign: Sign, digits: Vec<Digit>, base: Base) -> BResult<Self> {
        Ok(Self::new(sign, BigNat::from_digits(digits, base)?))
    }

    pub fn from_i64(value: i64, base: Base) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, BigNat::from_u64(value.unsigned_abs(), base))
    }

    pub fn to_i128(&self, base: Base) -> Option<i128> {
        let magnitude = self.magnitude.to_u128(base)?;
        match self.sign {
            Sign::Positive => i128::try_from(magnitude).ok(),
            Sign::Negative => 0_i128.checked_sub_unsigned(magnitude),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &BigNat {
        &self.magnitude
    }

    pub fn into_parts(self) -> (Sign, BigNat) {
        (self.sign, self.magnitude)
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn abs(&self) -> Self {
        Self::from(self.magnitude.clone())
    }

    /// Accepts an optional leading `-` or `+`.
    pub fn parse(input: &str, base: Base) -> BResult<Self> {
        let (sign, rest) = if let Some(rest) = input.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = input.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, input)
        };
        if rest.is_empty() {
            return Err(InvalidArgument::EmptyInput.into());
        }
        Ok(Self::new(sign, BigNat::parse(rest, base)?))
    }

    pub fn format(&self, base: Base) -> BResult<String> {
        let digits = self.magnitude.format(base)?;
        Ok(match self.sign {
            Sign::Positive => digits,
            Sign::Negative => format!("-{}", digits),
        })
    }
}

impl From<BigNat> for BigInt {
    fn from(magnitude: BigNat) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude,
        }
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.sign, self.magnitude)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-")?;
        }
        write!(f, "{:?}", self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::{BigInt, Sign};
    use crate::num::{Base, BigNat};

    #[test]
    fn test_zero_is_positive() {
        let z = BigInt::new(Sign::Negative, BigNat::zero());
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(-BigInt::zero(), BigInt::zero());
        assert_eq!(BigInt::from_i64(0, Base::HEX).sign(), Sign::Positive);
    }

    #[test]
    fn test_i64_round_trip() {
        let d = Base::DECIMAL;
        assert_eq!(BigInt::from_i64(-156, d).to_i128(d), Some(-156));
        assert_eq!(BigInt::from_i64(i64::MIN, d).to_i128(d), Some(i128::from(i64::MIN)));
        assert_eq!(BigInt::from_i64(-156, d).magnitude().digits(), &[1, 5, 6]);
    }

    #[test]
    fn test_sign_product() {
        assert_eq!(Sign::Negative.product(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Positive.product(Sign::Negative), Sign::Negative);
    }

    #[test]
    fn test_parse_and_format() {
        let n = BigInt::parse("-1a", Base::HEX).unwrap();
        assert_eq!(n.to_i128(Base::HEX), Some(-26));
        assert_eq!(n.format(Base::HEX).unwrap(), "-1a");
        assert_eq!(BigInt::parse("-0", Base::DECIMAL).unwrap(), BigInt::zero());
        assert!(BigInt::parse("-", Base::DECIMAL).is_err());
    }
}
