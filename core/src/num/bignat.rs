use std::cmp::Ordering;
use std::fmt;

use crate::error::{BResult, InvalidArgument};
use crate::num::{Base, Digit};

/// A non-negative integer as a most-significant-first digit sequence.
///
/// The digits carry no base of their own; they are interpreted in whatever
/// base the operation they are passed to is given. A `BigNat` never has a
/// leading zero digit, and zero is the single digit `[0]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigNat {
    digits: Vec<Digit>,
}

/// Strips leading zero digits, leaving `[0]` for zero.
pub fn normalize(digits: &mut Vec<Digit>) {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    if leading == digits.len() {
        digits.clear();
        digits.push(0);
    } else if leading > 0 {
        digits.drain(..leading);
    }
}

/// Returns `digits` with enough leading zeros to be `len` long.
pub(crate) fn padded(digits: &[Digit], len: usize) -> Vec<Digit> {
    let mut res = Vec::with_capacity(len.max(digits.len()));
    res.resize(len.saturating_sub(digits.len()), 0);
    res.extend_from_slice(digits);
    res
}

impl BigNat {
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Validates every digit against `base` and normalises.
    pub fn from_digits(digits: Vec<Digit>, base: Base) -> BResult<Self> {
        base.check_digits(&digits)?;
        Ok(Self::from_digits_unchecked(digits))
    }

    /// Normalises without looking at the base. The caller guarantees that
    /// every digit is in range.
    pub(crate) fn from_digits_unchecked(mut digits: Vec<Digit>) -> Self {
        normalize(&mut digits);
        Self { digits }
    }

    pub fn from_u64(mut value: u64, base: Base) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let b = base.as_u64();
        let mut digits = vec![];
        while value > 0 {
            // value % b < b <= u32::MAX
            digits.push(truncate(value % b));
            value /= b;
        }
        digits.reverse();
        Self { digits }
    }

    /// `None` if the value does not fit.
    pub fn to_u128(&self, base: Base) -> Option<u128> {
        let b = u128::from(base.as_u32());
        self.digits.iter().try_fold(0_u128, |acc, &d| {
            acc.checked_mul(b)?.checked_add(u128::from(d))
        })
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn into_digits(self) -> Vec<Digit> {
        self.digits
    }

    /// Number of digits; zero has length 1.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    /// Computes `self * base^n` by appending `n` zero digits.
    pub(crate) fn shifted(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(self.digits.len() + n);
        digits.extend_from_slice(&self.digits);
        digits.resize(self.digits.len() + n, 0);
        Self { digits }
    }

    /// Parses digits `0-9a-z` (case-insensitive). `_` separators are skipped.
    pub fn parse(input: &str, base: Base) -> BResult<Self> {
        base.check_printable()?;
        let mut digits = vec![];
        for ch in input.chars() {
            if ch == '_' {
                continue;
            }
            digits.push(base.char_as_digit(ch)?);
        }
        if digits.is_empty() {
            return Err(InvalidArgument::EmptyInput.into());
        }
        Ok(Self::from_digits_unchecked(digits))
    }

    pub fn format(&self, base: Base) -> BResult<String> {
        base.check_printable()?;
        let mut output = String::with_capacity(self.digits.len());
        for &d in &self.digits {
            match Base::digit_as_char(d) {
                Some(ch) if d < base.as_u32() => output.push(ch),
                _ => {
                    return Err(InvalidArgument::DigitOutOfRange {
                        digit: d,
                        base: base.as_u32(),
                    }
                    .into())
                }
            }
        }
        Ok(output)
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn truncate(n: u64) -> Digit {
    n as Digit
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        // both sides are normalised, so a longer sequence is a larger value
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigNat {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, padded, BigNat};
    use crate::num::Base;

    #[test]
    fn test_normalize() {
        let mut v = vec![0, 0, 1, 0];
        normalize(&mut v);
        assert_eq!(v, vec![1, 0]);

        let mut v = vec![0, 0, 0];
        normalize(&mut v);
        assert_eq!(v, vec![0]);

        let mut v = vec![];
        normalize(&mut v);
        assert_eq!(v, vec![0]);

        let mut v = vec![7];
        normalize(&mut v);
        assert_eq!(v, vec![7]);
    }

    #[test]
    fn test_padded() {
        assert_eq!(padded(&[1, 2], 4), vec![0, 0, 1, 2]);
        assert_eq!(padded(&[1, 2], 1), vec![1, 2]);
    }

    #[test]
    fn test_cmp() {
        let d = Base::DECIMAL;
        assert!(BigNat::from_u64(100, d) > BigNat::from_u64(99, d));
        assert!(BigNat::from_u64(45, d) < BigNat::from_u64(54, d));
        assert_eq!(BigNat::from_u64(0, d), BigNat::zero());
        assert_eq!(
            BigNat::from_digits(vec![0, 0, 4, 2], d).unwrap(),
            BigNat::from_u64(42, d)
        );
    }

    #[test]
    fn test_u64_conversion() {
        assert_eq!(BigNat::from_u64(156, Base::DECIMAL).digits(), &[1, 5, 6]);
        assert_eq!(BigNat::from_u64(5, Base::BINARY).digits(), &[1, 0, 1]);
        assert_eq!(BigNat::from_u64(258, Base::BYTE).digits(), &[1, 2]);
        assert_eq!(BigNat::from_u64(u64::MAX, Base::HEX).len(), 16);
        let n = BigNat::from_u64(u64::MAX, Base::new(7).unwrap());
        assert_eq!(n.to_u128(Base::new(7).unwrap()), Some(u128::from(u64::MAX)));
    }

    #[test]
    fn test_to_u128_overflow() {
        let n = BigNat::from_digits(vec![1; 40], Base::DECIMAL).unwrap();
        assert_eq!(n.to_u128(Base::DECIMAL), None);
    }

    #[test]
    fn test_shifted() {
        let n = BigNat::from_u64(7, Base::DECIMAL);
        assert_eq!(n.shifted(2).digits(), &[7, 0, 0]);
        assert_eq!(BigNat::zero().shifted(3), BigNat::zero());
    }

    #[test]
    fn test_parse_and_format() {
        let n = BigNat::parse("00ff", Base::HEX).unwrap();
        assert_eq!(n.digits(), &[15, 15]);
        assert_eq!(n.format(Base::HEX).unwrap(), "ff");
        assert_eq!(
            BigNat::parse("1_000", Base::DECIMAL).unwrap().digits(),
            &[1, 0, 0, 0]
        );
        assert!(BigNat::parse("", Base::DECIMAL).is_err());
        assert!(BigNat::parse("12a", Base::DECIMAL).is_err());
        assert!(BigNat::parse("12", Base::BYTE).is_err());
    }
}
