use std::cmp::Ordering;

use crate::error::BResult;
use crate::num::bignat::{padded, truncate};
use crate::num::{Base, BigInt, BigNat, Sign};

/// Signed addition of two numbers in `base`.
pub fn add(x: &BigInt, y: &BigInt, base: Base) -> BResult<BigInt> {
    base.check_digits(x.magnitude().digits())?;
    base.check_digits(y.magnitude().digits())?;
    Ok(add_unchecked(x, y, base))
}

/// Signed subtraction `x - y` of two numbers in `base`.
pub fn sub(x: &BigInt, y: &BigInt, base: Base) -> BResult<BigInt> {
    base.check_digits(x.magnitude().digits())?;
    base.check_digits(y.magnitude().digits())?;
    Ok(sub_unchecked(x, y, base))
}

pub(crate) fn add_unchecked(x: &BigInt, y: &BigInt, base: Base) -> BigInt {
    let (a, b) = (x.magnitude(), y.magnitude());
    match (x.sign(), y.sign()) {
        (Sign::Positive, Sign::Positive) => BigInt::from(add_magnitudes(a, b, base)),
        (Sign::Negative, Sign::Negative) => {
            BigInt::new(Sign::Negative, add_magnitudes(a, b, base))
        }
        (Sign::Positive, Sign::Negative) => sub_magnitudes(a, b, base),
        (Sign::Negative, Sign::Positive) => sub_magnitudes(b, a, base),
    }
}

pub(crate) fn sub_unchecked(x: &BigInt, y: &BigInt, base: Base) -> BigInt {
    let (a, b) = (x.magnitude(), y.magnitude());
    match (x.sign(), y.sign()) {
        (Sign::Positive, Sign::Positive) => sub_magnitudes(a, b, base),
        (Sign::Negative, Sign::Negative) => sub_magnitudes(b, a, base),
        (Sign::Positive, Sign::Negative) => BigInt::from(add_magnitudes(a, b, base)),
        (Sign::Negative, Sign::Positive) => {
            BigInt::new(Sign::Negative, add_magnitudes(a, b, base))
        }
    }
}

/// Unsigned `a + b`. A carry out of the top digit becomes a new leading
/// digit.
pub(crate) fn add_magnitudes(a: &BigNat, b: &BigNat, base: Base) -> BigNat {
    let len = a.len().max(b.len());
    let a = padded(a.digits(), len);
    let b = padded(b.digits(), len);
    let base = base.as_u64();

    let mut res = vec![0; len + 1];
    let mut carry = 0;
    for i in (0..len).rev() {
        // at most 2 * (base - 1) + 1, so the carry is 0 or 1
        let mut sum = u64::from(a[i]) + u64::from(b[i]) + carry;
        if sum >= base {
            sum -= base;
            carry = 1;
        } else {
            carry = 0;
        }
        res[i + 1] = truncate(sum);
    }
    res[0] = truncate(carry);
    BigNat::from_digits_unchecked(res)
}

/// Signed `a - b` for two magnitudes.
pub(crate) fn sub_magnitudes(a: &BigNat, b: &BigNat, base: Base) -> BigInt {
    match a.cmp(b) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from(sub_smaller(a, b, base)),
        Ordering::Less => BigInt::new(Sign::Negative, sub_smaller(b, a, base)),
    }
}

/// `a - b` where `a >= b`.
pub(crate) fn sub_smaller(a: &BigNat, b: &BigNat, base: Base) -> BigNat {
    debug_assert!(a >= b);
    let b = padded(b.digits(), a.len());
    let a = a.digits();
    let base = base.as_u64();

    let mut res = vec![0; a.len()];
    let mut borrow = 0;
    for i in (0..a.len()).rev() {
        let subtrahend = u64::from(b[i]) + borrow;
        let minuend = u64::from(a[i]);
        if minuend >= subtrahend {
            res[i] = truncate(minuend - subtrahend);
            borrow = 0;
        } else {
            res[i] = truncate(minuend + base - subtrahend);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);
    BigNat::from_digits_unchecked(res)
}

#[cfg(test)]
mod tests {
    use super::{add, sub};
    use crate::error::{InvalidArgument, RadixError};
    use crate::num::{Base, BigInt, BigNat, Sign};

    fn dec(n: i64) -> BigInt {
        BigInt::from_i64(n, Base::DECIMAL)
    }

    #[test]
    fn test_carry_out() {
        let res = add(
            &BigInt::from_digits(Sign::Positive, vec![9, 9], Base::DECIMAL).unwrap(),
            &BigInt::from_digits(Sign::Positive, vec![1], Base::DECIMAL).unwrap(),
            Base::DECIMAL,
        )
        .unwrap();
        assert_eq!(res.sign(), Sign::Positive);
        assert_eq!(res.magnitude().digits(), &[1, 0, 0]);
    }

    #[test]
    fn test_borrow() {
        let res = sub(&dec(100), &dec(1), Base::DECIMAL).unwrap();
        assert_eq!(res.sign(), Sign::Positive);
        assert_eq!(res.magnitude().digits(), &[9, 9]);
    }

    #[test]
    fn test_sign_dispatch() {
        let d = Base::DECIMAL;
        assert_eq!(add(&dec(-5), &dec(-7), d).unwrap(), dec(-12));
        assert_eq!(add(&dec(5), &dec(-7), d).unwrap(), dec(-2));
        assert_eq!(add(&dec(-5), &dec(7), d).unwrap(), dec(2));
        assert_eq!(add(&dec(-7), &dec(7), d).unwrap(), dec(0));

        assert_eq!(sub(&dec(-5), &dec(-7), d).unwrap(), dec(2));
        assert_eq!(sub(&dec(5), &dec(-7), d).unwrap(), dec(12));
        assert_eq!(sub(&dec(-5), &dec(7), d).unwrap(), dec(-12));
        assert_eq!(sub(&dec(5), &dec(7), d).unwrap(), dec(-2));
    }

    #[test]
    fn test_equal_operands_give_positive_zero() {
        let res = sub(&dec(42), &dec(42), Base::DECIMAL).unwrap();
        assert_eq!(res, BigInt::zero());
        assert_eq!(res.sign(), Sign::Positive);
        assert_eq!(res.magnitude().digits(), &[0]);
    }

    #[test]
    fn test_binary_chain() {
        let b = Base::BINARY;
        let mut acc = BigInt::zero();
        let one = BigInt::from_i64(1, b);
        for _ in 0..255 {
            acc = add(&acc, &one, b).unwrap();
        }
        assert_eq!(acc.magnitude().digits(), &[1; 8]);
        acc = add(&acc, &one, b).unwrap();
        assert_eq!(acc.magnitude(), &BigNat::from_u64(256, b));
    }

    #[test]
    fn test_rejects_out_of_range_digit() {
        let bad = BigInt::from_digits(Sign::Positive, vec![1, 12], Base::HEX).unwrap();
        assert_eq!(
            add(&bad, &dec(1), Base::DECIMAL),
            Err(RadixError::InvalidArgument(
                InvalidArgument::DigitOutOfRange { digit: 12, base: 10 }
            ))
        );
    }

    #[test]
    fn test_operands_untouched() {
        let x = dec(7);
        let y = dec(12345);
        let _ = add(&x, &y, Base::DECIMAL).unwrap();
        assert_eq!(x.magnitude().digits(), &[7]);
        assert_eq!(y.magnitude().digits(), &[1, 2, 3, 4, 5]);
    }
}
