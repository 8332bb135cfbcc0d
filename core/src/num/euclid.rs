use crate::error::{BResult, InvalidArgument};
use crate::interrupt::{test_int, Interrupt};
use crate::num::addsub::sub_unchecked;
use crate::num::mul::MulStrategy;
use crate::num::reduce::reduce_unchecked;
use crate::num::{Base, BigInt, BigNat, Reduction};

/// `gcd = x * x_coeff + y * y_coeff`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bezout {
    pub gcd: BigNat,
    pub x_coeff: BigInt,
    pub y_coeff: BigInt,
}

/// Extended Euclidean algorithm.
///
/// The gcd is always returned as a non-negative magnitude. The
/// coefficients account for the signs of `x` and `y`. `y` must be nonzero.
pub fn extended_gcd<I: Interrupt>(
    x: &BigInt,
    y: &BigInt,
    base: Base,
    int: &I,
) -> BResult<Bezout> {
    base.check_digits(x.magnitude().digits())?;
    base.check_digits(y.magnitude().digits())?;
    extended_gcd_unchecked(x, y, base, MulStrategy::KARATSUBA, int)
}

pub(crate) fn extended_gcd_unchecked<I: Interrupt>(
    x: &BigInt,
    y: &BigInt,
    base: Base,
    strategy: MulStrategy,
    int: &I,
) -> BResult<Bezout> {
    if y.is_zero() {
        return Err(InvalidArgument::ZeroDivisor.into());
    }

    // a = x1 * |x| + y1 * |y| and b = x2 * |x| + y2 * |y| hold throughout
    let mut a = x.abs();
    let mut b = y.abs();
    let (mut x1, mut x2) = (BigInt::from(BigNat::one()), BigInt::zero());
    let (mut y1, mut y2) = (BigInt::zero(), BigInt::from(BigNat::one()));

    let mut steps = 0_usize;
    while !b.is_zero() {
        test_int(int)?;
        let Reduction {
            remainder,
            quotient,
        } = reduce_unchecked(&a, b.magnitude(), base, int)?;
        let quotient = BigInt::from(quotient);

        let x3 = sub_unchecked(&x1, &strategy.product(&quotient, &x2, base, int)?, base);
        let y3 = sub_unchecked(&y1, &strategy.product(&quotient, &y2, base, int)?, base);

        a = b;
        b = BigInt::from(remainder);
        x1 = x2;
        x2 = x3;
        y1 = y2;
        y2 = y3;
        steps += 1;
    }
    log::debug!("extended gcd finished after {} steps", steps);

    let x_coeff = if x.is_negative() { -x1 } else { x1 };
    let y_coeff = if y.is_negative() { -y1 } else { y1 };
    Ok(Bezout {
        gcd: a.into_parts().1,
        x_coeff,
        y_coeff,
    })
}
