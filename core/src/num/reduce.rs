use crate::error::{BResult, InvalidArgument};
use crate::interrupt::{test_int, Interrupt};
use crate::num::addsub::sub_smaller;
use crate::num::{Base, BigInt, BigNat, Digit};

/// The outcome of dividing by a modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Always in `[0, m)`, whatever the sign of the dividend.
    pub remainder: BigNat,
    /// `|x| / m`, rounded towards zero.
    pub quotient: BigNat,
}

/// Reduces `x` modulo `m` by schoolbook long division.
///
/// Negative dividends are mapped into `[0, m)`, so this is a true
/// mathematical modulus rather than a truncated remainder.
pub fn reduce<I: Interrupt>(x: &BigInt, m: &BigNat, base: Base, int: &I) -> BResult<Reduction> {
    base.check_digits(x.magnitude().digits())?;
    base.check_digits(m.digits())?;
    reduce_unchecked(x, m, base, int)
}

pub(crate) fn reduce_unchecked<I: Interrupt>(
    x: &BigInt,
    m: &BigNat,
    base: Base,
    int: &I,
) -> BResult<Reduction> {
    if m.is_zero() {
        return Err(InvalidArgument::ZeroModulus.into());
    }
    let Reduction {
        remainder,
        quotient,
    } = divide_magnitude(x.magnitude(), m, base, int)?;
    let remainder = if x.is_negative() && !remainder.is_zero() {
        sub_smaller(m, &remainder, base)
    } else {
        remainder
    };
    Ok(Reduction {
        remainder,
        quotient,
    })
}

/// Long division of `x` by `m > 0`: at each alignment, most significant
/// first, subtract `m * base^shift` for as long as the remainder stays
/// non-negative. The number of subtractions is the quotient digit.
fn divide_magnitude<I: Interrupt>(
    x: &BigNat,
    m: &BigNat,
    base: Base,
    int: &I,
) -> BResult<Reduction> {
    if x < m {
        return Ok(Reduction {
            remainder: x.clone(),
            quotient: BigNat::zero(),
        });
    }

    let steps = x.len() - m.len();
    let mut remainder = x.clone();
    let mut quotient: Vec<Digit> = Vec::with_capacity(steps + 1);
    for shift in (0..=steps).rev() {
        test_int(int)?;
        let shifted = m.shifted(shift);
        // remainder < shifted * base here, so count stays below base
        let mut count: Digit = 0;
        while remainder >= shifted {
            test_int(int)?;
            remainder = sub_smaller(&remainder, &shifted, base);
            count += 1;
        }
        quotient.push(count);
    }
    log::trace!(
        "reduced {} digits by {} digits in {} alignments",
        x.len(),
        m.len(),
        steps + 1
    );
    Ok(Reduction {
        remainder,
        quotient: BigNat::from_digits_unchecked(quotient),
    })
}
