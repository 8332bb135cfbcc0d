use crate::error::{BResult, InvalidArgument, RadixError};
use crate::interrupt::Interrupt;
use crate::num::addsub::{add_unchecked, sub_unchecked};
use crate::num::euclid::extended_gcd_unchecked;
use crate::num::mul::MulStrategy;
use crate::num::reduce::reduce_unchecked;
use crate::num::{Base, BigInt, BigNat};

fn check_operands(base: Base, operands: &[&BigInt], m: &BigNat) -> BResult<()> {
    for x in operands {
        base.check_digits(x.magnitude().digits())?;
    }
    base.check_digits(m.digits())?;
    if m.is_zero() {
        return Err(InvalidArgument::ZeroModulus.into());
    }
    Ok(())
}

/// `(x + y) mod m`, in `[0, m)`.
pub fn mod_add<I: Interrupt>(
    x: &BigInt,
    y: &BigInt,
    m: &BigNat,
    base: Base,
    int: &I,
) -> BResult<BigNat> {
    check_operands(base, &[x, y], m)?;
    Ok(reduce_unchecked(&add_unchecked(x, y, base), m, base, int)?.remainder)
}

/// `(x - y) mod m`, in `[0, m)`.
pub fn mod_sub<I: Interrupt>(
    x: &BigInt,
    y: &BigInt,
    m: &BigNat,
    base: Base,
    int: &I,
) -> BResult<BigNat> {
    check_operands(base, &[x, y], m)?;
    Ok(reduce_unchecked(&sub_unchecked(x, y, base), m, base, int)?.remainder)
}

/// `(x * y) mod m`, in `[0, m)`, using schoolbook multiplication.
pub fn mod_mul<I: Interrupt>(
    x: &BigInt,
    y: &BigInt,
    m: &BigNat,
    base: Base,
    int: &I,
) -> BResult<BigNat> {
    check_operands(base, &[x, y], m)?;
    mod_mul_unchecked(x, y, m, base, MulStrategy::SCHOOLBOOK, int)
}

pub(crate) fn mod_mul_unchecked<I: Interrupt>(
    x: &BigInt,
    y: &BigInt,
    m: &BigNat,
    base: Base,
    strategy: MulStrategy,
    int: &I,
) -> BResult<BigNat> {
    let product = strategy.product(x, y, base, int)?;
    Ok(reduce_unchecked(&product, m, base, int)?.remainder)
}

/// The `v` in `[0, m)` with `x * v = 1 (mod m)`.
///
/// Returns [`RadixError::NoInverse`] when `x` and `m` are not coprime.
pub fn mod_inverse<I: Interrupt>(x: &BigInt, m: &BigNat, base: Base, int: &I) -> BResult<BigNat> {
    check_operands(base, &[x], m)?;
    mod_inverse_unchecked(x, m, base, MulStrategy::KARATSUBA, int)
}

pub(crate) fn mod_inverse_unchecked<I: Interrupt>(
    x: &BigInt,
    m: &BigNat,
    base: Base,
    strategy: MulStrategy,
    int: &I,
) -> BResult<BigNat> {
    let reduced = reduce_unchecked(x, m, base, int)?.remainder;
    let bezout = extended_gcd_unchecked(
        &BigInt::from(reduced),
        &BigInt::from(m.clone()),
        base,
        strategy,
        int,
    )?;
    if !bezout.gcd.is_one() {
        log::debug!("no inverse modulo {:?}: gcd is {:?}", m, bezout.gcd);
        return Err(RadixError::NoInverse);
    }
    Ok(reduce_unchecked(&bezout.x_coeff, m, base, int)?.remainder)
}
