use crate::error::BResult;
use crate::interrupt::{test_int, Interrupt};
use crate::num::addsub::{add_magnitudes, sub_magnitudes, sub_unchecked};
use crate::num::bignat::padded;
use crate::num::{Base, BigInt, BigNat, Digit};

/// Operands with at most this many digits are multiplied directly.
pub const KARATSUBA_CUTOFF: usize = 1;

/// Which algorithm computes products.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Multiplier {
    Schoolbook,
    #[default]
    Karatsuba,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct MulStrategy {
    pub(crate) multiplier: Multiplier,
    pub(crate) cutoff: usize,
}

impl MulStrategy {
    pub(crate) const SCHOOLBOOK: Self = Self {
        multiplier: Multiplier::Schoolbook,
        cutoff: KARATSUBA_CUTOFF,
    };

    pub(crate) const KARATSUBA: Self = Self {
        multiplier: Multiplier::Karatsuba,
        cutoff: KARATSUBA_CUTOFF,
    };

    pub(crate) fn product<I: Interrupt>(
        self,
        x: &BigInt,
        y: &BigInt,
        base: Base,
        int: &I,
    ) -> BResult<BigInt> {
        let (a, b) = (x.magnitude(), y.magnitude());
        let magnitude = match self.multiplier {
            Multiplier::Schoolbook => schoolbook_magnitudes(a, b, base, int)?,
            Multiplier::Karatsuba => karatsuba_magnitudes(a, b, base, self.cutoff.max(1), int)?,
        };
        Ok(BigInt::new(x.sign().product(y.sign()), magnitude))
    }
}

/// Schoolbook `O(n^2)` multiplication.
pub fn mul<I: Interrupt>(x: &BigInt, y: &BigInt, base: Base, int: &I) -> BResult<BigInt> {
    base.check_digits(x.magnitude().digits())?;
    base.check_digits(y.magnitude().digits())?;
    MulStrategy::SCHOOLBOOK.product(x, y, base, int)
}

/// Karatsuba multiplication, falling back to [`mul`] once an operand is a
/// single digit.
pub fn karatsuba<I: Interrupt>(x: &BigInt, y: &BigInt, base: Base, int: &I) -> BResult<BigInt> {
    base.check_digits(x.magnitude().digits())?;
    base.check_digits(y.magnitude().digits())?;
    MulStrategy::KARATSUBA.product(x, y, base, int)
}

pub(crate) fn schoolbook_magnitudes<I: Interrupt>(
    a: &BigNat,
    b: &BigNat,
    base: Base,
    int: &I,
) -> BResult<BigNat> {
    let n = a.len().max(b.len());
    let x = padded(a.digits(), n);
    let y = padded(b.digits(), n);

    // little-endian: acc[k] collects every product landing on b^k
    let mut acc = vec![0_i128; 2 * n];
    for i in 0..n {
        test_int(int)?;
        let yi = i128::from(y[n - 1 - i]);
        if yi == 0 {
            continue;
        }
        for j in 0..n {
            acc[i + j] += i128::from(x[n - 1 - j]) * yi;
        }
    }
    Ok(resolve_carries(acc, base))
}

pub(crate) fn karatsuba_magnitudes<I: Interrupt>(
    a: &BigNat,
    b: &BigNat,
    base: Base,
    cutoff: usize,
    int: &I,
) -> BResult<BigNat> {
    test_int(int)?;
    if a.len() <= cutoff || b.len() <= cutoff {
        return schoolbook_magnitudes(a, b, base, int);
    }

    let half = (a.len().max(b.len()) + 1) / 2;
    log::trace!(
        "karatsuba: {} x {} digits, splitting at {}",
        a.len(),
        b.len(),
        half
    );
    let (x_hi, x_lo) = split(a, half);
    let (y_hi, y_lo) = split(b, half);

    let xy_hi = karatsuba_magnitudes(&x_hi, &y_hi, base, cutoff, int)?;
    let xy_lo = karatsuba_magnitudes(&x_lo, &y_lo, base, cutoff, int)?;
    let sum_x = add_magnitudes(&x_hi, &x_lo, base);
    let sum_y = add_magnitudes(&y_hi, &y_lo, base);
    let sum_xy = karatsuba_magnitudes(&sum_x, &sum_y, base, cutoff, int)?;

    let mix = sub_unchecked(
        &sub_magnitudes(&sum_xy, &xy_hi, base),
        &BigInt::from(xy_lo.clone()),
        base,
    );
    let mix_factor = if mix.is_negative() { -1 } else { 1 };

    let mut acc = vec![0_i128; 4 * half + 2];
    accumulate(&mut acc, &xy_lo, 0, 1);
    accumulate(&mut acc, mix.magnitude(), half, mix_factor);
    accumulate(&mut acc, &xy_hi, 2 * half, 1);
    Ok(resolve_carries(acc, base))
}

/// Pads `n` to `2 * half` digits and returns the high and low halves.
fn split(n: &BigNat, half: usize) -> (BigNat, BigNat) {
    let digits = padded(n.digits(), 2 * half);
    let (hi, lo) = digits.split_at(half);
    (
        BigNat::from_digits_unchecked(hi.to_vec()),
        BigNat::from_digits_unchecked(lo.to_vec()),
    )
}

/// Adds `factor * n * base^offset` into the little-endian accumulator.
fn accumulate(acc: &mut Vec<i128>, n: &BigNat, offset: usize, factor: i128) {
    if acc.len() < offset + n.len() {
        acc.resize(offset + n.len(), 0);
    }
    for (k, &d) in n.digits().iter().rev().enumerate() {
        acc[offset + k] += factor * i128::from(d);
    }
}

/// Turns a little-endian accumulator whose positions may hold any value
/// (including negative ones) into normalised digits.
///
/// Each step carries the whole floor quotient to the next position, so a
/// single pass leaves every digit in `[0, base)`. The represented value
/// must be non-negative.
fn resolve_carries(acc: Vec<i128>, base: Base) -> BigNat {
    let b = base.as_i128();
    let mut digits = Vec::with_capacity(acc.len() + 1);
    let mut carry = 0_i128;
    for v in acc {
        let v = v + carry;
        digits.push(to_digit(v.rem_euclid(b)));
        carry = v.div_euclid(b);
    }
    debug_assert!(carry >= 0, "product accumulator went negative");
    while carry > 0 {
        digits.push(to_digit(carry % b));
        carry /= b;
    }
    digits.reverse();
    BigNat::from_digits_unchecked(digits)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_digit(v: i128) -> Digit {
    v as Digit
}
