use std::cell::Cell;

use crate::context::Context;
use crate::error::BResult;
use crate::interrupt::Interrupt;
use crate::num::{Bezout, BigInt, BigNat, Reduction};

/// How many operations of each kind a [`Tally`] has forwarded.
///
/// A modular wrapper counts as its underlying operation plus one
/// reduction, so `mod_mul` bumps both `multiplications` and `reductions`.
/// Calls that fail are counted as well.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub additions: u64,
    pub subtractions: u64,
    pub multiplications: u64,
    pub reductions: u64,
    pub gcds: u64,
    pub inversions: u64,
}

/// Forwards operations to a [`Context`] while counting them.
pub struct Tally<'a, I: Interrupt> {
    context: &'a Context,
    int: I,
    counts: Cell<OpCounts>,
}

impl<'a, I: Interrupt> Tally<'a, I> {
    pub fn new(context: &'a Context, int: I) -> Self {
        Self {
            context,
            int,
            counts: Cell::new(OpCounts::default()),
        }
    }

    pub fn counts(&self) -> OpCounts {
        self.counts.get()
    }

    pub fn reset(&self) {
        self.counts.set(OpCounts::default());
    }

    pub fn context(&self) -> &Context {
        self.context
    }

    fn bump(&self, f: impl FnOnce(&mut OpCounts)) {
        let mut counts = self.counts.get();
        f(&mut counts);
        self.counts.set(counts);
    }

    pub fn add(&self, x: &BigInt, y: &BigInt) -> BResult<BigInt> {
        self.bump(|c| c.additions += 1);
        self.context.add(x, y)
    }

    pub fn sub(&self, x: &BigInt, y: &BigInt) -> BResult<BigInt> {
        self.bump(|c| c.subtractions += 1);
        self.context.sub(x, y)
    }

    pub fn mul(&self, x: &BigInt, y: &BigInt) -> BResult<BigInt> {
        self.bump(|c| c.multiplications += 1);
        self.context.mul(x, y, &self.int)
    }

    pub fn reduce(&self, x: &BigInt, m: &BigNat) -> BResult<Reduction> {
        self.bump(|c| c.reductions += 1);
        self.context.reduce(x, m, &self.int)
    }

    pub fn extended_gcd(&self, x: &BigInt, y: &BigInt) -> BResult<Bezout> {
        self.bump(|c| c.gcds += 1);
        self.context.extended_gcd(x, y, &self.int)
    }

    pub fn mod_add(&self, x: &BigInt, y: &BigInt, m: &BigNat) -> BResult<BigNat> {
        self.bump(|c| {
            c.additions += 1;
            c.reductions += 1;
        });
        self.context.mod_add(x, y, m, &self.int)
    }

    pub fn mod_sub(&self, x: &BigInt, y: &BigInt, m: &BigNat) -> BResult<BigNat> {
        self.bump(|c| {
            c.subtractions += 1;
            c.reductions += 1;
        });
        self.context.mod_sub(x, y, m, &self.int)
    }

    pub fn mod_mul(&self, x: &BigInt, y: &BigInt, m: &BigNat) -> BResult<BigNat> {
        self.bump(|c| {
            c.multiplications += 1;
            c.reductions += 1;
        });
        self.context.mod_mul(x, y, m, &self.int)
    }

    pub fn mod_inverse(&self, x: &BigInt, m: &BigNat) -> BResult<BigNat> {
        self.bump(|c| c.inversions += 1);
        self.context.mod_inverse(x, m, &self.int)
    }
}

#[cfg(test)]
mod tests {
    use super::{OpCounts, Tally};
    use crate::context::Context;
    use crate::interrupt::Never;
    use crate::num::{BigInt, BigNat};

    #[test]
    fn test_counts() {
        let ctx = Context::new();
        let tally = Tally::new(&ctx, Never::default());
        let base = ctx.base();
        let x = BigInt::from_i64(12, base);
        let y = BigInt::from_i64(8, base);
        let m = BigNat::from_u64(7, base);

        let sum = tally.add(&x, &y).unwrap();
        let _ = tally.mul(&sum, &y).unwrap();
        let _ = tally.mod_mul(&x, &y, &m).unwrap();
        let _ = tally.extended_gcd(&x, &y).unwrap();
        assert_eq!(
            tally.counts(),
            OpCounts {
                additions: 1,
                multiplications: 2,
                reductions: 1,
                gcds: 1,
                ..OpCounts::default()
            }
        );

        tally.reset();
        assert_eq!(tally.counts(), OpCounts::default());
    }

    #[test]
    fn test_failed_calls_are_counted() {
        let ctx = Context::new();
        let tally = Tally::new(&ctx, Never::default());
        let x = BigInt::from_i64(4, ctx.base());
        assert!(tally.mod_inverse(&x, &BigNat::from_u64(8, ctx.base())).is_err());
        assert_eq!(tally.counts().inversions, 1);
    }
}
