use crate::error::BResult;
use crate::interrupt::Interrupt;
use crate::num::{
    self, extended_gcd_unchecked, mod_inverse_unchecked, mod_mul_unchecked, Base, Bezout, BigInt,
    BigNat, MulStrategy, Multiplier, Reduction, KARATSUBA_CUTOFF,
};

/// Settings shared by a series of operations: the base every operand is
/// written in and how products are computed.
///
/// With the `config` feature a context can be read from TOML:
///
/// ```toml
/// base = 16
/// multiplier = "karatsuba"
/// karatsuba_cutoff = 4
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, deny_unknown_fields)
)]
pub struct Context {
    base: Base,
    multiplier: Multiplier,
    karatsuba_cutoff: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            base: Base::DECIMAL,
            multiplier: Multiplier::Karatsuba,
            karatsuba_cutoff: KARATSUBA_CUTOFF,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: Base) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    #[cfg(feature = "config")]
    pub fn from_toml(input: &str) -> BResult<Self> {
        let context: Self =
            toml::from_str(input).map_err(|e| crate::RadixError::Config(e.to_string()))?;
        log::debug!("loaded {:?}", context);
        Ok(context)
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn set_base(&mut self, base: Base) {
        self.base = base;
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn set_multiplier(&mut self, multiplier: Multiplier) {
        self.multiplier = multiplier;
    }

    pub fn karatsuba_cutoff(&self) -> usize {
        self.karatsuba_cutoff.max(1)
    }

    /// Operands with at most `cutoff` digits skip the Karatsuba split.
    /// Values below 1 are treated as 1.
    pub fn set_karatsuba_cutoff(&mut self, cutoff: usize) {
        self.karatsuba_cutoff = cutoff.max(1);
    }

    fn strategy(&self) -> MulStrategy {
        MulStrategy {
            multiplier: self.multiplier,
            cutoff: self.karatsuba_cutoff(),
        }
    }

    fn check(&self, operands: &[&BigInt]) -> BResult<()> {
        for x in operands {
            self.base.check_digits(x.magnitude().digits())?;
        }
        Ok(())
    }

    pub fn parse(&self, input: &str) -> BResult<BigInt> {
        BigInt::parse(input, self.base)
    }

    pub fn format(&self, x: &BigInt) -> BResult<String> {
        x.format(self.base)
    }

    pub fn add(&self, x: &BigInt, y: &BigInt) -> BResult<BigInt> {
        num::add(x, y, self.base)
    }

    pub fn sub(&self, x: &BigInt, y: &BigInt) -> BResult<BigInt> {
        num::sub(x, y, self.base)
    }

    /// Multiplies with the configured [`Multiplier`].
    pub fn mul<I: Interrupt>(&self, x: &BigInt, y: &BigInt, int: &I) -> BResult<BigInt> {
        self.check(&[x, y])?;
        self.strategy().product(x, y, self.base, int)
    }

    pub fn reduce<I: Interrupt>(&self, x: &BigInt, m: &BigNat, int: &I) -> BResult<Reduction> {
        num::reduce(x, m, self.base, int)
    }

    pub fn extended_gcd<I: Interrupt>(&self, x: &BigInt, y: &BigInt, int: &I) -> BResult<Bezout> {
        self.check(&[x, y])?;
        extended_gcd_unchecked(x, y, self.base, self.strategy(), int)
    }

    pub fn mod_add<I: Interrupt>(
        &self,
        x: &BigInt,
        y: &BigInt,
        m: &BigNat,
        int: &I,
    ) -> BResult<BigNat> {
        num::mod_add(x, y, m, self.base, int)
    }

    pub fn mod_sub<I: Interrupt>(
        &self,
        x: &BigInt,
        y: &BigInt,
        m: &BigNat,
        int: &I,
    ) -> BResult<BigNat> {
        num::mod_sub(x, y, m, self.base, int)
    }

    pub fn mod_mul<I: Interrupt>(
        &self,
        x: &BigInt,
        y: &BigInt,
        m: &BigNat,
        int: &I,
    ) -> BResult<BigNat> {
        self.check(&[x, y])?;
        self.base.check_digits(m.digits())?;
        mod_mul_unchecked(x, y, m, self.base, self.strategy(), int)
    }

    pub fn mod_inverse<I: Interrupt>(&self, x: &BigInt, m: &BigNat, int: &I) -> BResult<BigNat> {
        self.check(&[x])?;
        self.base.check_digits(m.digits())?;
        mod_inverse_unchecked(x, m, self.base, self.strategy(), int)
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::interrupt::Never;
    use crate::num::{Base, BigNat, Multiplier};

    #[test]
    fn test_defaults() {
        let ctx = Context::new();
        assert_eq!(ctx.base(), Base::DECIMAL);
        assert_eq!(ctx.multiplier(), Multiplier::Karatsuba);
        assert_eq!(ctx.karatsuba_cutoff(), 1);
    }

    #[test]
    fn test_cutoff_is_clamped() {
        let mut ctx = Context::new();
        ctx.set_karatsuba_cutoff(0);
        assert_eq!(ctx.karatsuba_cutoff(), 1);
    }

    #[test]
    fn test_multipliers_agree() {
        let int = &Never::default();
        let mut ctx = Context::with_base(Base::HEX);
        let x = ctx.parse("-fedcba9876543210").unwrap();
        let y = ctx.parse("123456789abcdef").unwrap();
        let karatsuba = ctx.mul(&x, &y, int).unwrap();
        ctx.set_multiplier(Multiplier::Schoolbook);
        assert_eq!(ctx.mul(&x, &y, int).unwrap(), karatsuba);
        ctx.set_karatsuba_cutoff(3);
        ctx.set_multiplier(Multiplier::Karatsuba);
        assert_eq!(ctx.mul(&x, &y, int).unwrap(), karatsuba);
        assert_eq!(
            ctx.format(&karatsuba).unwrap(),
            "-121fa00ad77d7422236d88fe5618cf0"
        );
    }

    #[test]
    fn test_mod_mul_uses_base() {
        let int = &Never::default();
        let ctx = Context::with_base(Base::BYTE);
        let m = BigNat::from_u64(1_000_003, Base::BYTE);
        let x = crate::num::BigInt::from_i64(123_456_789, Base::BYTE);
        let res = ctx.mod_mul(&x, &x, &m, int).unwrap();
        let expected = (123_456_789_u128 * 123_456_789) % 1_000_003;
        assert_eq!(res.to_u128(Base::BYTE), Some(expected));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml() {
        let ctx = Context::from_toml(
            "base = 16\nmultiplier = \"schoolbook\"\nkaratsuba_cutoff = 4\n",
        )
        .unwrap();
        assert_eq!(ctx.base(), Base::HEX);
        assert_eq!(ctx.multiplier(), Multiplier::Schoolbook);
        assert_eq!(ctx.karatsuba_cutoff(), 4);

        assert_eq!(Context::from_toml("").unwrap(), Context::new());
        assert!(Context::from_toml("base = 1").is_err());
        assert!(Context::from_toml("precision = 3").is_err());
    }
}
