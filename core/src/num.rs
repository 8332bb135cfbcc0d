mod addsub;
mod base;
mod bigint;
mod bignat;
mod euclid;
mod modular;
mod mul;
mod reduce;

/// A single digit. Every digit of a number in base `b` is below `b`.
pub type Digit = u32;

pub use addsub::{add, sub};
pub use base::Base;
pub use bigint::{BigInt, Sign};
pub use bignat::{normalize, BigNat};
pub use euclid::{extended_gcd, Bezout};
pub use modular::{mod_add, mod_inverse, mod_mul, mod_sub};
pub use mul::{karatsuba, mul, Multiplier, KARATSUBA_CUTOFF};
pub use reduce::{reduce, Reduction};

pub(crate) use euclid::extended_gcd_unchecked;
pub(crate) use modular::{mod_inverse_unchecked, mod_mul_unchecked};
pub(crate) use mul::MulStrategy;
