//! Arbitrary-precision integer arithmetic on digit sequences in any base.
//!
//! Numbers are a [`Sign`] plus a most-significant-first sequence of digits
//! ([`BigNat`]). The base is never stored on a number: every operation is
//! given it explicitly, or takes it from a [`Context`].
//!
//! ```
//! use radix_core::{add, Base, BigInt, Sign};
//!
//! let d = Base::DECIMAL;
//! let x = BigInt::from_digits(Sign::Positive, vec![9, 9], d).unwrap();
//! let y = BigInt::from_digits(Sign::Positive, vec![1], d).unwrap();
//! assert_eq!(add(&x, &y, d).unwrap().magnitude().digits(), &[1, 0, 0]);
//! ```

#![forbid(unsafe_code)]

mod context;
mod error;
mod interrupt;
mod num;
mod tally;

pub use context::Context;
pub use error::{BResult, InvalidArgument, RadixError};
pub use interrupt::{Interrupt, Never};
pub use num::{
    add, extended_gcd, karatsuba, mod_add, mod_inverse, mod_mul, mod_sub, mul, normalize, reduce,
    sub, Base, Bezout, BigInt, BigNat, Digit, Multiplier, Reduction, Sign, KARATSUBA_CUTOFF,
};
pub use tally::{OpCounts, Tally};
