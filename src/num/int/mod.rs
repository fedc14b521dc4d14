//! A module containing [`Integer`] and its storage-specific aliases, [`BigInt`] and
//! [`FixedBigInt`].
//!
//! Operators are implemented once, generically over the storage, with the right-hand side being
//! another Integer (owned or borrowed) or any primitive integer.
//!
//! | Operation | `BigInt` | `FixedBigInt<N>` |
//! |-|-|-|
//! | `+`, `-`, unary `-` | grows by up to one limb | wraps |
//! | `&`, `\|`, `^`, `!` | exact | exact |
//! | `<<` | grows by the shifted limbs | bits past the top are lost |
//! | `>>` | shrinks | sign fills from the top |

mod cmp;
mod convert;
mod fmt;
mod integer;
mod ops;
mod properties;
mod tests;

pub use integer::*;

#[cfg(feature = "dynamic")]
use crate::num::storage::HeapLimbs;
#[cfg(feature = "fixed")]
use crate::num::storage::InlineLimbs;

/// The limb used by the [`BigInt`] and [`FixedBigInt`] aliases.
pub type Word = u64;

/// An arbitrary-precision signed integer that grows as needed.
///
/// # Examples
/// ```
/// # use standard_bigint::BigInt;
/// let mut x = BigInt::from(u64::MAX);
/// x += 1;
/// assert_eq!(x.to_string(), "18446744073709551616");
/// x <<= 64;
/// assert_eq!(x.to_string(), "340282366920938463463374607431768211456");
/// ```
#[cfg(feature = "dynamic")]
pub type BigInt = Integer<HeapLimbs<Word>>;

/// A signed integer of exactly `N` words, stored inline. Arithmetic wraps around like it does for
/// [`Wrapping`](std::num::Wrapping).
///
/// # Examples
/// ```
/// # use standard_bigint::FixedBigInt;
/// let mut x = FixedBigInt::<2>::from(i128::MAX);
/// x += 1;
/// assert_eq!(x, i128::MIN);
/// ```
#[cfg(feature = "fixed")]
pub type FixedBigInt<const N: usize> = Integer<InlineLimbs<N, Word>>;
