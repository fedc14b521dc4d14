//! This crate is my attempt at writing the big integer part of a standard library.
//!
//! # Purpose
//! Most of the "standard library reimplementation" idea is a matter of aliasing or wrapping what
//! already exists. Big integers are the exception: there is no primitive to lean on, so every
//! carry, borrow and sign bit has to be pushed through by hand. This crate is where that happens.
//!
//! # Method
//! Values are stored as a sequence of *limbs* (unsigned machine words), least significant first,
//! and interpreted as two's complement across the whole sequence. The top bit of the top limb is
//! the sign bit and reading past the end of the sequence yields more copies of it, which is what
//! lets operands of different lengths be combined without special cases.
//!
//! The code is split into three layers:
//! - [`num::algo`]: stateless functions over limb slices (add, subtract, bitwise operations,
//!   shifts, comparison and radix conversion).
//! - [`num::storage`]: where the limbs live. [`HeapLimbs`](num::storage::HeapLimbs) grows and
//!   shrinks with the value, [`InlineLimbs`](num::storage::InlineLimbs) is a fixed array.
//! - [`num::int`]: the [`Integer`](num::int::Integer) façade and its operators, with the aliases
//!   [`BigInt`](num::int::BigInt) and [`FixedBigInt`](num::int::FixedBigInt).
//!
//! # Error Handling
//! Arithmetic never fails. A [`BigInt`](num::int::BigInt) simply grows, while a
//! [`FixedBigInt`](num::int::FixedBigInt) wraps around like [`Wrapping`](std::num::Wrapping)
//! does, with `overflowing_*` and `checked_*` variants for when that matters.
//!
//! Parsing text is the only fallible operation (along with conversions back into primitive
//! integers). Errors are strongly typed, using enums for static dispatch over small structs that
//! implement [`Error`](std::error::Error).
//!
//! # Dependencies
//! `derive_more` removes the repetitive parts of the error types and `log` is used for the odd
//! diagnostic message. No logger is installed by this crate.
//!
//! # Potential Future Additions
//! - Multiplication and division of two big integers.
//! - `no_std` support for [`FixedBigInt`](num::int::FixedBigInt).
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod num;

pub(crate) mod util;

#[cfg(feature = "fixed")]
#[doc(inline)]
pub use num::int::FixedBigInt;
#[cfg(feature = "dynamic")]
#[doc(inline)]
pub use num::int::BigInt;
#[doc(inline)]
pub use num::int::Integer;
