//! Arbitrary-precision signed integers.
//!
//! # Purpose
//! The types here reproduce the behaviour of Rust's signed primitives (two's complement, arithmetic
//! right shifts, sign-extending bitwise operations) for widths that no primitive covers.
//!
//! # Method
//! Everything in [`algo`] works on plain limb slices and knows nothing about allocation. The
//! [`int::Integer`] façade widens its [`storage`] before each operation and tidies it up
//! afterwards, which is the only difference between the growable and the fixed variant.

pub mod algo;
pub mod error;
pub mod int;
pub mod limb;
pub mod storage;
