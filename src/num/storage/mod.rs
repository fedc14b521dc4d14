//! Where the limbs of an [`Integer`](crate::num::int::Integer) live.
//!
//! The façade only talks to storage through [`LimbStorage`], which decides two things: how a
//! sequence is brought in from outside ([`from_limbs`](LimbStorage::from_limbs)) and what happens
//! to the width around an operation ([`widen`](LimbStorage::widen) before,
//! [`settle`](LimbStorage::settle) after).
//!
//! | Storage | Width | Overflow |
//! |-|-|-|
//! | [`HeapLimbs`] | grows and shrinks with the value | never |
//! | [`InlineLimbs`] | exactly `N` limbs | wraps modulo `2^(N * BITS)` |

#[cfg(feature = "dynamic")]
mod heap;
#[cfg(feature = "fixed")]
mod inline;

#[cfg(feature = "dynamic")]
pub use heap::*;
#[cfg(feature = "fixed")]
pub use inline::*;

use crate::num::error::CapacityExceededError;
use crate::num::limb::Limb;

/// A storage strategy for a non-empty, two's complement limb sequence.
pub trait LimbStorage: Clone {
    type Limb: Limb;

    /// Storage holding the value zero.
    fn zeroed() -> Self;

    /// Builds storage holding the value of `limbs`, which may be of any length (an empty sequence
    /// is zero). Storage that can't hold the value keeps its low limbs.
    fn from_limbs(limbs: &[Self::Limb]) -> Self;

    /// Checks that [`from_limbs`](LimbStorage::from_limbs) wouldn't need to drop significant limbs.
    ///
    /// # Errors
    /// Returns [`CapacityExceededError`] if the value is too wide for this storage.
    fn check_fits(_limbs: &[Self::Limb]) -> Result<(), CapacityExceededError> {
        Ok(())
    }

    fn limbs(&self) -> &[Self::Limb];

    fn limbs_mut(&mut self) -> &mut [Self::Limb];

    /// Prepares for an operation whose result needs up to `len` limbs, sign-extending the current
    /// value. Storage with a fixed width ignores this, so results wrap instead.
    ///
    /// # Panics
    /// Growable storage panics if `len` limbs would be wider than [`isize::MAX`] bits.
    fn widen(&mut self, len: usize);

    /// Tidies up after an operation.
    fn settle(&mut self);
}
