use std::ops::{Deref, DerefMut};

use super::LimbStorage;
use crate::num::algo;
use crate::num::error::CapacityExceededError;
use crate::num::limb::Limb;

/// Exactly `N` limbs stored inline, with no allocation. Arithmetic on this storage wraps modulo
/// `2^(N * L::BITS)`.
///
/// `N` must be at least one, which is checked at compile time.
#[derive(Debug, Clone, Copy)]
pub struct InlineLimbs<const N: usize, L: Limb>(pub(crate) [L; N]);

impl<const N: usize, L: Limb> InlineLimbs<N, L> {
    const NON_EMPTY: () = assert!(N > 0, "inline storage needs at least one limb");
}

impl<const N: usize, L: Limb> LimbStorage for InlineLimbs<N, L> {
    type Limb = L;

    fn zeroed() -> Self {
        let () = Self::NON_EMPTY;
        InlineLimbs([L::ZERO; N])
    }

    /// Sign-extends shorter sequences and keeps the low `N` limbs of longer ones.
    fn from_limbs(limbs: &[L]) -> Self {
        let mut storage = Self::zeroed();

        for (index, limb) in storage.0.iter_mut().enumerate() {
            *limb = algo::limb_at(limbs, index);
        }

        if algo::normalized_len(limbs) > N {
            log::trace!("truncating a {}-limb value to {} inline limbs", limbs.len(), N);
        }

        storage
    }

    fn check_fits(limbs: &[L]) -> Result<(), CapacityExceededError> {
        match algo::normalized_len(limbs) {
            required if required > N => Err(CapacityExceededError {
                required,
                capacity: N,
            }),
            _ => Ok(()),
        }
    }

    fn limbs(&self) -> &[L] {
        &self.0
    }

    fn limbs_mut(&mut self) -> &mut [L] {
        &mut self.0
    }

    fn widen(&mut self, _len: usize) {}

    fn settle(&mut self) {}
}

impl<const N: usize, L: Limb> Deref for InlineLimbs<N, L> {
    type Target = [L];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize, L: Limb> DerefMut for InlineLimbs<N, L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
