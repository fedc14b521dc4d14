use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Integer;
use crate::num::algo;
use crate::num::limb::SmallLimbs;
use crate::num::storage::LimbStorage;

impl<S: LimbStorage> PartialEq for Integer<S> {
    fn eq(&self, other: &Self) -> bool {
        algo::cmp(self.limbs(), other.limbs()).is_eq()
    }
}

impl<S: LimbStorage> Eq for Integer<S> {}

impl<S: LimbStorage> PartialOrd for Integer<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: LimbStorage> Ord for Integer<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        algo::cmp(self.limbs(), other.limbs())
    }
}

impl<S: LimbStorage> Hash for Integer<S> {
    /// Hashes the normalized limbs, so equal values hash equally whatever their storage width.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let limbs = self.limbs();
        limbs[..algo::normalized_len(limbs)].hash(state);
    }
}

macro_rules! impl_primitive_cmp {
    ($($t:ty),*) => {
        $(
            impl<S: LimbStorage> PartialEq<$t> for Integer<S> {
                fn eq(&self, other: &$t) -> bool {
                    algo::cmp(self.limbs(), &SmallLimbs::<S::Limb>::from(*other)).is_eq()
                }
            }

            impl<S: LimbStorage> PartialOrd<$t> for Integer<S> {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(algo::cmp(self.limbs(), &SmallLimbs::<S::Limb>::from(*other)))
                }
            }
        )*
    };
}

impl_primitive_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
