use std::str::FromStr;

use super::Integer;
use crate::num::algo::{self, radix};
use crate::num::error::{OutOfRangeError, ParseError};
use crate::num::limb::SmallLimbs;
use crate::num::storage::LimbStorage;
#[cfg(all(feature = "dynamic", feature = "fixed"))]
use crate::num::{
    error::CapacityExceededError,
    limb::Limb,
    storage::{HeapLimbs, InlineLimbs},
};

impl<S: LimbStorage> FromStr for Integer<S> {
    type Err = ParseError;

    /// Parses an integer literal: an optional `+` or `-`, then either `0x` (or `0X`) followed by
    /// hexadecimal digits, or decimal digits.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// let x: BigInt = "-0xff".parse().unwrap();
    /// assert_eq!(x, -255);
    /// assert!("0xfg".parse::<BigInt>().is_err());
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let limbs = radix::from_literal::<S::Limb>(text)?;
        Self::from_parsed(&limbs)
    }
}

macro_rules! impl_primitive_convert {
    ($($t:ty),*) => {
        $(
            impl<S: LimbStorage> From<$t> for Integer<S> {
                fn from(value: $t) -> Self {
                    Integer::from_limbs(&SmallLimbs::<S::Limb>::from(value))
                }
            }

            impl<S: LimbStorage> TryFrom<&Integer<S>> for $t {
                type Error = OutOfRangeError;

                fn try_from(value: &Integer<S>) -> Result<Self, Self::Error> {
                    if *value < <$t>::MIN || *value > <$t>::MAX {
                        Err(OutOfRangeError)?
                    }
                    // In range, so the low bits are the whole value.
                    Ok(algo::low_u128(value.limbs()) as $t)
                }
            }

            impl<S: LimbStorage> TryFrom<Integer<S>> for $t {
                type Error = OutOfRangeError;

                fn try_from(value: Integer<S>) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_primitive_convert!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(all(feature = "dynamic", feature = "fixed"))]
impl<const N: usize, L: Limb> From<&Integer<InlineLimbs<N, L>>> for Integer<HeapLimbs<L>> {
    fn from(value: &Integer<InlineLimbs<N, L>>) -> Self {
        Integer::wrapping_from(value)
    }
}

#[cfg(all(feature = "dynamic", feature = "fixed"))]
impl<const N: usize, L: Limb> From<Integer<InlineLimbs<N, L>>> for Integer<HeapLimbs<L>> {
    fn from(value: Integer<InlineLimbs<N, L>>) -> Self {
        Integer::wrapping_from(&value)
    }
}

#[cfg(all(feature = "dynamic", feature = "fixed"))]
impl<const N: usize, L: Limb> TryFrom<&Integer<HeapLimbs<L>>> for Integer<InlineLimbs<N, L>> {
    type Error = CapacityExceededError;

    fn try_from(value: &Integer<HeapLimbs<L>>) -> Result<Self, Self::Error> {
        InlineLimbs::<N, L>::check_fits(value.limbs())?;
        Ok(Integer::wrapping_from(value))
    }
}
