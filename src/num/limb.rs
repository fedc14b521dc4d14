//! The [`Limb`] trait for words that make up a big integer, and [`SmallLimbs`] for viewing
//! primitive integers as limb sequences.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Deref, Not, Shl, Shr};

use crate::num::algo;

/// Returns the number of bits used to store a `T`.
///
/// # Panics
/// Panics if `T` is wider than [`u32::MAX`] bits, which is a compile time error when used in a
/// constant.
///
/// # Examples
/// ```
/// # use standard_bigint::num::limb::bitsof;
/// assert_eq!(bitsof::<u8>(), 8);
/// assert_eq!(bitsof::<u64>(), 64);
/// assert_eq!(bitsof::<[u32; 3]>(), 96);
/// ```
pub const fn bitsof<T>() -> u32 {
    let bits = size_of::<T>() * u8::BITS as usize;
    assert!(bits <= u32::MAX as usize, "type is too wide to count its bits in a u32");
    bits as u32
}

/// An unsigned machine word used as a single digit of a big integer.
///
/// All arithmetic that needs more than one limb of precision is done through [`u128`], which is
/// wide enough to hold the product of two of the largest limbs plus a carry.
pub trait Limb:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Zero-extends the limb to a [`u128`].
    fn widen(self) -> u128;

    /// Keeps only the low [`BITS`](Limb::BITS) of `value`.
    fn truncate(value: u128) -> Self;

    /// Adds `rhs` and an incoming carry, returning the low limb of the sum and the outgoing carry.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let sum = self.widen() + rhs.widen() + carry as u128;
        (Self::truncate(sum), sum >> Self::BITS != 0)
    }

    /// Returns true if the most significant bit is set.
    fn top_bit(self) -> bool {
        self >> (Self::BITS - 1) == Self::ONE
    }
}

macro_rules! impl_limb {
    ($($t:ty),*) => {
        $(
            impl Limb for $t {
                const BITS: u32 = bitsof::<$t>();
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                fn widen(self) -> u128 {
                    self as u128
                }

                fn truncate(value: u128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_limb!(u8, u16, u32, u64);

// 128 bits in the smallest limb, plus a sign limb for values with the top bit set.
const SMALL_CAP: usize = 128 / 8 + 1;

/// A primitive integer laid out as a normalized limb sequence on the stack, so that it can be used
/// as an operand wherever a limb slice is expected.
#[derive(Debug, Clone, Copy)]
pub struct SmallLimbs<L: Limb> {
    buf: [L; SMALL_CAP],
    len: usize,
}

impl<L: Limb> SmallLimbs<L> {
    /// Lays out a signed value.
    pub fn from_i128(value: i128) -> SmallLimbs<L> {
        Self::from_bits(value as u128, value < 0)
    }

    /// Lays out an unsigned value. A sign limb is added when the top bit is set, so the value is
    /// never read as negative.
    pub fn from_u128(value: u128) -> SmallLimbs<L> {
        Self::from_bits(value, false)
    }

    fn from_bits(mut bits: u128, negative: bool) -> SmallLimbs<L> {
        let mut buf = [L::ZERO; SMALL_CAP];
        let count = (128 / L::BITS) as usize;

        for limb in buf.iter_mut().take(count) {
            *limb = L::truncate(bits);
            bits >>= L::BITS;
        }
        buf[count] = if negative { L::MAX } else { L::ZERO };

        SmallLimbs {
            buf,
            len: algo::normalized_len(&buf[..=count]),
        }
    }
}

impl<L: Limb> Deref for SmallLimbs<L> {
    type Target = [L];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len]
    }
}

macro_rules! impl_small_from {
    (signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl<L: Limb> From<$s> for SmallLimbs<L> {
                fn from(value: $s) -> Self {
                    SmallLimbs::from_i128(value as i128)
                }
            }
        )*
        $(
            impl<L: Limb> From<$u> for SmallLimbs<L> {
                fn from(value: $u) -> Self {
                    SmallLimbs::from_u128(value as u128)
                }
            }
        )*
    };
}

impl_small_from!(
    signed: i8, i16, i32, i64, i128, isize;
    unsigned: u8, u16, u32, u64, u128, usize
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_limbs_layout() {
        assert_eq!(&*SmallLimbs::<u8>::from(0_i32), &[0], "Zero should be a single limb.");
        assert_eq!(&*SmallLimbs::<u8>::from(-1_i64), &[0xff], "-1 should be a single limb.");
        assert_eq!(
            &*SmallLimbs::<u8>::from(0x80_u8),
            &[0x80, 0x00],
            "An unsigned value with the top bit set needs a zero sign limb."
        );
        assert_eq!(&*SmallLimbs::<u8>::from(-129_i16), &[0x7f, 0xff]);
        assert_eq!(&*SmallLimbs::<u64>::from(u64::MAX), &[u64::MAX, 0]);
        assert_eq!(&*SmallLimbs::<u64>::from(i128::MIN), &[0, 1 << 63]);
        assert_eq!(SmallLimbs::<u8>::from(u128::MAX).len(), 17);
    }

    #[test]
    fn test_carrying_add() {
        assert_eq!(0xff_u8.carrying_add(1, false), (0, true));
        assert_eq!(0xfe_u8.carrying_add(1, false), (0xff, false));
        assert_eq!(u64::MAX.carrying_add(u64::MAX, true), (u64::MAX, true));
        assert!(0x80_u8.top_bit());
        assert!(!0x7f_u8.top_bit());
    }
}
