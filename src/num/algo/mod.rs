//! Stateless algorithms over limb sequences.
//!
//! A limb sequence is any slice of [`Limb`]s, least significant first, read as a two's complement
//! integer across its whole width. Reading past the end yields the sign limb (all zeros or all
//! ones), so a sequence denotes the same value after any amount of sign extension.
//!
//! In-place operations work modulo the width of the slice being written to. It is up to the caller
//! to provide enough limbs for a result that should not wrap (see
//! [`LimbStorage::widen`](crate::num::storage::LimbStorage::widen)).
//!
//! All functions expect non-empty slices unless stated otherwise.

use std::cmp::Ordering;

use crate::num::limb::Limb;

pub mod radix;

/// Returns true if the value is negative, meaning the top bit of the top limb is set.
///
/// # Examples
/// ```
/// # use standard_bigint::num::algo;
/// assert!(algo::signbit(&[0x00_u8, 0x80]));
/// assert!(!algo::signbit(&[0xff_u8, 0x7f]));
/// ```
pub fn signbit<L: Limb>(limbs: &[L]) -> bool {
    limbs.last().is_some_and(|top| top.top_bit())
}

/// Returns the limb that fills every position past the end of the sequence.
pub fn sign_limb<L: Limb>(limbs: &[L]) -> L {
    if signbit(limbs) { L::MAX } else { L::ZERO }
}

/// Reads the limb at `index`, sign-extending past the end of the sequence.
pub fn limb_at<L: Limb>(limbs: &[L], index: usize) -> L {
    limbs.get(index).copied().unwrap_or_else(|| sign_limb(limbs))
}

pub fn is_zero<L: Limb>(limbs: &[L]) -> bool {
    limbs.iter().all(|limb| *limb == L::ZERO)
}

/// Returns the length of the shortest prefix of `limbs` that denotes the same value.
///
/// A top limb is redundant when it only repeats the sign of the limb below it. The result is at
/// least one for a non-empty sequence.
///
/// # Examples
/// ```
/// # use standard_bigint::num::algo;
/// assert_eq!(algo::normalized_len(&[0x05_u8, 0x00, 0x00]), 1);
/// assert_eq!(algo::normalized_len(&[0x80_u8, 0x00]), 2);
/// assert_eq!(algo::normalized_len(&[0xff_u8, 0xff, 0xff]), 1);
/// ```
pub fn normalized_len<L: Limb>(limbs: &[L]) -> usize {
    let mut len = limbs.len();

    while len > 1 {
        let top = limbs[len - 1];
        let below_negative = limbs[len - 2].top_bit();

        let redundant = match top {
            top if top == L::ZERO => !below_negative,
            top if top == L::MAX => below_negative,
            _ => false,
        };

        if !redundant {
            break;
        }
        len -= 1;
    }

    len
}

/// Adds `other` to `acc` in place, modulo the width of `acc`.
///
/// `other` is sign-extended (or truncated) to the width of `acc` and the carry moves from the least
/// to the most significant limb. Returns true if the signed result overflowed the width.
pub fn add_assign<L: Limb>(acc: &mut [L], other: &[L]) -> bool {
    carry_through(acc, other, false)
}

/// Subtracts `other` from `acc` in place, modulo the width of `acc`.
///
/// This is `acc + negate(other)`, with the negation folded into the addition: every limb of
/// `other` is complemented and the initial carry is one. Returns true if the signed result
/// overflowed the width.
pub fn sub_assign<L: Limb>(acc: &mut [L], other: &[L]) -> bool {
    carry_through(acc, other, true)
}

fn carry_through<L: Limb>(acc: &mut [L], other: &[L], complement: bool) -> bool {
    let Some(top) = acc.len().checked_sub(1) else {
        return false;
    };

    let lhs_negative = signbit(acc);
    let rhs_negative = limb_at(other, top).top_bit() != complement;

    let mut carry = complement;
    for (index, limb) in acc.iter_mut().enumerate() {
        let rhs = match complement {
            true => !limb_at(other, index),
            false => limb_at(other, index),
        };
        (*limb, carry) = limb.carrying_add(rhs, carry);
    }

    lhs_negative == rhs_negative && signbit(acc) != lhs_negative
}

/// Negates the value in place (complement every limb, then add one).
///
/// Returns true if the value was the minimum of its width, which negates to itself.
pub fn negate<L: Limb>(limbs: &mut [L]) -> bool {
    let was_negative = signbit(limbs);

    not_assign(limbs);
    for limb in limbs.iter_mut() {
        let (sum, carry) = limb.carrying_add(L::ZERO, true);
        *limb = sum;
        if !carry {
            break;
        }
    }

    was_negative && signbit(limbs)
}

/// Complements every limb, which computes `-x - 1`.
pub fn not_assign<L: Limb>(limbs: &mut [L]) {
    for limb in limbs.iter_mut() {
        *limb = !*limb;
    }
}

pub fn and_assign<L: Limb>(acc: &mut [L], other: &[L]) {
    zip_assign(acc, other, |lhs, rhs| lhs & rhs);
}

pub fn or_assign<L: Limb>(acc: &mut [L], other: &[L]) {
    zip_assign(acc, other, |lhs, rhs| lhs | rhs);
}

pub fn xor_assign<L: Limb>(acc: &mut [L], other: &[L]) {
    zip_assign(acc, other, |lhs, rhs| lhs ^ rhs);
}

// Sign-extending other keeps the infinite leading ones of a negative operand in play.
fn zip_assign<L: Limb>(acc: &mut [L], other: &[L], op: impl Fn(L, L) -> L) {
    for (index, limb) in acc.iter_mut().enumerate() {
        *limb = op(*limb, limb_at(other, index));
    }
}

/// Shifts the sequence left by `n` bits, filling with zeros. Bits shifted past the top of the
/// sequence are lost, so shifting by the full width or more leaves zero.
pub fn shl_assign<L: Limb>(limbs: &mut [L], n: usize) {
    let len = limbs.len();
    let limb_bits = L::BITS as usize;

    if n >= len.saturating_mul(limb_bits) {
        limbs.fill(L::ZERO);
        return;
    }

    let limb_shift = n / limb_bits;
    let bit_shift = (n % limb_bits) as u32;

    if limb_shift > 0 {
        limbs.copy_within(..len - limb_shift, limb_shift);
        limbs[..limb_shift].fill(L::ZERO);
    }

    if bit_shift > 0 {
        // Top down, so that the limb below is still unshifted when its bits are carried up.
        for index in (limb_shift..len).rev() {
            let carried = match index > limb_shift {
                true => limbs[index - 1] >> (L::BITS - bit_shift),
                false => L::ZERO,
            };
            limbs[index] = (limbs[index] << bit_shift) | carried;
        }
    }
}

/// Shifts the sequence right by `n` bits, filling with copies of the sign bit. Shifting by the full
/// width or more leaves `0` for a non-negative value and `-1` for a negative one.
pub fn shr_assign<L: Limb>(limbs: &mut [L], n: usize) {
    let len = limbs.len();
    let limb_bits = L::BITS as usize;
    let fill = sign_limb(limbs);

    if n >= len.saturating_mul(limb_bits) {
        limbs.fill(fill);
        return;
    }

    let limb_shift = n / limb_bits;
    let bit_shift = (n % limb_bits) as u32;

    if limb_shift > 0 {
        limbs.copy_within(limb_shift.., 0);
        limbs[len - limb_shift..].fill(fill);
    }

    if bit_shift > 0 {
        for index in 0..len {
            let above = limbs.get(index + 1).copied().unwrap_or(fill);
            limbs[index] = (limbs[index] >> bit_shift) | (above << (L::BITS - bit_shift));
        }
    }
}

/// Compares two sequences as signed integers. The sequences may have different lengths.
///
/// # Examples
/// ```
/// # use standard_bigint::num::algo;
/// # use std::cmp::Ordering;
/// assert_eq!(algo::cmp(&[0xff_u8], &[0x01_u8, 0x00]), Ordering::Less);
/// assert_eq!(algo::cmp(&[0x05_u8, 0x00, 0x00], &[0x05_u8]), Ordering::Equal);
/// ```
pub fn cmp<L: Limb>(lhs: &[L], rhs: &[L]) -> Ordering {
    match (signbit(lhs), signbit(rhs)) {
        (false, true) => return Ordering::Greater,
        (true, false) => return Ordering::Less,
        _ => (),
    }

    // Equal signs: the unsigned order of the sign-extended limbs is the signed order.
    for index in (0..lhs.len().max(rhs.len())).rev() {
        match limb_at(lhs, index).cmp(&limb_at(rhs, index)) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }

    Ordering::Equal
}

/// Returns the number of significant bits when the sequence is read as *unsigned*. Zero has no
/// significant bits.
pub fn unsigned_bits<L: Limb>(limbs: &[L]) -> usize {
    match limbs.iter().rposition(|limb| *limb != L::ZERO) {
        Some(top) => {
            let unused = (limbs[top].widen().leading_zeros() - (128 - L::BITS)) as usize;
            (top + 1) * L::BITS as usize - unused
        },
        None => 0,
    }
}

/// Returns the low 128 bits of the value, sign-extending short sequences.
pub fn low_u128<L: Limb>(limbs: &[L]) -> u128 {
    let count = (128 / L::BITS) as usize;

    (0..count)
        .rev()
        .fold(0_u128, |value, index| (value << L::BITS) | limb_at(limbs, index).widen())
}
