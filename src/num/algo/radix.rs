//! Conversion between limb sequences and text.
//!
//! Both directions work a *chunk* of digits at a time, where a chunk is the largest power of the
//! radix that still fits in one limb. Printing divides the magnitude by the chunk with per-limb
//! long division and parsing multiplies the magnitude by it, so neither needs arithmetic wider than
//! a limb times a limb.

use std::iter;

use crate::num::algo;
use crate::num::error::{EmptyDigitsError, InvalidDigitError, InvalidFormat};
use crate::num::limb::Limb;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn assert_radix(radix: u32) {
    assert!(
        (2..=36).contains(&radix),
        "radix must be in the range 2..=36, got {radix}"
    );
}

/// Returns `(radix^k, k)` for the largest `k` where `radix^k` fits in a limb.
fn chunk_of<L: Limb>(radix: u32) -> (u128, usize) {
    let radix = radix as u128;
    let max = L::MAX.widen();

    let mut chunk = radix;
    let mut digits = 1;
    while chunk * radix <= max {
        chunk *= radix;
        digits += 1;
    }

    (chunk, digits)
}

/// Length of the sequence without its zero top limbs, read as unsigned.
fn unsigned_len<L: Limb>(limbs: &[L]) -> usize {
    limbs.iter().rposition(|limb| *limb != L::ZERO).map_or(0, |top| top + 1)
}

/// Divides the unsigned magnitude in place by `divisor` (at most one limb), returning the
/// remainder.
fn div_rem_limb<L: Limb>(limbs: &mut [L], divisor: u128) -> u128 {
    let mut remainder = 0_u128;

    for limb in limbs.iter_mut().rev() {
        let current = (remainder << L::BITS) | limb.widen();
        *limb = L::truncate(current / divisor);
        remainder = current % divisor;
    }

    remainder
}

/// Multiplies the unsigned magnitude in place by `factor` and adds `addend`. Both must fit in a
/// limb. The carry out of the top limb is returned.
fn mul_add_limb<L: Limb>(limbs: &mut [L], factor: u128, addend: u128) -> u128 {
    let mut carry = addend;

    for limb in limbs.iter_mut() {
        let product = limb.widen() * factor + carry;
        *limb = L::truncate(product);
        carry = product >> L::BITS;
    }

    carry
}

/// Splits the value into its sign and the digits of its magnitude in `radix`. Digits are lowercase
/// and there are no leading zeros, apart from the single digit of zero.
///
/// # Panics
/// Panics if `radix` is not in the range `2..=36`.
pub fn sign_and_digits<L: Limb>(limbs: &[L], radix: u32) -> (bool, String) {
    assert_radix(radix);

    let negative = algo::signbit(limbs);
    let mut magnitude: Box<[L]> = limbs.into();
    if negative {
        // The minimum of the width negates to itself, which is still the right magnitude when read
        // as unsigned.
        algo::negate(&mut magnitude);
    }

    let (chunk, chunk_digits) = chunk_of::<L>(radix);
    let mut reversed = String::new();
    let mut len = unsigned_len(&magnitude);

    while len > 0 {
        let mut remainder = div_rem_limb(&mut magnitude[..len], chunk);
        len = unsigned_len(&magnitude[..len]);

        for _ in 0..chunk_digits {
            // Only the most significant chunk drops its leading zeros.
            if len == 0 && remainder == 0 {
                break;
            }
            reversed.push(DIGITS[(remainder % radix as u128) as usize] as char);
            remainder /= radix as u128;
        }
    }

    if reversed.is_empty() {
        reversed.push('0');
    }

    (negative, reversed.chars().rev().collect())
}

/// Formats the value in `radix`, with a leading `-` for negative values.
///
/// # Panics
/// Panics if `radix` is not in the range `2..=36`.
///
/// # Examples
/// ```
/// # use standard_bigint::num::algo::radix;
/// assert_eq!(radix::to_string(&[0x00_u8, 0x01], 10), "256");
/// assert_eq!(radix::to_string(&[0xff_u8], 10), "-1");
/// assert_eq!(radix::to_string(&[0x00_u8], 2), "0");
/// ```
pub fn to_string<L: Limb>(limbs: &[L], radix: u32) -> String {
    match sign_and_digits(limbs, radix) {
        (true, digits) => format!("-{digits}"),
        (false, digits) => digits,
    }
}

/// Formats the value in hexadecimal, without a `0x` prefix.
pub fn to_hex_string<L: Limb>(limbs: &[L]) -> String {
    to_string(limbs, 16)
}

/// Parses an optional `+` or `-` followed by one or more digits of `radix` (in either case).
///
/// The returned sequence holds the value but is generally longer than needed, see
/// [`normalized_len`](algo::normalized_len).
///
/// # Errors
/// Returns [`InvalidFormat`] if there are no digits or a character isn't a digit of `radix`.
///
/// # Panics
/// Panics if `radix` is not in the range `2..=36`.
pub fn from_string<L: Limb>(text: &str, radix: u32) -> Result<Box<[L]>, InvalidFormat> {
    assert_radix(radix);

    let (negative, digits, offset) = split_sign(text);
    parse_digits(digits, radix, negative, offset)
        .inspect_err(|error| log::debug!("rejected base {radix} literal {text:?}: {error}"))
}

/// Parses an integer literal: an optional `+` or `-`, then either `0x` (or `0X`) followed by
/// hexadecimal digits, or decimal digits.
///
/// # Errors
/// Returns [`InvalidFormat`] if there are no digits or a character isn't a valid digit.
///
/// # Examples
/// ```
/// # use standard_bigint::num::algo::radix;
/// let limbs = radix::from_literal::<u8>("-0x1ff").unwrap();
/// assert_eq!(radix::to_string(&limbs, 10), "-511");
/// assert!(radix::from_literal::<u8>("0x").is_err());
/// ```
pub fn from_literal<L: Limb>(text: &str) -> Result<Box<[L]>, InvalidFormat> {
    let (negative, rest, offset) = split_sign(text);

    let parsed = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => parse_digits(hex, 16, negative, offset + 2),
        None => parse_digits(rest, 10, negative, offset),
    };
    parsed.inspect_err(|error| log::debug!("rejected integer literal {text:?}: {error}"))
}

fn split_sign(text: &str) -> (bool, &str, usize) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..], 1),
        Some(b'+') => (false, &text[1..], 1),
        _ => (false, text, 0),
    }
}

fn parse_digits<L: Limb>(
    digits: &str,
    radix: u32,
    negative: bool,
    offset: usize,
) -> Result<Box<[L]>, InvalidFormat> {
    if digits.is_empty() {
        Err(EmptyDigitsError)?
    }

    // Enough bits for any magnitude with this many digits, plus the sign bit.
    let bits_per_digit = (u32::BITS - (radix - 1).leading_zeros()) as usize;
    let len = (digits.len() * bits_per_digit + 1).div_ceil(L::BITS as usize);
    let mut limbs: Box<[L]> = iter::repeat_n(L::ZERO, len).collect();

    let (_, chunk_digits) = chunk_of::<L>(radix);
    let mut pending = 0_u128;
    let mut scale = 1_u128;
    let mut pending_digits = 0;

    for (index, ch) in digits.char_indices() {
        let digit = ch.to_digit(radix).ok_or(InvalidDigitError {
            digit: ch,
            index: offset + index,
        })?;

        pending = pending * radix as u128 + digit as u128;
        scale *= radix as u128;
        pending_digits += 1;

        if pending_digits == chunk_digits {
            mul_add_limb(&mut limbs, scale, pending);
            pending = 0;
            scale = 1;
            pending_digits = 0;
        }
    }

    if pending_digits > 0 {
        mul_add_limb(&mut limbs, scale, pending);
    }

    if negative {
        algo::negate(&mut limbs);
    }

    Ok(limbs)
}
