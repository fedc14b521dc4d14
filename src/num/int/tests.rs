#![cfg(all(test, feature = "dynamic", feature = "fixed"))]

use std::collections::HashSet;

use super::*;
use crate::num::error::{
    CapacityExceededError, EmptyDigitsError, InvalidDigitError, OutOfRangeError, ParseError,
};
use crate::num::storage::{HeapLimbs, InlineLimbs};
use crate::util::panic::assert_panics;

// Byte limbs make carries between limbs easy to reach with small values.
type ByteInt = Integer<HeapLimbs<u8>>;
type I8Like = Integer<InlineLimbs<1, u8>>;

fn big(text: &str) -> BigInt {
    text.parse().unwrap()
}

#[test]
fn test_add_chain() {
    let mut x = BigInt::new();
    assert_eq!(x.clone() + 0, 0, "Adding zero to zero should be zero.");

    x += 1;
    assert_eq!(x, 1);
    x += -2;
    assert_eq!(x, -1, "Crossing zero should flip the sign.");
    x += 12345;
    assert_eq!(x, 12344);
    x += BigInt::from(656);
    assert_eq!(x, 13000);
    x += &BigInt::from(123456789);
    assert_eq!(x, 123469789);

    let copy = x.clone();
    x += copy;
    assert_eq!(x, 246939578, "Adding a value to itself should double it.");

    x += 0xffffffffffffffff_u64;
    assert_eq!(
        x.to_string(),
        "18446744073956491193",
        "The sum should carry into a second limb."
    );

    let negated = -&x;
    x += negated;
    assert_eq!(x, 0, "A value plus its negation should be zero.");
    assert_eq!(x.limbs(), &[0], "Zero should settle to a single limb.");
}

#[test]
fn test_sub() {
    let mut x = BigInt::from(5);
    x -= 7;
    assert_eq!(x, -2);

    x -= BigInt::from(u64::MAX);
    assert_eq!(x.to_string(), "-18446744073709551617");

    let copy = x.clone();
    x -= &copy;
    assert_eq!(x, 0);

    let mut y = ByteInt::from(-128);
    y -= 1;
    assert_eq!(y, -129, "Borrowing past the minimum of a limb should widen.");
    assert_eq!(y.limbs(), &[0x7f, 0xff]);
}

#[test]
fn test_or_sequence() {
    let mut x = BigInt::from(0);
    x |= BigInt::from(1);
    assert_eq!(x, 0x0001);
    x |= BigInt::from(0x8000);
    assert_eq!(x, 0x8001);
    x |= big("0xFEDCBA9876543210000000000000000");
    assert_eq!(
        x,
        big("0xFEDCBA9876543210000000000008001"),
        "Or-ing a wider value should keep the low bits."
    );
}

#[test]
fn test_shr_sequence() {
    let mut x = BigInt::from(12345678);
    x >>= 1;
    assert_eq!(x, 6172839);
    x >>= 2;
    assert_eq!(x, 1543209);
    x >>= 3;
    assert_eq!(x, 192901);
    x >>= 10;
    assert_eq!(x, 188);

    let mut x = big("0x1234567890123456789012345678901234567890");
    x >>= 4;
    assert_eq!(x, big("0x123456789012345678901234567890123456789"));
    x >>= 0x10000000;
    assert_eq!(x, 0, "Shifting past the width should leave zero.");

    let mut x = BigInt::from(-12345678);
    x >>= 0x10000000_u64;
    assert_eq!(x, -1, "Shifting a negative value past its width should leave -1.");
    assert_eq!(BigInt::from(-5) >> u128::MAX, -1);
    assert_eq!(BigInt::from(-5) >> 1, -3, "Right shifts should round towards negative infinity.");
}

#[test]
fn test_xor_sequence() {
    let mut x = BigInt::from(0);
    x ^= BigInt::from(1);
    assert_eq!(x, 1);
    x ^= BigInt::from(1);
    assert_eq!(x, 0);
    x ^= BigInt::from(0x1234);
    assert_eq!(x, 0x1234);
    x ^= BigInt::from(0xff00);
    assert_eq!(x, 0xed34);
}

#[test]
fn test_bitwise_sign_extension() {
    let mut x = ByteInt::from(0x1234);
    x &= -1;
    assert_eq!(x, 0x1234, "And with -1 should keep every bit.");
    x &= 0xff;
    assert_eq!(x, 0x34);

    let mut x = ByteInt::from(-0x100);
    x |= 0x0f;
    assert_eq!(x, -0xf1);

    assert_eq!(!BigInt::from(0), -1);
    assert_eq!(!&BigInt::from(-43), 42);
    assert_eq!(BigInt::from(-1) ^ u64::MAX, big("-0x10000000000000000"));
}

#[test]
fn test_shl() {
    let mut x = ByteInt::from(0x7f);
    x += 1;
    assert_eq!(x.limbs(), &[0x80, 0x00], "128 needs a zero sign limb.");
    x <<= 8;
    assert_eq!(x, 32768);
    assert_eq!(x.limbs(), &[0x00, 0x80, 0x00]);

    assert_eq!(BigInt::from(1) << 64, big("0x10000000000000000"));
    assert_eq!(BigInt::from(-3) << 100_u8, big("-0x30000000000000000000000000"));
    assert_eq!(BigInt::from(8) << -2, 2, "A negative amount should shift right.");
    assert_eq!(BigInt::from(8) >> -2_i64, 32, "A negative amount should shift left.");

    let x = BigInt::from(42);
    assert_eq!(&x << 0, x, "Shifting by zero should change nothing.");
    assert_eq!(BigInt::new() << usize::MAX, 0, "Zero shifts to zero without growing.");
}

#[test]
fn test_shl_capacity_overflow() {
    assert_panics!(
        {
            let _ = BigInt::from(1) << usize::MAX;
        },
        "Shifting past isize::MAX bits should panic rather than allocate."
    );
    assert_panics!(
        {
            let mut x = BigInt::from(-7);
            x >>= i64::MIN;
        },
        "A negative right shift grows like a left shift."
    );
    assert_panics!({
        let mut x = BigInt::from(1);
        x <<= u64::MAX;
    });
    assert_panics!({
        let _ = ByteInt::from(1) << (isize::MAX as usize);
    });

    assert_eq!(
        FixedBigInt::<2>::from(1) << usize::MAX,
        0,
        "Fixed storage never grows, so any amount is fine."
    );
    assert_eq!(I8Like::from(-1) >> i64::MIN, 0);
}

#[test]
fn test_normalization() {
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("-0").to_string(), "0", "Negative zero should print as zero.");
    assert_eq!(big("+5").to_string(), "5");
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(big("-0x0000ff").to_string(), "-255");

    let x = BigInt::from_limbs(&[5, 0, 0, 0]);
    assert_eq!(x.limbs(), &[5], "Redundant sign limbs should be dropped.");

    let x = BigInt::from_limbs(&[u64::MAX, u64::MAX]);
    assert_eq!(x.limbs(), &[u64::MAX]);
    assert_eq!(x, -1);

    assert_eq!(BigInt::from_limbs(&[]), 0, "No limbs should be zero.");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "".parse::<BigInt>(),
        Err(ParseError::InvalidFormat(EmptyDigitsError.into()))
    );
    assert_eq!(
        "12x".parse::<BigInt>(),
        Err(InvalidDigitError { digit: 'x', index: 2 }.into())
    );
    assert!("--1".parse::<BigInt>().unwrap_err().is_invalid_format());
    assert!("0x".parse::<BigInt>().unwrap_err().is_invalid_format());
    assert!("1_000".parse::<BigInt>().is_err(), "Separators aren't accepted.");

    assert_eq!(BigInt::from_str_radix("zz", 36), Ok(BigInt::from(1295)));
    assert_eq!(BigInt::from_str_radix("-101", 2), Ok(BigInt::from(-5)));
    assert!(
        BigInt::from_str_radix("0x10", 16).is_err(),
        "from_str_radix shouldn't accept a prefix."
    );
    assert_panics!({
        let _ = BigInt::from_str_radix("1", 40);
    });
}

#[test]
fn test_fixed_wrapping() {
    let mut x = I8Like::from(127);
    x += 1;
    assert_eq!(x, -128, "Fixed storage should wrap.");
    x -= 1;
    assert_eq!(x, 127);

    assert_eq!(-I8Like::from(-128), -128, "The minimum negates to itself.");
    assert_eq!(I8Like::from(-128).abs(), -128);
    assert_eq!(I8Like::from(1) << 7, -128);
    assert_eq!(I8Like::from(1) << 8, 0, "Bits shifted past the top are lost.");
    assert_eq!(I8Like::from(-128) >> 100, -1);

    assert_eq!(I8Like::from(300), 44, "Converting a wide primitive keeps the low limb.");
    assert_eq!(FixedBigInt::<1>::from(u64::MAX), -1);

    let mut x = FixedBigInt::<2>::from(u64::MAX);
    x += 1;
    assert_eq!(x.limbs(), &[0, 1], "Carries should cross limbs within the width.");
}

#[test]
fn test_fixed_overflow_reporting() {
    let max = I8Like::from(127);
    let one = I8Like::from(1);

    assert_eq!(max.overflowing_add(&one), (I8Like::from(-128), true));
    assert_eq!(max.overflowing_sub(&one), (I8Like::from(126), false));
    assert_eq!(max.checked_add(&one), None);
    assert_eq!(I8Like::from(-128).checked_sub(&one), None);
    assert_eq!(I8Like::from(-128).checked_neg(), None);
    assert_eq!(I8Like::from(-127).checked_neg(), Some(max));
    assert_eq!(I8Like::from(-1).checked_add(&I8Like::from(-128)), None);

    let x = BigInt::from(i64::MAX);
    assert_eq!(
        x.overflowing_add(&BigInt::from(1)),
        (BigInt::from(1_u64 << 63), false),
        "A BigInt never overflows."
    );
}

#[test]
fn test_fixed_parse_capacity() {
    assert_eq!(
        "0xffffffffffffffff".parse::<FixedBigInt<1>>(),
        Err(CapacityExceededError {
            required: 2,
            capacity: 1
        }
        .into()),
        "u64::MAX needs a sign limb."
    );
    assert_eq!("-0x8000000000000000".parse::<FixedBigInt<1>>(), Ok(FixedBigInt::from(i64::MIN)));
    assert_eq!(
        "0xffffffffffffffff".parse::<FixedBigInt<2>>().map(|x| x.to_string()),
        Ok("18446744073709551615".to_string())
    );
    assert!(
        "200".parse::<I8Like>().unwrap_err().is_capacity_exceeded(),
        "200 doesn't fit in a signed byte."
    );
}

#[test]
fn test_comparisons() {
    assert!(BigInt::from(-1) < BigInt::from(0));
    assert!(BigInt::from(u64::MAX) > i64::MAX);
    assert!(big("-0x10000000000000000") < i64::MIN);
    assert!(BigInt::from(3) >= 3_u8);
    assert_eq!(BigInt::from(7).cmp(&BigInt::from(7)), std::cmp::Ordering::Equal);
    assert_eq!(
        [3, -1, 2].map(BigInt::from).iter().max(),
        Some(&BigInt::from(3))
    );

    let set: HashSet<BigInt> =
        [BigInt::from(5), BigInt::from_limbs(&[5, 0]), BigInt::from(2) + 3].into_iter().collect();
    assert_eq!(set.len(), 1, "Equal values should hash equally.");
}

#[test]
fn test_queries() {
    assert!(BigInt::new().is_zero());
    assert!(BigInt::from(-3).is_negative());
    assert!(BigInt::from(3).is_positive());
    assert!(!BigInt::new().is_positive());
    assert_eq!(BigInt::from(-3).signum(), -1);
    assert_eq!(BigInt::new().signum(), 0);
    assert_eq!(big("0x123456789abcdef0123").signum(), 1);
    assert_eq!(BigInt::from(i64::MIN).bits(), 64);
    assert_eq!(ByteInt::from(-128).bits(), 8);
    assert_eq!(BigInt::default(), 0);
}

#[test]
fn test_formatting() {
    assert_eq!(format!("{}", BigInt::from(-42)), "-42");
    assert_eq!(format!("{:?}", BigInt::from(-42)), "-42");
    assert_eq!(format!("{:+}", BigInt::from(5)), "+5");
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
    assert_eq!(format!("{:x}", BigInt::from(255)), "ff");
    assert_eq!(format!("{:#x}", BigInt::from(255)), "0xff");
    assert_eq!(
        format!("{:#X}", BigInt::from(-255)),
        "-0xFF",
        "Negative values should print as a signed magnitude."
    );
    assert_eq!(format!("{:o}", BigInt::from(8)), "10");
    assert_eq!(format!("{:#010b}", BigInt::from(5)), "0b00000101");
    assert_eq!(
        format!("{:x}", big("0xfedcba9876543210fedcba9876543210")),
        "fedcba9876543210fedcba9876543210"
    );
    assert_eq!(FixedBigInt::<2>::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(ByteInt::from(-1000).to_str_radix(16), "-3e8");
}

#[test]
fn test_primitive_conversions() {
    assert_eq!(i8::try_from(&BigInt::from(-128)), Ok(-128));
    assert_eq!(i8::try_from(&BigInt::from(128)), Err(OutOfRangeError));
    assert_eq!(u8::try_from(BigInt::from(-1)), Err(OutOfRangeError));
    assert_eq!(u128::try_from(BigInt::from(u128::MAX)), Ok(u128::MAX));
    assert_eq!(i128::try_from(BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(u64::try_from(&ByteInt::from(0x1234_5678_u32)), Ok(0x1234_5678));
    assert!(i128::try_from(big("0x80000000000000000000000000000000")).is_err());
    assert_eq!(usize::try_from(&I8Like::from(-1)), Err(OutOfRangeError));
}

#[test]
fn test_storage_conversions() {
    let fixed = FixedBigInt::<2>::from(-1);
    let dynamic = BigInt::from(&fixed);
    assert_eq!(dynamic, -1);
    assert_eq!(dynamic.limbs().len(), 1, "Converted values should be normalized.");

    assert_eq!(
        FixedBigInt::<1>::try_from(&BigInt::from(u64::MAX)),
        Err(CapacityExceededError {
            required: 2,
            capacity: 1
        })
    );
    assert_eq!(
        FixedBigInt::<2>::try_from(&BigInt::from(u64::MAX)).map(|x| x.to_string()),
        Ok(u64::MAX.to_string())
    );
    assert_eq!(
        FixedBigInt::<1>::wrapping_from(&BigInt::from(u64::MAX)),
        -1,
        "Wrapping conversions keep the low limbs."
    );
}

#[test]
fn test_sum() {
    let values = [1, 2, 3].map(BigInt::from);
    assert_eq!(values.iter().sum::<BigInt>(), 6);
    assert_eq!(values.into_iter().sum::<BigInt>(), 6);
    assert_eq!(std::iter::empty::<BigInt>().sum::<BigInt>(), 0);
}

#[test]
fn test_binary_operators() {
    let a = BigInt::from(10);
    let b = BigInt::from(3);

    assert_eq!(&a + &b, 13);
    assert_eq!(&a - &b, 7);
    assert_eq!(&a & &b, 2);
    assert_eq!(&a | &b, 11);
    assert_eq!(&a ^ &b, 9);
    assert_eq!(a.clone() - b, 7);
    assert_eq!(-a, -10);
}
