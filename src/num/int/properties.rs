#![cfg(all(test, feature = "dynamic", feature = "fixed"))]

use num_bigint::BigInt as Oracle;
use quickcheck::{Arbitrary, Gen, quickcheck};

use super::*;

/// A BigInt of up to four limbs, with random signs and magnitudes.
#[derive(Debug, Clone)]
struct AnyInt(BigInt);

impl Arbitrary for AnyInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 4 + 1;
        let limbs: Vec<u64> = (0..len).map(|_| u64::arbitrary(g)).collect();
        AnyInt(BigInt::from_limbs(&limbs))
    }
}

fn to_oracle(x: &BigInt) -> Oracle {
    x.to_string().parse().unwrap()
}

fn from_oracle(x: &Oracle) -> BigInt {
    x.to_string().parse().unwrap()
}

quickcheck! {
    fn prop_cancellation(x: AnyInt) -> bool {
        let AnyInt(mut x) = x;
        let negated = -&x;
        x += negated;
        x == 0
    }

    fn prop_add_associative(a: AnyInt, b: AnyInt, c: AnyInt) -> bool {
        let (a, b, c) = (a.0, b.0, c.0);
        (&a + &b) + &c == a + (b + c)
    }

    fn prop_sub_inverts_add(a: AnyInt, b: AnyInt) -> bool {
        let (a, b) = (a.0, b.0);
        (&a + &b) - &b == a
    }

    fn prop_shl_zero_is_identity(x: AnyInt) -> bool {
        let AnyInt(x) = x;
        &x << 0 == x
    }

    fn prop_shr_past_width(x: AnyInt, extra: u8) -> bool {
        let AnyInt(x) = x;
        let shifted = &x >> (x.limbs().len() * 64 + extra as usize);
        match x.is_negative() {
            true => shifted == -1,
            false => shifted == 0,
        }
    }

    fn prop_shl_then_shr(x: AnyInt, n: u8) -> bool {
        let AnyInt(x) = x;
        (&x << n) >> n == x
    }

    fn prop_bitwise_idempotence(x: AnyInt) -> bool {
        let AnyInt(x) = x;
        (&x | &x) == x && (&x & &x) == x && (&x ^ &x) == 0
    }

    fn prop_decimal_round_trip(x: AnyInt) -> bool {
        let AnyInt(x) = x;
        x.to_string().parse::<BigInt>() == Ok(x)
    }

    fn prop_hex_round_trip(x: AnyInt) -> bool {
        let AnyInt(x) = x;
        BigInt::from_str_radix(&x.to_str_radix(16), 16) == Ok(x)
    }

    fn prop_matches_i128(a: i64, b: i64, n: u8) -> bool {
        let (wide_a, wide_b) = (a as i128, b as i128);
        let n = n % 64;
        let (x, y) = (BigInt::from(a), BigInt::from(b));

        &x + &y == wide_a + wide_b
            && &x - &y == wide_a - wide_b
            && (&x & &y) == wide_a & wide_b
            && (&x | &y) == wide_a | wide_b
            && (&x ^ &y) == wide_a ^ wide_b
            && &x << n == wide_a << n
            && &x >> n == wide_a >> n
            && x.cmp(&y) == a.cmp(&b)
            && x.to_string() == a.to_string()
    }

    fn prop_fixed_matches_i64(a: i64, b: i64) -> bool {
        let (x, y) = (FixedBigInt::<1>::from(a), FixedBigInt::<1>::from(b));

        x + y == a.wrapping_add(b)
            && x - y == a.wrapping_sub(b)
            && -x == a.wrapping_neg()
            && x.overflowing_add(&y).1 == a.overflowing_add(b).1
            && x.overflowing_sub(&y).1 == a.overflowing_sub(b).1
    }

    fn prop_matches_num_bigint(a: AnyInt, b: AnyInt) -> bool {
        let (a, b) = (a.0, b.0);
        let (oracle_a, oracle_b) = (to_oracle(&a), to_oracle(&b));

        &a + &b == from_oracle(&(&oracle_a + &oracle_b))
            && &a - &b == from_oracle(&(&oracle_a - &oracle_b))
            && (&a & &b) == from_oracle(&(&oracle_a & &oracle_b))
            && (&a | &b) == from_oracle(&(&oracle_a | &oracle_b))
            && (&a ^ &b) == from_oracle(&(&oracle_a ^ &oracle_b))
            && a.cmp(&b) == oracle_a.cmp(&oracle_b)
            && format!("{:x}", a) == format!("{:x}", oracle_a)
    }
}
