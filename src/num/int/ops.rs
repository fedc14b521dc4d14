use std::iter::Sum;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Neg, Not, Shl,
    ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::Integer;
use crate::num::algo;
use crate::num::limb::SmallLimbs;
use crate::num::storage::LimbStorage;

// Each compound assignment accepts a borrowed or owned Integer, or any primitive integer. A
// primitive is laid out as limbs on the stack first. Fixed storage wraps it to its width.
macro_rules! impl_assign_op {
    (@primitive $Trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr; $($t:ty),*) => {
        $(
            impl<S: LimbStorage> $Trait<$t> for Integer<S> {
                fn $method(&mut self, rhs: $t) {
                    let small = SmallLimbs::<S::Limb>::from(rhs);
                    let ($lhs, $rhs) = (self, &*small);
                    $body;
                }
            }
        )*
    };
    ($Trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<S: LimbStorage> $Trait<&Integer<S>> for Integer<S> {
            fn $method(&mut self, rhs: &Integer<S>) {
                let ($lhs, $rhs) = (self, rhs.limbs());
                $body;
            }
        }

        impl<S: LimbStorage> $Trait<Integer<S>> for Integer<S> {
            fn $method(&mut self, rhs: Integer<S>) {
                let ($lhs, $rhs) = (self, rhs.limbs());
                $body;
            }
        }

        impl_assign_op!(
            @primitive $Trait, $method, |$lhs, $rhs| $body;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
        );
    };
}

impl_assign_op!(AddAssign, add_assign, |lhs, rhs| lhs.add_limbs(rhs));
impl_assign_op!(SubAssign, sub_assign, |lhs, rhs| lhs.sub_limbs(rhs));
impl_assign_op!(BitAndAssign, bitand_assign, |lhs, rhs| lhs.bitwise_limbs(rhs, algo::and_assign));
impl_assign_op!(BitOrAssign, bitor_assign, |lhs, rhs| lhs.bitwise_limbs(rhs, algo::or_assign));
impl_assign_op!(BitXorAssign, bitxor_assign, |lhs, rhs| lhs.bitwise_limbs(rhs, algo::xor_assign));

// Shift amounts of any primitive type. A negative amount shifts the other way and an amount that
// doesn't fit in a usize is treated as usize::MAX, which is past the width of any value.
macro_rules! impl_shift_ops {
    (signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl<S: LimbStorage> ShlAssign<$s> for Integer<S> {
                fn shl_assign(&mut self, rhs: $s) {
                    let n = usize::try_from(rhs.unsigned_abs()).unwrap_or(usize::MAX);
                    match rhs < 0 {
                        true => self.shr_bits(n),
                        false => self.shl_bits(n),
                    }
                }
            }

            impl<S: LimbStorage> ShrAssign<$s> for Integer<S> {
                fn shr_assign(&mut self, rhs: $s) {
                    let n = usize::try_from(rhs.unsigned_abs()).unwrap_or(usize::MAX);
                    match rhs < 0 {
                        true => self.shl_bits(n),
                        false => self.shr_bits(n),
                    }
                }
            }
        )*
        $(
            impl<S: LimbStorage> ShlAssign<$u> for Integer<S> {
                fn shl_assign(&mut self, rhs: $u) {
                    self.shl_bits(usize::try_from(rhs).unwrap_or(usize::MAX));
                }
            }

            impl<S: LimbStorage> ShrAssign<$u> for Integer<S> {
                fn shr_assign(&mut self, rhs: $u) {
                    self.shr_bits(usize::try_from(rhs).unwrap_or(usize::MAX));
                }
            }
        )*
    };
}

impl_shift_ops!(
    signed: i8, i16, i32, i64, i128, isize;
    unsigned: u8, u16, u32, u64, u128, usize
);

// Binary operators are the compound assignments applied to an owned value, or to a clone when the
// left-hand side is borrowed.
macro_rules! impl_binary_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident) => {
        impl<S: LimbStorage, R> $Trait<R> for Integer<S>
        where
            Integer<S>: $AssignTrait<R>,
        {
            type Output = Integer<S>;

            fn $method(mut self, rhs: R) -> Integer<S> {
                <Integer<S> as $AssignTrait<R>>::$assign(&mut self, rhs);
                self
            }
        }

        impl<S: LimbStorage, R> $Trait<R> for &Integer<S>
        where
            Integer<S>: $AssignTrait<R>,
        {
            type Output = Integer<S>;

            fn $method(self, rhs: R) -> Integer<S> {
                let mut result = self.clone();
                <Integer<S> as $AssignTrait<R>>::$assign(&mut result, rhs);
                result
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);
impl_binary_op!(Shl, shl, ShlAssign, shl_assign);
impl_binary_op!(Shr, shr, ShrAssign, shr_assign);

impl<S: LimbStorage> Neg for Integer<S> {
    type Output = Integer<S>;

    fn neg(mut self) -> Integer<S> {
        self.negate_in_place();
        self
    }
}

impl<S: LimbStorage> Neg for &Integer<S> {
    type Output = Integer<S>;

    fn neg(self) -> Integer<S> {
        -self.clone()
    }
}

impl<S: LimbStorage> Not for Integer<S> {
    type Output = Integer<S>;

    fn not(mut self) -> Integer<S> {
        self.not_in_place();
        self
    }
}

impl<S: LimbStorage> Not for &Integer<S> {
    type Output = Integer<S>;

    fn not(self) -> Integer<S> {
        !self.clone()
    }
}

impl<S: LimbStorage> Sum for Integer<S> {
    fn sum<I: Iterator<Item = Integer<S>>>(iter: I) -> Integer<S> {
        iter.fold(Integer::new(), |acc, item| acc + item)
    }
}

impl<'a, S: LimbStorage + 'a> Sum<&'a Integer<S>> for Integer<S> {
    fn sum<I: Iterator<Item = &'a Integer<S>>>(iter: I) -> Integer<S> {
        iter.fold(Integer::new(), |acc, item| acc + item)
    }
}
