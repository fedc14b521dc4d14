use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};

use super::Integer;
use crate::num::algo::radix;
use crate::num::storage::LimbStorage;

impl<S: LimbStorage> Display for Integer<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (negative, digits) = radix::sign_and_digits(self.limbs(), 10);
        f.pad_integral(!negative, "", &digits)
    }
}

impl<S: LimbStorage> Debug for Integer<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

// Unlike the primitives, these print the sign and magnitude rather than the two's complement bits,
// since a BigInt has no fixed width to print.
macro_rules! impl_radix_fmt {
    ($($Trait:ident: $radix:literal, $prefix:literal, $upper:literal);*) => {
        $(
            impl<S: LimbStorage> $Trait for Integer<S> {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    let (negative, mut digits) = radix::sign_and_digits(self.limbs(), $radix);
                    if $upper {
                        digits.make_ascii_uppercase();
                    }
                    f.pad_integral(!negative, $prefix, &digits)
                }
            }
        )*
    };
}

impl_radix_fmt!(
    LowerHex: 16, "0x", false;
    UpperHex: 16, "0x", true;
    Octal: 8, "0o", false;
    Binary: 2, "0b", false
);
