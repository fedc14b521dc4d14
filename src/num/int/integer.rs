use crate::num::algo::{self, radix};
use crate::num::error::ParseError;
use crate::num::limb::Limb;
use crate::num::storage::LimbStorage;

/// A two's complement signed integer over a sequence of limbs, held in the storage `S`.
///
/// This type is usually named through one of its aliases:
/// [`BigInt`](super::BigInt) (heap storage, never overflows) or
/// [`FixedBigInt<N>`](super::FixedBigInt) (inline storage, wraps).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of limbs in the larger operand.
/// - `d`: The number of digits in the text.
///
/// | Method | Complexity |
/// |-|-|
/// | `+=`, `-=`, `&=`, `\|=`, `^=`, `<<=`, `>>=` | `O(n)` |
/// | `cmp` | `O(n)` |
/// | `is_negative` | `O(1)` |
/// | `to_string` | `O(n^2)` |
/// | `from_str` | `O(d^2)` |
#[derive(Clone, Copy)]
pub struct Integer<S: LimbStorage> {
    pub(crate) storage: S,
}

impl<S: LimbStorage> Integer<S> {
    /// Creates a new Integer with the value zero.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// let x = BigInt::new();
    /// assert!(x.is_zero());
    /// assert_eq!(x.limbs(), &[0]);
    /// ```
    pub fn new() -> Integer<S> {
        Integer {
            storage: S::zeroed(),
        }
    }

    /// Creates an Integer from a two's complement limb sequence, least significant limb first. An
    /// empty sequence is zero. Fixed storage keeps only the low limbs of a sequence that is too
    /// long.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// assert_eq!(BigInt::from_limbs(&[u64::MAX, u64::MAX]), -1);
    /// assert_eq!(BigInt::from_limbs(&[u64::MAX, 0]), u64::MAX);
    /// ```
    pub fn from_limbs(limbs: &[S::Limb]) -> Integer<S> {
        Integer {
            storage: S::from_limbs(limbs),
        }
    }

    /// Converts between storages with the same limb type, keeping the low limbs if the value
    /// doesn't fit.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::{BigInt, FixedBigInt};
    /// let big: BigInt = "0x1_0000_0000_0000_0000_0000_0000_0000_0001".replace('_', "").parse().unwrap();
    /// assert_eq!(FixedBigInt::<1>::wrapping_from(&big), 1);
    /// ```
    pub fn wrapping_from<T: LimbStorage<Limb = S::Limb>>(other: &Integer<T>) -> Integer<S> {
        Self::from_limbs(other.limbs())
    }

    /// Parses a signed integer in the given radix: an optional `+` or `-`, then digits. Unlike
    /// [`str::parse`], there is no `0x` prefix.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidFormat`] for malformed text and
    /// [`ParseError::CapacityExceeded`] if fixed storage can't hold the value.
    ///
    /// # Panics
    /// Panics if `radix` is not in the range `2..=36`.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// assert_eq!(BigInt::from_str_radix("-ff", 16), Ok(BigInt::from(-255)));
    /// assert!(BigInt::from_str_radix("12", 2).is_err());
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Integer<S>, ParseError> {
        let limbs = radix::from_string::<S::Limb>(text, radix)?;
        Self::from_parsed(&limbs)
    }

    pub(crate) fn from_parsed(limbs: &[S::Limb]) -> Result<Integer<S>, ParseError> {
        S::check_fits(limbs).inspect_err(|error| log::trace!("rejected parsed value: {error}"))?;
        Ok(Self::from_limbs(limbs))
    }

    /// Formats the value in the given radix, with a leading `-` for negative values.
    ///
    /// # Panics
    /// Panics if `radix` is not in the range `2..=36`.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// assert_eq!(BigInt::from(-255).to_str_radix(16), "-ff");
    /// assert_eq!(BigInt::from(5).to_str_radix(2), "101");
    /// ```
    pub fn to_str_radix(&self, radix: u32) -> String {
        radix::to_string(self.limbs(), radix)
    }

    /// Returns the limbs of the value, least significant first.
    pub fn limbs(&self) -> &[S::Limb] {
        self.storage.limbs()
    }

    pub fn is_zero(&self) -> bool {
        algo::is_zero(self.limbs())
    }

    pub fn is_negative(&self) -> bool {
        algo::signbit(self.limbs())
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns `-1`, `0` or `1` depending on the sign of the value.
    pub fn signum(&self) -> Integer<S> {
        match (self.is_negative(), self.is_zero()) {
            (true, _) => Integer::from(-1_i8),
            (false, true) => Integer::new(),
            (false, false) => Integer::from(1_i8),
        }
    }

    /// Returns the absolute value. For fixed storage, the minimum value is its own absolute value.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// assert_eq!(BigInt::from(-7).abs(), 7);
    /// assert_eq!(BigInt::from(i64::MIN).abs(), 1_u64 << 63);
    /// ```
    pub fn abs(&self) -> Integer<S> {
        match self.is_negative() {
            true => -self,
            false => self.clone(),
        }
    }

    /// Returns the number of bits needed to represent the absolute value. Zero needs none.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::BigInt;
    /// assert_eq!(BigInt::from(0).bits(), 0);
    /// assert_eq!(BigInt::from(255).bits(), 8);
    /// assert_eq!(BigInt::from(-256).bits(), 9);
    /// ```
    pub fn bits(&self) -> usize {
        if self.is_negative() {
            let mut magnitude = self.storage.clone();
            algo::negate(magnitude.limbs_mut());
            algo::unsigned_bits(magnitude.limbs())
        } else {
            algo::unsigned_bits(self.limbs())
        }
    }

    /// Adds `rhs`, returning the sum and whether it wrapped. A [`BigInt`](super::BigInt) never
    /// wraps.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::FixedBigInt;
    /// let max = FixedBigInt::<1>::from(i64::MAX);
    /// let (sum, overflowed) = max.overflowing_add(&FixedBigInt::from(1));
    /// assert!(overflowed);
    /// assert_eq!(sum, i64::MIN);
    /// ```
    pub fn overflowing_add(mut self, rhs: &Integer<S>) -> (Integer<S>, bool) {
        let overflowed = self.add_limbs(rhs.limbs());
        (self, overflowed)
    }

    /// Subtracts `rhs`, returning the difference and whether it wrapped.
    pub fn overflowing_sub(mut self, rhs: &Integer<S>) -> (Integer<S>, bool) {
        let overflowed = self.sub_limbs(rhs.limbs());
        (self, overflowed)
    }

    /// Negates the value, returning the result and whether it wrapped (only the minimum of a fixed
    /// width does).
    pub fn overflowing_neg(mut self) -> (Integer<S>, bool) {
        let overflowed = self.negate_in_place();
        (self, overflowed)
    }

    /// Adds `rhs`, returning [`None`] instead of wrapping.
    pub fn checked_add(self, rhs: &Integer<S>) -> Option<Integer<S>> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Subtracts `rhs`, returning [`None`] instead of wrapping.
    pub fn checked_sub(self, rhs: &Integer<S>) -> Option<Integer<S>> {
        match self.overflowing_sub(rhs) {
            (difference, false) => Some(difference),
            (_, true) => None,
        }
    }

    /// Negates the value, returning [`None`] instead of wrapping.
    pub fn checked_neg(self) -> Option<Integer<S>> {
        match self.overflowing_neg() {
            (negated, false) => Some(negated),
            (_, true) => None,
        }
    }
}

// The helpers below are what every operator comes down to: make room, run the algorithm on the
// limbs, then let the storage tidy up.
impl<S: LimbStorage> Integer<S> {
    pub(crate) fn add_limbs(&mut self, rhs: &[S::Limb]) -> bool {
        let len = self.limbs().len().max(rhs.len()) + 1;
        self.storage.widen(len);
        let overflowed = algo::add_assign(self.storage.limbs_mut(), rhs);
        self.storage.settle();
        overflowed
    }

    pub(crate) fn sub_limbs(&mut self, rhs: &[S::Limb]) -> bool {
        let len = self.limbs().len().max(rhs.len()) + 1;
        self.storage.widen(len);
        let overflowed = algo::sub_assign(self.storage.limbs_mut(), rhs);
        self.storage.settle();
        overflowed
    }

    pub(crate) fn bitwise_limbs(&mut self, rhs: &[S::Limb], op: fn(&mut [S::Limb], &[S::Limb])) {
        let len = self.limbs().len().max(rhs.len());
        self.storage.widen(len);
        op(self.storage.limbs_mut(), rhs);
        self.storage.settle();
    }

    pub(crate) fn negate_in_place(&mut self) -> bool {
        let len = self.limbs().len() + 1;
        self.storage.widen(len);
        let overflowed = algo::negate(self.storage.limbs_mut());
        self.storage.settle();
        overflowed
    }

    pub(crate) fn not_in_place(&mut self) {
        algo::not_assign(self.storage.limbs_mut());
    }

    /// # Panics
    /// Panics if growable storage would be wider than [`isize::MAX`] bits. A smaller shift that
    /// still can't be allocated aborts.
    pub(crate) fn shl_bits(&mut self, n: usize) {
        if self.is_zero() {
            return;
        }

        let extra = n.div_ceil(<S::Limb as Limb>::BITS as usize);
        let len = self.limbs().len().saturating_add(extra);
        self.storage.widen(len);
        algo::shl_assign(self.storage.limbs_mut(), n);
        self.storage.settle();
    }

    pub(crate) fn shr_bits(&mut self, n: usize) {
        algo::shr_assign(self.storage.limbs_mut(), n);
        self.storage.settle();
    }
}

impl<S: LimbStorage> Default for Integer<S> {
    fn default() -> Self {
        Self::new()
    }
}
