use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no digits found in integer literal")]
pub struct EmptyDigitsError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid digit {digit:?} at byte {index} of integer literal")]
pub struct InvalidDigitError {
    pub digit: char,
    pub index: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("value needs {required} limbs but only {capacity} are available")]
pub struct CapacityExceededError {
    pub required: usize,
    pub capacity: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("value out of range for the target integer type")]
pub struct OutOfRangeError;

/// The ways in which text can fail to be an integer literal.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum InvalidFormat {
    EmptyDigits(EmptyDigitsError),
    InvalidDigit(InvalidDigitError),
}

/// Returned when parsing an [`Integer`](crate::num::int::Integer) from text.
///
/// [`CapacityExceeded`](ParseError::CapacityExceeded) is only produced by fixed capacity storage,
/// a [`BigInt`](crate::num::int::BigInt) always has room for the value.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum ParseError {
    InvalidFormat(InvalidFormat),
    CapacityExceeded(CapacityExceededError),
}

impl From<EmptyDigitsError> for ParseError {
    fn from(value: EmptyDigitsError) -> Self {
        InvalidFormat::from(value).into()
    }
}

impl From<InvalidDigitError> for ParseError {
    fn from(value: InvalidDigitError) -> Self {
        InvalidFormat::from(value).into()
    }
}
