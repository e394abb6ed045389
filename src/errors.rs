/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,
    ///An empty byte array cannot be decoded to an integer.
    EmptyInput,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error.",
            Self::EmptyInput => "Cannot convert an empty byte array to an integer."
        })
    }

} impl Error for SerializationError {}

///Scalar and vector arithmetic errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    ///Two vectors which must have the same length do not.
    LengthMismatch {
        left: usize,
        right: usize
    },
    ///A bit vector contained something other than 0 or 1.
    NonBinaryDigit(i64),
    ///The value has no inverse modulo the given modulus.
    NotInvertible,
    ///The modulus must be strictly positive.
    InvalidModulus,
    ///Digit decomposition needs a base of at least 2.
    InvalidBase,

} impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch{left, right} => write!(f,
                "Size of first argument ({left}) is different from size of second argument ({right})."),
            Self::NonBinaryDigit(digit) => write!(f, "Input contains non-binary element {digit}."),
            Self::NotInvertible => write!(f, "Value is not invertible."),
            Self::InvalidModulus => write!(f, "Modulus must be positive."),
            Self::InvalidBase => write!(f, "Base must be at least 2."),
        }
    }

} impl Error for ArithmeticError {}

///Elliptic curve errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    ///The coordinates do not satisfy the curve equation.
    NotOnCurve,
    ///No counter in the allowed range produced a curve point.
    HashToCurveFailed,

} impl Display for GroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::NotOnCurve => "Point is not on the curve.",
            Self::HashToCurveFailed => "Failed to hash to point."
        })
    }

} impl Error for GroupError {}

///Rangeproof errors
///
///Note that an invalid proof is not an error: verification returns `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeProofError {
    ///The given rangeproof is malformed in some way,
    ///or the parameters are incorrect/inconsistent.
    Malformed,
    ///The setup bounds are inconsistent (`lower > upper`, or `upper < 2`).
    InvalidBounds,
    ///The bit width (or inner product length) must be a power of two.
    NotPowerOfTwo(usize),
    ///A scalar or vector operation failed.
    Arithmetic(ArithmeticError),
    ///A group operation failed.
    Group(GroupError),
    ///A value could not be hashed or decoded.
    Serialization(SerializationError),

} impl Display for RangeProofError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed => write!(f, "Malformed proof or parameters."),
            Self::InvalidBounds => write!(f, "Invalid range bounds."),
            Self::NotPowerOfTwo(n) => write!(f, "Length {n} is not a power of two."),
            Self::Arithmetic(e) => write!(f, "{e}"),
            Self::Group(e) => write!(f, "{e}"),
            Self::Serialization(e) => write!(f, "{e}"),
        }
    }

} impl Error for RangeProofError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        return match self {
            Self::Arithmetic(e) => Some(e),
            Self::Group(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None
        }
    }

} impl From<ArithmeticError> for RangeProofError {
    fn from(e: ArithmeticError) -> Self {
        return Self::Arithmetic(e)
    }

} impl From<GroupError> for RangeProofError {
    fn from(e: GroupError) -> Self {
        return Self::Group(e)
    }

} impl From<SerializationError> for RangeProofError {
    fn from(e: SerializationError) -> Self {
        return Self::Serialization(e)
    }
}
