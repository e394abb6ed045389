/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversions between signed integers and their byte/ASCII encodings.
//!
//! Byte arrays are big-endian two's complement of minimal length,
//! including at least one sign bit: `ceil((bit_length + 1) / 8)` bytes.

use num_bigint::BigInt;
use std::str::FromStr;

use crate::errors::SerializationError;

///Decode a minimal-length big-endian two's-complement byte array.
///
///Leading sign-extension bytes are accepted and ignored.
pub fn bytes_to_signed_int(bytes: &[u8]) -> Result<BigInt, SerializationError> {
    if bytes.is_empty() {
        return Err(SerializationError::EmptyInput)
    }
    return Ok(BigInt::from_signed_bytes_be(bytes))
}

///Encode an integer as a minimal-length big-endian two's-complement byte array.
///
///Zero encodes as `[0]`.
pub fn signed_int_to_bytes(value: &BigInt) -> Vec<u8> {
    return value.to_signed_bytes_be()
}

///Decode the ASCII encoding of a signed decimal integer.
///
///Only digits are allowed, with an optional leading `-`.
pub fn parse_signed_decimal(ascii: &[u8]) -> Result<BigInt, SerializationError> {
    let valid = ascii.iter().enumerate().all(
        |(i, byte)| byte.is_ascii_digit() || (i == 0 && *byte == b'-'));
    if !valid {
        return Err(SerializationError::DecodingError)
    }

    let text = std::str::from_utf8(ascii).map_err(|_| SerializationError::DecodingError)?;
    return BigInt::from_str(text).map_err(|_| SerializationError::DecodingError)
}

///Decode a comma-separated list of ASCII signed decimal integers.
pub fn parse_input(ascii: &[u8]) -> Result<Vec<BigInt>, SerializationError> {
    return ascii.split(|byte| *byte == b',')
        .map(parse_signed_decimal)
        .collect()
}
