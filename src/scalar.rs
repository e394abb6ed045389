/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Scalar arithmetic modulo the group order
//!
//! Scalars are arbitrary-precision signed integers.
//! Plain `+`, `-` and `*` do not reduce: callers reduce explicitly where the protocol needs it.

use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rand::thread_rng;

use crate::curve::ORDER;
use crate::errors::ArithmeticError;

///A scalar. Reduce with `reduce` before relying on it being canonical.
pub type Scalar = BigInt;

///`x mod ORDER`, always in `[0, ORDER)`.
pub fn reduce(x: &Scalar) -> Scalar {
    return x.mod_floor(&ORDER);
}

///Euclidean `x mod m`, always in `[0, m)`.
pub fn modulo(x: &Scalar, m: &Scalar) -> Result<Scalar, ArithmeticError> {
    if !m.is_positive() {
        return Err(ArithmeticError::InvalidModulus)
    }
    return Ok(x.mod_floor(m))
}

///`base^exponent mod m`.
///
///Negative exponents are supported: the result is the inverse of `base^|exponent|`.
pub fn mod_pow(base: &Scalar, exponent: &Scalar, m: &Scalar) -> Result<Scalar, ArithmeticError> {
    let base = modulo(base, m)?;
    if !exponent.is_negative() {
        return Ok(base.modpow(exponent, m))
    }
    return mod_inverse(&base.modpow(&exponent.abs(), m), m)
}

///Inverse of `x` modulo `m`.
///
///Modulo 1 every value is congruent to 0, and the inverse is defined to be 0.
pub fn mod_inverse(x: &Scalar, m: &Scalar) -> Result<Scalar, ArithmeticError> {
    if !m.is_positive() {
        return Err(ArithmeticError::InvalidModulus)
    }
    if m.is_one() {
        return Ok(BigInt::zero())
    }
    return x.mod_floor(m).modinv(m).ok_or(ArithmeticError::NotInvertible)
}

///Digits of `x` in base `base`, least significant first, exactly `length` of them.
///
///Digits above `length` are dropped.
///Negative inputs use Euclidean division, so `-1` in base 2 decomposes to all ones.
pub fn decompose(x: &Scalar, base: u32, length: usize) -> Result<Vec<i64>, ArithmeticError> {
    if base < 2 {
        return Err(ArithmeticError::InvalidBase)
    }
    let base = BigInt::from(base);
    let mut x = x.clone();
    let mut digits: Vec<i64> = Vec::with_capacity(length);
    for _ in 0..length {
        let (quotient, digit) = x.div_mod_floor(&base);
        digits.push(digit.to_i64().ok_or(ArithmeticError::InvalidBase)?);
        x = quotient;
    }
    return Ok(digits)
}

///return a random scalar in `[0, ORDER)`
pub fn random_scalar() -> Scalar {
    return thread_rng().gen_bigint_range(&BigInt::zero(), &ORDER);
}
