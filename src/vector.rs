/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Component-wise vector algebra over scalars and points
//!
//! Scalar results are reduced modulo the group order.
//! Binary operations require equal lengths and never truncate.

use num_traits::{One, Zero};

use crate::curve::Point;
use crate::errors::ArithmeticError;
use crate::scalar::{Scalar, reduce};

fn check_lengths(left: usize, right: usize) -> Result<(), ArithmeticError> {
    if left != right {
        return Err(ArithmeticError::LengthMismatch{left, right})
    }
    return Ok(())
}

///`n` copies of `a`.
pub fn vector_copy(a: &Scalar, n: usize) -> Vec<Scalar> {
    return vec![a.clone(); n];
}

///Lift small integers to scalars.
pub fn to_scalars(a: &[i64]) -> Vec<Scalar> {
    return a.iter().map(|v| Scalar::from(*v)).collect();
}

///`a + b`
pub fn add(a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, ArithmeticError> {
    check_lengths(a.len(), b.len())?;
    return Ok(a.iter().zip(b).map(|(a_i, b_i)| reduce(&(a_i + b_i))).collect())
}

///`a - b`
pub fn sub(a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, ArithmeticError> {
    check_lengths(a.len(), b.len())?;
    return Ok(a.iter().zip(b).map(|(a_i, b_i)| reduce(&(a_i - b_i))).collect())
}

///`a ∘ b` (Hadamard product)
pub fn component_mul(a: &[Scalar], b: &[Scalar]) -> Result<Vec<Scalar>, ArithmeticError> {
    check_lengths(a.len(), b.len())?;
    return Ok(a.iter().zip(b).map(|(a_i, b_i)| reduce(&(a_i * b_i))).collect())
}

///`a · s`
pub fn scalar_mul(a: &[Scalar], s: &Scalar) -> Vec<Scalar> {
    return a.iter().map(|a_i| reduce(&(a_i * s))).collect();
}

///`<a, b>`
pub fn inner_product(a: &[Scalar], b: &[Scalar]) -> Result<Scalar, ArithmeticError> {
    check_lengths(a.len(), b.len())?;
    let mut result = Scalar::zero();
    for (a_i, b_i) in a.iter().zip(b) {
        //reduced after every step
        result = reduce(&(result + a_i * b_i));
    }
    return Ok(result)
}

///`[x^0, x^1, ..., x^(n-1)]`
pub fn powers_of(x: &Scalar, n: usize) -> Vec<Scalar> {
    let mut result: Vec<Scalar> = Vec::with_capacity(n);
    let mut current = Scalar::one();
    for _ in 0..n {
        let next = reduce(&(&current * x));
        result.push(current);
        current = next;
    }
    return result;
}

///`aR = aL - 1^n`: maps each bit `0 -> -1`, `1 -> 0`.
pub fn compute_ar(bits: &[i64]) -> Result<Vec<i64>, ArithmeticError> {
    return bits.iter().map(|bit| match bit {
        0 => Ok(-1),
        1 => Ok(0),
        other => Err(ArithmeticError::NonBinaryDigit(*other))
    }).collect()
}

///`prod_i points[i]^scalars[i]`, accumulated from the point at infinity.
pub fn vector_exponent(points: &[Point], scalars: &[Scalar]) -> Result<Point, ArithmeticError> {
    check_lengths(points.len(), scalars.len())?;
    return Ok(points.iter().zip(scalars)
        .map(|(point, scalar)| point * scalar)
        .sum())
}

///`points[i]^s` for every `i`.
pub fn point_scalar_mul(points: &[Point], s: &Scalar) -> Vec<Point> {
    return points.iter().map(|point| point * s).collect();
}

///`a[i] * b[i]` for every `i`, in multiplicative notation (point addition).
pub fn point_add(a: &[Point], b: &[Point]) -> Result<Vec<Point>, ArithmeticError> {
    check_lengths(a.len(), b.len())?;
    return Ok(a.iter().zip(b).map(|(a_i, b_i)| a_i + b_i).collect())
}

///`h^alpha * prod_i g[i]^l[i] * h[i]^r[i]`, a commitment to two vectors.
pub fn commit_vector(
    l: &[Scalar], r: &[Scalar], alpha: &Scalar, h: &Point, g_vec: &[Point], h_vec: &[Point]
) -> Result<Point, ArithmeticError> {
    check_lengths(l.len(), r.len())?;
    let gl = vector_exponent(g_vec, l)?;
    let hr = vector_exponent(h_vec, r)?;
    return Ok(&(h * alpha) + &(&gl + &hr))
}

///`g^a * h^b`
pub fn commit_inner_product(
    g: &[Point], h: &[Point], a: &[Scalar], b: &[Scalar]
) -> Result<Point, ArithmeticError> {
    let ga = vector_exponent(g, a)?;
    let hb = vector_exponent(h, b)?;
    return Ok(&ga + &hb)
}
