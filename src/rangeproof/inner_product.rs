/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Inner product argument
//!
//! Proves knowledge of `a`, `b` such that `P = g^a * h^b` and `<a, b> = c`,
//! with `log2(n)` pairs of points.

use tracing::{debug, trace};

use crate::internal_common::*;
use crate::vector::{add, inner_product, point_add, point_scalar_mul, scalar_mul, vector_exponent};

///Generators of an inner product argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerProductParameters {
    g: Vec<Point>,
    h: Vec<Point>,
    u: Point

} impl InnerProductParameters {
    ///`g` and `h` must have the same power of two length.
    pub fn new(g: Vec<Point>, h: Vec<Point>, u: Point) -> Result<Self, RangeProofError> {
        if g.len() != h.len() {
            return Err(ArithmeticError::LengthMismatch{left: g.len(), right: h.len()}.into())
        }
        if !g.len().is_power_of_two() {
            return Err(RangeProofError::NotPowerOfTwo(g.len()))
        }
        return Ok(Self{g, h, u})
    }

    ///Length of the vectors.
    pub fn n(&self) -> usize {
        return self.g.len();
    }

    pub fn g(&self) -> &[Point] {
        return &self.g;
    }

    pub fn h(&self) -> &[Point] {
        return &self.h;
    }

    ///Auxiliary generator
    pub fn u(&self) -> &Point {
        return &self.u;
    }

    ///`P * u'^c` and `u'`, where `u' = u^x` and `x` is derived from everything public.
    fn bind_claim(&self, commitment: &Point, c: &Scalar) -> Result<(Point, Point), RangeProofError> {
        let x = hash_ip(&self.g, &self.h, commitment, c)?;
        let u_x = &self.u * &x;
        let p = commitment + &(&u_x * c);
        return Ok((p, u_x))
    }
}

///Challenge of one round and its inverse.
fn round_challenge(l: &Point, r: &Point) -> Result<(Scalar, Scalar), RangeProofError> {
    let x = reduce(&hash_bp(l, r).0);
    let x_inv = mod_inverse(&x, &ORDER)?;
    return Ok((x, x_inv))
}

///`g' = g_lo^(x^-1) * g_hi^x` and `h' = h_lo^x * h_hi^(x^-1)`
fn fold_generators(
    g: &[Point], h: &[Point], x: &Scalar, x_inv: &Scalar
) -> Result<(Vec<Point>, Vec<Point>), RangeProofError> {
    let half = g.len() / 2;
    let (g_lo, g_hi) = g.split_at(half);
    let (h_lo, h_hi) = h.split_at(half);
    let g_folded = point_add(&point_scalar_mul(g_lo, x_inv), &point_scalar_mul(g_hi, x))?;
    let h_folded = point_add(&point_scalar_mul(h_lo, x), &point_scalar_mul(h_hi, x_inv))?;
    return Ok((g_folded, h_folded))
}

///`P' = L^(x^2) * P * R^(x^-2)`
fn fold_commitment(p: &Point, l: &Point, r: &Point, x: &Scalar, x_inv: &Scalar) -> Point {
    let x2 = reduce(&(x * x));
    let x2_inv = reduce(&(x_inv * x_inv));
    return &(&(l * &x2) + p) + &(r * &x2_inv);
}

///An inner product proof.
///
///Besides the round points, the proof carries the final generators, the auxiliary
///generator and the final commitment. The verifier recomputes all of them and
///rejects the proof if they differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InnerProductProof {
    ///Length of the proven vectors
    #[serde(rename = "N")]
    n: usize,
    #[serde(rename = "A", with = "crate::tobytes::decimal")]
    a: Scalar,
    #[serde(rename = "B", with = "crate::tobytes::decimal")]
    b: Scalar,
    #[serde(rename = "U")]
    u: Point,
    #[serde(rename = "P")]
    p: Point,
    #[serde(rename = "Gg")]
    g: Point,
    #[serde(rename = "Hh")]
    h: Point,
    #[serde(rename = "Ls")]
    l_vec: Vec<Point>,
    #[serde(rename = "Rs")]
    r_vec: Vec<Point>

} impl InnerProductProof {
    ///Prove that `<a, b> = c` for `commitment = g^a * h^b`.
    pub fn prove(
        params: &InnerProductParameters, a: &[Scalar], b: &[Scalar], commitment: &Point, c: &Scalar
    ) -> Result<Self, RangeProofError> {
        if a.len() != b.len() {
            return Err(ArithmeticError::LengthMismatch{left: a.len(), right: b.len()}.into())
        }
        if a.len() != params.n() {
            return Err(ArithmeticError::LengthMismatch{left: a.len(), right: params.n()}.into())
        }

        let (mut p, u) = params.bind_claim(commitment, c)?;
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        let mut g = params.g.clone();
        let mut h = params.h.clone();

        let rounds = params.n().trailing_zeros() as usize;
        let mut l_vec: Vec<Point> = Vec::with_capacity(rounds);
        let mut r_vec: Vec<Point> = Vec::with_capacity(rounds);

        let mut n = params.n();
        while n != 1 {
            n = n / 2;
            let (a_lo, a_hi) = a.split_at(n);
            let (b_lo, b_hi) = b.split_at(n);
            let (g_lo, g_hi) = g.split_at(n);
            let (h_lo, h_hi) = h.split_at(n);

            let c_l = inner_product(a_lo, b_hi)?;
            let c_r = inner_product(a_hi, b_lo)?;

            //L = g_hi^a_lo * h_lo^b_hi * u^cL
            let l = &(&vector_exponent(g_hi, a_lo)? + &vector_exponent(h_lo, b_hi)?) + &(&u * &c_l);
            //R = g_lo^a_hi * h_hi^b_lo * u^cR
            let r = &(&vector_exponent(g_lo, a_hi)? + &vector_exponent(h_hi, b_lo)?) + &(&u * &c_r);

            let (x, x_inv) = round_challenge(&l, &r)?;
            trace!(remaining = n, "inner product round");

            let a_folded = add(&scalar_mul(a_lo, &x), &scalar_mul(a_hi, &x_inv))?;
            let b_folded = add(&scalar_mul(b_lo, &x_inv), &scalar_mul(b_hi, &x))?;
            let (g_folded, h_folded) = fold_generators(&g, &h, &x, &x_inv)?;
            p = fold_commitment(&p, &l, &r, &x, &x_inv);

            a = a_folded;
            b = b_folded;
            g = g_folded;
            h = h_folded;
            l_vec.push(l);
            r_vec.push(r);
        }

        return Ok(Self {
            n: params.n(),
            a: a[0].clone(),
            b: b[0].clone(),
            u,
            p,
            g: g[0].clone(),
            h: h[0].clone(),
            l_vec,
            r_vec
        })
    }

    ///Verify the proof against `commitment` and the claimed inner product `c`.
    ///
    ///Returns `Ok(false)` for an invalid proof, and an error only if the proof's
    ///shape does not match `params`.
    pub fn verify(
        &self, params: &InnerProductParameters, commitment: &Point, c: &Scalar
    ) -> Result<bool, RangeProofError> {
        if self.n != params.n()
            || self.l_vec.len() != self.r_vec.len()
            || 1usize.checked_shl(self.l_vec.len() as u32) != Some(params.n()) {
            return Err(RangeProofError::Malformed)
        }

        let (mut p, u) = params.bind_claim(commitment, c)?;
        let mut g = params.g.clone();
        let mut h = params.h.clone();

        for (l, r) in self.l_vec.iter().zip(&self.r_vec) {
            let (x, x_inv) = round_challenge(l, r)?;
            (g, h) = fold_generators(&g, &h, &x, &x_inv)?;
            p = fold_commitment(&p, l, r, &x, &x_inv);
        }

        if u != self.u || p != self.p || g[0] != self.g || h[0] != self.h {
            debug!("inner product transcript does not match the proof");
            return Ok(false)
        }

        //P' == g'^a * h'^b * u'^(a*b)
        let ab = reduce(&(&self.a * &self.b));
        let rhs = &(&(&g[0] * &self.a) + &(&h[0] * &self.b)) + &(&u * &ab);
        if !(&p - &rhs).is_infinity() {
            debug!("inner product equation failed");
            return Ok(false)
        }
        return Ok(true)
    }

    ///Length of the proven vectors.
    pub fn n(&self) -> usize {
        return self.n;
    }

    ///Final folded `a`.
    pub fn a(&self) -> &Scalar {
        return &self.a;
    }

    ///Final folded `b`.
    pub fn b(&self) -> &Scalar {
        return &self.b;
    }

    ///The `L` points, one per round.
    pub fn l_vec(&self) -> &[Point] {
        return &self.l_vec;
    }

    ///The `R` points, one per round.
    pub fn r_vec(&self) -> &[Point] {
        return &self.r_vec;
    }

    ///Final folded commitment.
    pub fn p(&self) -> &Point {
        return &self.p;
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for InnerProductProof {}
