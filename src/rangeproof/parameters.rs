/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Public parameters of the range proof

use num_traits::One;
use tracing::debug;

use crate::internal_common::*;
use crate::hashes::seeds::{GENERATOR_G, GENERATOR_H};
use crate::vector::{inner_product, powers_of, vector_copy};
use super::{DEFAULT_SEED_H, DEFAULT_SEED_U, DEFAULT_UPPER_BOUND};

///Inputs to `RangeParameters::setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConfig {
    pub lower_bound: i64,
    ///The bit width is `floor(log2(upper_bound))`.
    pub upper_bound: i64,
    pub seed_h: String,
    pub seed_u: String

} impl RangeConfig {
    ///A config for `[lower_bound, upper_bound)` with the default seeds.
    pub fn new(lower_bound: i64, upper_bound: i64) -> Self {
        return Self {
            lower_bound,
            upper_bound,
            ..Default::default()
        }
    }

} impl Default for RangeConfig {
    fn default() -> Self {
        return Self {
            lower_bound: 0,
            upper_bound: DEFAULT_UPPER_BOUND,
            seed_h: DEFAULT_SEED_H.to_string(),
            seed_u: DEFAULT_SEED_U.to_string()
        }
    }
}

///Generators shared by prover and verifier.
///
///Immutable once created: proving and verifying only ever read them,
///so one set can be shared by reference between threads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeParameters {
    ///Bit width
    #[serde(rename = "N")]
    pub(crate) n: usize,
    #[serde(rename = "G")]
    pub(crate) g: Point,
    #[serde(rename = "H")]
    pub(crate) h: Point,
    #[serde(rename = "Gg")]
    pub(crate) gg: Vec<Point>,
    #[serde(rename = "Hh")]
    pub(crate) hh: Vec<Point>,
    ///Auxiliary generator of the inner product argument
    #[serde(rename = "U")]
    pub(crate) u: Point

} impl RangeParameters {
    ///Derive every generator from the seeds in `config`.
    pub fn setup(config: &RangeConfig) -> Result<Self, RangeProofError> {
        if config.lower_bound > config.upper_bound || config.upper_bound < 2 {
            return Err(RangeProofError::InvalidBounds)
        }
        //floor(log2(upper_bound))
        let n = (i64::BITS - 1 - config.upper_bound.leading_zeros()) as usize;
        if !n.is_power_of_two() {
            return Err(RangeProofError::NotPowerOfTwo(n))
        }

        let mut gg: Vec<Point> = Vec::with_capacity(n);
        let mut hh: Vec<Point> = Vec::with_capacity(n);
        for i in 0..n as u32 {
            let index = char::from_u32(i).unwrap_or(char::REPLACEMENT_CHARACTER);
            gg.push(map_to_group(&format!("{}{GENERATOR_G}{index}", config.seed_h))?);
            hh.push(map_to_group(&format!("{}{GENERATOR_H}{index}", config.seed_h))?);
        }

        let params = Self {
            n,
            g: Point::generator(),
            h: map_to_group(&config.seed_h)?,
            gg,
            hh,
            u: map_to_group(&config.seed_u)?
        };
        debug!(bits = n, "range proof parameters ready");
        return Ok(params)
    }

    ///Bit width: proven values lie in `[0, 2^n)`.
    pub fn n(&self) -> usize {
        return self.n;
    }

    ///The pedersen generators used for the committed value.
    pub fn pedersen_gens(&self) -> PedersenGens {
        return PedersenGens {
            g: self.g.clone(),
            h: self.h.clone()
        }
    }

    ///Per-bit generators `Gg`.
    pub fn gg(&self) -> &[Point] {
        return &self.gg;
    }

    ///Per-bit generators `Hh`.
    pub fn hh(&self) -> &[Point] {
        return &self.hh;
    }

    ///Auxiliary generator `u` of the inner product argument.
    pub fn u(&self) -> &Point {
        return &self.u;
    }

    ///`delta(y, z) = (z - z^2) * <1^n, y^n> - z^3 * <1^n, 2^n>`
    pub fn delta(&self, y: &Scalar, z: &Scalar) -> Result<Scalar, RangeProofError> {
        let z2 = reduce(&(z * z));
        let z3 = reduce(&(&z2 * z));

        let ones = vector_copy(&Scalar::one(), self.n);
        let sum_y = inner_product(&ones, &powers_of(y, self.n))?;
        let sum_2 = inner_product(&ones, &powers_of(&Scalar::from(2), self.n))?;

        let result = reduce(&(reduce(&(z - &z2)) * sum_y));
        return Ok(reduce(&(result - z3 * sum_2)))
    }

    ///`h'[i] = Hh[i]^(y^-i)`
    ///
    ///Always a fresh vector: the shared generators are never modified.
    pub(crate) fn switched_generators(&self, y: &Scalar) -> Result<Vec<Point>, RangeProofError> {
        let y_inv = mod_inverse(y, &ORDER)?;
        let exponents = powers_of(&y_inv, self.n);
        return Ok(self.hh.iter().zip(&exponents)
            .map(|(generator, exponent)| generator * exponent)
            .collect())
    }

    ///Reject parameter sets whose vectors disagree with their bit width.
    pub(crate) fn check(&self) -> Result<(), RangeProofError> {
        if self.gg.len() != self.n || self.hh.len() != self.n {
            return Err(RangeProofError::Malformed)
        }
        if !self.n.is_power_of_two() {
            return Err(RangeProofError::NotPowerOfTwo(self.n))
        }
        return Ok(())
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for RangeParameters {}
