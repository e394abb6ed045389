/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments

use std::iter::Sum;

use crate::internal_common::*;

///The two generators of a Pedersen commitment: `g` for the value, `h` for the blinding factor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PedersenGens {
    #[serde(rename = "G")]
    pub g: Point,
    #[serde(rename = "H")]
    pub h: Point

} impl PedersenGens {
    ///`g` is the curve basepoint, `h` is hashed from `seed_h`.
    pub fn new(seed_h: &str) -> Result<Self, GroupError> {
        return Ok(Self {
            g: Point::generator(),
            h: map_to_group(seed_h)?
        })
    }

    ///`g^value * h^blinding`
    pub fn commit(&self, value: &Scalar, blinding: &Scalar) -> Commitment {
        return Commitment(&(&self.g * value) + &(&self.h * blinding))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for PedersenGens {}

///A pedersen commitment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment(
    pub Point

); impl Commitment {
    ///Return the elliptic curve point which represents this commitment.
    ///To convert an elliptic curve point back into a commitment, use `Commitment(point)`.
    pub fn to_point(&self) -> Point {
        return self.0.clone();
    }

    ///Check that the inputs and outputs of a transaction balance.
    ///
    ///`sum(inputs) - sum(outputs)` must equal `h^blinding_difference`,
    ///which holds exactly when the committed values balance and
    ///`blinding_difference = sum(input blindings) - sum(output blindings)`.
    pub fn verify_balance(
        pedersen: &PedersenGens, inputs: &[Commitment], outputs: &[Commitment], blinding_difference: &Scalar
    ) -> bool {
        let input_sum: Commitment = inputs.iter().sum();
        let output_sum: Commitment = outputs.iter().sum();
        let difference = &input_sum.0 - &output_sum.0;
        let expected = &pedersen.h * blinding_difference;
        return difference == expected
    }

    ///Given input commitments, output commitments, and "extra" output (ie fees),
    ///check if the equation is balanced.
    ///
    ///`in == (out + extra)`
    pub fn is_balanced(
        pedersen: &PedersenGens, inputs: &[Commitment], outputs: &[Commitment], extra: &Scalar
    ) -> bool {
        let extra = Commitment(&pedersen.g * extra);
        let input_sum: Commitment = inputs.iter().sum();
        let output_sum: Commitment = outputs.iter().chain(std::iter::once(&extra)).sum();
        return input_sum == output_sum
    }

} impl Sum for Commitment {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        return Commitment(iter.map(|com| com.0).sum())
    }

} impl<'a> Sum<&'a Commitment> for Commitment {
    fn sum<I: Iterator<Item = &'a Commitment>>(iter: I) -> Self {
        return Commitment(iter.map(|com| &com.0).sum())
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Commitment {}
