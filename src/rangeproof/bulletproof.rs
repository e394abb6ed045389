/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Bulletproofs rangeproofs

use tracing::debug;

use crate::internal_common::*;
use crate::vector::{
    add, sub, component_mul, scalar_mul, inner_product, powers_of, vector_copy,
    to_scalars, compute_ar, commit_vector, commit_inner_product, vector_exponent
};
use super::{InnerProductParameters, InnerProductProof, RangeParameters};

///A Bulletproofs rangeproof.
///
///Proves that the value committed to in `V` lies in `[0, 2^n)`,
///where `n` is the bit width of the `RangeParameters` it was created with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulletproofRangeProof {
    #[serde(rename = "V")]
    v: Point,
    #[serde(rename = "A")]
    a: Point,
    #[serde(rename = "S")]
    s: Point,
    #[serde(rename = "T1")]
    t1: Point,
    #[serde(rename = "T2")]
    t2: Point,
    #[serde(rename = "Taux", with = "crate::tobytes::decimal")]
    taux: Scalar,
    #[serde(rename = "Mu", with = "crate::tobytes::decimal")]
    mu: Scalar,
    #[serde(rename = "Tprime", with = "crate::tobytes::decimal")]
    tprime: Scalar,
    #[serde(rename = "Proofip")]
    proof_ip: InnerProductProof,
    ///`g^bl * h'^br`, the commitment opened by the inner product proof
    #[serde(rename = "Commit")]
    commit: Point

} impl BulletproofRangeProof {
    ///Create a rangeproof for `secret` with a random blinding factor.
    ///
    ///Return the blinding factor `gamma` of `V = g^secret * h^gamma` along with the proof.
    pub fn prove(params: &RangeParameters, secret: &Scalar) -> Result<(Scalar, Self), RangeProofError> {
        let gamma = random_scalar();
        let proof = Self::prove_with_blinding(params, secret, &gamma)?;
        return Ok((gamma, proof))
    }

    ///Create a rangeproof for `secret`, committed to with blinding factor `gamma`.
    ///
    ///Values outside of `[0, 2^n)` are not rejected here: only their lowest `n` bits are
    ///used, and the resulting proof will not verify.
    pub fn prove_with_blinding(
        params: &RangeParameters, secret: &Scalar, gamma: &Scalar
    ) -> Result<Self, RangeProofError> {
        params.check()?;
        let n = params.n;
        let pedersen = params.pedersen_gens();

        //commit to the value and its bits
        let v = pedersen.commit(secret, gamma).to_point();
        let bits = decompose(secret, 2, n)?;
        let a_l = to_scalars(&bits);
        let a_r = to_scalars(&compute_ar(&bits)?);
        let alpha = random_scalar();
        let a = commit_vector(&a_l, &a_r, &alpha, &params.h, &params.gg, &params.hh)?;

        let s_l: Vec<Scalar> = (0..n).map(|_| random_scalar()).collect();
        let s_r: Vec<Scalar> = (0..n).map(|_| random_scalar()).collect();
        let rho = random_scalar();
        let s = commit_vector(&s_l, &s_r, &rho, &params.h, &params.gg, &params.hh)?;

        let (y, z) = hash_bp(&a, &s);

        //t1 = <aL - z.1^n, y^n . sR> + <sL, y^n . (aR + z.1^n) + z^2 . 2^n>
        //t2 = <sL, y^n . sR>
        let z_n = vector_copy(&z, n);
        let y_n = powers_of(&y, n);
        let z2 = reduce(&(&z * &z));
        let z2_2n = scalar_mul(&powers_of(&Scalar::from(2), n), &z2);

        let a_l_minus_z = sub(&a_l, &z_n)?;
        let a_r_plus_z = add(&a_r, &z_n)?;
        let y_n_s_r = component_mul(&y_n, &s_r)?;

        let t1 = reduce(&(
            inner_product(&a_l_minus_z, &y_n_s_r)?
            + inner_product(&s_l, &add(&component_mul(&y_n, &a_r_plus_z)?, &z2_2n)?)?
        ));
        let t2 = inner_product(&s_l, &y_n_s_r)?;

        let tau1 = random_scalar();
        let tau2 = random_scalar();
        let t1_commitment = pedersen.commit(&t1, &tau1).to_point();
        let t2_commitment = pedersen.commit(&t2, &tau2).to_point();

        let x = reduce(&hash_bp(&t1_commitment, &t2_commitment).0);

        //bl = aL - z.1^n + sL.x
        //br = y^n . (aR + z.1^n + sR.x) + z^2 . 2^n
        let bl = add(&a_l_minus_z, &scalar_mul(&s_l, &x))?;
        let br = add(&component_mul(&y_n, &add(&a_r_plus_z, &scalar_mul(&s_r, &x))?)?, &z2_2n)?;
        let tprime = inner_product(&bl, &br)?;

        let taux = reduce(&(&tau2 * reduce(&(&x * &x)) + &tau1 * &x + &z2 * gamma));
        let mu = reduce(&(&alpha + &rho * &x));

        let h_prime = params.switched_generators(&y)?;
        let commit = commit_inner_product(&params.gg, &h_prime, &bl, &br)?;
        let ip_params = InnerProductParameters::new(params.gg.clone(), h_prime, params.u.clone())?;
        let proof_ip = InnerProductProof::prove(&ip_params, &bl, &br, &commit, &tprime)?;

        return Ok(Self {
            v,
            a,
            s,
            t1: t1_commitment,
            t2: t2_commitment,
            taux,
            mu,
            tprime,
            proof_ip,
            commit
        })
    }

    ///Verify this rangeproof.
    ///
    ///Returns `Ok(false)` if the proof is invalid,
    ///and an error only if the proof or parameters are malformed.
    pub fn verify(&self, params: &RangeParameters) -> Result<bool, RangeProofError> {
        params.check()?;
        let n = params.n;
        let pedersen = params.pedersen_gens();

        let (y, z) = hash_bp(&self.a, &self.s);
        let x = reduce(&hash_bp(&self.t1, &self.t2).0);
        let h_prime = params.switched_generators(&y)?;

        //g^tprime * h^taux == V^(z^2) * g^delta(y,z) * T1^x * T2^(x^2)
        let z2 = reduce(&(&z * &z));
        let x2 = reduce(&(&x * &x));
        let lhs = pedersen.commit(&self.tprime, &self.taux).to_point();
        let rhs = [
            &self.v * &z2,
            &pedersen.g * &params.delta(&y, &z)?,
            &self.t1 * &x,
            &self.t2 * &x2
        ].into_iter().sum::<Point>();
        let polynomial_ok = (&rhs - &lhs).is_infinity();
        if !polynomial_ok {
            debug!("rangeproof polynomial commitment check failed");
        }

        //A * S^x * g^(-z) * h'^(z.y^n + z^2.2^n) == h^mu * Commit
        let minus_z = reduce(&-&z);
        let exponents = add(
            &scalar_mul(&powers_of(&y, n), &z),
            &scalar_mul(&powers_of(&Scalar::from(2), n), &z2)
        )?;
        let lhs = [
            self.a.clone(),
            &self.s * &x,
            vector_exponent(&params.gg, &vector_copy(&minus_z, n))?,
            vector_exponent(&h_prime, &exponents)?
        ].into_iter().sum::<Point>();
        let rhs = &(&params.h * &self.mu) + &self.commit;
        let vector_ok = (&rhs - &lhs).is_infinity();
        if !vector_ok {
            debug!("rangeproof vector commitment check failed");
        }

        let ip_params = InnerProductParameters::new(params.gg.clone(), h_prime, params.u.clone())?;
        let ip_ok = self.proof_ip.verify(&ip_params, &self.commit, &self.tprime)?;

        return Ok(polynomial_ok && vector_ok && ip_ok)
    }

    ///The commitment `V` to the proven value.
    pub fn commitment(&self) -> Commitment {
        return Commitment(self.v.clone());
    }

    ///`tprime = <bl, br>`, the inner product proven by the nested argument.
    pub fn tprime(&self) -> &Scalar {
        return &self.tprime;
    }

    pub fn taux(&self) -> &Scalar {
        return &self.taux;
    }

    pub fn mu(&self) -> &Scalar {
        return &self.mu;
    }

    ///The nested inner product proof.
    pub fn inner_product_proof(&self) -> &InnerProductProof {
        return &self.proof_ip;
    }

    ///The commitment opened by the inner product proof.
    pub fn inner_product_commitment(&self) -> &Point {
        return &self.commit;
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BulletproofRangeProof {}
