/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Fiat-Shamir challenges and hashing to integers
//!
//! Prover and verifier must agree on every byte hashed here:
//! points are hashed through their decimal coordinates, scalars through their decimal form.

use num_bigint::{BigInt, Sign};
use sha2::{Sha256, Digest};

use crate::byteconversion::bytes_to_signed_int;
use crate::curve::Point;
use crate::errors::SerializationError;
use crate::scalar::Scalar;

///SHA-256 of `msg`.
pub fn h_bytes(msg: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    return hasher.finalize().into();
}

///Hash bytes to a signed integer (the digest read as two's complement).
pub fn hash_to_int(msg: &[u8]) -> Result<Scalar, SerializationError> {
    return bytes_to_signed_int(&h_bytes(msg));
}

///Derive two challenges from two points.
///
///`c1 = H(X1 || Y1 || X2 || Y2)` and `c2 = H(X1 || Y1 || X2 || Y2 || c1)`,
///everything in decimal, digests read as unsigned big-endian integers.
///Neither challenge is reduced.
pub fn hash_bp(p1: &Point, p2: &Point) -> (Scalar, Scalar) {
    let (x1, y1) = p1.decimal_coordinates();
    let (x2, y2) = p2.decimal_coordinates();
    let transcript = [x1, y1, x2, y2].concat();

    let c1 = BigInt::from_bytes_be(Sign::Plus, &h_bytes(transcript.as_bytes()));
    let c2 = BigInt::from_bytes_be(Sign::Plus,
        &h_bytes([transcript, c1.to_string()].concat().as_bytes()));
    return (c1, c2)
}

///Derive the inner product challenge from the generators, the commitment
///and the claimed inner product.
pub fn hash_ip(g: &[Point], h: &[Point], p: &Point, c: &Scalar) -> Result<Scalar, SerializationError> {
    let mut hasher = Sha256::new();
    hasher.update(p.to_string().as_bytes());
    for (g_i, h_i) in g.iter().zip(h) {
        hasher.update(g_i.to_string().as_bytes());
        hasher.update(h_i.to_string().as_bytes());
    }
    hasher.update(c.to_string().as_bytes());
    return bytes_to_signed_int(&hasher.finalize());
}

pub mod seeds {
    //! Seeds of the generators derived with `map_to_group`

    pub const SEED_H: &str = "BulletproofsDoesNotNeedTrustedSetupH";
    pub const SEED_U: &str = "BulletproofsDoesNotNeedTrustedSetupU";

    pub const GENERATOR_G: &str = "g";
    pub const GENERATOR_H: &str = "h";
}
