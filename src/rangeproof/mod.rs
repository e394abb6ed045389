/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cryptographic proofs which demonstrate that the amount committed to in a pedersen commitment
//! lies in `[0, 2^n)`

mod parameters;
mod inner_product;
mod bulletproof;

pub use parameters::{RangeConfig, RangeParameters};
pub use inner_product::{InnerProductParameters, InnerProductProof};
pub use bulletproof::BulletproofRangeProof;

use crate::hashes::seeds::{SEED_H, SEED_U};

///Upper bound used by `RangeConfig::default()`: values in `[0, 2^32)` can be proven.
pub const DEFAULT_UPPER_BOUND: i64 = 1 << 32;

///Seed of the blinding generator `H` (and of the per-bit generators) used by `RangeConfig::default()`.
pub const DEFAULT_SEED_H: &str = SEED_H;

///Seed of the inner product's auxiliary generator `u` used by `RangeConfig::default()`.
pub const DEFAULT_SEED_U: &str = SEED_U;
