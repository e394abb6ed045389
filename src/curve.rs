/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants
//!
//! Points live on secp256k1, `y^2 = x^3 + 7` over the prime field `p`.
//! Group arithmetic is done by `k256`, coordinates and scalars cross over
//! to `BigInt` only where decimal values are needed.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr
};

use k256::{
    elliptic_curve::{
        ops::Reduce,
        sec1::{FromEncodedPoint, ToEncodedPoint}
    },
    AffinePoint, FieldBytes, FieldElement, ProjectivePoint, U256
};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;
use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::errors::{GroupError, SerializationError};
use crate::hashes::hash_to_int;
use crate::scalar::{Scalar, reduce, random_scalar};

//secp256k1 domain parameters, big-endian
const P_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f
];
const N_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41
];
const CURVE_B: u32 = 7;

///Number of counters tried by `map_to_group` before giving up.
pub const MAP_TO_GROUP_ATTEMPTS: usize = 256;

lazy_static! {
    ///The curve every point in this crate lives on.
    pub static ref SECP256K1: CurveParams = CurveParams::secp256k1();
    ///The order of the group generated by the basepoint.
    pub static ref ORDER: BigInt = SECP256K1.n.clone();
}

///Parameters of a short Weierstrass curve `y^2 = x^3 + b` with `a = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    ///Prime of the underlying field.
    pub p: BigInt,
    ///Order of the basepoint.
    pub n: BigInt,
    ///Constant term of the curve equation.
    pub b: BigInt,
    ///The basepoint.
    pub g: Point

} impl CurveParams {
    fn secp256k1() -> Self {
        return Self {
            p: BigInt::from_bytes_be(Sign::Plus, &P_BYTES),
            n: BigInt::from_bytes_be(Sign::Plus, &N_BYTES),
            b: BigInt::from(CURVE_B),
            g: Point(ProjectivePoint::GENERATOR)
        }
    }

    ///`x^3 + b mod p`
    pub fn f(&self, x: &BigInt) -> BigInt {
        return (x * x * x + &self.b).mod_floor(&self.p)
    }
}

//big-endian, left padded; the caller guarantees 0 <= value < 2^256
fn to_field_bytes(value: &BigInt) -> FieldBytes {
    let (_, bytes) = value.to_bytes_be();
    let mut padded = FieldBytes::default();
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    return padded
}

fn from_field_bytes(bytes: &FieldBytes) -> BigInt {
    return BigInt::from_bytes_be(Sign::Plus, bytes.as_slice())
}

fn to_k256_scalar(scalar: &Scalar) -> k256::Scalar {
    return <k256::Scalar as Reduce<U256>>::reduce_bytes(&to_field_bytes(&reduce(scalar)))
}

//the curve check happens in `from_encoded_point`
fn from_coordinates(x: &FieldBytes, y: &FieldBytes) -> Option<Point> {
    let encoded = k256::EncodedPoint::from_affine_coordinates(x, y, false);
    let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
    return affine.map(|affine| Point(ProjectivePoint::from(affine)))
}

///An elliptic curve point, or the point at infinity.
///
///Points are plain values: operations never mutate their operands.
///The only ways to obtain one are the checked constructors, group operations
///and deserialization, so every `Point` is on the curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DecimalPoint", into = "DecimalPoint")]
pub struct Point(ProjectivePoint);

impl Point {
    ///The point at infinity (the group identity).
    pub fn infinity() -> Self {
        return Self(ProjectivePoint::IDENTITY)
    }

    ///Create a point from affine coordinates, checking that it lies on the curve.
    pub fn new(x: BigInt, y: BigInt) -> Result<Self, GroupError> {
        let in_field = |v: &BigInt| v.sign() != Sign::Minus && v < &SECP256K1.p;
        if !in_field(&x) || !in_field(&y) {
            return Err(GroupError::NotOnCurve)
        }
        return from_coordinates(&to_field_bytes(&x), &to_field_bytes(&y)).ok_or(GroupError::NotOnCurve)
    }

    ///The basepoint of the curve.
    pub fn generator() -> Self {
        return Self(ProjectivePoint::GENERATOR)
    }

    pub fn is_infinity(&self) -> bool {
        return self.0 == ProjectivePoint::IDENTITY
    }

    ///Always true: points are checked when they are built.
    ///The point at infinity is considered to be on the curve.
    pub fn is_on_curve(&self) -> bool {
        return match self.coordinates() {
            None => true,
            Some((x, y)) => (&y * &y).mod_floor(&SECP256K1.p) == SECP256K1.f(&x)
        }
    }

    fn coordinates(&self) -> Option<(BigInt, BigInt)> {
        let encoded = self.0.to_affine().to_encoded_point(false);
        return match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Some((from_field_bytes(x), from_field_bytes(y))),
            _ => None
        }
    }

    pub fn x(&self) -> Option<BigInt> {
        return self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<BigInt> {
        return self.coordinates().map(|(_, y)| y)
    }

    ///Decimal strings of both coordinates, `("0", "0")` for the point at infinity.
    ///This is the encoding used for hashing.
    pub fn decimal_coordinates(&self) -> (String, String) {
        return match self.coordinates() {
            None => ("0".to_string(), "0".to_string()),
            Some((x, y)) => (x.to_string(), y.to_string())
        }
    }

    ///Add two points.
    ///
    ///Handles every case: infinity is the identity,
    ///`P + P` doubles and `P + (-P)` is the point at infinity.
    pub fn add(&self, other: &Point) -> Point {
        return Self(self.0 + other.0)
    }

    ///Return `2P`.
    pub fn double(&self) -> Point {
        return Self(self.0 + self.0)
    }

    ///Return `-P`. Equivalent to multiplying by `order - 1`.
    pub fn negate(&self) -> Point {
        return Self(-self.0)
    }

    ///Multiply the point by a scalar.
    ///
    ///The scalar is reduced modulo the group order first,
    ///so any multiple of the order (including 0) gives the point at infinity.
    pub fn scalar_mul(&self, scalar: &Scalar) -> Point {
        return Self(self.0 * to_k256_scalar(scalar))
    }

    ///Multiply the basepoint by a scalar.
    pub fn scalar_mul_base(scalar: &Scalar) -> Point {
        return Self(ProjectivePoint::GENERATOR * to_k256_scalar(scalar))
    }

} impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        return self.0 == other.0
    }

} impl Eq for Point {

} impl Default for Point {
    fn default() -> Self {
        return Self::infinity()
    }

} impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x, y) = self.decimal_coordinates();
        write!(f, "p256({x},{y})")
    }
}

impl<'a, 'b> Add<&'b Point> for &'a Point {
    type Output = Point;
    fn add(self, rhs: &'b Point) -> Point {
        return Point::add(self, rhs)
    }
}

impl Add<Point> for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        return Point::add(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b Point> for &'a Point {
    type Output = Point;
    fn sub(self, rhs: &'b Point) -> Point {
        return Point(self.0 - rhs.0)
    }
}

impl<'a> Neg for &'a Point {
    type Output = Point;
    fn neg(self) -> Point {
        return self.negate()
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        return self.negate()
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Point {
    type Output = Point;
    fn mul(self, rhs: &'b Scalar) -> Point {
        return self.scalar_mul(rhs)
    }
}

impl Sum for Point {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        return Point(iter.fold(ProjectivePoint::IDENTITY, |acc, point| acc + point.0))
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Self {
        return Point(iter.fold(ProjectivePoint::IDENTITY, |acc, point| acc + point.0))
    }
}

///Hash a string to a curve point with no known discrete logarithm relation
///to any other point ("nothing up my sleeve").
///
///Try-and-increment: for each counter `i`, hash `i || seed` to `x` and accept the first
///`x` for which `x^3 + 7` is a square. Since `p = 3 mod 4` the root taken is
///`(x^3 + 7)^((p + 1) / 4)`. Based on Boneh, Lynn and Shacham,
///"Short signatures from the Weil pairing".
pub fn map_to_group(seed: &str) -> Result<Point, GroupError> {
    for i in 0..MAP_TO_GROUP_ATTEMPTS {
        let msg = format!("{i}{seed}");
        let x = hash_to_int(msg.as_bytes()).map_err(|_| GroupError::HashToCurveFailed)?;
        let x = to_field_bytes(&x.mod_floor(&SECP256K1.p));
        let fx = to_field_bytes(&SECP256K1.f(&from_field_bytes(&x)));

        let root: Option<FieldElement> = Option::<FieldElement>::from(FieldElement::from_bytes(&fx))
            .and_then(|fx| fx.sqrt().into());
        if let Some(point) = root.and_then(|y| from_coordinates(&x, &y.to_bytes())) {
            trace!(attempt = i, "hash to point succeeded");
            return Ok(point)
        }
        trace!(attempt = i, "no square root, trying next counter");
    }
    return Err(GroupError::HashToCurveFailed)
}

///return a random point on the curve
pub fn random_point() -> Point {
    return Point::scalar_mul_base(&random_scalar());
}

//serde representation: decimal coordinates, the point at infinity is (0, 0)
#[derive(Serialize, Deserialize)]
struct DecimalPoint {
    #[serde(rename = "X")]
    x: String,
    #[serde(rename = "Y")]
    y: String

} impl From<Point> for DecimalPoint {
    fn from(point: Point) -> Self {
        let (x, y) = point.decimal_coordinates();
        return Self{x, y}
    }

} impl TryFrom<DecimalPoint> for Point {
    type Error = SerializationError;

    fn try_from(encoded: DecimalPoint) -> Result<Self, Self::Error> {
        let x = BigInt::from_str(&encoded.x).map_err(|_| SerializationError::DecodingError)?;
        let y = BigInt::from_str(&encoded.y).map_err(|_| SerializationError::DecodingError)?;
        if x.is_zero() && y.is_zero() {
            return Ok(Point::infinity())
        }
        return Point::new(x, y).map_err(|_| SerializationError::DecodingError)
    }
}

#[cfg(feature = "to_bytes")]
impl crate::tobytes::ToBytes<'_> for Point {}
