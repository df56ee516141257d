/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

#[cfg(feature = "to_bytes")]
use crate::errors::SerializationError;
use crate::tobytes::*;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    edwards::{
        EdwardsPoint,
        CompressedEdwardsY,
        EdwardsBasepointTable,
        VartimeEdwardsPrecomputation
    },
    traits::VartimePrecomputedMultiscalarMul
};
use rand::{thread_rng, Rng};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &EdwardsBasepointTable = &constants::ED25519_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: EdwardsPoint = constants::ED25519_BASEPOINT_POINT;

///Size of one encoded point, scalar or signature slot.
pub const SLOT_SIZE: usize = 32;

lazy_static! {
    pub(crate) static ref G_MULTISCALAR_MUL: VartimeEdwardsPrecomputation = VartimeEdwardsPrecomputation::new(vec!(G_POINT));
}

///A curve point in storage form: a public key, or a commitment to be fed into the ring chain.
///
///Points decoded from bytes are always validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point(
    pub(crate) EdwardsPoint

); impl Point {
    ///Decode a 32-byte compressed point.
    ///
    ///Returns `None` if the bytes are not a valid point on the curve.
    pub fn decode(bytes: &[u8; 32]) -> Option<Self> {
        return CompressedEdwardsY(*bytes).decompress().map(Self);
    }

    ///Encode this point to its 32-byte compressed form.
    pub fn encode(&self) -> [u8; 32] {
        return self.0.compress().to_bytes();
    }

    ///Return `-P`.
    pub fn negate(&self) -> Self {
        return Self(-self.0);
    }

    ///Return `a*P + b*G`.
    ///
    ///This is variable-time, and must only be used with public points.
    pub fn mul_add_vartime(&self, a: &Scalar, b: &Scalar) -> ChainPoint {
        return ChainPoint(
            G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(vec!(*b), vec!(*a), vec!(self.0)))
    }

    ///Return `scalar*G`.
    pub fn mul_base(scalar: &Scalar) -> Self {
        return Self(scalar * G);
    }

    ///View this point as a chain input.
    pub fn to_chain_point(&self) -> ChainPoint {
        return ChainPoint(self.0);
    }
}

///A point produced by a scalar combination, only good for hashing into the ring chain.
///
///It can be encoded but not combined any further;
///use `Point` for anything that has to be multiplied again.
#[derive(Debug, Clone, Copy)]
pub struct ChainPoint(EdwardsPoint);
impl ChainPoint {
    ///Encode this point to its 32-byte compressed form.
    pub fn encode(&self) -> [u8; 32] {
        return self.0.compress().to_bytes();
    }
}

///Split a 32-byte slot into a scalar below 2<sup>252</sup> and the top nibble masked off of it.
///
///The returned nibble keeps its position (bits 4..8 of the last byte),
///so it can be OR'd straight back into an encoded scalar.
pub fn clamp_save(slot: [u8; 32]) -> (Scalar, u8) {
    let mut bytes = slot;
    let nibble = bytes[31] & 0xf0;
    bytes[31] &= 0x0f;
    //anything below 2^252 is already reduced mod L
    return (Scalar::from_bits(bytes), nibble);
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    thread_rng().fill(&mut scalar_bytes[..]);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

///return a random point on the curve
pub fn random_point() -> Point {
    return Point::mul_base(&random_scalar());
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.reduce().to_bytes().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(bytes) => {
                match Scalar::from_canonical_bytes(bytes) {
                    Some(scalar) => Ok(scalar),
                    None => Err(SerializationError::DecodingError)
                }
            },
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Point {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.encode().to_vec());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let bytes: [u8; 32] = match bytes.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return Err(SerializationError::DecodingError)
        };

        return match Point::decode(&bytes) {
            Some(point) => Ok(point),
            None => Err(SerializationError::DecodingError)
        };
    }
}
