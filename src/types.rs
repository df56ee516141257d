/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::SignatureError;

use zeroize::Zeroize;

///Maximum number of rings in one signature.
///Ring indices are hashed as a single byte.
pub const MAX_RINGS: usize = 256;
///Maximum number of keys in one ring.
///Key indices are a single byte.
pub const MAX_RING_SIZE: usize = 256;

///Check that `n` rings of `m` keys can be signed over.
pub(crate) fn shape_is_supported(n: usize, m: usize) -> bool {
    return (1..=MAX_RINGS).contains(&n) && (1..=MAX_RING_SIZE).contains(&m)
}

///The public keys of every ring in a signature: `n` rings of exactly `m` keys each.
///
///Exactly one key per ring belongs to the signer, the rest are decoys.
///The matrix is always rectangular and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingMatrix(Vec<Vec<Point>>);
impl RingMatrix {
    ///Create a ring matrix.
    ///
    ///Returns `SignatureError::Malformed` if there are no rings,
    ///the rings differ in size, or the shape exceeds `MAX_RINGS` x `MAX_RING_SIZE`.
    pub fn new(rings: Vec<Vec<Point>>) -> Result<Self, SignatureError> {
        let m = match rings.first() {
            Some(ring) => ring.len(),
            None => return Err(SignatureError::Malformed)
        };
        if !shape_is_supported(rings.len(), m) || rings.iter().any(|ring| ring.len() != m) {
            return Err(SignatureError::Malformed);
        }
        return Ok(Self(rings));
    }

    ///`(n, m)`: the number of rings, and the number of keys in each.
    pub fn shape(&self) -> (usize, usize) {
        return (self.0.len(), self.0[0].len())
    }

    ///Return ring `t`.
    pub fn ring(&self, t: usize) -> &[Point] {
        return &self.0[t];
    }

    ///Return every ring.
    pub fn rings(&self) -> &Vec<Vec<Point>> {
        return &self.0;
    }

    ///Number of payload bytes a signature over these rings can carry.
    pub fn capacity(&self) -> usize {
        let (n, m) = self.shape();
        return n * m * SLOT_SIZE;
    }

    ///Exact byte length of a signature over these rings.
    pub fn signature_len(&self) -> usize {
        return SLOT_SIZE + self.capacity();
    }
}

///The signer's secrets: one private key per ring, and the position of its public key in that ring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Zeroize)]
pub struct SignerKeys {
    pub keys: Vec<Scalar>,
    pub indices: Vec<u8>

} impl SignerKeys {
    ///Create signer keys from private keys and their ring indices.
    ///These are checked against the rings when signing.
    pub fn new(keys: Vec<Scalar>, indices: Vec<u8>) -> Self {
        return Self{keys, indices};
    }

    ///Find each private key's public key in its ring.
    ///
    ///Returns `SignatureError::KeyNotInRing` if some ring doesn't contain its key.
    pub fn locate(keys: Vec<Scalar>, rings: &RingMatrix) -> Result<Self, SignatureError> {
        if keys.len() != rings.shape().0 {
            return Err(SignatureError::Malformed);
        }

        let mut indices: Vec<u8> = Vec::new();
        for (t, key) in keys.iter().enumerate() {
            let public = Point::mul_base(key);
            match rings.ring(t).iter().position(|point| point == &public) {
                Some(j) => indices.push(j as u8),
                None => return Err(SignatureError::KeyNotInRing)
            }
        }
        return Ok(Self::new(keys, indices));
    }

    ///Check that every private key matches the public key at its index.
    pub fn owns(&self, rings: &RingMatrix) -> bool {
        if self.check_shape(rings).is_err() {
            return false;
        }
        return self.keys.iter().zip(&self.indices).enumerate()
            .all(|(t, (key, &j))| Point::mul_base(key) == rings.ring(t)[j as usize])
    }

    ///Check that there is one key and one in-range index per ring.
    pub(crate) fn check_shape(&self, rings: &RingMatrix) -> Result<(), SignatureError> {
        let (n, m) = rings.shape();
        if self.keys.len() != n || self.indices.len() != n {
            return Err(SignatureError::Malformed);
        }
        if self.indices.iter().any(|&j| j as usize >= m) {
            return Err(SignatureError::Malformed);
        }
        return Ok(());
    }

} impl Drop for SignerKeys {
    fn drop(&mut self) {
        //clear the keys from memory
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for SignerKeys {}
