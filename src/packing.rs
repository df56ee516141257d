/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Canonical encoding of the rings and the message
//!
//! Before signing, the message and the ring keys are packed:
//! this gives the digest that gets signed, and the serialized key blob to transmit to the verifier.
//! The verifier unpacks the blob with the same message to get the rings and digest back.

use sha2::{Sha512_256, Digest};

use crate::curve::*;
use crate::errors::SerializationError;
use crate::hashes::{MessageDigest, finalize_digest};
use crate::types::{RingMatrix, shape_is_supported};

///Pack a message and its rings.
///
///Returns the digest of every key encoding (ring by ring, slot by slot) followed by the message,
///and the key encodings alone.
pub fn pack(msg: &[u8], rings: &RingMatrix) -> (MessageDigest, Vec<u8>) {
    let mut hasher = Sha512_256::new();
    let mut keys: Vec<u8> = Vec::with_capacity(rings.capacity());
    for ring in rings.rings() {
        for point in ring {
            let encoded = point.encode();
            hasher.update(encoded);
            keys.extend_from_slice(&encoded);
        }
    }
    hasher.update(msg);

    return (finalize_digest(hasher), keys);
}

///Unpack `n` rings of `m` keys from a key blob, and recompute the digest for `msg`.
///
///Returns `SerializationError::DecodingError` if the blob is not exactly `n*m*32` bytes,
///any key fails to decode, or the shape isn't supported.
pub fn unpack(msg: &[u8], keys: &[u8], n: usize, m: usize) -> Result<(MessageDigest, RingMatrix), SerializationError> {
    if !shape_is_supported(n, m) || keys.len() != n * m * SLOT_SIZE {
        return Err(SerializationError::DecodingError);
    }

    let mut hasher = Sha512_256::new();
    let mut chunks = keys.chunks_exact(SLOT_SIZE);
    let mut rings: Vec<Vec<Point>> = Vec::with_capacity(n);
    for _ in 0..n {
        let mut ring: Vec<Point> = Vec::with_capacity(m);
        for _ in 0..m {
            let chunk = match chunks.next() {
                Some(chunk) => chunk,
                None => return Err(SerializationError::DecodingError)
            };
            let mut encoded = [0u8; 32];
            encoded.copy_from_slice(chunk);
            match Point::decode(&encoded) {
                Some(point) => ring.push(point),
                None => return Err(SerializationError::DecodingError)
            }
            hasher.update(chunk);
        }
        rings.push(ring);
    }
    hasher.update(msg);

    let rings = match RingMatrix::new(rings) {
        Ok(rings) => rings,
        Err(_) => return Err(SerializationError::DecodingError)
    };

    return Ok((finalize_digest(hasher), rings));
}
