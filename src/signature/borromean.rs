/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::Display;

use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::internal_common::*;
use super::signature_utils::*;

///A two-way Borromean ring signature.
///
///Layout: the global challenge `e_0`, then one 32-byte response per key,
///ring by ring, for `32 + n*m*32` bytes in total.
///The top nibble of every response carries 4 bits of the hidden payload.
///
///The ring shape is not part of the signature and has to be transmitted alongside it,
///usually with the key blob from `pack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorromeanSignature(Vec<u8>);
impl BorromeanSignature {
    ///Sign a packed message over `rings`, hiding `payload` in the responses.
    ///
    ///`digest` comes from `pack`.
    ///`payload` can be up to `rings.capacity()` bytes; shorter payloads are zero-padded and longer ones cut off.
    ///
    ///Returns `SignatureError::Malformed` if `signer` doesn't have one key and one in-range index per ring.
    ///A key which doesn't match the public key at its index is not detected here:
    ///the signature simply won't verify.
    pub fn sign(
        digest: &MessageDigest, payload: &[u8], rings: &RingMatrix, signer: &SignerKeys
    ) -> Result<Self, SignatureError> {
        signer.check_shape(rings)?;
        let (n, m) = rings.shape();
        debug!(rings = n, ring_size = m, payload_len = payload.len(), "signing");
        if payload.len() > rings.capacity() {
            warn!(payload_len = payload.len(), capacity = rings.capacity(), "payload truncated to signature capacity");
        }

        //per-slot randomness, carrying the payload
        let r = apply_keystream(digest, &signer.keys, &signer.indices, payload, rings.capacity());

        //commit at the real slot, then go around to the end of each ring
        let mut openings: Vec<(Scalar, u8, Scalar)> = map_rings(n, |t| {
            let j = signer.indices[t] as usize;
            let (k, saved) = clamp_save(slot(&r, t * m + j));
            let commitment = Point::mul_base(&k).to_chain_point();

            let mut e = chameleon_h(&commitment, digest, t as u8, ((j + 1) % m) as u8, saved);
            for i in j + 1..m {
                e = chain_step(digest, &e, slot(&r, t * m + i), &rings.ring(t)[i], t, i, m);
            }
            (k, saved, e)
        });

        //the shared challenge, closing every ring at once
        let e_0 = close_rings(openings.iter().map(|(_, _, closing)| closing));

        //start over from e_0 up to the real slot, and "tie" each ring
        let real_responses: Vec<[u8; 32]> = map_rings(n, |t| {
            let j = signer.indices[t] as usize;
            let (k, saved, _) = &openings[t];

            let mut e = e_0;
            for i in 0..j {
                e = chain_step(digest, &e, slot(&r, t * m + i), &rings.ring(t)[i], t, i, m);
            }

            let mut response = (signer.keys[t] * e + k).to_bytes();
            assert!(response[31] & 0xf0 == 0, "real response is over 2^252, scalar arithmetic is broken");
            response[31] |= saved;
            response
        });

        //decoy responses are the slot randomness itself
        let mut bytes: Vec<u8> = Vec::with_capacity(rings.signature_len());
        bytes.extend_from_slice(e_0.as_bytes());
        bytes.extend_from_slice(&r);
        for (t, response) in real_responses.iter().enumerate() {
            let offset = SLOT_SIZE * (1 + t * m + signer.indices[t] as usize);
            bytes[offset..offset + SLOT_SIZE].copy_from_slice(response);
        }

        for (k, _, _) in openings.iter_mut() {
            k.zeroize();
        }
        return Ok(Self(bytes));
    }

    ///Verify this signature against a digest and rings, both as returned by `pack` or `unpack`.
    ///
    ///Returns `Ok()` if the signature is valid,
    ///or `SignatureError::Invalid` for any kind of failure.
    pub fn verify(&self, digest: &MessageDigest, rings: &RingMatrix) -> Result<(), SignatureError> {
        let (n, m) = rings.shape();
        debug!(rings = n, ring_size = m, "verifying");

        let e_0 = match self.checked_challenge(rings) {
            Some(e_0) => e_0,
            None => return reject()
        };
        let responses = self.responses();

        //travel around each ring
        let closings: Vec<Scalar> = map_rings(n, |t| {
            let mut e = e_0;
            for i in 0..m {
                e = chain_step(digest, &e, slot(responses, t * m + i), &rings.ring(t)[i], t, i, m);
            }
            e
        });

        //check if we end up back where we started
        return match close_rings(&closings) == e_0 {
            true => Ok(()),
            false => reject()
        };
    }

    ///Recover the payload hidden in this signature.
    ///
    ///`signer` must hold the same keys and indices the signature was created with.
    ///Returns all `rings.capacity()` embedded bytes, which is the payload followed by zero padding.
    ///Returns `SignatureError::Invalid` if the signature doesn't verify,
    ///in which case nothing is recovered.
    pub fn recover(
        &self, digest: &MessageDigest, rings: &RingMatrix, signer: &SignerKeys
    ) -> Result<Vec<u8>, SignatureError> {
        signer.check_shape(rings)?;
        let (n, m) = rings.shape();
        debug!(rings = n, ring_size = m, "recovering payload");

        let e_0 = match self.checked_challenge(rings) {
            Some(e_0) => e_0,
            None => return reject()
        };
        let responses = self.responses();

        //walk each ring like `verify`, undoing the real response on the way
        let walks: Vec<(Zeroizing<Vec<u8>>, Scalar)> = map_rings(n, |t| {
            let j = signer.indices[t] as usize;
            let mut randomness = Zeroizing::new(vec![0u8; m * SLOT_SIZE]);

            let mut e = e_0;
            for i in 0..m {
                let e_neg = -e;
                let response = slot(responses, t * m + i);
                let (z, nibble) = clamp_save(response);

                //k = s - x*e
                let mut recovered = match i == j {
                    true => (e_neg * signer.keys[t] + z).to_bytes(),
                    false => response
                };
                recovered[31] |= nibble;
                randomness[i * SLOT_SIZE..(i + 1) * SLOT_SIZE].copy_from_slice(&recovered);
                recovered.zeroize();

                let point = rings.ring(t)[i].mul_add_vartime(&e_neg, &z);
                e = chameleon_h(&point, digest, t as u8, ((i + 1) % m) as u8, nibble);
            }
            (randomness, e)
        });

        if close_rings(walks.iter().map(|(_, closing)| closing)) != e_0 {
            return reject();
        }

        let mut randomness = Zeroizing::new(Vec::with_capacity(rings.capacity()));
        for (ring_randomness, _) in &walks {
            randomness.extend_from_slice(ring_randomness);
        }
        let payload = apply_keystream(digest, &signer.keys, &signer.indices, &randomness, rings.capacity());
        return Ok(payload.to_vec());
    }

    ///Wrap raw signature bytes.
    ///
    ///Only the structure is checked here (a challenge followed by whole 32-byte responses);
    ///the length is checked against the ring shape when verifying.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() < SLOT_SIZE || bytes.len() % SLOT_SIZE != 0 {
            return Err(SerializationError::DecodingError);
        }
        return Ok(Self(bytes.to_vec()));
    }

    ///The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        return &self.0;
    }

    ///The global challenge `e_0`, or `None` if it isn't a canonical scalar.
    pub fn challenge(&self) -> Option<Scalar> {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(self.0.get(..SLOT_SIZE)?);
        return Scalar::from_canonical_bytes(bytes);
    }

    ///The response grid, ring by ring.
    pub fn responses(&self) -> &[u8] {
        return self.0.get(SLOT_SIZE..).unwrap_or(&[]);
    }

    ///`e_0`, if this signature has the right length for `rings`.
    fn checked_challenge(&self, rings: &RingMatrix) -> Option<Scalar> {
        if self.0.len() != rings.signature_len() {
            return None;
        }
        return self.challenge();
    }

} impl Display for BorromeanSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let challenge = self.0.get(..SLOT_SIZE).unwrap_or(&[]);
        write!(f, "e: {} s[]: {}", hex::encode(challenge), hex::encode(self.responses()))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BorromeanSignature {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.clone());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return Self::from_slice(bytes);
    }
}

fn reject<T>() -> Result<T, SignatureError> {
    debug!("signature rejected");
    return Err(SignatureError::Invalid);
}
