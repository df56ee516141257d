/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha2::{
    Sha512,
    Sha512_256,
    Digest
};
use crate::curve::*;

///A 32-byte digest binding a message to the full set of ring keys.
pub type MessageDigest = [u8; 32];

///Hash bytes to 32 bytes (SHA-512/256).
///
///`pack` and `unpack` stream their input into the same hash, so `h_bytes` over the
///key blob followed by the message gives the same digest.
pub fn h_bytes(msg: &[u8]) -> MessageDigest {
    let mut hasher = Sha512_256::new();
    hasher.update(msg);
    return finalize_digest(hasher);
}

///Hash bytes to 64 bytes (SHA-512).
pub fn h_wide(msg: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(msg);
    return finalize_wide(hasher);
}

///Hash bytes to scalar, using a wide reduction.
///
///This is the usual way to turn a seed into a private key.
pub fn hash_to_scalar(seed: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order_wide(&h_wide(seed));
}

///Finish a SHA-512/256 hasher into a message digest.
pub(crate) fn finalize_digest(hasher: Sha512_256) -> MessageDigest {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    return out;
}

///Finish a SHA-512 hasher into a fixed array.
pub(crate) fn finalize_wide(hasher: Sha512) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    return out;
}

///Next challenge of a ring chain.
///
///Hashes the chain point, the message digest, and three positional tags:
///the ring index, the slot the challenge belongs to, and the nibble carried by the previous slot.
pub(crate) fn chameleon_h(point: &ChainPoint, digest: &MessageDigest, ring: u8, slot: u8, nibble: u8) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(point.encode());
    hasher.update(digest);
    hasher.update([ring, slot, nibble]);
    return Scalar::from_bytes_mod_order_wide(&finalize_wide(hasher));
}

///Accumulates the closing challenge of every ring into the global challenge.
///
///Rings must be fed in ascending index order.
pub(crate) struct ChallengeAccumulator(Sha512);
impl ChallengeAccumulator {
    pub fn new() -> Self {
        return Self(Sha512::new());
    }

    pub fn push(&mut self, closing: &Scalar) {
        self.0.update(closing.as_bytes());
    }

    pub fn finalize(self) -> Scalar {
        return Scalar::from_bytes_mod_order_wide(&finalize_wide(self.0));
    }
}
