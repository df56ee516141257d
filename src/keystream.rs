/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Payload keystream
//!
//! The per-slot randomness of a signature is `keystream XOR payload`.
//! The keystream is derived from the message digest and the signer's private keys and indices,
//! so anyone holding those can strip it off again after recovering the randomness.

use rand_chacha::{
    ChaCha20Rng,
    rand_core::{RngCore, SeedableRng}
};
use sha2::{Sha384, Digest};
use zeroize::{Zeroize, Zeroizing};

use crate::curve::*;
use crate::hashes::MessageDigest;

///Derive `length` keystream bytes from the digest, private keys and indices.
///
///SHA-384 over `digest || keys || indices` gives 48 bytes:
///the first 32 key a ChaCha20 generator, the next 8 pick its stream,
///and the last 8 set the starting word position within that stream.
pub fn keystream(digest: &MessageDigest, keys: &[Scalar], indices: &[u8], length: usize) -> Zeroizing<Vec<u8>> {
    let mut hasher = Sha384::new();
    hasher.update(digest);
    for key in keys {
        hasher.update(key.as_bytes());
    }
    hasher.update(indices);
    let mut material = hasher.finalize();

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&material[..32]);
    let mut stream = [0u8; 8];
    stream.copy_from_slice(&material[32..40]);
    let mut position = [0u8; 8];
    position.copy_from_slice(&material[40..48]);

    let mut rng = ChaCha20Rng::from_seed(seed);
    rng.set_stream(u64::from_le_bytes(stream));
    rng.set_word_pos(u128::from(u64::from_le_bytes(position)));

    let mut out = Zeroizing::new(vec![0u8; length]);
    rng.fill_bytes(out.as_mut_slice());

    seed.zeroize();
    stream.zeroize();
    position.zeroize();
    material.as_mut_slice().zeroize();
    return out;
}

///XOR `data` against the keystream, returning exactly `length` bytes.
///
///`data` shorter than `length` is zero-padded, longer is cut off.
///The operation is its own inverse: it embeds a payload into slot randomness,
///and extracts the payload from recovered randomness.
pub fn apply_keystream(digest: &MessageDigest, keys: &[Scalar], indices: &[u8], data: &[u8], length: usize) -> Zeroizing<Vec<u8>> {
    let mut out = keystream(digest, keys, indices, length);
    for (byte, d) in out.iter_mut().zip(data) {
        *byte ^= d;
    }
    return out;
}
