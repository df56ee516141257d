/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::internal_common::*;

///Run `f` once per ring and collect the results in ring order.
///
///Rings are spread over the rayon pool when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub(crate) fn map_rings<T, F>(n: usize, f: F) -> Vec<T>
where T: Send, F: Fn(usize) -> T + Sync + Send {
    return (0..n).into_par_iter().map(f).collect();
}

///Run `f` once per ring and collect the results in ring order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn map_rings<T, F>(n: usize, f: F) -> Vec<T>
where T: Send, F: Fn(usize) -> T + Sync + Send {
    return (0..n).map(f).collect();
}

///Copy slot `index` out of a flat buffer of 32-byte slots.
pub(crate) fn slot(buffer: &[u8], index: usize) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&buffer[index * SLOT_SIZE..(index + 1) * SLOT_SIZE]);
    return out;
}

///Advance ring `t`'s chain past slot `i` of `m`.
///
///`z*G - e*P` is hashed with the position of the next slot
///and the nibble `response` carries on top of `z`.
pub(crate) fn chain_step(
    digest: &MessageDigest, e: &Scalar, response: [u8; 32], key: &Point, t: usize, i: usize, m: usize
) -> Scalar {
    let (z, nibble) = clamp_save(response);
    let point = key.negate().mul_add_vartime(e, &z);
    return chameleon_h(&point, digest, t as u8, ((i + 1) % m) as u8, nibble);
}

///Hash the closing challenge of every ring, in ring order, into the global challenge.
pub(crate) fn close_rings<'a, I>(closings: I) -> Scalar
where I: IntoIterator<Item = &'a Scalar> {
    let mut accumulator = ChallengeAccumulator::new();
    for (t, closing) in closings.into_iter().enumerate() {
        trace!(ring = t, "accumulating closing challenge");
        accumulator.push(closing);
    }
    return accumulator.finalize();
}
