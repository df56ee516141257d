// SPDX short identifier: Unlicense

use rand_chacha::{
    ChaCha20Rng,
    rand_core::{RngCore, SeedableRng}
};
use sha2::{Sha384, Digest};

use brsig::{
    common::*,
    hashes::h_bytes,
    keystream::{keystream, apply_keystream}
};

#[test]
fn keystream_test() {
    let digest = h_bytes(b"abcdef");
    let keys = vec!(random_scalar(), random_scalar());
    let indices = vec!(3u8, 0u8);

    let stream = keystream(&digest, &keys, &indices, 200);
    assert_eq!(stream.len(), 200);
    assert_eq!(&stream[..], &keystream(&digest, &keys, &indices, 200)[..]);

    //a longer stream extends a shorter one
    let longer = keystream(&digest, &keys, &indices, 1000);
    assert_eq!(&longer[..200], &stream[..]);

    //every input changes the stream
    assert_ne!(&stream[..], &keystream(&h_bytes(b"abcdeg"), &keys, &indices, 200)[..]);
    assert_ne!(&stream[..], &keystream(&digest, &[keys[0], random_scalar()], &indices, 200)[..]);
    assert_ne!(&stream[..], &keystream(&digest, &keys, &[3u8, 1u8], 200)[..]);
}

#[test]
fn keystream_layout_test() {
    let digest = h_bytes(b"abcdef");
    let keys = vec!(random_scalar(), random_scalar(), random_scalar());
    let indices = vec!(0u8, 255u8, 17u8);

    let mut hasher = Sha384::new();
    hasher.update(digest);
    for key in &keys {
        hasher.update(key.as_bytes());
    }
    hasher.update(&indices);
    let material = hasher.finalize();

    //key, stream id, then starting word position
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&material[..32]);
    let mut stream = [0u8; 8];
    stream.copy_from_slice(&material[32..40]);
    let mut position = [0u8; 8];
    position.copy_from_slice(&material[40..48]);

    let mut rng = ChaCha20Rng::from_seed(seed);
    rng.set_stream(u64::from_le_bytes(stream));
    rng.set_word_pos(u128::from(u64::from_le_bytes(position)));
    let mut expected = vec![0u8; 300];
    rng.fill_bytes(&mut expected);
    assert_eq!(&keystream(&digest, &keys, &indices, 300)[..], &expected[..]);

    //all 48 bytes matter, the position isn't left at the start of the stream
    let mut unpositioned = ChaCha20Rng::from_seed(seed);
    unpositioned.set_stream(u64::from_le_bytes(stream));
    let mut start = vec![0u8; 300];
    unpositioned.fill_bytes(&mut start);
    assert_ne!(&keystream(&digest, &keys, &indices, 300)[..], &start[..]);
}

#[test]
fn apply_keystream_test() {
    let digest = h_bytes(b"abcdef");
    let keys = vec!(random_scalar());
    let indices = vec!(1u8);
    let payload = b"2aaaabbbbbbb";

    let embedded = apply_keystream(&digest, &keys, &indices, payload, 64);
    assert_eq!(embedded.len(), 64);
    assert_ne!(&embedded[..payload.len()], &payload[..]);

    //applying it twice gives the padded payload back
    let extracted = apply_keystream(&digest, &keys, &indices, &embedded, 64);
    assert_eq!(&extracted[..payload.len()], &payload[..]);
    assert!(extracted[payload.len()..].iter().all(|&byte| byte == 0));

    //the padding is the bare keystream
    let stream = keystream(&digest, &keys, &indices, 64);
    assert_eq!(&embedded[payload.len()..], &stream[payload.len()..]);

    //longer data is cut off
    let truncated = apply_keystream(&digest, &keys, &indices, &[0u8; 100], 64);
    assert_eq!(&truncated[..], &stream[..]);
}

#[test]
fn clamp_save_test() {
    let mut slot = [0xabu8; 32];
    slot[31] = 0xf7;
    let (scalar, nibble) = clamp_save(slot);
    assert_eq!(nibble, 0xf0);
    assert_eq!(scalar.as_bytes()[31], 0x07);
    assert_eq!(&scalar.as_bytes()[..31], &slot[..31]);

    let mut restored = scalar.to_bytes();
    restored[31] |= nibble;
    assert_eq!(restored, slot);
}
