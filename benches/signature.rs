// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SHAPES: [(usize, usize); 6] = [(1, 16), (4, 4), (16, 16), (32, 4), (64, 64), (100, 100)];

use brsig::{
    common::*,
    signature::BorromeanSignature
};

fn random_rings(n: usize, m: usize) -> (RingMatrix, SignerKeys) {
    let mut rings: Vec<Vec<Point>> = Vec::new();
    let mut keys: Vec<Scalar> = Vec::new();
    let mut indices: Vec<u8> = Vec::new();
    for _ in 0..n {
        let mut ring: Vec<Point> = (0..m).map(|_| random_point()).collect();
        let key = random_scalar();
        let index = thread_rng().gen_range(0..m);
        ring[index] = Point::mul_base(&key);
        rings.push(ring);
        keys.push(key);
        indices.push(index as u8);
    }
    return (RingMatrix::new(rings).unwrap(), SignerKeys::new(keys, indices));
}

fn borromean_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Borromean");
    group.sample_size(10);

    //sign
    for (n, m) in RING_SHAPES {
        let (rings, signer) = random_rings(n, m);
        let (digest, _) = pack(b"abcdef", &rings);

        let params = (digest, rings, signer);
        group.bench_with_input(BenchmarkId::new("sign", format!("Rings: {n}x{m}")), &params,
            |b, (digest, rings, signer)| b.iter(|| {
                BorromeanSignature::sign(digest, b"payload", rings, signer).unwrap()
            }));
    }

    //verify
    for (n, m) in RING_SHAPES {
        let (rings, signer) = random_rings(n, m);
        let (digest, _) = pack(b"abcdef", &rings);
        let sig = BorromeanSignature::sign(&digest, b"payload", &rings, &signer).unwrap();

        let params = (digest, rings, sig);
        group.bench_with_input(BenchmarkId::new("verify", format!("Rings: {n}x{m}")), &params,
            |b, (digest, rings, sig)| b.iter(|| {
                sig.verify(digest, rings).unwrap()
            }));
    }

    //recover
    for (n, m) in RING_SHAPES {
        let (rings, signer) = random_rings(n, m);
        let (digest, _) = pack(b"abcdef", &rings);
        let sig = BorromeanSignature::sign(&digest, b"payload", &rings, &signer).unwrap();

        let params = (digest, rings, signer, sig);
        group.bench_with_input(BenchmarkId::new("recover", format!("Rings: {n}x{m}")), &params,
            |b, (digest, rings, signer, sig)| b.iter(|| {
                sig.recover(digest, rings, signer).unwrap()
            }));
    }
}

fn packing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Packing");

    for (n, m) in RING_SHAPES {
        let (rings, _) = random_rings(n, m);
        let (_, keys) = pack(b"abcdef", &rings);

        group.bench_with_input(BenchmarkId::new("pack", format!("Rings: {n}x{m}")), &rings,
            |b, rings| b.iter(|| pack(b"abcdef", rings)));
        group.bench_with_input(BenchmarkId::new("unpack", format!("Rings: {n}x{m}")), &keys,
            |b, keys| b.iter(|| unpack(b"abcdef", keys, n, m).unwrap()));
    }
}


criterion_group!(signature_borromean, borromean_benchmark, packing_benchmark);
criterion_main!(signature_borromean);
