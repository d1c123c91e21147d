#![allow(clippy::arithmetic_side_effects)]

use std::thread;

use aranya_xof::{
    HashAlgorithm, Xof, XofAlgorithm, XofError, mgf1_for_hash, new_mgf1, new_xof,
    test_util::fresh_output,
};
use test_log::test;

/// Every algorithm the factory can build.
fn algorithms() -> impl Iterator<Item = XofAlgorithm> {
    XofAlgorithm::ALL
        .into_iter()
        .filter(|&alg| alg != XofAlgorithm::Undefined)
}

fn new(alg: XofAlgorithm) -> Box<dyn Xof + Send> {
    new_xof(alg).unwrap_or_else(|err| panic!("{alg}: {err}"))
}

/// Trims `seed` into something `alg` accepts.
fn fit_seed(alg: XofAlgorithm, seed: &[u8]) -> &[u8] {
    match alg {
        XofAlgorithm::ChaCha20 => &seed[..aranya_xof::chacha::SEED_SIZE],
        _ => seed,
    }
}

#[test]
fn shake128_zero_seed_scenario() {
    const WANT: &str = "\
        8f8e4f612e61ffb9d78c3ea707e3776805a4f86e1d7371f4c7fea77a668c8b84\
        14312535ceb17e964e850419909301bafff0c13facf0f09c1a07eee4067536df";

    let mut xof = new(XofAlgorithm::Shake128);
    xof.set_seed(&[0u8; 16]).expect("SHAKE accepts any seed");
    let mut got = xof.allocate_bytes(32).expect("should succeed").into_vec();
    got.extend_from_slice(&xof.allocate_bytes(32).expect("should succeed"));

    let mut fresh = new(XofAlgorithm::Shake128);
    fresh.set_seed(&[0u8; 16]).expect("SHAKE accepts any seed");
    let once = fresh.allocate_bytes(64).expect("should succeed");

    assert_eq!(got, &*once);
    assert_eq!(hex::encode(&got), WANT);
}

#[test]
fn mgf1_selector_scenario() {
    assert_eq!(mgf1_for_hash(HashAlgorithm::Sha256), XofAlgorithm::Mgf1Sha256);
    assert_eq!(mgf1_for_hash(HashAlgorithm::Md5), XofAlgorithm::Undefined);

    // The selected algorithm is the one the factory builds.
    let xof = new_mgf1(HashAlgorithm::Sha3_384).expect("MGF1-SHA3-384 is enabled");
    assert_eq!(xof.get_type(), XofAlgorithm::Mgf1Sha3_384);
    assert_eq!(xof.get_block_size(), 48);
}

#[test]
fn unseeded_fails() {
    for alg in algorithms() {
        let mut xof = new(alg);
        assert_eq!(xof.get_bytes(&mut [0u8; 32]), Err(XofError::NotSeeded), "{alg}");
        assert_eq!(xof.allocate_bytes(32), Err(XofError::NotSeeded), "{alg}");
    }
}

#[test]
fn rejected_seed_discards_stream() {
    let mut xof = new(XofAlgorithm::ChaCha20);
    xof.set_seed(&[7u8; 44]).expect("valid seed");
    xof.allocate_bytes(10).expect("should succeed");

    assert!(matches!(
        xof.set_seed(&[7u8; 32]),
        Err(XofError::SeedRejected(_))
    ));
    assert_eq!(xof.position(), None);
    assert_eq!(xof.allocate_bytes(10), Err(XofError::NotSeeded));
}

#[test]
fn instances_are_independent() {
    for alg in algorithms() {
        let seed = [0x42u8; 44];
        let seed = fit_seed(alg, &seed);
        let want = fresh_output(&mut new(alg), seed, 256);

        // Interleave reads from two instances.
        let mut a = new(alg);
        let mut b = new(alg);
        a.set_seed(seed).expect("valid seed");
        b.set_seed(seed).expect("valid seed");
        let mut got_a = Vec::new();
        let mut got_b = Vec::new();
        for n in [1, 63, 64, 128] {
            got_a.extend_from_slice(&a.allocate_bytes(n).expect("should succeed"));
            got_b.extend_from_slice(&b.allocate_bytes(n).expect("should succeed"));
        }
        assert_eq!(got_a, want, "{alg}");
        assert_eq!(got_b, want, "{alg}");
    }
}

#[test]
fn instances_are_send() {
    let handles = algorithms()
        .map(|alg| {
            let mut xof = new(alg);
            let seed = fit_seed(alg, &[1u8; 44]).to_vec();
            thread::spawn(move || (alg, fresh_output(&mut xof, &seed, 100)))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        let (alg, got) = handle.join().expect("thread should not panic");
        let want = fresh_output(&mut new(alg), fit_seed(alg, &[1u8; 44]), 100);
        assert_eq!(got, want, "{alg}");
    }
}
