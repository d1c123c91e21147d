//! Utilities for testing XOF implementations.
//!
//! If you implement [`Construction`] it is **very highly**
//! recommended that you use these tests.

#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::panic)]
#![cfg(any(test, feature = "test_util"))]
#![cfg_attr(docsrs, doc(cfg(feature = "test_util")))]
#![forbid(unsafe_code)]

use alloc::{vec, vec::Vec};

use crate::{Construction, Instance, Xof, XofAlgorithm, XofError};

#[macro_export]
#[doc(hidden)]
macro_rules! __apply {
    ($callback:ident, $($tt:tt),* $(,)?) => {
        $(
            $callback!($tt);
        )*
    };
}
pub use __apply;

/// Invokes `callback` for each XOF test.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "shake")]
/// # {
/// use aranya_xof::shake::Shake128;
///
/// macro_rules! run_test {
///     ($test:ident) => {
///         aranya_xof::test_util::$test::<Shake128>();
///     };
/// }
/// aranya_xof::for_each_xof_test!(run_test);
/// # }
/// ```
#[macro_export]
macro_rules! for_each_xof_test {
    ($callback:ident) => {
        $crate::__apply! {
            $callback,
            test_introspection,
            test_unseeded,
            test_zero_len,
            test_position,
            test_streaming_continuity,
            test_determinism,
            test_reseed,
            test_allocate_bytes,
            test_allocate_too_long,
        }
    };
}
pub use for_each_xof_test;

/// Performs all of the tests in this module.
///
/// This macro expands into a bunch of individual `#[test]`
/// functions.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "shake")]
/// # {
/// use aranya_xof::{shake::Shake128, test_xof};
///
/// test_xof!(shake128, Shake128);
/// # }
/// ```
#[macro_export]
macro_rules! test_xof {
    ($name:ident, $construction:ty) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::test_xof!($construction);
        }
    };
    ($construction:ty) => {
        macro_rules! __xof_test {
            ($test:ident) => {
                #[test]
                fn $test() {
                    $crate::test_util::$test::<$construction>()
                }
            };
        }
        $crate::for_each_xof_test!(__xof_test);
    };
}
pub use test_xof;

/// Output lengths that exercise partial, whole, and multiple
/// blocks.
fn lengths(block_size: usize) -> [usize; 9] {
    [
        0,
        1,
        7,
        block_size - 1,
        block_size,
        block_size + 1,
        2 * block_size,
        3 * block_size + 5,
        1000,
    ]
}

/// Returns a seed of the recommended size for `C`.
pub fn seed_for<C: Construction>() -> Vec<u8> {
    (0..C::SEED_SIZE).map(|i| (i * 7 + 3) as u8).collect()
}

/// Returns `n` bytes from a freshly seeded `xof`.
pub fn fresh_output<X: Xof + ?Sized>(xof: &mut X, seed: &[u8], n: usize) -> Vec<u8> {
    xof.set_seed(seed).expect("seed should be accepted");
    let mut out = vec![0u8; n];
    xof.get_bytes(&mut out).expect("should be able to generate output");
    out
}

/// Checks that reading `l1` and then `l2` bytes from `a` is the
/// same as reading `l1 + l2` bytes from `b`.
///
/// `a` and `b` must use the same algorithm.
pub fn check_continuity<A, B>(a: &mut A, b: &mut B, seed: &[u8], l1: usize, l2: usize)
where
    A: Xof + ?Sized,
    B: Xof + ?Sized,
{
    assert_eq!(a.get_type(), b.get_type());

    let want = fresh_output(b, seed, l1 + l2);

    a.set_seed(seed).expect("seed should be accepted");
    let mut got = vec![0u8; l1 + l2];
    let (lhs, rhs) = got.split_at_mut(l1);
    a.get_bytes(lhs).expect("should be able to generate output");
    a.get_bytes(rhs).expect("should be able to generate output");

    assert_eq!(got, want, "{}: l1={l1} l2={l2}", a.get_type());
    assert_eq!(a.position(), b.position());
}

/// Introspection works in every state.
pub fn test_introspection<C: Construction + Default>() {
    assert_ne!(C::ID, XofAlgorithm::Undefined);
    assert!(C::BLOCK_SIZE > 0);

    let mut xof = Instance::<C>::default();
    for _ in 0..2 {
        assert_eq!(xof.get_type(), C::ID);
        assert_eq!(xof.get_block_size(), C::BLOCK_SIZE);
        assert_eq!(xof.get_seed_size(), C::SEED_SIZE);
        xof.set_seed(&seed_for::<C>())
            .expect("seed should be accepted");
    }
}

/// Generating output without a seed fails.
pub fn test_unseeded<C: Construction + Default>() {
    let mut xof = Instance::<C>::default();
    assert_eq!(xof.position(), None);

    let mut out = [0u8; 16];
    assert_eq!(xof.get_bytes(&mut out), Err(XofError::NotSeeded));
    assert_eq!(xof.allocate_bytes(16), Err(XofError::NotSeeded));
    assert_eq!(xof.position(), None);
}

/// Zero-length reads succeed and do not move the stream.
pub fn test_zero_len<C: Construction + Default>() {
    let seed = seed_for::<C>();
    let want = fresh_output(&mut Instance::<C>::default(), &seed, 64);

    let mut xof = Instance::<C>::default();
    xof.set_seed(&seed).expect("seed should be accepted");
    xof.get_bytes(&mut []).expect("empty reads should succeed");
    assert_eq!(xof.position(), Some(0));
    assert!(xof.allocate_bytes(0).expect("should succeed").is_empty());
    assert_eq!(xof.position(), Some(0));

    let got = xof.allocate_bytes(64).expect("should succeed");
    assert_eq!(&*got, &want[..]);
}

/// The stream position advances by exactly the number of
/// bytes generated.
pub fn test_position<C: Construction + Default>() {
    let mut xof = Instance::<C>::default();
    xof.set_seed(&seed_for::<C>())
        .expect("seed should be accepted");
    assert_eq!(xof.position(), Some(0));

    let mut total = 0u64;
    for n in lengths(C::BLOCK_SIZE) {
        let mut out = vec![0u8; n];
        xof.get_bytes(&mut out).expect("should succeed");
        total += n as u64;
        assert_eq!(xof.position(), Some(total));
    }
}

/// Reading `L1` and then `L2` bytes is the same as reading
/// `L1 + L2` bytes.
pub fn test_streaming_continuity<C: Construction + Default>() {
    let seed = seed_for::<C>();
    for l1 in lengths(C::BLOCK_SIZE) {
        for l2 in lengths(C::BLOCK_SIZE) {
            check_continuity(
                &mut Instance::<C>::default(),
                &mut Instance::<C>::default(),
                &seed,
                l1,
                l2,
            );
        }
    }

    // Many tiny reads.
    let want = fresh_output(&mut Instance::<C>::default(), &seed, 3 * C::BLOCK_SIZE);
    let mut xof = Instance::<C>::default();
    xof.set_seed(&seed).expect("seed should be accepted");
    let mut got = vec![0u8; want.len()];
    for chunk in got.chunks_mut(3) {
        xof.get_bytes(chunk).expect("should succeed");
    }
    assert_eq!(got, want);
}

/// The same seed always produces the same output.
pub fn test_determinism<C: Construction + Default>() {
    let seed = seed_for::<C>();
    let want = fresh_output(&mut Instance::<C>::default(), &seed, 300);
    for _ in 0..3 {
        let got = fresh_output(&mut Instance::<C>::default(), &seed, 300);
        assert_eq!(got, want);
    }

    // Output is not trivially constant.
    assert!(want.iter().any(|&b| b != want[0]));

    // The statically typed stream agrees with the instance.
    let mut stream = C::default().seed(&seed).expect("seed should be accepted");
    let got = stream.allocate_bytes(300).expect("should succeed");
    assert_eq!(&*got, &want[..]);
    assert_eq!(stream.position(), 300);
}

/// Reseeding restarts the stream.
pub fn test_reseed<C: Construction + Default>() {
    let seed = seed_for::<C>();
    let mut xof = Instance::<C>::default();

    let first = fresh_output(&mut xof, &seed, 100);
    let mut skip = vec![0u8; 37];
    xof.get_bytes(&mut skip).expect("should succeed");

    let second = fresh_output(&mut xof, &seed, 100);
    assert_eq!(first, second);
    assert_eq!(xof.position(), Some(100));

    // A different seed is a different stream.
    let mut other = seed.clone();
    other[0] ^= 1;
    let third = fresh_output(&mut xof, &other, 100);
    assert_ne!(first, third);
    assert_eq!(xof.position(), Some(100));
}

/// [`Xof::allocate_bytes`] matches [`Xof::get_bytes`].
pub fn test_allocate_bytes<C: Construction + Default>() {
    let seed = seed_for::<C>();
    for n in lengths(C::BLOCK_SIZE) {
        let want = fresh_output(&mut Instance::<C>::default(), &seed, n);

        let mut xof = Instance::<C>::default();
        xof.set_seed(&seed).expect("seed should be accepted");
        let got = xof.allocate_bytes(n).expect("should succeed");
        assert_eq!(got.len(), n);
        assert_eq!(&*got, &want[..]);
        assert_eq!(xof.position(), Some(n as u64));
    }
}

/// Impossible allocations fail instead of aborting, and are
/// checked against the state first.
pub fn test_allocate_too_long<C: Construction + Default>() {
    let mut xof = Instance::<C>::default();
    assert_eq!(xof.allocate_bytes(usize::MAX), Err(XofError::NotSeeded));

    xof.set_seed(&seed_for::<C>())
        .expect("seed should be accepted");
    xof.get_bytes(&mut [0u8; 3]).expect("should succeed");
    assert!(matches!(
        xof.allocate_bytes(usize::MAX),
        Err(XofError::GenerationFailed(_))
    ));
    assert_eq!(xof.position(), Some(3));

    // The stream is still usable.
    let want = fresh_output(&mut Instance::<C>::default(), &seed_for::<C>(), 13);
    let got = xof.allocate_bytes(10).expect("should succeed");
    assert_eq!(&*got, &want[3..]);
}
