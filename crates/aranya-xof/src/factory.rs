#![forbid(unsafe_code)]

use alloc::boxed::Box;

use tracing::{debug, trace};

use crate::{Xof, XofAlgorithm, XofError, hash::HashAlgorithm, mgf1_for_hash};

/// Creates an unseeded [`Xof`] for `alg`.
///
/// # Errors
///
/// Returns [`XofError::Unsupported`] if `alg` is
/// [`XofAlgorithm::Undefined`] or its implementation was not
/// enabled at compile time.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "chacha20")]
/// # {
/// use aranya_xof::{Xof, XofAlgorithm, XofError, new_xof};
///
/// let xof = new_xof(XofAlgorithm::ChaCha20).expect("ChaCha20 is enabled");
/// assert_eq!(xof.get_type(), XofAlgorithm::ChaCha20);
/// assert_eq!(xof.get_seed_size(), 44);
///
/// assert!(matches!(
///     new_xof(XofAlgorithm::Undefined),
///     Err(XofError::Unsupported(XofAlgorithm::Undefined)),
/// ));
/// # }
/// ```
pub fn new_xof(alg: XofAlgorithm) -> Result<Box<dyn Xof + Send>, XofError> {
    let xof = build(alg).ok_or_else(|| {
        debug!(%alg, "no implementation available");
        XofError::Unsupported(alg)
    })?;
    trace!(%alg, "created XOF");
    Ok(xof)
}

/// Creates an unseeded MGF1 [`Xof`] over the hash algorithm
/// `hash`.
///
/// See [`mgf1_for_hash`] for the supported hash algorithms.
pub fn new_mgf1(hash: HashAlgorithm) -> Result<Box<dyn Xof + Send>, XofError> {
    new_xof(mgf1_for_hash(hash))
}

#[cfg(any(feature = "chacha20", feature = "mgf1", feature = "shake"))]
fn boxed<X: Xof + Default + Send + 'static>() -> Option<Box<dyn Xof + Send>> {
    Some(Box::new(X::default()))
}

fn build(alg: XofAlgorithm) -> Option<Box<dyn Xof + Send>> {
    #[allow(unused_imports)]
    use crate::Instance;

    match alg {
        XofAlgorithm::Undefined => None,
        XofAlgorithm::Mgf1Sha1
        | XofAlgorithm::Mgf1Sha224
        | XofAlgorithm::Mgf1Sha256
        | XofAlgorithm::Mgf1Sha384
        | XofAlgorithm::Mgf1Sha512
        | XofAlgorithm::Mgf1Sha3_224
        | XofAlgorithm::Mgf1Sha3_256
        | XofAlgorithm::Mgf1Sha3_384
        | XofAlgorithm::Mgf1Sha3_512 => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "mgf1")] {
                    use crate::mgf1::{
                        Mgf1Sha1, Mgf1Sha224, Mgf1Sha256, Mgf1Sha384, Mgf1Sha512, Mgf1Sha3_224,
                        Mgf1Sha3_256, Mgf1Sha3_384, Mgf1Sha3_512,
                    };
                    match alg {
                        XofAlgorithm::Mgf1Sha1 => boxed::<Instance<Mgf1Sha1>>(),
                        XofAlgorithm::Mgf1Sha224 => boxed::<Instance<Mgf1Sha224>>(),
                        XofAlgorithm::Mgf1Sha256 => boxed::<Instance<Mgf1Sha256>>(),
                        XofAlgorithm::Mgf1Sha384 => boxed::<Instance<Mgf1Sha384>>(),
                        XofAlgorithm::Mgf1Sha512 => boxed::<Instance<Mgf1Sha512>>(),
                        XofAlgorithm::Mgf1Sha3_224 => boxed::<Instance<Mgf1Sha3_224>>(),
                        XofAlgorithm::Mgf1Sha3_256 => boxed::<Instance<Mgf1Sha3_256>>(),
                        XofAlgorithm::Mgf1Sha3_384 => boxed::<Instance<Mgf1Sha3_384>>(),
                        XofAlgorithm::Mgf1Sha3_512 => boxed::<Instance<Mgf1Sha3_512>>(),
                        _ => None,
                    }
                } else {
                    None
                }
            }
        }
        XofAlgorithm::Shake128 | XofAlgorithm::Shake256 => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "shake")] {
                    use crate::shake::{Shake128, Shake256};
                    if alg == XofAlgorithm::Shake128 {
                        boxed::<Instance<Shake128>>()
                    } else {
                        boxed::<Instance<Shake256>>()
                    }
                } else {
                    None
                }
            }
        }
        XofAlgorithm::ChaCha20 => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "chacha20")] {
                    boxed::<Instance<crate::chacha::ChaCha20>>()
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU16;

    use super::*;

    #[test]
    fn test_new_xof() {
        for alg in XofAlgorithm::ALL {
            if alg == XofAlgorithm::Undefined {
                continue;
            }
            let mut xof = new_xof(alg).unwrap_or_else(|err| panic!("{alg}: {err}"));
            assert_eq!(xof.get_type(), alg);
            assert_eq!(xof.position(), None);
            assert_eq!(xof.get_bytes(&mut [0u8; 8]), Err(XofError::NotSeeded));
        }
    }

    #[test]
    fn test_new_xof_undefined() {
        assert!(matches!(
            new_xof(XofAlgorithm::Undefined),
            Err(XofError::Unsupported(XofAlgorithm::Undefined))
        ));
    }

    #[test]
    fn test_new_mgf1() {
        let xof = new_mgf1(HashAlgorithm::Sha256).expect("MGF1-SHA-256 is enabled");
        assert_eq!(xof.get_type(), XofAlgorithm::Mgf1Sha256);
        assert_eq!(xof.get_block_size(), 32);

        for hash in [
            HashAlgorithm::Md5,
            HashAlgorithm::Identity,
            HashAlgorithm::Other(NonZeroU16::MAX),
        ] {
            assert!(matches!(
                new_mgf1(hash),
                Err(XofError::Unsupported(XofAlgorithm::Undefined))
            ));
        }
    }
}
