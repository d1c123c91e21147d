//! Extendable Output Functions (XOFs) for Aranya.
//!
//! # Overview
//!
//! An XOF deterministically expands a seed into a pseudorandom
//! byte stream of arbitrary length. Protocol code (mask
//! generation, key derivation, padding schemes, etc.) asks for
//! "N bytes from seed S" through the [`Xof`] trait without
//! knowing which algorithm backs it.
//!
//! The supported algorithms are identified by [`XofAlgorithm`]:
//!
//! - MGF1 per [RFC 8017] over SHA-1, SHA-2, and SHA-3
//! - SHAKE128 and SHAKE256 per [FIPS 202]
//! - the ChaCha20 keystream per [RFC 7539]
//!
//! # Usage
//!
//! ```rust
//! # #[cfg(feature = "shake")]
//! # {
//! use aranya_xof::{Xof, XofAlgorithm, new_xof};
//!
//! let mut xof = new_xof(XofAlgorithm::Shake128).expect("SHAKE128 is enabled");
//! xof.set_seed(b"some seed").expect("SHAKE accepts any seed");
//!
//! let mut mask = [0u8; 48];
//! xof.get_bytes(&mut mask).expect("the XOF is seeded");
//! # }
//! ```
//!
//! # Design
//!
//! Each algorithm family implements [`Construction`], which
//! turns a seed into a [`Seeded`] stream. Only a [`Seeded`]
//! stream can generate output, so "seed before generate" is
//! enforced by the type system when the algorithm is known
//! statically. [`Instance`] layers the runtime state machine
//! on top for callers that select the algorithm dynamically
//! (see [`new_xof`]).
//!
//! [RFC 8017]: https://www.rfc-editor.org/rfc/rfc8017
//! [FIPS 202]: https://csrc.nist.gov/pubs/fips/202/final
//! [RFC 7539]: https://www.rfc-editor.org/rfc/rfc7539

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

mod alg;
#[cfg(feature = "chacha20")]
#[cfg_attr(docsrs, doc(cfg(feature = "chacha20")))]
pub mod chacha;
mod error;
mod factory;
pub mod hash;
#[cfg(feature = "mgf1")]
#[cfg_attr(docsrs, doc(cfg(feature = "mgf1")))]
pub mod mgf1;
#[cfg(feature = "shake")]
#[cfg_attr(docsrs, doc(cfg(feature = "shake")))]
pub mod shake;
pub mod test_util;
mod util;
mod xof;

pub use alg::*;
pub use aranya_buggy;
pub use error::*;
pub use factory::*;
pub use hash::HashAlgorithm;
pub use xof::*;
#[doc(inline)]
pub use zeroize;
