//! MGF1 per [RFC 8017] appendix B.2.1.
//!
//! MGF1 expands a seed by hashing it together with a 32-bit
//! big-endian counter:
//!
//! ```text
//! T = H(seed || 0x00000000) || H(seed || 0x00000001) || ...
//! ```
//!
//! Output is limited to 2³² blocks per seed.
//!
//! [RFC 8017]: https://www.rfc-editor.org/rfc/rfc8017#appendix-B.2.1

#![forbid(unsafe_code)]

use alloc::{vec, vec::Vec};
use core::{fmt, marker::PhantomData};

use digest::{Digest, OutputSizeUser, typenum::Unsigned};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    XofError,
    alg::XofAlgorithm,
    hash::HashAlgorithm,
    xof::{Construction, Instance, XofReader},
};

/// A hash function that MGF1 is defined over.
pub trait Mgf1Hash: Digest {
    /// The hash algorithm.
    const HASH: HashAlgorithm;
    /// The corresponding MGF1 XOF.
    const XOF: XofAlgorithm;
}

macro_rules! mgf1_hash_impl {
    ($($hash:ty => $id:ident, $xof:ident);* $(;)?) => {
        $(
            impl Mgf1Hash for $hash {
                const HASH: HashAlgorithm = HashAlgorithm::$id;
                const XOF: XofAlgorithm = XofAlgorithm::$xof;
            }
        )*
    };
}
mgf1_hash_impl! {
    sha1::Sha1 => Sha1, Mgf1Sha1;
    sha2::Sha224 => Sha224, Mgf1Sha224;
    sha2::Sha256 => Sha256, Mgf1Sha256;
    sha2::Sha384 => Sha384, Mgf1Sha384;
    sha2::Sha512 => Sha512, Mgf1Sha512;
    sha3::Sha3_224 => Sha3_224, Mgf1Sha3_224;
    sha3::Sha3_256 => Sha3_256, Mgf1Sha3_256;
    sha3::Sha3_384 => Sha3_384, Mgf1Sha3_384;
    sha3::Sha3_512 => Sha3_512, Mgf1Sha3_512;
}

/// MGF1 over the hash function `H`.
pub struct Mgf1<H> {
    hash_seed: bool,
    _hash: PhantomData<fn() -> H>,
}

impl<H> Mgf1<H> {
    /// Creates MGF1 that uses the seed as-is.
    pub const fn new() -> Self {
        Self {
            hash_seed: false,
            _hash: PhantomData,
        }
    }

    /// Creates MGF1 that replaces the seed with `H(seed)`
    /// before expanding it.
    pub const fn with_hashed_seed() -> Self {
        Self {
            hash_seed: true,
            _hash: PhantomData,
        }
    }

    /// Reports whether the seed is hashed before use.
    pub const fn hashes_seed(&self) -> bool {
        self.hash_seed
    }
}

impl<H> Clone for Mgf1<H> {
    fn clone(&self) -> Self {
        Self {
            hash_seed: self.hash_seed,
            _hash: PhantomData,
        }
    }
}

impl<H> Default for Mgf1<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Mgf1Hash> fmt::Debug for Mgf1<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mgf1")
            .field("hash", &H::HASH)
            .field("hash_seed", &self.hash_seed)
            .finish()
    }
}

impl<H: Mgf1Hash> Construction for Mgf1<H> {
    const ID: XofAlgorithm = H::XOF;
    const BLOCK_SIZE: usize = <H as OutputSizeUser>::OutputSize::USIZE;
    const SEED_SIZE: usize = <H as OutputSizeUser>::OutputSize::USIZE;

    type Reader = Mgf1Reader<H>;

    fn init(&self, seed: &[u8]) -> Result<Self::Reader, XofError> {
        if seed.is_empty() {
            debug!(alg = %H::XOF, "empty MGF1 seed");
            return Err(XofError::SeedRejected("MGF1 seed must not be empty"));
        }
        let seed = if self.hash_seed {
            let mut tmp = Zeroizing::new(vec![0u8; Self::SEED_SIZE]);
            let mut h = H::new();
            Digest::update(&mut h, seed);
            Digest::finalize_into(h, digest::Output::<H>::from_mut_slice(&mut tmp));
            tmp
        } else {
            Zeroizing::new(seed.to_vec())
        };
        Ok(Mgf1Reader {
            seed,
            counter: 0,
            block: Zeroizing::new(vec![0u8; Self::BLOCK_SIZE]),
            // Nothing is buffered yet.
            used: Self::BLOCK_SIZE,
            remaining: MAX_BLOCKS.saturating_mul(Self::BLOCK_SIZE as u64),
            _hash: PhantomData,
        })
    }
}

/// The maximum number of blocks MGF1 can produce for one seed.
const MAX_BLOCKS: u64 = 1 << 32;

const TOO_LONG: XofError = XofError::GenerationFailed("mask too long");

/// An [`XofReader`] for [`Mgf1`].
pub struct Mgf1Reader<H> {
    seed: Zeroizing<Vec<u8>>,
    /// The counter for the next block.
    counter: u32,
    /// The current block.
    block: Zeroizing<Vec<u8>>,
    /// The number of bytes of `block` that have been read.
    used: usize,
    /// The number of bytes left before the counter runs out.
    remaining: u64,
    _hash: PhantomData<fn() -> H>,
}

impl<H: Mgf1Hash> Mgf1Reader<H> {
    fn next_block(&mut self) {
        let mut h = H::new();
        Digest::update(&mut h, &*self.seed);
        Digest::update(&mut h, self.counter.to_be_bytes());
        Digest::finalize_into(h, digest::Output::<H>::from_mut_slice(&mut self.block));
        // Only wraps after the final block, at which point
        // `remaining` is zero.
        self.counter = self.counter.wrapping_add(1);
        self.used = 0;
    }
}

impl<H: Mgf1Hash> XofReader for Mgf1Reader<H> {
    fn read(&mut self, mut out: &mut [u8]) -> Result<(), XofError> {
        let n = u64::try_from(out.len()).map_err(|_| TOO_LONG)?;
        self.check(n)?;
        // Cannot underflow, see `check`.
        self.remaining = self.remaining.saturating_sub(n);

        while !out.is_empty() {
            if self.used == self.block.len() {
                self.next_block();
            }
            let n = crate::util::copy(out, &self.block[self.used..]);
            // Both are bounded by `self.block.len()` and `out.len()`.
            self.used = self.used.wrapping_add(n);
            out = &mut core::mem::take(&mut out)[n..];
        }
        Ok(())
    }

    fn check(&self, len: u64) -> Result<(), XofError> {
        if len > self.remaining {
            return Err(TOO_LONG);
        }
        Ok(())
    }
}

impl<H> Zeroize for Mgf1Reader<H> {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.counter.zeroize();
        self.block.as_mut_slice().zeroize();
        self.used = self.block.len();
        self.remaining = 0;
    }
}

impl<H> Drop for Mgf1Reader<H> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<H> ZeroizeOnDrop for Mgf1Reader<H> {}

impl<H> fmt::Debug for Mgf1Reader<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mgf1Reader").finish_non_exhaustive()
    }
}

macro_rules! mgf1_alias {
    ($($name:ident, $xof:ident, $hash:ty, $doc:expr);* $(;)?) => {
        $(
            #[doc = concat!("MGF1 with ", $doc, ".")]
            pub type $name = Mgf1<$hash>;

            #[doc = concat!("An [`Xof`][crate::Xof] for MGF1 with ", $doc, ".")]
            pub type $xof = Instance<$name>;
        )*
    };
}
mgf1_alias! {
    Mgf1Sha1, Mgf1Sha1Xof, sha1::Sha1, "SHA-1";
    Mgf1Sha224, Mgf1Sha224Xof, sha2::Sha224, "SHA-224";
    Mgf1Sha256, Mgf1Sha256Xof, sha2::Sha256, "SHA-256";
    Mgf1Sha384, Mgf1Sha384Xof, sha2::Sha384, "SHA-384";
    Mgf1Sha512, Mgf1Sha512Xof, sha2::Sha512, "SHA-512";
    Mgf1Sha3_224, Mgf1Sha3_224Xof, sha3::Sha3_224, "SHA3-224";
    Mgf1Sha3_256, Mgf1Sha3_256Xof, sha3::Sha3_256, "SHA3-256";
    Mgf1Sha3_384, Mgf1Sha3_384Xof, sha3::Sha3_384, "SHA3-384";
    Mgf1Sha3_512, Mgf1Sha3_512Xof, sha3::Sha3_512, "SHA3-512";
}
