//! Hash algorithm identifiers.
//!
//! The hash functions themselves live elsewhere; this crate
//! only needs to name them in order to pick an MGF1 variant
//! (see [`mgf1_for_hash`][crate::mgf1_for_hash]).

#![forbid(unsafe_code)]

use core::{fmt, num::NonZeroU16};

/// Hash algorithm identifiers.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub enum HashAlgorithm {
    /// An unknown hash algorithm.
    Unknown,
    /// The identity "hash", which returns its input.
    Identity,
    /// MD2.
    Md2,
    /// MD4.
    Md4,
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// SHA3-224.
    Sha3_224,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-384.
    Sha3_384,
    /// SHA3-512.
    Sha3_512,
    /// Some other hash function, identified by a private-use
    /// code.
    Other(NonZeroU16),
}

impl HashAlgorithm {
    /// Returns the size in bytes of the digest, if known.
    pub const fn digest_size(self) -> Option<usize> {
        let n = match self {
            Self::Md2 | Self::Md4 | Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
            Self::Unknown | Self::Identity | Self::Other(_) => return None,
        };
        Some(n)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "HASH_UNKNOWN",
            Self::Identity => "HASH_IDENTITY",
            Self::Md2 => "HASH_MD2",
            Self::Md4 => "HASH_MD4",
            Self::Md5 => "HASH_MD5",
            Self::Sha1 => "HASH_SHA1",
            Self::Sha224 => "HASH_SHA224",
            Self::Sha256 => "HASH_SHA256",
            Self::Sha384 => "HASH_SHA384",
            Self::Sha512 => "HASH_SHA512",
            Self::Sha3_224 => "HASH_SHA3_224",
            Self::Sha3_256 => "HASH_SHA3_256",
            Self::Sha3_384 => "HASH_SHA3_384",
            Self::Sha3_512 => "HASH_SHA3_512",
            Self::Other(id) => return write!(f, "HASH_OTHER({id})"),
        };
        f.write_str(name)
    }
}
