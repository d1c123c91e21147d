#![forbid(unsafe_code)]

use core::{fmt, str::FromStr};

use crate::hash::HashAlgorithm;

/// Extendable output function identifiers.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum XofAlgorithm {
    /// No XOF.
    ///
    /// This is never a valid algorithm to instantiate. It is
    /// only returned when there is no mapping for some input
    /// (see [`mgf1_for_hash`]).
    #[default]
    Undefined,
    /// MGF1 with SHA-1 per RFC 8017.
    Mgf1Sha1,
    /// MGF1 with SHA-224 per RFC 8017.
    Mgf1Sha224,
    /// MGF1 with SHA-256 per RFC 8017.
    Mgf1Sha256,
    /// MGF1 with SHA-384 per RFC 8017.
    Mgf1Sha384,
    /// MGF1 with SHA-512 per RFC 8017.
    Mgf1Sha512,
    /// MGF1 with SHA3-224 per RFC 8017.
    Mgf1Sha3_224,
    /// MGF1 with SHA3-256 per RFC 8017.
    Mgf1Sha3_256,
    /// MGF1 with SHA3-384 per RFC 8017.
    Mgf1Sha3_384,
    /// MGF1 with SHA3-512 per RFC 8017.
    Mgf1Sha3_512,
    /// SHAKE128 per FIPS 202.
    Shake128,
    /// SHAKE256 per FIPS 202.
    Shake256,
    /// The ChaCha20 keystream per RFC 7539.
    ChaCha20,
}

impl XofAlgorithm {
    /// Every XOF identifier, including
    /// [`Undefined`][Self::Undefined].
    pub const ALL: [Self; 13] = [
        Self::Undefined,
        Self::Mgf1Sha1,
        Self::Mgf1Sha224,
        Self::Mgf1Sha256,
        Self::Mgf1Sha384,
        Self::Mgf1Sha512,
        Self::Mgf1Sha3_224,
        Self::Mgf1Sha3_256,
        Self::Mgf1Sha3_384,
        Self::Mgf1Sha3_512,
        Self::Shake128,
        Self::Shake256,
        Self::ChaCha20,
    ];

    /// Returns the name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "XOF_UNDEFINED",
            Self::Mgf1Sha1 => "XOF_MGF1_SHA1",
            Self::Mgf1Sha224 => "XOF_MGF1_SHA224",
            Self::Mgf1Sha256 => "XOF_MGF1_SHA256",
            Self::Mgf1Sha384 => "XOF_MGF1_SHA384",
            Self::Mgf1Sha512 => "XOF_MGF1_SHA512",
            Self::Mgf1Sha3_224 => "XOF_MGF1_SHA3_224",
            Self::Mgf1Sha3_256 => "XOF_MGF1_SHA3_256",
            Self::Mgf1Sha3_384 => "XOF_MGF1_SHA3_384",
            Self::Mgf1Sha3_512 => "XOF_MGF1_SHA3_512",
            Self::Shake128 => "XOF_SHAKE128",
            Self::Shake256 => "XOF_SHAKE256",
            Self::ChaCha20 => "XOF_CHACHA20",
        }
    }

    /// Reports whether this is one of the MGF1 variants.
    pub const fn is_mgf1(self) -> bool {
        matches!(
            self,
            Self::Mgf1Sha1
                | Self::Mgf1Sha224
                | Self::Mgf1Sha256
                | Self::Mgf1Sha384
                | Self::Mgf1Sha512
                | Self::Mgf1Sha3_224
                | Self::Mgf1Sha3_256
                | Self::Mgf1Sha3_384
                | Self::Mgf1Sha3_512
        )
    }
}

impl fmt::Display for XofAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`XofAlgorithm::from_str`] for unknown names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown XOF name")]
pub struct UnknownXofName;

impl FromStr for XofAlgorithm {
    type Err = UnknownXofName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownXofName)
    }
}

/// Determines the MGF1 XOF for the hash algorithm `alg`.
///
/// Returns [`XofAlgorithm::Undefined`] if `alg` does not have
/// a standardized MGF1 construction.
pub const fn mgf1_for_hash(alg: HashAlgorithm) -> XofAlgorithm {
    match alg {
        HashAlgorithm::Sha1 => XofAlgorithm::Mgf1Sha1,
        HashAlgorithm::Sha224 => XofAlgorithm::Mgf1Sha224,
        HashAlgorithm::Sha256 => XofAlgorithm::Mgf1Sha256,
        HashAlgorithm::Sha384 => XofAlgorithm::Mgf1Sha384,
        HashAlgorithm::Sha512 => XofAlgorithm::Mgf1Sha512,
        HashAlgorithm::Sha3_224 => XofAlgorithm::Mgf1Sha3_224,
        HashAlgorithm::Sha3_256 => XofAlgorithm::Mgf1Sha3_256,
        HashAlgorithm::Sha3_384 => XofAlgorithm::Mgf1Sha3_384,
        HashAlgorithm::Sha3_512 => XofAlgorithm::Mgf1Sha3_512,
        HashAlgorithm::Unknown
        | HashAlgorithm::Identity
        | HashAlgorithm::Md2
        | HashAlgorithm::Md4
        | HashAlgorithm::Md5
        | HashAlgorithm::Other(_) => XofAlgorithm::Undefined,
    }
}
