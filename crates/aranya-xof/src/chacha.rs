//! The ChaCha20 keystream per [RFC 7539].
//!
//! The seed is exactly [`SEED_SIZE`] bytes:
//!
//! ```text
//! key (32 bytes) || salt (4 bytes) || iv (8 bytes)
//! ```
//!
//! where `salt || iv` is the 96-bit nonce. The 32-bit block
//! counter starts at zero and never wraps, so one seed yields
//! at most 2³² − 1 blocks ([`MAX_OUTPUT`] bytes). The block at
//! counter `0xffffffff` is never produced.
//!
//! [RFC 7539]: https://www.rfc-editor.org/rfc/rfc7539

#![forbid(unsafe_code)]

use core::fmt;

use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    XofError,
    alg::XofAlgorithm,
    xof::{Construction, Instance, XofReader},
};

/// The size in bytes of a ChaCha20 key.
pub const KEY_SIZE: usize = 32;
/// The size in bytes of the salt.
pub const SALT_SIZE: usize = 4;
/// The size in bytes of the IV.
pub const IV_SIZE: usize = 8;
/// The size in bytes of a ChaCha20 seed.
pub const SEED_SIZE: usize = KEY_SIZE + SALT_SIZE + IV_SIZE;
/// The size in bytes of a ChaCha20 block.
pub const BLOCK_SIZE: usize = 64;
/// The maximum number of bytes one seed can produce.
pub const MAX_OUTPUT: u64 = 0xffff_ffff * 64;

const EXHAUSTED: XofError = XofError::GenerationFailed("ChaCha20 keystream exhausted");

/// The ChaCha20 keystream.
#[derive(Copy, Clone, Debug, Default)]
pub struct ChaCha20;

impl Construction for ChaCha20 {
    const ID: XofAlgorithm = XofAlgorithm::ChaCha20;
    const BLOCK_SIZE: usize = BLOCK_SIZE;
    const SEED_SIZE: usize = SEED_SIZE;

    type Reader = ChaCha20Reader;

    fn init(&self, seed: &[u8]) -> Result<Self::Reader, XofError> {
        if seed.len() != SEED_SIZE {
            debug!(
                got = seed.len(),
                want = SEED_SIZE,
                "invalid ChaCha20 seed size"
            );
            return Err(XofError::SeedRejected("ChaCha20 seed must be 44 bytes"));
        }
        let (key, nonce) = seed.split_at(KEY_SIZE);
        let cipher = chacha20::ChaCha20::new_from_slices(key, nonce)
            .map_err(|_| XofError::SeedRejected("invalid ChaCha20 key or nonce"))?;
        Ok(ChaCha20Reader { cipher })
    }
}

/// An [`XofReader`] for [`ChaCha20`].
///
/// The underlying cipher state is zeroized on drop.
pub struct ChaCha20Reader {
    cipher: chacha20::ChaCha20,
}

impl XofReader for ChaCha20Reader {
    fn read(&mut self, out: &mut [u8]) -> Result<(), XofError> {
        // The keystream is XORed into `out`.
        out.zeroize();
        self.cipher.try_apply_keystream(out).map_err(|_| EXHAUSTED)
    }

    fn check(&self, len: u64) -> Result<(), XofError> {
        let pos = self.cipher.try_current_pos::<u64>().map_err(|_| EXHAUSTED)?;
        if len > MAX_OUTPUT.saturating_sub(pos) {
            return Err(EXHAUSTED);
        }
        Ok(())
    }
}

impl ZeroizeOnDrop for ChaCha20Reader {}

impl fmt::Debug for ChaCha20Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20Reader").finish_non_exhaustive()
    }
}

/// An [`Xof`][crate::Xof] for the ChaCha20 keystream.
pub type ChaCha20Xof = Instance<ChaCha20>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Xof, test_util::test_xof};

    test_xof!(chacha20_xof, ChaCha20);

    fn seed() -> [u8; SEED_SIZE] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn test_zero_seed() {
        // RFC 7539 appendix A.1, test vector #1.
        let want = hex::decode(
            "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
             da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586",
        )
        .expect("valid hex");
        let mut xof = ChaCha20Xof::default();
        xof.set_seed(&[0u8; SEED_SIZE]).expect("valid seed");
        let got = xof.allocate_bytes(64).expect("should not fail");
        assert_eq!(&*got, &want[..]);
    }

    #[test]
    fn test_seed_layout() {
        let want = hex::decode(
            "93d257e419dafa5e36cb8fc0cf389f9030af897123fa5fd516a5c326cb259d0e\
             767a6d717f3cb884ffb48c8571ee8157c92bcb108c464594e39d278d056e824f\
             73e7887c11effc3a9bc5adc8493f8fb8",
        )
        .expect("valid hex");
        let mut xof = ChaCha20Xof::default();
        xof.set_seed(&seed()).expect("valid seed");
        let mut got = [0u8; 80];
        // Straddle a block boundary.
        xof.get_bytes(&mut got[..61]).expect("should not fail");
        xof.get_bytes(&mut got[61..]).expect("should not fail");
        assert_eq!(got[..], want[..]);
    }

    #[test]
    fn test_seed_size() {
        let mut xof = ChaCha20Xof::default();
        for n in [0, 32, SEED_SIZE - 1, SEED_SIZE + 1] {
            let seed = [0u8; 64];
            assert_eq!(
                xof.set_seed(&seed[..n]),
                Err(XofError::SeedRejected("ChaCha20 seed must be 44 bytes")),
                "{n}"
            );
            assert_eq!(xof.get_bytes(&mut [0u8; 1]), Err(XofError::NotSeeded));
        }
        assert_eq!(xof.get_block_size(), 64);
        assert_eq!(xof.get_seed_size(), 44);
    }

    #[test]
    fn test_exhausted() {
        let mut reader = ChaCha20.init(&seed()).expect("valid seed");
        // Leave exactly one block.
        reader.cipher.seek(MAX_OUTPUT - BLOCK_SIZE as u64);

        assert_eq!(reader.check(BLOCK_SIZE as u64 + 1), Err(EXHAUSTED));
        let mut out = [0u8; BLOCK_SIZE + 1];
        assert_eq!(reader.read(&mut out), Err(EXHAUSTED));

        reader.check(BLOCK_SIZE as u64).expect("one block left");
        reader.read(&mut out[..10]).expect("should not fail");
        reader.check(BLOCK_SIZE as u64 - 10).expect("rest of the block");
        assert_eq!(reader.check(BLOCK_SIZE as u64 - 9), Err(EXHAUSTED));
        reader.read(&mut out[10..BLOCK_SIZE]).expect("last block");

        assert_eq!(reader.check(1), Err(EXHAUSTED));
        assert_eq!(reader.read(&mut out[..1]), Err(EXHAUSTED));
        reader.check(0).expect("empty reads always fit");
    }

    #[test]
    fn test_allocate_too_long() {
        let mut xof = ChaCha20Xof::default();
        xof.set_seed(&seed()).expect("valid seed");
        let len = usize::try_from(MAX_OUTPUT + 1).expect("64-bit target");
        assert_eq!(xof.allocate_bytes(len), Err(EXHAUSTED));
        assert_eq!(xof.position(), Some(0));
    }

    #[test]
    fn test_zeroize_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<chacha20::ChaCha20>();
        assert_zeroize_on_drop::<ChaCha20Reader>();
    }
}
