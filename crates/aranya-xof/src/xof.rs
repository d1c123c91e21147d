//! The XOF contract.

#![forbid(unsafe_code)]

use alloc::boxed::Box;
use core::fmt;

use aranya_buggy::BugExt;
use zeroize::Zeroize;

use crate::{XofAlgorithm, XofError, util};

/// An extendable output function (XOF) instance.
///
/// An instance is bound to one [`XofAlgorithm`] for its entire
/// lifetime. It starts out unseeded; [`set_seed`][Self::set_seed]
/// keys the output stream and every successful call to
/// [`get_bytes`][Self::get_bytes] continues the stream where
/// the previous call left off. That is, reading `L1` and then
/// `L2` bytes produces the same bytes as reading `L1 + L2`
/// bytes at once.
///
/// Instances are not internally synchronized. Distinct
/// instances are fully independent.
///
/// Dropping an instance wipes its seed material (see
/// [`XofReader`]).
pub trait Xof {
    /// Returns the algorithm backing this XOF.
    fn get_type(&self) -> XofAlgorithm;

    /// Installs `seed`, replacing any previous seed and
    /// restarting the output stream at position zero.
    ///
    /// If the algorithm rejects `seed` the previous stream (if
    /// any) is discarded and the instance is left unseeded.
    fn set_seed(&mut self, seed: &[u8]) -> Result<(), XofError>;

    /// Entirely fills `out` with the next `out.len()` bytes of
    /// the output stream.
    ///
    /// # Errors
    ///
    /// - [`XofError::NotSeeded`] if no seed has been installed.
    /// - [`XofError::GenerationFailed`] if the algorithm cannot
    ///   produce `out.len()` more bytes.
    ///
    /// On failure the stream position is unchanged and the
    /// contents of `out` must not be used.
    fn get_bytes(&mut self, out: &mut [u8]) -> Result<(), XofError>;

    /// Like [`get_bytes`][Self::get_bytes], but allocates the
    /// output.
    ///
    /// Allocation failure is reported as
    /// [`XofError::GenerationFailed`].
    fn allocate_bytes(&mut self, out_len: usize) -> Result<Box<[u8]>, XofError> {
        let mut out = util::try_zeroed(out_len)?;
        self.get_bytes(&mut out)?;
        Ok(out.into_boxed_slice())
    }

    /// Returns the algorithm's natural output granularity in
    /// bytes.
    ///
    /// This is informational only. [`get_bytes`][Self::get_bytes]
    /// accepts any length.
    fn get_block_size(&self) -> usize;

    /// Returns the recommended minimum seed size in bytes.
    fn get_seed_size(&self) -> usize;

    /// Returns the number of bytes generated since the current
    /// seed was installed, or `None` if the XOF is unseeded.
    fn position(&self) -> Option<u64>;
}

impl<X: Xof + ?Sized> Xof for &mut X {
    fn get_type(&self) -> XofAlgorithm {
        (**self).get_type()
    }

    fn set_seed(&mut self, seed: &[u8]) -> Result<(), XofError> {
        (**self).set_seed(seed)
    }

    fn get_bytes(&mut self, out: &mut [u8]) -> Result<(), XofError> {
        (**self).get_bytes(out)
    }

    fn allocate_bytes(&mut self, out_len: usize) -> Result<Box<[u8]>, XofError> {
        (**self).allocate_bytes(out_len)
    }

    fn get_block_size(&self) -> usize {
        (**self).get_block_size()
    }

    fn get_seed_size(&self) -> usize {
        (**self).get_seed_size()
    }

    fn position(&self) -> Option<u64> {
        (**self).position()
    }
}

impl<X: Xof + ?Sized> Xof for Box<X> {
    fn get_type(&self) -> XofAlgorithm {
        (**self).get_type()
    }

    fn set_seed(&mut self, seed: &[u8]) -> Result<(), XofError> {
        (**self).set_seed(seed)
    }

    fn get_bytes(&mut self, out: &mut [u8]) -> Result<(), XofError> {
        (**self).get_bytes(out)
    }

    fn allocate_bytes(&mut self, out_len: usize) -> Result<Box<[u8]>, XofError> {
        (**self).allocate_bytes(out_len)
    }

    fn get_block_size(&self) -> usize {
        (**self).get_block_size()
    }

    fn get_seed_size(&self) -> usize {
        (**self).get_seed_size()
    }

    fn position(&self) -> Option<u64> {
        (**self).position()
    }
}

/// A backing algorithm for an [`Xof`].
///
/// A `Construction` is the unkeyed description of an
/// algorithm. Seeding it produces a [`Seeded`] output stream.
pub trait Construction {
    /// Uniquely identifies the algorithm.
    ///
    /// Must not be [`XofAlgorithm::Undefined`].
    const ID: XofAlgorithm;

    /// The natural output granularity in bytes.
    const BLOCK_SIZE: usize;

    /// The recommended minimum seed size in bytes.
    const SEED_SIZE: usize;

    /// Generates the output stream.
    type Reader: XofReader;

    /// Keys a new output stream with `seed`.
    ///
    /// Returns [`XofError::SeedRejected`] if `seed` violates
    /// a constraint of the algorithm.
    fn init(&self, seed: &[u8]) -> Result<Self::Reader, XofError>;

    /// Keys a new output stream with `seed`, starting at
    /// position zero.
    fn seed(&self, seed: &[u8]) -> Result<Seeded<Self::Reader>, XofError> {
        let reader = self.init(seed)?;
        Ok(Seeded {
            reader,
            position: 0,
        })
    }
}

/// Reads output bytes from a seeded [`Construction`].
///
/// Implementations should zeroize their key material when
/// dropped if the underlying primitive allows it.
pub trait XofReader {
    /// Entirely fills `out` with the next `out.len()` bytes of
    /// the stream.
    ///
    /// This must either fill all of `out` or leave the reader
    /// unchanged and return [`XofError::GenerationFailed`].
    fn read(&mut self, out: &mut [u8]) -> Result<(), XofError>;

    /// Reports whether `len` more bytes can be read.
    ///
    /// Bounded constructions override this so that requests
    /// past the end of the stream are rejected before any
    /// output is allocated.
    fn check(&self, len: u64) -> Result<(), XofError> {
        let _ = len;
        Ok(())
    }
}

/// A keyed output stream.
///
/// This is the only way to generate output, so a `Seeded` can
/// never be asked for bytes before it has a seed.
pub struct Seeded<R> {
    reader: R,
    position: u64,
}

impl<R: XofReader> Seeded<R> {
    /// Entirely fills `out` with the next `out.len()` bytes of
    /// the stream.
    ///
    /// On failure the position is unchanged and `out` is
    /// zeroed.
    pub fn get_bytes(&mut self, out: &mut [u8]) -> Result<(), XofError> {
        let next = match self.advance(out.len()) {
            Ok(next) => next,
            Err(err) => {
                out.zeroize();
                return Err(err);
            }
        };
        if let Err(err) = self.reader.read(out) {
            out.zeroize();
            return Err(err);
        }
        self.position = next;
        Ok(())
    }

    /// Like [`get_bytes`][Self::get_bytes], but allocates the
    /// output.
    ///
    /// The request is checked against the stream before
    /// anything is allocated.
    pub fn allocate_bytes(&mut self, out_len: usize) -> Result<Box<[u8]>, XofError> {
        self.advance(out_len)?;
        let mut out = util::try_zeroed(out_len)?;
        self.get_bytes(&mut out)?;
        Ok(out.into_boxed_slice())
    }

    /// Returns the position after reading `len` more bytes.
    fn advance(&self, len: usize) -> Result<u64, XofError> {
        let n = u64::try_from(len).assume("`usize` fits in `u64`")?;
        let next = self
            .position
            .checked_add(n)
            .ok_or(XofError::GenerationFailed("stream position overflow"))?;
        self.reader.check(n)?;
        Ok(next)
    }

    /// Reads exactly `N` bytes from the stream.
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], XofError> {
        let mut out = [0u8; N];
        self.get_bytes(&mut out)?;
        Ok(out)
    }

    /// Returns the number of bytes generated so far.
    pub const fn position(&self) -> u64 {
        self.position
    }
}

impl<R> fmt::Debug for Seeded<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seeded")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// An [`Xof`] backed by the [`Construction`] `C`.
///
/// This enforces the seed-before-generate state machine at
/// runtime. If the algorithm is known statically, prefer
/// [`Construction::seed`], which enforces it at compile time.
pub struct Instance<C: Construction> {
    construction: C,
    stream: Option<Seeded<C::Reader>>,
}

impl<C: Construction> Instance<C> {
    /// Creates an unseeded instance.
    pub const fn new(construction: C) -> Self {
        Self {
            construction,
            stream: None,
        }
    }

    /// Returns the seeded stream, if any.
    pub fn stream(&mut self) -> Option<&mut Seeded<C::Reader>> {
        self.stream.as_mut()
    }
}

impl<C: Construction + Default> Default for Instance<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Construction> Xof for Instance<C> {
    #[inline]
    fn get_type(&self) -> XofAlgorithm {
        C::ID
    }

    fn set_seed(&mut self, seed: &[u8]) -> Result<(), XofError> {
        // Drop (and thus wipe) the old stream first so that it
        // does not outlive a rejected seed.
        self.stream = None;
        self.stream = Some(self.construction.seed(seed)?);
        Ok(())
    }

    fn get_bytes(&mut self, out: &mut [u8]) -> Result<(), XofError> {
        self.stream
            .as_mut()
            .ok_or(XofError::NotSeeded)?
            .get_bytes(out)
    }

    fn allocate_bytes(&mut self, out_len: usize) -> Result<Box<[u8]>, XofError> {
        self.stream
            .as_mut()
            .ok_or(XofError::NotSeeded)?
            .allocate_bytes(out_len)
    }

    #[inline]
    fn get_block_size(&self) -> usize {
        C::BLOCK_SIZE
    }

    #[inline]
    fn get_seed_size(&self) -> usize {
        C::SEED_SIZE
    }

    fn position(&self) -> Option<u64> {
        self.stream.as_ref().map(Seeded::position)
    }
}

impl<C: Construction> fmt::Debug for Instance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("alg", &C::ID)
            .field("stream", &self.stream)
            .finish()
    }
}
