#![forbid(unsafe_code)]

use aranya_buggy::Bug;

use crate::XofAlgorithm;

/// Encompasses the different errors returned by an [`Xof`].
///
/// [`Xof`]: crate::Xof
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum XofError {
    /// Output was requested before a seed was installed.
    ///
    /// Install a seed with [`set_seed`][crate::Xof::set_seed]
    /// and try again.
    #[error("XOF has not been seeded")]
    NotSeeded,
    /// The seed violates a constraint of the algorithm.
    ///
    /// It describes why the seed was rejected.
    #[error("seed rejected: {0}")]
    SeedRejected(&'static str),
    /// The algorithm is unable to produce more output.
    ///
    /// The instance should be discarded.
    #[error("unable to generate output: {0}")]
    GenerationFailed(&'static str),
    /// No implementation of the algorithm is available.
    #[error("unsupported XOF: {0}")]
    Unsupported(XofAlgorithm),
    /// An internal bug was discovered.
    #[error(transparent)]
    Bug(#[from] Bug),
}
