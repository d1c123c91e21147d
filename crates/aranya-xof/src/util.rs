#![forbid(unsafe_code)]

use alloc::vec::Vec;
use core::cmp;

use crate::XofError;

/// Copies as much of `src` into `dst` as fits, returning the
/// number of bytes copied.
#[cfg_attr(not(feature = "mgf1"), allow(dead_code))]
pub(crate) fn copy<T: Copy>(dst: &mut [T], src: &[T]) -> usize {
    let n = cmp::min(src.len(), dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

/// Allocates `len` zero bytes without aborting on failure.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<u8>, XofError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| XofError::GenerationFailed("unable to allocate output"))?;
    out.resize(len, 0);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy() {
        let mut dst = [0u8; 4];
        assert_eq!(copy(&mut dst, &[1, 2]), 2);
        assert_eq!(dst, [1, 2, 0, 0]);
        assert_eq!(copy(&mut dst, &[9; 8]), 4);
        assert_eq!(dst, [9; 4]);
    }

    #[test]
    fn test_try_zeroed() {
        assert_eq!(try_zeroed(3), Ok(vec![0u8; 3]));
        assert_eq!(
            try_zeroed(usize::MAX),
            Err(XofError::GenerationFailed("unable to allocate output"))
        );
    }
}
