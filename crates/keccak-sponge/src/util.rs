use core::cmp;

/// Copies as many bytes as fit from `src` to `dst` and
/// returns the number copied.
#[inline]
pub(crate) fn copy(dst: &mut [u8], src: &[u8]) -> usize {
    let n = cmp::min(src.len(), dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}
