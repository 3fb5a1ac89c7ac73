//! Batch Execution Engine
//!
//! Pairs disjoint input windows with disjoint output windows and applies an
//! operation to each pair, in parallel via Rayon when the `multithread`
//! feature is enabled, serially otherwise. Window pairs never overlap, so
//! workers need no synchronization beyond the implicit completion join, and
//! the result is bit-identical regardless of worker count.

/// Apply `op` to each `(input window, output window)` pair.
///
/// `input` is consumed in contiguous `IN`-byte windows and `output` filled
/// in contiguous `OUT`-byte windows; window `i` of one side corresponds to
/// window `i` of the other. Both slices must be exact multiples describing
/// the same number of windows.
pub fn for_each_record_pair<const IN: usize, const OUT: usize, F>(
    input: &[u8],
    output: &mut [u8],
    op: F,
) where
    F: Fn(&[u8; IN], &mut [u8; OUT]) + Sync + Send,
{
    let (src, src_rem) = input.as_chunks::<IN>();
    let (dst, dst_rem) = output.as_chunks_mut::<OUT>();
    debug_assert!(src_rem.is_empty());
    debug_assert!(dst_rem.is_empty());
    debug_assert_eq!(src.len(), dst.len());

    #[cfg(feature = "multithread")]
    {
        use rayon::prelude::*;
        dst.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(window, record)| op(record, window));
    }
    #[cfg(not(feature = "multithread"))]
    {
        dst.iter_mut()
            .zip(src.iter())
            .for_each(|(window, record)| op(record, window));
    }
}
