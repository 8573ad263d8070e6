//! Data-parallel map over index ranges.
//!
//! Every array-wide stage is written as a pure function from an index to a value, so it can
//! run on the rayon pool or on the calling thread with identical results.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maps `f` over `0..len`, on the rayon pool once `len` reaches `min_parallel_size`.
#[cfg(feature = "parallel")]
pub fn map_range<R, F>(len: usize, min_parallel_size: usize, f: F) -> Vec<R>
where
    F: Fn(usize) -> R + Send + Sync,
    R: Send,
{
    if len < min_parallel_size {
        return (0..len).map(f).collect();
    }
    (0..len).into_par_iter().map(f).collect()
}

/// Maps `f` over `0..len` (scalar fallback)
#[cfg(not(feature = "parallel"))]
pub fn map_range<R, F>(len: usize, _min_parallel_size: usize, f: F) -> Vec<R>
where
    F: Fn(usize) -> R,
{
    (0..len).map(f).collect()
}
