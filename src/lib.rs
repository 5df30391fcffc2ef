#![cfg_attr(feature = "nightly", feature(portable_simd))]
//! Fixed-capacity byte buffers for streaming ASCII-digit ingestion.
//!
//! The crate centers on the [`LaneBuffer`] trait: one contract for filling,
//! comparing, consuming, splicing and converting a small window of bytes,
//! implemented over five register widths (1, 7, 16, 32 and 64 lanes). The
//! conversion reduces a digit run to its binary value with a staged
//! multiply-accumulate tree in O(log width) steps instead of a per-byte loop.
//! [`NumberStream`] drives a pair of buffers over a whole byte slice, and
//! [`NativeBuffer`] names the widest variant the target can back with a
//! single hardware register.
mod buffer;
mod input;
mod reader;

pub use buffer::{LaneBuffer, LaneMask, NativeBuffer, PackedBuffer, PackedMask, ScalarBuffer};
#[cfg(feature = "simd")]
pub use buffer::{SimdBuffer16, SimdBuffer32, SimdBuffer64};
pub use input::NumberColumn;
pub use reader::NumberStream;

/// Sum every number in the column on the calling thread.
#[inline(always)]
pub fn sum_column<B: LaneBuffer>(column: NumberColumn<'_>) -> u64 {
    NumberStream::<B>::new(column.bytes()).fold(0u64, |acc, value| acc.wrapping_add(value))
}

/// Sum the column with up to the given number of threads. Each worker owns a
/// private buffer pair over a disjoint shard; nothing is shared between
/// workers.
pub fn sum_column_with_threads<B: LaneBuffer>(
    column: NumberColumn<'_>,
    num_threads: usize,
) -> u64 {
    if num_threads < 2 {
        return sum_column::<B>(column);
    }
    std::thread::scope(|s| {
        let handles: Vec<_> = column
            .chunks(num_threads)
            .map(|chunk| s.spawn(move || sum_column::<B>(chunk)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .fold(0u64, |acc, value| acc.wrapping_add(value))
    })
}
