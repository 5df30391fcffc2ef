use super::LaneBuffer;
use std::simd::{cmp::SimdPartialEq, cmp::SimdPartialOrd, num::SimdUint, simd_swizzle, Simd};

/// Sixty-four-lane buffer over one 512-bit register, the widest member of
/// the family. After its first reduction stage the conversion narrows to a
/// 32-lane register and finishes with the same shape as the 256-bit tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimdBuffer64 {
    data: Simd<u8, 64>,
    begin: usize,
    end: usize,
}

impl LaneBuffer for SimdBuffer64 {
    const CAPACITY: usize = 64;
    type Register = Simd<u8, 64>;
    type Mask = u64;

    #[inline(always)]
    fn load(chunk: &[u8]) -> Self::Register {
        Simd::from_slice(chunk)
    }

    #[inline(always)]
    fn n_left(&self) -> usize {
        self.end - self.begin
    }

    #[inline(always)]
    fn fill_from(&mut self, register: Self::Register) -> bool {
        if self.begin != self.end {
            return true;
        }
        self.data = register;
        self.begin = 0;
        self.end = Self::CAPACITY;
        false
    }

    fn refill_from(&mut self, other: &Self) -> usize {
        let mut merged = [0u8; 64];
        let kept = self.end - self.begin;
        merged[..kept].copy_from_slice(&self.data.as_array()[self.begin..self.end]);

        let copied = (Self::CAPACITY - kept).min(other.end - other.begin);
        merged[kept..kept + copied]
            .copy_from_slice(&other.data.as_array()[other.begin..other.begin + copied]);

        self.data = Simd::from_array(merged);
        self.begin = 0;
        self.end = kept + copied;
        copied
    }

    #[inline(always)]
    fn store(&self, dst: &mut [u8], n: usize, overwrite_budget: usize) {
        debug_assert_eq!(self.begin, 0);
        if n + overwrite_budget >= Self::CAPACITY {
            dst[..Self::CAPACITY].copy_from_slice(self.data.as_array());
            return;
        }
        dst[..n].copy_from_slice(&self.data.as_array()[..n]);
    }

    #[inline(always)]
    fn consume(&mut self, n: usize) -> usize {
        debug_assert!(self.begin + n <= self.end);
        self.begin += n;
        self.end - self.begin
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> u8 {
        debug_assert!(idx < self.n_left());
        self.data.as_array()[self.begin + idx]
    }

    #[inline(always)]
    fn get_const<const IDX: usize>(&self) -> u8 {
        debug_assert_eq!(self.begin, 0);
        debug_assert!(IDX < Self::CAPACITY);
        self.data.as_array()[IDX]
    }

    // A fully drained window has begin == 64, one past the last legal shift.
    #[inline(always)]
    fn equal_to<const B: u8>(&self) -> u64 {
        self.data
            .simd_eq(Simd::splat(B))
            .to_bitmask()
            .checked_shr(self.begin as u32)
            .unwrap_or(0)
    }

    #[inline(always)]
    fn lt_than<const B: u8>(&self) -> u64 {
        self.data
            .simd_lt(Simd::splat(B))
            .to_bitmask()
            .checked_shr(self.begin as u32)
            .unwrap_or(0)
    }

    #[inline(always)]
    fn sub<const B: u8>(&mut self) -> u64 {
        let was_lt = self.lt_than::<B>();
        self.data -= Simd::splat(B);
        was_lt
    }

    fn erase_and_shift_left(&mut self, idx: usize) {
        debug_assert!(idx < self.n_left());
        let phys = self.begin + idx;
        let bytes = self.data.to_array();
        let mut words = [0u64; 8];
        for (i, word) in words.iter_mut().enumerate() {
            *word = u64::from_le_bytes(bytes[i * 8..][..8].try_into().unwrap());
        }

        // Close the gap inside the word holding the erased byte, then ripple
        // a one-byte shift down through the lower words.
        let small = phys & 7;
        let mut big = phys >> 3;
        let mask_low = (1u64 << (small * 8)) - 1;
        let mask_high = !mask_low << 8;
        words[big] = ((words[big] & mask_high) >> 8) | (words[big] & mask_low);
        while big > 0 {
            words[big] = (words[big] << 8) | (words[big - 1] >> 56);
            big -= 1;
        }
        words[0] <<= 8;

        let mut out = [0u8; 64];
        for (i, word) in words.iter().enumerate() {
            out[i * 8..][..8].copy_from_slice(&word.to_le_bytes());
        }
        self.data = Simd::from_array(out);
        self.begin += 1;
    }

    fn atoi(&self, length: usize) -> u64 {
        debug_assert!(length <= self.n_left());
        let mut aligned = [b'0'; 64];
        aligned[Self::CAPACITY - length..]
            .copy_from_slice(&self.data.as_array()[self.begin..self.begin + length]);
        let digits = Simd::from_array(aligned) - Simd::splat(b'0');

        // high * 10 + low, then narrow: two-digit limbs fit a byte again.
        let hi = simd_swizzle!(
            digits,
            [
                0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40, 42,
                44, 46, 48, 50, 52, 54, 56, 58, 60, 62
            ]
        );
        let lo = simd_swizzle!(
            digits,
            [
                1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29, 31, 33, 35, 37, 39, 41, 43,
                45, 47, 49, 51, 53, 55, 57, 59, 61, 63
            ]
        );
        let pairs: Simd<u16, 32> = hi.cast::<u16>() * Simd::splat(10) + lo.cast::<u16>();
        let limbs: Simd<u8, 32> = pairs.cast::<u8>();

        // high * 100 + low
        let hi = simd_swizzle!(limbs, [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30]);
        let lo = simd_swizzle!(limbs, [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29, 31]);
        let quads: Simd<u16, 16> = hi.cast::<u16>() * Simd::splat(100) + lo.cast::<u16>();

        // high * 10_000 + low
        let hi = simd_swizzle!(quads, [0, 2, 4, 6, 8, 10, 12, 14]).cast::<u32>();
        let lo = simd_swizzle!(quads, [1, 3, 5, 7, 9, 11, 13, 15]).cast::<u32>();
        let octs = hi * Simd::splat(10_000) + lo;

        // high * 100_000_000 + low
        let hi = simd_swizzle!(octs, [0, 2, 4, 6]).cast::<u64>();
        let lo = simd_swizzle!(octs, [1, 3, 5, 7]).cast::<u64>();
        let hexes = hi * Simd::splat(100_000_000) + lo;

        // The top two 16-digit limbs only carry digits past the 64-bit range,
        // so the final weight-10^16 fold uses the low half alone.
        let lanes = hexes.to_array();
        lanes[2]
            .wrapping_mul(10_000_000_000_000_000)
            .wrapping_add(lanes[3])
    }
}
