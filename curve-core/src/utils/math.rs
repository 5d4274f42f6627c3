pub trait Math {
    fn pow2(self) -> usize;
}

impl Math for usize {
    #[inline]
    fn pow2(self) -> usize {
        let base: usize = 2;
        base.pow(self as u32)
    }
}

/// Bit `index` of a little-endian limb sequence; bits past the last limb read as zero.
#[inline]
pub fn limb_bit(limbs: &[u64], index: usize) -> bool {
    limbs
        .get(index / 64)
        .map_or(false, |limb| (limb >> (index % 64)) & 1 == 1)
}
