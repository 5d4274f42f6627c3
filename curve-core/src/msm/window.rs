/// Bucket window widths the MSM is compiled for. 10, 14 and 18 do not divide 64, so some of
/// their windows straddle two scalar limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowWidth {
    C4,
    C8,
    C10,
    C14,
    C16,
    C18,
}

impl WindowWidth {
    pub const ALL: [WindowWidth; 6] = [
        WindowWidth::C4,
        WindowWidth::C8,
        WindowWidth::C10,
        WindowWidth::C14,
        WindowWidth::C16,
        WindowWidth::C18,
    ];

    pub const fn bits(self) -> usize {
        match self {
            WindowWidth::C4 => 4,
            WindowWidth::C8 => 8,
            WindowWidth::C10 => 10,
            WindowWidth::C14 => 14,
            WindowWidth::C16 => 16,
            WindowWidth::C18 => 18,
        }
    }

    /// Number of `c`-bit windows covering a `num_bits` scalar.
    pub const fn num_chunks(self, num_bits: usize) -> usize {
        num_bits.div_ceil(self.bits())
    }
}

/// Window selection policy for [`super::multi_scalar_mul_with_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MsmConfig {
    /// Inputs up to this size use 4-bit windows.
    pub small_threshold: usize,
    /// Inputs up to this size use 8-bit windows; larger ones use 16-bit windows.
    pub medium_threshold: usize,
    /// Forces one width regardless of input size.
    pub window: Option<WindowWidth>,
}

impl Default for MsmConfig {
    fn default() -> Self {
        Self {
            small_threshold: 32,
            medium_threshold: 200_000,
            window: None,
        }
    }
}

impl MsmConfig {
    pub fn with_window(mut self, window: WindowWidth) -> Self {
        self.window = Some(window);
        self
    }

    pub fn window_for(&self, n: usize) -> WindowWidth {
        if let Some(window) = self.window {
            return window;
        }
        if n <= self.small_threshold {
            WindowWidth::C4
        } else if n <= self.medium_threshold {
            WindowWidth::C8
        } else {
            WindowWidth::C16
        }
    }
}

/// Precomputed extraction of the `chunk`-th `c`-bit window from little-endian limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSelector {
    index: usize,
    shift: u32,
    mask: u64,
    multi_word: bool,
    mask_high: u64,
    shift_high: u32,
}

impl WindowSelector {
    pub fn new(chunk: usize, c: usize, num_limbs: usize) -> Self {
        assert!(c > 0 && c < 64, "window width {c} out of range");
        let start = chunk * c;
        let index = start / 64;
        let shift = start % 64;
        let multi_word = shift > 64 - c && index + 1 < num_limbs;
        let (mask_high, shift_high) = if multi_word {
            let nb_bits_high = shift - (64 - c);
            ((1u64 << nb_bits_high) - 1, (64 - shift) as u32)
        } else {
            (0, 0)
        };
        Self {
            index,
            shift: shift as u32,
            mask: (1u64 << c) - 1,
            multi_word,
            mask_high,
            shift_high,
        }
    }

    #[inline]
    pub fn is_multi_word(&self) -> bool {
        self.multi_word
    }

    /// The window value in `[0, 2^c)`. Windows past the last limb read as zero.
    #[inline]
    pub fn select(&self, limbs: &[u64]) -> u64 {
        let Some(&word) = limbs.get(self.index) else {
            return 0;
        };
        let mut bits = (word >> self.shift) & self.mask;
        if self.multi_word {
            bits |= (limbs[self.index + 1] & self.mask_high) << self.shift_high;
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::limb_bit;
    use crate::utils::test_utils::seeded_rng;
    use rand_core::RngCore;

    fn reference_window(limbs: &[u64], chunk: usize, c: usize) -> u64 {
        (0..c)
            .filter(|&i| limb_bit(limbs, chunk * c + i))
            .fold(0u64, |acc, i| acc | (1 << i))
    }

    #[test]
    fn default_policy() {
        let config = MsmConfig::default();
        assert_eq!(config.window_for(0), WindowWidth::C4);
        assert_eq!(config.window_for(32), WindowWidth::C4);
        assert_eq!(config.window_for(33), WindowWidth::C8);
        assert_eq!(config.window_for(200_000), WindowWidth::C8);
        assert_eq!(config.window_for(200_001), WindowWidth::C16);

        let forced = config.with_window(WindowWidth::C14);
        assert_eq!(forced.window_for(1), WindowWidth::C14);
        assert_eq!(forced.window_for(1 << 20), WindowWidth::C14);
    }

    #[test]
    fn chunk_counts() {
        assert_eq!(WindowWidth::C4.num_chunks(254), 64);
        assert_eq!(WindowWidth::C8.num_chunks(254), 32);
        assert_eq!(WindowWidth::C10.num_chunks(254), 26);
        assert_eq!(WindowWidth::C14.num_chunks(254), 19);
        assert_eq!(WindowWidth::C16.num_chunks(254), 16);
        assert_eq!(WindowWidth::C18.num_chunks(254), 15);
    }

    #[test]
    fn straddling_windows() {
        // Bits 60..70 span limbs 0 and 1.
        let sel = WindowSelector::new(6, 10, 4);
        assert!(sel.is_multi_word());
        let limbs = [0xf000_0000_0000_0000, 0x2a, 0, 0];
        assert_eq!(sel.select(&limbs), 0b10_1010_1111);

        // Bits 252..266 would straddle, but there is no fifth limb.
        let sel = WindowSelector::new(18, 14, 4);
        assert!(!sel.is_multi_word());
        assert_eq!(sel.select(&[0, 0, 0, u64::MAX]), 0xf);

        for c in [4, 8, 16] {
            for chunk in 0..WindowWidth::C4.num_chunks(256) {
                assert!(!WindowSelector::new(chunk, c, 4).is_multi_word());
            }
        }
    }

    #[test]
    fn selector_matches_bit_reference() {
        let mut rng = seeded_rng();
        let mut inputs = vec![[u64::MAX; 4], [0u64; 4], [1, 0, 0, 1 << 63]];
        inputs.extend((0..16).map(|_| {
            [
                rng.next_u64(),
                rng.next_u64(),
                rng.next_u64(),
                rng.next_u64(),
            ]
        }));
        for width in WindowWidth::ALL {
            let c = width.bits();
            for limbs in &inputs {
                for chunk in 0..width.num_chunks(256) {
                    let sel = WindowSelector::new(chunk, c, limbs.len());
                    assert_eq!(
                        sel.select(limbs),
                        reference_window(limbs, chunk, c),
                        "c = {c}, chunk = {chunk}"
                    );
                }
            }
        }
    }

    #[test]
    fn past_the_end_reads_zero() {
        // Bit 64 is still inside limb 1.
        assert_eq!(WindowSelector::new(4, 16, 4).select(&[u64::MAX; 4]), 0xffff);
        // Bit 256 is past the last limb, for aligned and straddling widths alike.
        for (chunk, c) in [(16, 16), (26, 10), (15, 18)] {
            let sel = WindowSelector::new(chunk, c, 4);
            assert!(!sel.is_multi_word());
            assert_eq!(sel.select(&[u64::MAX; 4]), 0, "c = {c}, chunk = {chunk}");
        }
    }
}
