//! Random number generation with hardware entropy.

mod hw;

use core::cell::UnsafeCell;
use std::sync::LazyLock;

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

static RAND: LazyLock<Rand> = LazyLock::new(Rand::new);

pub struct Rand(UnsafeCell<usize>);
unsafe impl Sync for Rand {}

impl Rand {
    #[inline]
    fn new() -> Self {
        Rand(UnsafeCell::new(hw::entropy() as usize))
    }

    /// Next raw draw: state mixed with fresh entropy, SplitMix64 finalized.
    #[inline(always)]
    pub fn get() -> usize {
        let state = unsafe { *RAND.0.get() };
        let ent = hw::entropy() as usize;

        // State transition: rotate, multiply by odd constant, XOR entropy
        let new_state = state
            .rotate_left(17)
            .wrapping_mul(0x9e3779b97f4a7c15_usize)
            ^ ent;
        unsafe { *RAND.0.get() = new_state };

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9_usize);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb_usize);
        z ^ (z >> 31)
    }

    /// Uniform float in [0, 1), built from the top 53 bits of a draw.
    #[inline]
    pub fn next_unit() -> f64 {
        ((Self::get() as u64) >> 11) as f64 / (1u64 << 53) as f64
    }
}

pub fn zeroize_state() {
    unsafe { std::ptr::write_volatile(RAND.0.get(), 0) }
}

#[cfg(test)]
mod tests {
    use super::Rand;

    #[test]
    fn unit_draws_stay_in_half_open_interval() {
        for _ in 0..10_000 {
            let u = Rand::next_unit();
            assert!((0.0..1.0).contains(&u), "draw out of range: {}", u);
        }
    }

    #[test]
    fn raw_draws_are_not_constant() {
        let first = Rand::get();
        let varied = (0..1_000).any(|_| Rand::get() != first);
        assert!(varied);
    }
}
