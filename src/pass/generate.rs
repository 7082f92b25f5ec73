//! Password string generation.

use crate::rand::Rand;

/// What to do when a rounded draw lands one past the end of the pool.
///
/// The sampled index is `round(unit * pool_len)` with `unit` in [0, 1), so
/// a draw close enough to 1 rounds to `pool_len` itself, one past the last
/// valid offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Use the last pool character; output length always matches.
    #[default]
    Clamp,
    /// Drop the draw; the password comes up one character short.
    Skip,
}

/// Map a unit-interval draw to a pool index, or nothing for a dropped draw.
#[inline]
fn index_for(unit: f64, pool_len: usize, rounding: Rounding) -> Option<usize> {
    if pool_len == 0 {
        return None;
    }

    let idx = (unit * pool_len as f64).round() as usize;
    if idx < pool_len {
        Some(idx)
    } else {
        match rounding {
            Rounding::Clamp => Some(pool_len - 1),
            Rounding::Skip => None,
        }
    }
}

/// Generate a password of `length` characters drawn uniformly from `pool`.
///
/// An empty pool yields an empty string regardless of `length`; length 0
/// yields an empty string. Characters may repeat, and classes carry no
/// weight beyond their share of the pool. Never fails.
pub fn generate(pool: &str, length: usize, rounding: Rounding) -> String {
    // Pool is ASCII (class literals only), so byte indexing is char indexing.
    let bytes = pool.as_bytes();
    let mut out = String::with_capacity(length);

    for _ in 0..length {
        if let Some(i) = index_for(Rand::next_unit(), bytes.len(), rounding) {
            out.push(bytes[i] as char);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_zero_draw_to_first_slot() {
        assert_eq!(index_for(0.0, 10, Rounding::Clamp), Some(0));
        assert_eq!(index_for(0.0, 10, Rounding::Skip), Some(0));
    }

    #[test]
    fn index_rounds_to_nearest_slot() {
        // 0.5 * 68 = 34 exactly
        assert_eq!(index_for(0.5, 68, Rounding::Clamp), Some(34));
        // 0.24 * 10 = 2.4 rounds down
        assert_eq!(index_for(0.24, 10, Rounding::Skip), Some(2));
        // 0.26 * 10 = 2.6 rounds up
        assert_eq!(index_for(0.26, 10, Rounding::Skip), Some(3));
    }

    #[test]
    fn overflowing_draw_clamps_to_last_slot() {
        // 0.96 * 10 = 9.6 rounds to 10, one past the end
        assert_eq!(index_for(0.96, 10, Rounding::Clamp), Some(9));
    }

    #[test]
    fn overflowing_draw_is_dropped_under_skip() {
        assert_eq!(index_for(0.96, 10, Rounding::Skip), None);
    }

    #[test]
    fn empty_pool_never_yields_an_index() {
        assert_eq!(index_for(0.0, 0, Rounding::Clamp), None);
        assert_eq!(index_for(0.99, 0, Rounding::Skip), None);
    }

    #[test]
    fn clamp_output_is_exactly_requested_length() {
        let pool = "abc";
        for _ in 0..100 {
            let pw = generate(pool, 16, Rounding::Clamp);
            assert_eq!(pw.len(), 16);
            assert!(pw.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn skip_output_never_exceeds_requested_length() {
        let pool = "ab";
        for _ in 0..100 {
            let pw = generate(pool, 16, Rounding::Skip);
            assert!(pw.len() <= 16);
            assert!(pw.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn empty_pool_generates_empty_string() {
        assert_eq!(generate("", 16, Rounding::Clamp), "");
        assert_eq!(generate("", 4, Rounding::Skip), "");
    }

    #[test]
    fn zero_length_generates_empty_string() {
        assert_eq!(generate("abc", 0, Rounding::Clamp), "");
    }

    #[test]
    fn single_char_pool_repeats_that_char() {
        let pw = generate("x", 8, Rounding::Clamp);
        assert_eq!(pw, "xxxxxxxx");
    }
}
