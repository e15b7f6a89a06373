//! Bounded random integers.

use rand::Rng;

/// Returns a random integer between `min` and `max`, both inclusive.
///
/// Returns `min` unchanged when the bounds are degenerate (`min >= max`).
pub fn random_range(min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rand::rng().random_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_within_inclusive_bounds() {
        for _ in 0..1000 {
            let n = random_range(3, 7);
            assert!((3..=7).contains(&n));
        }
    }

    #[test]
    fn test_degenerate_bounds_return_min() {
        assert_eq!(random_range(5, 5), 5);
        assert_eq!(random_range(9, 2), 9);
    }
}
