//! Stepping through the collection.
//!
//! Navigation walks a clamped 1-based index: `1 ⇄ 2 ⇄ 3`. Both ends block
//! rather than wrap, so every transition is a total function.

use tracing::debug;

use super::catalog::CATALOG_SIZE;

/// Index of the first artwork.
pub const FIRST: u32 = 1;

/// Index of the last artwork.
pub const LAST: u32 = CATALOG_SIZE as u32;

/// Step back one artwork. No-op at the lower bound.
pub fn go_previous(current: u32) -> u32 {
    let next = if current > FIRST { current - 1 } else { current };
    debug!(from = current, to = next, "previous");
    next
}

/// Step forward one artwork. No-op at the upper bound.
pub fn go_next(current: u32) -> u32 {
    let next = if current < LAST { current + 1 } else { current };
    debug!(from = current, to = next, "next");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_steps_down() {
        assert_eq!(go_previous(3), 2);
        assert_eq!(go_previous(2), 1);
    }

    #[test]
    fn test_next_steps_up() {
        assert_eq!(go_next(1), 2);
        assert_eq!(go_next(2), 3);
    }

    #[test]
    fn test_bounds_reflect() {
        assert_eq!(go_previous(FIRST), FIRST);
        assert_eq!(go_next(LAST), LAST);
    }

    #[test]
    fn test_clamp_over_full_range() {
        for i in FIRST..=LAST {
            assert_eq!(go_previous(i), (i - 1).max(FIRST));
            assert_eq!(go_next(i), (i + 1).min(LAST));
        }
    }
}
