//! Modular index arithmetic over the backing slots.
//!
//! Every function takes the slot count (`capacity + 1`) as its modulus.

/// Moves `addend` slots toward newer positions; with an `addend` of 1 this is
/// the `next` slot after `index`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, slots: usize) -> usize {
    debug_assert!(addend <= slots);
    (index + addend) % slots
}

/// Moves `subtrahend` slots toward older positions; with a `subtrahend` of 1
/// this is the `previous` slot before `index`.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, slots: usize) -> usize {
    debug_assert!(subtrahend <= slots);
    (index + slots - subtrahend) % slots
}

/// Number of steps needed to walk from `tail` to `head`.
#[inline]
pub fn count(tail: usize, head: usize, slots: usize) -> usize {
    debug_assert!(head < slots);
    debug_assert!(tail < slots);
    if head >= tail {
        head - tail
    } else {
        slots + head - tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap_at_slot_count() {
        // capacity 4, five slots
        assert_eq!(wrap_add(3, 1, 5), 4);
        assert_eq!(wrap_add(4, 1, 5), 0);
        assert_eq!(wrap_sub(0, 1, 5), 4);
        assert_eq!(wrap_sub(4, 1, 5), 3);
    }

    #[test]
    fn previous_undoes_next() {
        for slots in 1..8 {
            for pos in 0..slots {
                assert_eq!(wrap_sub(wrap_add(pos, 1, slots), 1, slots), pos);
            }
        }
    }

    #[test]
    fn count_stays_within_capacity() {
        assert_eq!(count(0, 0, 5), 0);
        assert_eq!(count(1, 4, 5), 3);
        assert_eq!(count(4, 3, 5), 4);
        assert_eq!(count(2, 0, 5), 3);
        for tail in 0..5 {
            for head in 0..5 {
                assert!(count(tail, head, 5) < 5);
            }
        }
    }

    #[test]
    fn single_slot_is_always_zero() {
        assert_eq!(wrap_add(0, 1, 1), 0);
        assert_eq!(wrap_sub(0, 1, 1), 0);
        assert_eq!(count(0, 0, 1), 0);
    }
}
