//! Columnwise modular arithmetic over [`State`] vectors.
//!
//! Addition is the group operation the whole checksum rests on: it is
//! associative and commutative, and the all-zero vector is its identity.
//!
//! Inversion maps a zero column to the prime itself rather than to zero.
//! That representative is only valid as an operand to [`add_state`], whose
//! conditional subtraction folds it back to a canonical value. For that
//! reason inversion is not exported; callers subtract with [`sub_state`].

use crate::primes::{State, SETSUM_COLUMNS, SETSUM_PRIMES};

/// Add two states columnwise, reducing each column modulo its prime.
///
/// Both operands must be canonical (`x[i] < SETSUM_PRIMES[i]`) or be the
/// output of [`invert_state`]; the sum then fits in one conditional subtraction.
pub fn add_state(lhs: &State, rhs: &State) -> State {
    let mut ret = [0u32; SETSUM_COLUMNS];
    for i in 0..SETSUM_COLUMNS {
        let p = SETSUM_PRIMES[i] as u64;
        let mut sum = lhs[i] as u64 + rhs[i] as u64;
        if sum >= p {
            sum -= p;
        }
        ret[i] = sum as u32;
    }
    ret
}

/// Subtract `rhs` from `lhs` columnwise: `lhs + invert(rhs)`.
pub fn sub_state(lhs: &State, rhs: &State) -> State {
    add_state(lhs, &invert_state(rhs))
}

/// Additive inverse of each column: `p - x`.
///
/// A zero column yields `p`, not `0`. Must be consumed by [`add_state`].
pub(crate) fn invert_state(state: &State) -> State {
    let mut ret = [0u32; SETSUM_COLUMNS];
    for i in 0..SETSUM_COLUMNS {
        ret[i] = SETSUM_PRIMES[i].wrapping_sub(state[i]);
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn canonical_state() -> impl Strategy<Value = State> {
        (
            0..SETSUM_PRIMES[0],
            0..SETSUM_PRIMES[1],
            0..SETSUM_PRIMES[2],
            0..SETSUM_PRIMES[3],
            0..SETSUM_PRIMES[4],
            0..SETSUM_PRIMES[5],
            0..SETSUM_PRIMES[6],
            0..SETSUM_PRIMES[7],
        )
            .prop_map(|(a, b, c, d, e, f, g, h)| [a, b, c, d, e, f, g, h])
    }

    #[test]
    fn test_add_state() {
        let lhs = [1, 2, 3, 4, 5, 6, 7, 8];
        let rhs = [2, 4, 6, 8, 10, 12, 14, 16];
        assert_eq!(add_state(&lhs, &rhs), [3, 6, 9, 12, 15, 18, 21, 24]);
    }

    #[test]
    fn test_add_state_exactly_primes() {
        let lhs = [
            3146800025, 1792545563, 417324692, 3444237760, 2812742746, 1608771649, 1661742866,
            3220115897,
        ];
        let rhs = [
            1148167266, 2502421716, 3877642539, 850729437, 1482224443, 2686195512, 2633224277,
            1074851214,
        ];
        assert_eq!(add_state(&lhs, &rhs), [0u32; SETSUM_COLUMNS]);
    }

    #[test]
    fn test_add_state_max_canonical() {
        // (p - 1) + (p - 1) = p - 2 (mod p), and must not overflow u32.
        let max = SETSUM_PRIMES.map(|p| p - 1);
        assert_eq!(add_state(&max, &max), SETSUM_PRIMES.map(|p| p - 2));
    }

    #[test]
    fn test_invert_state_descending() {
        let state_in = [
            0xffffeeee, 0xddddcccc, 0xbbbbaaaa, 0x99998888, 0x77776666, 0x66665555, 0x44443333,
            0x22221111,
        ];
        let expected = [
            4365, 572666659, 1145328917, 1717991189, 2290653487, 2576984612, 3149646900,
            3722309174,
        ];
        assert_eq!(invert_state(&state_in), expected);
    }

    #[test]
    fn test_invert_zero_is_prime() {
        // Non-canonical identity; only meaningful once added.
        assert_eq!(invert_state(&[0; SETSUM_COLUMNS]), SETSUM_PRIMES);
    }

    #[test]
    fn test_add_inverted_zero_is_identity() {
        let x = [7, 0, 11, 0, 13, 0, 17, SETSUM_PRIMES[7] - 1];
        let zero_inv = invert_state(&[0; SETSUM_COLUMNS]);
        assert_eq!(add_state(&x, &zero_inv), x);
    }

    #[test]
    fn test_sub_state_zero() {
        let x = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(sub_state(&x, &[0; SETSUM_COLUMNS]), x);
        assert_eq!(sub_state(&x, &x), [0; SETSUM_COLUMNS]);
    }

    #[test]
    fn test_sub_state_wraps() {
        let one = [1; SETSUM_COLUMNS];
        let zero = [0; SETSUM_COLUMNS];
        assert_eq!(sub_state(&zero, &one), SETSUM_PRIMES.map(|p| p - 1));
    }

    proptest! {
        #[test]
        fn test_add_commutative(a in canonical_state(), b in canonical_state()) {
            prop_assert_eq!(add_state(&a, &b), add_state(&b, &a));
        }

        #[test]
        fn test_add_associative(
            a in canonical_state(),
            b in canonical_state(),
            c in canonical_state(),
        ) {
            prop_assert_eq!(
                add_state(&add_state(&a, &b), &c),
                add_state(&a, &add_state(&b, &c))
            );
        }

        #[test]
        fn test_add_stays_canonical(a in canonical_state(), b in canonical_state()) {
            let sum = add_state(&a, &b);
            for i in 0..SETSUM_COLUMNS {
                prop_assert!(sum[i] < SETSUM_PRIMES[i]);
            }
        }

        #[test]
        fn test_sub_undoes_add(a in canonical_state(), b in canonical_state()) {
            prop_assert_eq!(sub_state(&add_state(&a, &b), &b), a);
        }

        #[test]
        fn test_sub_stays_canonical(a in canonical_state(), b in canonical_state()) {
            let diff = sub_state(&a, &b);
            for i in 0..SETSUM_COLUMNS {
                prop_assert!(diff[i] < SETSUM_PRIMES[i]);
            }
        }
    }
}
