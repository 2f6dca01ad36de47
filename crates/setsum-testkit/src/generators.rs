//! Proptest generators for property-based testing.

use proptest::prelude::*;

use setsum_core::{Setsum, State, SETSUM_BYTES, SETSUM_PRIMES};

/// Generate element bytes of at most `max_len` bytes.
pub fn element(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate up to `max_count` elements of at most 64 bytes each.
pub fn elements(max_count: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(element(64), 0..=max_count)
}

/// Generate a list of elements together with a permutation of it.
pub fn elements_and_shuffle(
    max_count: usize,
) -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<Vec<u8>>)> {
    elements(max_count).prop_flat_map(|items| {
        let shuffled = Just(items.clone()).prop_shuffle();
        (Just(items), shuffled)
    })
}

/// Generate an element split into up to four pieces.
pub fn pieces() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(element(16), 0..=4)
}

/// Generate a state with every column below its prime.
pub fn canonical_state() -> impl Strategy<Value = State> {
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

/// Generate a setsum with a canonical state.
pub fn any_setsum() -> impl Strategy<Value = Setsum> {
    canonical_state().prop_map(Setsum::from_state)
}

/// Generate any 32 bytes, including digests with out-of-range columns.
pub fn raw_digest() -> impl Strategy<Value = [u8; SETSUM_BYTES]> {
    any::<[u8; SETSUM_BYTES]>()
}

/// Generate a string that is not a valid hex digest.
pub fn invalid_hex_digest() -> impl Strategy<Value = String> {
    prop_oneof![
        // Wrong length, hex alphabet.
        "[0-9a-f]{0,63}",
        "[0-9a-f]{65,80}",
        // Right length, at least one non-hex character.
        "[0-9a-f]{0,63}[g-z]".prop_map(|s| format!("{:0<64}", s)),
    ]
}

/// A multiset split into two disjoint sides.
#[derive(Debug, Clone)]
pub struct Partition {
    pub elements: Vec<Vec<u8>>,
    pub left_mask: Vec<bool>,
}

impl Partition {
    /// Elements on the left side.
    pub fn left(&self) -> impl Iterator<Item = &Vec<u8>> {
        self.side(true)
    }

    /// Elements on the right side.
    pub fn right(&self) -> impl Iterator<Item = &Vec<u8>> {
        self.side(false)
    }

    fn side(&self, left: bool) -> impl Iterator<Item = &Vec<u8>> {
        self.elements
            .iter()
            .zip(self.left_mask.iter())
            .filter(move |(_, is_left)| **is_left == left)
            .map(|(item, _)| item)
    }
}

impl Arbitrary for Partition {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        elements(32)
            .prop_flat_map(|elements| {
                let len = elements.len();
                (Just(elements), prop::collection::vec(any::<bool>(), len))
            })
            .prop_map(|(elements, left_mask)| Partition {
                elements,
                left_mask,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_partition_sides_cover_elements(partition: Partition) {
            let left = partition.left().count();
            let right = partition.right().count();
            prop_assert_eq!(left + right, partition.elements.len());
        }

        #[test]
        fn test_shuffle_is_permutation((items, shuffled) in elements_and_shuffle(16)) {
            let mut a = items.clone();
            let mut b = shuffled.clone();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_invalid_hex_digest_rejected(s in invalid_hex_digest()) {
            prop_assert!(Setsum::from_hex_digest(&s).is_err());
        }

        #[test]
        fn test_canonical_state_in_range(state in canonical_state()) {
            for (column, prime) in state.iter().zip(SETSUM_PRIMES.iter()) {
                prop_assert!(column < prime);
            }
        }
    }
}
