//! The Setsum accumulator.
//!
//! A [`Setsum`] represents a multiset of byte strings by the sum of their
//! per-column residues. Two multisets with the same elements produce the
//! same digest regardless of insertion order or how they were partitioned.
//!
//! Insert and remove mutate in place for streaming ingest. Merge and
//! subtract return a fresh value for reconciling replicas.
//!
//! This is a bookkeeping checksum, not a commitment: it cannot tell a real
//! removal from an unrelated element that happens to cancel.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::arith::{add_state, sub_state};
use crate::error::DecodeError;
use crate::mapper::item_to_state;
use crate::primes::{State, SETSUM_BYTES, SETSUM_BYTES_PER_COLUMN, SETSUM_COLUMNS};

/// An order-independent checksum over a multiset of byte strings.
///
/// The default value is the checksum of the empty multiset and the identity
/// for [`merge`](Setsum::merge) and [`subtract`](Setsum::subtract).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Setsum {
    state: State,
}

impl Setsum {
    /// The checksum of the empty multiset.
    pub const EMPTY: Self = Self {
        state: [0u32; SETSUM_COLUMNS],
    };

    /// Create an empty checksum.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Wrap a raw state. No range check is applied to the columns.
    pub const fn from_state(state: State) -> Self {
        Self { state }
    }

    /// Get the raw column state.
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// True if this is the checksum of the empty multiset.
    pub fn is_empty(&self) -> bool {
        self.state == Self::EMPTY.state
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-place updates
    // ─────────────────────────────────────────────────────────────────────────

    /// Add one element.
    pub fn insert(&mut self, item: &[u8]) {
        self.insert_vector([item]);
    }

    /// Add one element given as pieces, hashed as their concatenation.
    pub fn insert_vector<I>(&mut self, item: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let item_state = item_to_state(item);
        self.state = add_state(&self.state, &item_state);
    }

    /// Remove one element.
    ///
    /// Nothing checks that the element was inserted; removing an absent
    /// element simply moves the sum.
    pub fn remove(&mut self, item: &[u8]) {
        self.remove_vector([item]);
    }

    /// Remove one element given as pieces, hashed as their concatenation.
    pub fn remove_vector<I>(&mut self, item: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let item_state = item_to_state(item);
        self.state = sub_state(&self.state, &item_state);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Combinators
    // ─────────────────────────────────────────────────────────────────────────

    /// The checksum of the multiset union of `self` and `other`.
    #[must_use]
    pub fn merge(&self, other: &Setsum) -> Setsum {
        Setsum {
            state: add_state(&self.state, &other.state),
        }
    }

    /// The checksum of `self` with the elements of `other` taken out.
    #[must_use]
    pub fn subtract(&self, other: &Setsum) -> Setsum {
        Setsum {
            state: sub_state(&self.state, &other.state),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Encoding
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode as 32 bytes: each column little-endian, in column order.
    pub fn digest(&self) -> [u8; SETSUM_BYTES] {
        let mut out = [0u8; SETSUM_BYTES];
        for (chunk, column) in out
            .chunks_exact_mut(SETSUM_BYTES_PER_COLUMN)
            .zip(self.state.iter())
        {
            chunk.copy_from_slice(&column.to_le_bytes());
        }
        out
    }

    /// Lowercase hex of [`digest`](Setsum::digest), 64 characters.
    pub fn hex_digest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Decode a 32-byte digest.
    ///
    /// Columns are taken as-is, even when they are not below their prime.
    pub fn from_digest(digest: &[u8]) -> Result<Self, DecodeError> {
        let bytes = <&[u8; SETSUM_BYTES]>::try_from(digest).map_err(|_| {
            DecodeError::InvalidLength {
                expected: SETSUM_BYTES,
                actual: digest.len(),
            }
        })?;
        Ok(Self::from(*bytes))
    }

    /// Decode a 64-character hex digest.
    pub fn from_hex_digest(hex_digest: &str) -> Result<Self, DecodeError> {
        if hex_digest.len() != SETSUM_BYTES * 2 {
            return Err(DecodeError::InvalidHexLength {
                expected: SETSUM_BYTES * 2,
                actual: hex_digest.len(),
            });
        }
        let mut bytes = [0u8; SETSUM_BYTES];
        hex::decode_to_slice(hex_digest, &mut bytes)?;
        Ok(Self::from(bytes))
    }
}

impl fmt::Debug for Setsum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Setsum({})", &self.hex_digest()[..16])
    }
}

impl fmt::Display for Setsum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_digest())
    }
}

impl FromStr for Setsum {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_digest(s)
    }
}

impl TryFrom<&[u8]> for Setsum {
    type Error = DecodeError;

    fn try_from(digest: &[u8]) -> Result<Self, Self::Error> {
        Self::from_digest(digest)
    }
}

impl From<[u8; SETSUM_BYTES]> for Setsum {
    fn from(digest: [u8; SETSUM_BYTES]) -> Self {
        let mut state = [0u32; SETSUM_COLUMNS];
        for (column, chunk) in state
            .iter_mut()
            .zip(digest.chunks_exact(SETSUM_BYTES_PER_COLUMN))
        {
            *column = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { state }
    }
}

impl Add for Setsum {
    type Output = Setsum;

    fn add(self, rhs: Setsum) -> Setsum {
        self.merge(&rhs)
    }
}

impl AddAssign for Setsum {
    fn add_assign(&mut self, rhs: Setsum) {
        *self = self.merge(&rhs);
    }
}

impl Sub for Setsum {
    type Output = Setsum;

    fn sub(self, rhs: Setsum) -> Setsum {
        self.subtract(&rhs)
    }
}

impl SubAssign for Setsum {
    fn sub_assign(&mut self, rhs: Setsum) {
        *self = self.subtract(&rhs);
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for Setsum {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut setsum = Setsum::default();
        setsum.extend(iter);
        setsum
    }
}

impl<T: AsRef<[u8]>> Extend<T> for Setsum {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item.as_ref());
        }
    }
}

impl Serialize for Setsum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex_digest())
    }
}

impl<'de> Deserialize<'de> for Setsum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_digest = String::deserialize(deserializer)?;
        Self::from_hex_digest(&hex_digest).map_err(serde::de::Error::custom)
    }
}
