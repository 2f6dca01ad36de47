//! Maps an element to its per-column residue vector.
//!
//! An element is hashed with SHA3-256 and the 32-byte hash is split into
//! eight little-endian `u32` columns, each reduced modulo its prime.
//!
//! A vectored element is hashed as the plain concatenation of its pieces:
//! `["ab", "c"]` and `["a", "bc"]` map to the same residues. Callers that
//! need piece boundaries to matter must add their own delimiters.

use sha3::{Digest as _, Sha3_256};

use crate::primes::{State, SETSUM_BYTES, SETSUM_BYTES_PER_COLUMN, SETSUM_COLUMNS, SETSUM_PRIMES};

/// Hash the pieces of one element, in order, and fold the hash into a [`State`].
pub fn item_to_state<I>(pieces: I) -> State
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut hasher = Sha3_256::new();
    for piece in pieces {
        hasher.update(piece.as_ref());
    }
    let hash: [u8; SETSUM_BYTES] = hasher.finalize().into();
    hash_to_state(&hash)
}

/// Fold a 32-byte hash into one canonical residue per column.
pub fn hash_to_state(hash: &[u8; SETSUM_BYTES]) -> State {
    let mut ret = [0u32; SETSUM_COLUMNS];
    for (col, chunk) in hash.chunks_exact(SETSUM_BYTES_PER_COLUMN).enumerate() {
        let val = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        ret[col] = val % SETSUM_PRIMES[col];
    }
    ret
}
