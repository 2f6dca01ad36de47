//! The field table: one prime modulus per column.
//!
//! Each prime sits just below 2^32 so that reducing a uniformly distributed
//! `u32` modulo it loses a negligible amount of entropy.

/// Number of bytes in both the element hash and the setsum digest.
pub const SETSUM_BYTES: usize = 32;

/// Number of bytes per column. Columns are stored as `u32`.
pub const SETSUM_BYTES_PER_COLUMN: usize = 4;

/// Number of columns in the internal representation.
pub const SETSUM_COLUMNS: usize = SETSUM_BYTES / SETSUM_BYTES_PER_COLUMN;

const _: () = assert!(SETSUM_BYTES == SETSUM_BYTES_PER_COLUMN * SETSUM_COLUMNS);

/// The prime for each column. Column `i` lives in ℤ/pᵢℤ.
pub const SETSUM_PRIMES: [u32; SETSUM_COLUMNS] = [
    4294967291, 4294967279, 4294967231, 4294967197, 4294967189, 4294967161, 4294967143,
    4294967111,
];

/// An 8-column vector. After any accumulator operation, `state[i] < SETSUM_PRIMES[i]`.
pub type State = [u32; SETSUM_COLUMNS];
