//! # Setsum Core
//!
//! Pure primitives for Setsum: an order-independent, incrementally updatable
//! checksum over a multiset of byte strings.
//!
//! This crate contains no I/O and no logging. It is pure arithmetic over an
//! 8-column vector, one column per prime field.
//!
//! ## Key Types
//!
//! - [`Setsum`] - The accumulator: insert, remove, merge, subtract
//! - [`State`] - The raw 8-column vector behind a checksum
//! - [`DecodeError`] - Why a digest could not be parsed
//!
//! ## Layers
//!
//! - [`primes`] - The fixed prime per column
//! - [`mapper`] - Element bytes to a per-column residue vector (SHA3-256)
//! - [`arith`] - Columnwise modular addition and subtraction
//! - [`setsum`] - The accumulator and its 32-byte digest encoding
//!
//! ## Example
//!
//! ```rust
//! use setsum_core::Setsum;
//!
//! let mut a = Setsum::default();
//! a.insert(b"apple");
//! a.insert(b"banana");
//!
//! let mut b = Setsum::default();
//! b.insert(b"banana");
//! b.insert(b"apple");
//!
//! assert_eq!(a, b);
//! assert_eq!(Setsum::from_hex_digest(&a.hex_digest()).unwrap(), a);
//! ```

pub mod arith;
pub mod error;
pub mod mapper;
pub mod primes;
pub mod setsum;

pub use arith::{add_state, sub_state};
pub use error::DecodeError;
pub use mapper::{hash_to_state, item_to_state};
pub use primes::{State, SETSUM_BYTES, SETSUM_BYTES_PER_COLUMN, SETSUM_COLUMNS, SETSUM_PRIMES};
pub use setsum::Setsum;
