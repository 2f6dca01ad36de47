//! # Setsum Testkit
//!
//! Testing utilities for Setsum.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected digests for cross-implementation checks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A [`Replica`] that keeps a plain multiset next to its setsum
//!
//! ## Golden Vectors
//!
//! ```rust
//! use setsum_testkit::vectors::{all_vectors, setsum_from_vector};
//!
//! for vector in all_vectors() {
//!     let setsum = setsum_from_vector(&vector);
//!     assert_eq!(setsum.hex_digest(), vector.expected_hex, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use setsum_testkit::generators::elements_and_shuffle;
//! use setsum_testkit::fixtures::setsum_of;
//!
//! proptest! {
//!     #[test]
//!     fn order_does_not_matter((items, shuffled) in elements_and_shuffle(32)) {
//!         prop_assert_eq!(setsum_of(&items), setsum_of(&shuffled));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{setsum_of, Replica};
pub use generators::Partition;
pub use vectors::{all_vectors, setsum_from_vector, verify_all_vectors, GoldenVector};
