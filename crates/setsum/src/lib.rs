//! # Setsum
//!
//! An order-independent, incrementally updatable checksum over a multiset
//! of byte strings.
//!
//! ## Overview
//!
//! Two collections holding the same elements produce the same 32-byte digest,
//! no matter the insertion order or how the collection was split and
//! recombined. Four operations are supported:
//!
//! - **Insert**: add an element in place
//! - **Remove**: take an element out in place
//! - **Merge**: the checksum of the union of two multisets
//! - **Subtract**: the checksum of one multiset minus another
//!
//! This is a bookkeeping tool for checking that replicas hold the same data.
//! It is not collision resistant against an adversary choosing elements.
//!
//! ## Usage
//!
//! ```rust
//! use setsum::Setsum;
//!
//! let mut replica_a = Setsum::default();
//! replica_a.insert(b"row-1");
//! replica_a.insert(b"row-2");
//!
//! let mut replica_b = Setsum::default();
//! replica_b.insert(b"row-2");
//!
//! let missing = replica_a.subtract(&replica_b);
//! let mut expected = Setsum::default();
//! expected.insert(b"row-1");
//! assert_eq!(missing, expected);
//! ```
//!
//! ## Shell
//!
//! The [`shell`] module drives a [`Setsum`] from a line-oriented command
//! stream (`insert <value>`, `remove <value>`, `merge <hex>`,
//! `subtract <hex>`, `digest`, `quit`). The `setsum` binary runs it over
//! stdin and stdout.
//!
//! ## Re-exports
//!
//! - `setsum::core` - Primitives (primes, mapper, arithmetic, accumulator)

pub mod command;
pub mod config;
pub mod error;
pub mod shell;

// Re-export component crate
pub use setsum_core as core;

pub use command::Command;
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use shell::{Flow, Shell, ShellReport};

// Re-export commonly used core types
pub use setsum_core::{DecodeError, Setsum, State, SETSUM_BYTES, SETSUM_COLUMNS, SETSUM_PRIMES};
