// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cyclebench_rand
//!
//! Randomness for the cyclebench harness. Two distinct sources live here:
//!
//! - [`CorpusGenerator`]: a seedable general-purpose generator that produces
//!   the plaintext corpus. Its seed is built from several independent
//!   hardware/OS draws ([`u64_seed`]).
//! - [`SystemEntropySource`]: the OS CSPRNG (via `getrandom`), used for key
//!   and nonce material.
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use cyclebench_rand::{CorpusGenerator, SystemEntropySource, generate_secret};
//!
//! let corpus = cyclebench_rand::generate(4096).expect("Failed to generate corpus");
//! assert_eq!(corpus.len(), 4096);
//!
//! let entropy = SystemEntropySource {};
//! let key = generate_secret(&entropy, 16).expect("Failed to generate key");
//! assert_eq!(key.len(), 16);
//!
//! let mut generator = CorpusGenerator::from_seed([7u8; 32]);
//! assert_eq!(generator.generate(64).len(), 64);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod corpus;
mod error;
mod secret;
mod support;
mod system;
mod traits;

pub mod u64_seed;

pub use corpus::{CorpusGenerator, SEED_DRAWS, generate};
pub use error::EntropyError;
pub use secret::{SecretBytes, generate_secret};
pub use system::{SystemEntropySource, check_available};
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
