// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cyclebench_aead
//!
//! Session adapters over the RustCrypto AES-CCM and AES-GCM implementations,
//! shaped for a timing loop: setup (key schedule, nonce, declared lengths)
//! happens when a session is built, and [`AeadSession::encrypt_into`] does
//! nothing but the encryption pass.
//!
//! | mode      | key | nonce | tag | declared lengths |
//! |-----------|-----|-------|-----|------------------|
//! | [`Ccm128`] | 16  | 12    | 8   | required         |
//! | [`Gcm128`] | 16  | 16    | 12  | no               |
//!
//! ## Example
//!
//! ```rust
//! use cyclebench_aead::{AeadMode, AeadSession, Ccm128};
//!
//! let mode = Ccm128::new();
//! let key = [0u8; Ccm128::KEY_SIZE];
//! let nonce = [0u8; Ccm128::NONCE_SIZE];
//! let plaintext = [0x5Au8; 64];
//! let mut out = Vec::with_capacity(plaintext.len() + mode.tag_size());
//!
//! let mut session = mode.new_session(&key, &nonce).expect("Failed to new_session(..)");
//! session
//!     .specify_data_lengths(0, plaintext.len())
//!     .expect("Failed to specify_data_lengths(..)");
//! session
//!     .encrypt_into(&[], &plaintext, &mut out)
//!     .expect("Failed to encrypt_into(..)");
//!
//! assert_eq!(out.len(), plaintext.len() + Ccm128::TAG_SIZE);
//! ```

#[cfg(test)]
mod tests;

mod ccm128;
mod error;
mod gcm128;
mod support;
mod traits;

pub use ccm128::{Ccm128, CcmSession, DataLengths};
pub use error::AeadError;
pub use gcm128::{Gcm128, GcmSession};
pub use traits::{AeadMode, AeadSession};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
