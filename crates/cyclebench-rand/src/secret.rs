// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key and nonce material with zeroization on drop.

use core::fmt;

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Heap buffer for key or nonce bytes.
///
/// - Debug output is redacted
/// - Memory is zeroized on drop
pub struct SecretBytes {
    bytes: Vec<u8>,
}

impl SecretBytes {
    /// Wraps `bytes`, taking ownership.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Exposes the bytes.
    ///
    /// The caller must not copy them into storage that outlives `self`.
    #[inline(always)]
    pub fn expose(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED; {}])", self.bytes.len())
    }
}

/// Draws `len` bytes of key or nonce material from `entropy`.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if `entropy` fails.
pub fn generate_secret(
    entropy: &dyn EntropySource,
    len: usize,
) -> Result<SecretBytes, EntropyError> {
    let mut secret = SecretBytes::new(vec![0u8; len]);
    entropy.fill_bytes(&mut secret.bytes)?;

    Ok(secret)
}
