// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Common AEAD error types.

/// Errors raised while configuring a session or encrypting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AeadError {
    #[error("invalid key size")]
    InvalidKeySize,

    #[error("invalid nonce size")]
    InvalidNonceSize,

    #[error("data lengths must be specified before encryption")]
    DataLengthsNotSpecified,

    #[error("declared message length {declared} does not match actual length {actual}")]
    DataLengthMismatch { declared: usize, actual: usize },

    #[error("declared aad length {declared} does not match actual length {actual}")]
    AadLengthMismatch { declared: usize, actual: usize },

    #[error("message length {len} exceeds mode maximum {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("encryption failed")]
    EncryptionFailed,
}
