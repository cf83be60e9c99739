// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD trait definitions.

use crate::AeadError;

/// One keyed, nonce-seeded encryption context.
///
/// A session is built outside the timed region; only
/// [`encrypt_into`](Self::encrypt_into) belongs inside it.
pub trait AeadSession {
    /// Declares the lengths of the next message ahead of encryption.
    ///
    /// Modes that need no declaration accept and ignore it.
    fn specify_data_lengths(&mut self, aad_len: usize, message_len: usize)
    -> Result<(), AeadError>;

    /// Encrypts `plaintext` in one complete pass.
    ///
    /// `out` is cleared and then holds `ciphertext || tag`. With enough spare
    /// capacity in `out` no allocation happens.
    fn encrypt_into(
        &mut self,
        aad: &[u8],
        plaintext: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), AeadError>;
}

/// An AEAD mode with fixed parameters, able to open sessions.
pub trait AeadMode {
    type Session: AeadSession;

    /// Short label used in banners and logs (`"CCM"`, `"GCM"`).
    fn name(&self) -> &'static str;
    fn key_size(&self) -> usize;
    fn nonce_size(&self) -> usize;
    fn tag_size(&self) -> usize;

    /// Whether [`AeadSession::specify_data_lengths`] must precede encryption.
    fn requires_data_lengths(&self) -> bool;

    /// Runs the key schedule and binds `nonce`.
    ///
    /// # Errors
    ///
    /// [`AeadError::InvalidKeySize`] or [`AeadError::InvalidNonceSize`] when the
    /// material does not fit the mode.
    fn new_session(&self, key: &[u8], nonce: &[u8]) -> Result<Self::Session, AeadError>;
}
