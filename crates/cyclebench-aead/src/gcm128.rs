// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128-GCM with a 12-byte tag and a 16-byte IV (NIST SP 800-38D).
//!
//! IVs other than 96 bits are run through GHASH to form the initial counter
//! block, which adds a little setup work to every session.

use aes::Aes128;
use aes_gcm::AesGcm;
use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::{AeadInPlace, KeyInit, Nonce};

use crate::error::AeadError;
use crate::traits::{AeadMode, AeadSession};

pub(crate) type Cipher = AesGcm<Aes128, U16, U12>;

/// AES-128-GCM mode parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gcm128 {}

impl Gcm128 {
    pub const KEY_SIZE: usize = 16;
    /// One AES block.
    pub const NONCE_SIZE: usize = 16;
    pub const TAG_SIZE: usize = 12;

    pub fn new() -> Self {
        Self {}
    }
}

impl AeadMode for Gcm128 {
    type Session = GcmSession;

    fn name(&self) -> &'static str {
        "GCM"
    }

    #[inline]
    fn key_size(&self) -> usize {
        Self::KEY_SIZE
    }

    #[inline]
    fn nonce_size(&self) -> usize {
        Self::NONCE_SIZE
    }

    #[inline]
    fn tag_size(&self) -> usize {
        Self::TAG_SIZE
    }

    fn requires_data_lengths(&self) -> bool {
        false
    }

    fn new_session(&self, key: &[u8], nonce: &[u8]) -> Result<GcmSession, AeadError> {
        let cipher = Cipher::new_from_slice(key).map_err(|_| AeadError::InvalidKeySize)?;

        if nonce.len() != Self::NONCE_SIZE {
            return Err(AeadError::InvalidNonceSize);
        }

        Ok(GcmSession {
            cipher,
            nonce: Nonce::<Cipher>::clone_from_slice(nonce),
        })
    }
}

/// Keyed GCM session.
pub struct GcmSession {
    cipher: Cipher,
    nonce: Nonce<Cipher>,
}

impl AeadSession for GcmSession {
    fn specify_data_lengths(
        &mut self,
        _aad_len: usize,
        _message_len: usize,
    ) -> Result<(), AeadError> {
        Ok(())
    }

    #[inline]
    fn encrypt_into(
        &mut self,
        aad: &[u8],
        plaintext: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), AeadError> {
        out.clear();
        out.extend_from_slice(plaintext);

        let tag = self
            .cipher
            .encrypt_in_place_detached(&self.nonce, aad, out.as_mut_slice())
            .map_err(|_| AeadError::EncryptionFailed)?;
        out.extend_from_slice(&tag);

        Ok(())
    }
}
