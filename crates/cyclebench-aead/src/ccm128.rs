// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-128-CCM with an 8-byte tag and a 12-byte nonce (NIST SP 800-38C).
//!
//! CCM authenticates the message length inside its first block, so the
//! lengths of the next message must be declared before it is encrypted.

use aes::Aes128;
use ccm::Ccm;
use ccm::aead::consts::{U8, U12};
use ccm::aead::{AeadInPlace, KeyInit, Nonce};

use crate::error::AeadError;
use crate::traits::{AeadMode, AeadSession};

pub(crate) type Cipher = Ccm<Aes128, U8, U12>;

/// Lengths declared ahead of a CCM message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLengths {
    pub aad: usize,
    pub message: usize,
}

/// AES-128-CCM mode parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ccm128 {}

impl Ccm128 {
    pub const KEY_SIZE: usize = 16;
    pub const NONCE_SIZE: usize = 12;
    pub const TAG_SIZE: usize = 8;

    /// Size of the CCM length field: `15 - NONCE_SIZE` bytes.
    pub const LENGTH_FIELD_SIZE: usize = 15 - Self::NONCE_SIZE;

    /// Longest message the length field can encode.
    pub const MAX_MESSAGE_LEN: usize = (1 << (8 * Self::LENGTH_FIELD_SIZE)) - 1;

    pub fn new() -> Self {
        Self {}
    }
}

impl AeadMode for Ccm128 {
    type Session = CcmSession;

    fn name(&self) -> &'static str {
        "CCM"
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
        true
    }

    fn new_session(&self, key: &[u8], nonce: &[u8]) -> Result<CcmSession, AeadError> {
        let cipher = Cipher::new_from_slice(key).map_err(|_| AeadError::InvalidKeySize)?;

        if nonce.len() != Self::NONCE_SIZE {
            return Err(AeadError::InvalidNonceSize);
        }

        Ok(CcmSession {
            cipher,
            nonce: Nonce::<Cipher>::clone_from_slice(nonce),
            lengths: None,
        })
    }
}

/// Keyed CCM session. Each declaration covers exactly one message.
pub struct CcmSession {
    cipher: Cipher,
    nonce: Nonce<Cipher>,
    lengths: Option<DataLengths>,
}

impl CcmSession {
    /// Lengths declared for the next message, if any.
    pub fn declared_lengths(&self) -> Option<DataLengths> {
        self.lengths
    }
}

impl AeadSession for CcmSession {
    fn specify_data_lengths(
        &mut self,
        aad_len: usize,
        message_len: usize,
    ) -> Result<(), AeadError> {
        if message_len > Ccm128::MAX_MESSAGE_LEN {
            return Err(AeadError::MessageTooLong {
                len: message_len,
                max: Ccm128::MAX_MESSAGE_LEN,
            });
        }

        self.lengths = Some(DataLengths {
            aad: aad_len,
            message: message_len,
        });

        Ok(())
    }

    #[inline]
    fn encrypt_into(
        &mut self,
        aad: &[u8],
        plaintext: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), AeadError> {
        let lengths = self
            .lengths
            .take()
            .ok_or(AeadError::DataLengthsNotSpecified)?;

        if lengths.aad != aad.len() {
            return Err(AeadError::AadLengthMismatch {
                declared: lengths.aad,
                actual: aad.len(),
            });
        }

        if lengths.message != plaintext.len() {
            return Err(AeadError::DataLengthMismatch {
                declared: lengths.message,
                actual: plaintext.len(),
            });
        }

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
