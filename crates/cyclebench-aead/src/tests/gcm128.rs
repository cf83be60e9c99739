// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes_gcm::aead::{AeadInPlace, KeyInit, Nonce, Tag};
use proptest::prelude::*;

use crate::error::AeadError;
use crate::gcm128::{Cipher, Gcm128, GcmSession};
use crate::traits::{AeadMode, AeadSession};

const KEY: [u8; 16] = [0x33; 16];
const NONCE: [u8; 16] = [0x44; 16];

fn session() -> GcmSession {
    Gcm128::new()
        .new_session(&KEY, &NONCE)
        .expect("Failed to new_session(..)")
}

// =============================================================================
// parameters
// =============================================================================

#[test]
fn test_parameters() {
    let mode = Gcm128::new();

    assert_eq!(mode.name(), "GCM");
    assert_eq!(mode.key_size(), 16);
    assert_eq!(mode.nonce_size(), 16);
    assert_eq!(mode.tag_size(), 12);
    assert!(!mode.requires_data_lengths());
}

// =============================================================================
// new_session()
// =============================================================================

#[test]
fn test_new_session_rejects_key_size() {
    let result = Gcm128::new().new_session(&[0u8; 32], &NONCE);
    assert!(matches!(result, Err(AeadError::InvalidKeySize)));
}

#[test]
fn test_new_session_rejects_nonce_size() {
    let result = Gcm128::new().new_session(&KEY, &[0u8; 12]);
    assert!(matches!(result, Err(AeadError::InvalidNonceSize)));
}

// =============================================================================
// specify_data_lengths()
// =============================================================================

#[test]
fn test_specify_data_lengths_is_accepted() {
    let mut session = session();

    assert!(session.specify_data_lengths(0, 4096).is_ok());
}

// =============================================================================
// encrypt_into()
// =============================================================================

#[test]
fn test_encrypt_into_without_declaration() {
    let mut session = session();
    let mut out = Vec::new();

    session
        .encrypt_into(&[], &[9u8; 64], &mut out)
        .expect("Failed to encrypt_into(..)");

    assert_eq!(out.len(), 64 + Gcm128::TAG_SIZE);
}

#[test]
fn test_encrypt_into_output_decrypts() {
    let mut session = session();
    let plaintext: Vec<u8> = (0..=255u8).rev().collect();
    let mut out = Vec::new();

    session
        .encrypt_into(&[], &plaintext, &mut out)
        .expect("Failed to encrypt_into(..)");

    let (ciphertext, tag) = out.split_at(plaintext.len());
    assert_ne!(ciphertext, plaintext.as_slice());

    let cipher = Cipher::new_from_slice(&KEY).expect("Failed to new_from_slice(..)");
    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::<Cipher>::from_slice(&NONCE),
            &[],
            &mut buffer,
            Tag::<Cipher>::from_slice(tag),
        )
        .expect("Failed to decrypt_in_place_detached(..)");

    assert_eq!(buffer, plaintext);
}

#[test]
fn test_same_key_and_nonce_same_output() {
    let plaintext = [1u8; 64];
    let mut first = Vec::new();
    let mut second = Vec::new();

    session()
        .encrypt_into(&[], &plaintext, &mut first)
        .expect("Failed to encrypt_into(..)");
    session()
        .encrypt_into(&[], &plaintext, &mut second)
        .expect("Failed to encrypt_into(..)");

    assert_eq!(first, second);
}

#[test]
fn test_encrypt_into_overwrites_accumulator() {
    let mut session = session();
    let mut out = vec![0xFFu8; 1000];

    session
        .encrypt_into(&[], &[2u8; 64], &mut out)
        .expect("Failed to encrypt_into(..)");

    assert_eq!(out.len(), 64 + Gcm128::TAG_SIZE);
}

proptest! {
    #[test]
    fn ciphertext_is_plaintext_plus_tag(len in 0..2048usize) {
        let mut session = session();
        let plaintext = vec![0x5Au8; len];
        let mut out = Vec::new();

        session.encrypt_into(&[], &plaintext, &mut out).expect("Failed to encrypt_into(..)");

        prop_assert_eq!(out.len(), len + Gcm128::TAG_SIZE);
    }
}
