// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock AEAD mode for testing.

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::AeadError;
use crate::traits::{AeadMode, AeadSession};

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadModeMockBehaviour {
    /// No failure.
    None,
    /// Fail session construction at call index (0-indexed).
    FailNewSessionAt(usize),
    /// Fail encrypt at call index (0-indexed), counted across sessions.
    FailEncryptAt(usize),
}

/// Mock mode backed by a real one.
///
/// Records the key and nonce handed to every session and counts calls.
pub struct AeadModeMock<M: AeadMode> {
    inner: M,
    behaviour: AeadModeMockBehaviour,
    new_session_count: Cell<usize>,
    encrypt_count: Rc<Cell<usize>>,
    specify_count: Rc<Cell<usize>>,
    materials: RefCell<Vec<(Vec<u8>, Vec<u8>)>>,
}

impl<M: AeadMode> AeadModeMock<M> {
    pub fn new(inner: M, behaviour: AeadModeMockBehaviour) -> Self {
        Self {
            inner,
            behaviour,
            new_session_count: Cell::new(0),
            encrypt_count: Rc::new(Cell::new(0)),
            specify_count: Rc::new(Cell::new(0)),
            materials: RefCell::new(Vec::new()),
        }
    }

    pub fn new_session_count(&self) -> usize {
        self.new_session_count.get()
    }

    pub fn encrypt_count(&self) -> usize {
        self.encrypt_count.get()
    }

    pub fn specify_count(&self) -> usize {
        self.specify_count.get()
    }

    /// `(key, nonce)` pairs seen by `new_session`, in call order.
    pub fn materials(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.materials.borrow().clone()
    }
}

impl<M: AeadMode> AeadMode for AeadModeMock<M> {
    type Session = AeadSessionMock<M::Session>;

    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn key_size(&self) -> usize {
        self.inner.key_size()
    }

    fn nonce_size(&self) -> usize {
        self.inner.nonce_size()
    }

    fn tag_size(&self) -> usize {
        self.inner.tag_size()
    }

    fn requires_data_lengths(&self) -> bool {
        self.inner.requires_data_lengths()
    }

    fn new_session(&self, key: &[u8], nonce: &[u8]) -> Result<Self::Session, AeadError> {
        let current = self.new_session_count.get();
        self.new_session_count.set(current + 1);

        self.materials
            .borrow_mut()
            .push((key.to_vec(), nonce.to_vec()));

        if let AeadModeMockBehaviour::FailNewSessionAt(idx) = self.behaviour {
            if current == idx {
                return Err(AeadError::InvalidKeySize);
            }
        }

        Ok(AeadSessionMock {
            inner: self.inner.new_session(key, nonce)?,
            behaviour: self.behaviour,
            encrypt_count: Rc::clone(&self.encrypt_count),
            specify_count: Rc::clone(&self.specify_count),
        })
    }
}

/// Session handed out by [`AeadModeMock`].
pub struct AeadSessionMock<S: AeadSession> {
    inner: S,
    behaviour: AeadModeMockBehaviour,
    encrypt_count: Rc<Cell<usize>>,
    specify_count: Rc<Cell<usize>>,
}

impl<S: AeadSession> AeadSession for AeadSessionMock<S> {
    fn specify_data_lengths(
        &mut self,
        aad_len: usize,
        message_len: usize,
    ) -> Result<(), AeadError> {
        self.specify_count.set(self.specify_count.get() + 1);
        self.inner.specify_data_lengths(aad_len, message_len)
    }

    fn encrypt_into(
        &mut self,
        aad: &[u8],
        plaintext: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), AeadError> {
        let current = self.encrypt_count.get();
        self.encrypt_count.set(current + 1);

        if let AeadModeMockBehaviour::FailEncryptAt(idx) = self.behaviour {
            if current == idx {
                return Err(AeadError::EncryptionFailed);
            }
        }

        self.inner.encrypt_into(aad, plaintext, out)
    }
}
