// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking AEAD modes.

mod aead_mock;

pub use aead_mock::{AeadModeMock, AeadModeMockBehaviour, AeadSessionMock};
