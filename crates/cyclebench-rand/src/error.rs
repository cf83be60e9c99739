// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Failure to draw corpus seeds, keys or nonces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// No hardware instruction or OS call produced the requested bytes.
    #[error("no entropy source produced the requested bytes")]
    EntropyNotAvailable,
}
