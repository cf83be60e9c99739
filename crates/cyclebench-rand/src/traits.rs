// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Where a scenario draws its key and nonce.
///
/// Taken as `&dyn EntropySource` by the runner so tests can swap in a source
/// that fails on a chosen draw. The corpus does not go through this trait.
pub trait EntropySource {
    /// Overwrites all of `dest` with fresh bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] when no bytes could be
    /// drawn. `dest` contents are then unspecified.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}
