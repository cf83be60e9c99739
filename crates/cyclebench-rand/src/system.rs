// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::{EntropySource, error::EntropyError};

/// Key and nonce material source for every scenario.
///
/// The corpus generator is fast but only statistically random; keys and
/// nonces must not share its state, so they are drawn here from the kernel
/// CSPRNG instead. Each call is independent, so two scenarios never see the
/// same key unless the kernel repeats itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        fill_fn(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}

/// Pre-flight check run before the first scenario: one corpus seed draw and
/// one 8-byte draw from `entropy`. Nothing is written to the report if this
/// fails.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] on the first source that fails.
pub fn check_available(entropy: &dyn EntropySource) -> Result<(), EntropyError> {
    crate::u64_seed::generate()?;

    let mut probe = [0u8; 8];
    entropy.fill_bytes(&mut probe)
}
