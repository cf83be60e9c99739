// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Plaintext corpus generation.
//!
//! The corpus only has to look like arbitrary data to the cipher, so it comes
//! from a fast seedable generator instead of the OS CSPRNG. Output is not
//! reproducible across runs.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::u64_seed;

/// Number of independent u64 draws combined into one generator seed.
pub const SEED_DRAWS: usize = 4;

/// Seedable generator of uniformly distributed plaintext bytes.
pub struct CorpusGenerator {
    rng: StdRng,
}

impl CorpusGenerator {
    /// Seeds a generator from [`SEED_DRAWS`] hardware/OS draws.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if any draw fails.
    pub fn from_system_seed() -> Result<Self, EntropyError> {
        Self::from_draws(u64_seed::generate)
    }

    /// Seeds a generator from an explicit 32-byte seed.
    pub fn from_seed(seed: [u8; SEED_DRAWS * 8]) -> Self {
        Self {
            rng: StdRng::from_seed(seed),
        }
    }

    pub(crate) fn from_draws(
        mut draw: impl FnMut() -> Result<u64, EntropyError>,
    ) -> Result<Self, EntropyError> {
        let mut seed = [0u8; SEED_DRAWS * 8];

        for chunk in seed.chunks_exact_mut(8) {
            let mut value = draw()?;
            chunk.copy_from_slice(&value.to_le_bytes());
            value.zeroize();
        }

        let generator = Self::from_seed(seed);
        seed.zeroize();

        Ok(generator)
    }

    /// Returns `size` uniformly distributed bytes.
    ///
    /// The buffer is allocated once at its final size before being filled.
    pub fn generate(&mut self, size: usize) -> Vec<u8> {
        let mut corpus = vec![0u8; size];
        self.rng.fill_bytes(&mut corpus);
        corpus
    }
}

/// Generates a fresh corpus of `size` bytes from a freshly seeded generator.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the generator cannot be
/// seeded.
pub fn generate(size: usize) -> Result<Vec<u8>, EntropyError> {
    let corpus = CorpusGenerator::from_system_seed()?.generate(size);
    tracing::debug!(size, "generated plaintext corpus");

    Ok(corpus)
}
