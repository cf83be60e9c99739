// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Range;

use crate::error::BenchError;

/// Plaintext bytes encrypted per iteration unless configured otherwise.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;
/// Iterations per scenario unless configured otherwise.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Room kept above a block for the appended tag. Covers every AEAD tag size.
pub const MAX_TAG_HEADROOM: usize = 16;

/// Largest corpus a single allocation can hold.
const MAX_CORPUS_LEN: usize = isize::MAX as usize;

/// Shape of one scenario: how many bytes per timed call, and how many calls.
///
/// Both values are non-zero, the corpus fits in one allocation and a block
/// plus its tag never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    block_size: usize,
    iterations: usize,
}

impl BenchConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] for a zero block size, zero
    /// iterations, a corpus larger than `isize::MAX` bytes, or a block that
    /// leaves no room for the tag within that limit.
    pub fn new(block_size: usize, iterations: usize) -> Result<Self, BenchError> {
        if block_size == 0 {
            return Err(BenchError::InvalidConfig("block size must be non-zero"));
        }

        if iterations == 0 {
            return Err(BenchError::InvalidConfig("iteration count must be non-zero"));
        }

        if block_size > MAX_CORPUS_LEN - MAX_TAG_HEADROOM {
            return Err(BenchError::InvalidConfig("block size leaves no room for the tag"));
        }

        match block_size.checked_mul(iterations) {
            Some(len) if len <= MAX_CORPUS_LEN => {}
            _ => return Err(BenchError::InvalidConfig("corpus length exceeds isize::MAX")),
        }

        Ok(Self {
            block_size,
            iterations,
        })
    }

    /// Bytes per timed encryption.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Timed encryptions per scenario.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total corpus length: `block_size * iterations`.
    pub fn corpus_len(&self) -> usize {
        self.block_size * self.iterations
    }

    /// Byte range of the slice encrypted in `iteration`.
    ///
    /// Slices are contiguous, disjoint and together cover the corpus.
    pub fn slice_range(&self, iteration: usize) -> Range<usize> {
        let start = iteration * self.block_size;
        start..start + self.block_size
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
