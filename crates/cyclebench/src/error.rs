// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use thiserror::Error;

use cyclebench_aead::AeadError;
use cyclebench_rand::EntropyError;

/// Failures while configuring or running a scenario.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The benchmark shape is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Corpus, key or nonce material could not be drawn.
    #[error("entropy source unavailable")]
    Entropy(#[from] EntropyError),

    /// Session setup or encryption failed.
    #[error("AEAD failure at iteration {iteration}: {source}")]
    Aead {
        /// Zero-based iteration that failed.
        iteration: usize,
        /// Underlying cipher error.
        #[source]
        source: AeadError,
    },

    /// Writing the report failed.
    #[error("report output failed")]
    Io(#[from] io::Error),
}

/// A [`BenchError`] tagged with the scenario it aborted.
#[derive(Debug, Error)]
#[error("{mode} scenario aborted: {source}")]
pub struct ScenarioError {
    /// Mode name, e.g. `"CCM"`.
    pub mode: &'static str,
    /// What went wrong.
    #[source]
    pub source: BenchError,
}
