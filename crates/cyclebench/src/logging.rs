// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Diagnostics setup for the binary.
//!
//! Everything goes to stderr so stdout carries only the report.

use tracing_subscriber::EnvFilter;

/// Default filter directive. Fixed; no environment variable is consulted.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
