// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::process::ExitCode;

use cyclebench::{BenchConfig, Driver, logging};
use cyclebench_counter::HardwareCounter;
use cyclebench_rand::SystemEntropySource;

fn main() -> ExitCode {
    logging::init();

    let entropy = SystemEntropySource {};
    let stdout = io::stdout().lock();
    let mut driver = Driver::new(
        BenchConfig::default(),
        &entropy,
        HardwareCounter::new(),
        stdout,
    );

    // Failures are logged where they are caught.
    match driver.run_all() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
