// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cyclebench
//!
//! Cycle-level micro-benchmark of authenticated encryption. Each scenario
//! encrypts a fixed-size slice of a random corpus once per iteration and
//! reports the raw counter readings taken immediately around the AEAD call.
//!
//! ## Scenarios
//!
//! | Mode | Key | Nonce | Tag | Length declaration |
//! |------|-----|-------|-----|--------------------|
//! | CCM  | 16  | 12    | 8   | required           |
//! | GCM  | 16  | 16    | 12  | no                 |
//!
//! The nonce is reused across all iterations of a scenario. That keeps every
//! iteration identical for measurement purposes and makes the output unfit
//! for anything but timing.
//!
//! ## Example
//!
//! ```rust
//! use cyclebench::{BenchConfig, Driver};
//! use cyclebench_counter::HardwareCounter;
//! use cyclebench_rand::SystemEntropySource;
//!
//! let config = BenchConfig::new(64, 3).expect("Failed to BenchConfig::new(..)");
//! let entropy = SystemEntropySource {};
//! let mut driver = Driver::new(config, &entropy, HardwareCounter::new(), Vec::new());
//!
//! driver.run_all().expect("Failed to run_all()");
//!
//! let report = String::from_utf8(driver.into_output()).expect("Failed to decode report");
//! assert_eq!(report.lines().filter(|l| l.starts_with("start: ")).count(), 6);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod driver;
mod error;
mod report;
mod scenario;

pub mod logging;

pub use config::{BenchConfig, DEFAULT_BLOCK_SIZE, DEFAULT_ITERATIONS, MAX_TAG_HEADROOM};
pub use driver::Driver;
pub use error::{BenchError, ScenarioError};
pub use report::{BANNER_WIDTH, ReportWriter, TimingSample};
pub use scenario::{ScenarioRunner, ScenarioState};
