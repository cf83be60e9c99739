// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cyclebench_counter
//!
//! Timing primitive for the cyclebench harness.
//!
//! [`arch::read`] is the only architecture-specific code in the workspace:
//!
//! - **x86_64**: `RDTSC` (TSC cycles)
//! - **aarch64** + feature `pmu`: `PMCCNTR_EL0` (CPU cycles)
//! - **aarch64**: `CNTVCT_EL0` (generic timer ticks)
//! - **Other**: nanoseconds since a process-wide epoch
//!
//! [`CounterUnit`] names the unit so reported numbers are not misread.
//!
//! ## Example
//!
//! ```rust
//! use cyclebench_counter::{CycleCounter, HardwareCounter};
//!
//! let mut counter = HardwareCounter::new();
//! let start = counter.read();
//! let stop = counter.read();
//! assert!(stop >= start);
//! println!("{} {}", stop - start, counter.unit());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod counter;
mod support;

pub mod arch;

pub use counter::{CounterUnit, CycleCounter, HardwareCounter};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
