// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::arch;

/// Unit of a counter reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterUnit {
    /// CPU clock cycles (or TSC ticks).
    Cycles,
    /// Ticks of a fixed-frequency architectural timer.
    TimerTicks,
    /// Nanoseconds of a monotonic clock.
    Nanoseconds,
}

impl fmt::Display for CounterUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterUnit::Cycles => f.write_str("cycles"),
            CounterUnit::TimerTicks => f.write_str("timer ticks"),
            CounterUnit::Nanoseconds => f.write_str("nanoseconds"),
        }
    }
}

/// Monotonically non-decreasing counter.
pub trait CycleCounter {
    /// Returns the current counter value.
    fn read(&mut self) -> u64;

    /// Unit of the values returned by [`read`](Self::read).
    fn unit(&self) -> CounterUnit;
}

/// Counter backed by the target's hardware register.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwareCounter {}

impl HardwareCounter {
    /// Creates a hardware counter handle.
    pub fn new() -> Self {
        Self {}
    }
}

impl CycleCounter for HardwareCounter {
    #[inline(always)]
    fn read(&mut self) -> u64 {
        arch::read()
    }

    #[inline(always)]
    fn unit(&self) -> CounterUnit {
        arch::UNIT
    }
}
