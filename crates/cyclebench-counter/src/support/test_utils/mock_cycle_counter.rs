// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::counter::{CounterUnit, CycleCounter};

/// Deterministic counter returning `start`, `start + step`, `start + 2·step`, ...
///
/// With a non-zero `step` the sequence is strictly increasing.
#[derive(Debug, Clone)]
pub struct MockCycleCounter {
    next: u64,
    step: u64,
    reads: usize,
}

impl MockCycleCounter {
    /// Creates a counter whose first reading is `start`.
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            next: start,
            step,
            reads: 0,
        }
    }

    /// Number of readings taken so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl CycleCounter for MockCycleCounter {
    fn read(&mut self) -> u64 {
        let value = self.next;
        self.next = self.next.wrapping_add(self.step);
        self.reads += 1;

        value
    }

    fn unit(&self) -> CounterUnit {
        CounterUnit::Cycles
    }
}
