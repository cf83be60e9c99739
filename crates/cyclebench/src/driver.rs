// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use cyclebench_aead::{AeadMode, Ccm128, Gcm128};
use cyclebench_counter::CycleCounter;
use cyclebench_rand::{EntropySource, check_available};

use crate::config::BenchConfig;
use crate::error::{BenchError, ScenarioError};
use crate::report::ReportWriter;
use crate::scenario::ScenarioRunner;

/// Owns the counter and report sink and runs scenarios strictly in order.
pub struct Driver<'a, C: CycleCounter, W: Write> {
    config: BenchConfig,
    entropy: &'a dyn EntropySource,
    counter: C,
    report: ReportWriter<W>,
}

impl<'a, C: CycleCounter, W: Write> Driver<'a, C, W> {
    /// Creates a driver writing its report to `out`.
    pub fn new(config: BenchConfig, entropy: &'a dyn EntropySource, counter: C, out: W) -> Self {
        Self {
            config,
            entropy,
            counter,
            report: ReportWriter::new(out),
        }
    }

    /// Runs CCM, then GCM.
    ///
    /// # Errors
    ///
    /// See [`run_pair`](Self::run_pair).
    pub fn run_all(&mut self) -> Result<(), ScenarioError> {
        self.run_pair(&Ccm128::new(), &Gcm128::new())
    }

    /// Runs `first`, then `second`. Entropy availability is checked once
    /// up front; a failure there is attributed to `first`.
    ///
    /// # Errors
    ///
    /// Returns the first scenario error. `second` never starts if `first`
    /// fails.
    pub fn run_pair<A, B>(&mut self, first: &A, second: &B) -> Result<(), ScenarioError>
    where
        A: AeadMode,
        B: AeadMode,
    {
        if let Err(err) = check_available(self.entropy) {
            tracing::error!(error = %err, "entropy check failed");

            return Err(ScenarioError {
                mode: first.name(),
                source: BenchError::Entropy(err),
            });
        }

        self.run(first)?;
        self.run(second)
    }

    /// Runs a single scenario for `mode`.
    ///
    /// # Errors
    ///
    /// Propagates the runner's [`ScenarioError`].
    pub fn run<M: AeadMode>(&mut self, mode: &M) -> Result<(), ScenarioError> {
        let mut runner = ScenarioRunner::new(mode, self.config);

        runner.run(self.entropy, &mut self.counter, &mut self.report)
    }

    /// Borrow of the counter, e.g. to inspect a mock after a run.
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Consumes the driver and returns the report sink.
    pub fn into_output(self) -> W {
        self.report.into_inner()
    }
}
