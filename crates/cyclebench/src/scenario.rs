// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::hint::black_box;
use std::io::Write;

use cyclebench_aead::{AeadError, AeadMode, AeadSession};
use cyclebench_counter::CycleCounter;
use cyclebench_rand::{EntropySource, generate_secret};

use crate::config::BenchConfig;
use crate::error::{BenchError, ScenarioError};
use crate::report::{ReportWriter, TimingSample};

/// Lifecycle of one scenario.
///
/// `Initializing -> Iterating -> Reporting -> Done`. `Failed` is entered
/// from `Initializing` or `Iterating` and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    /// Drawing corpus, key and nonce.
    Initializing,
    /// Timing encryptions.
    Iterating,
    /// Writing the completion marker.
    Reporting,
    /// Finished without error.
    Done,
    /// Aborted by an error.
    Failed,
}

/// Runs one mode over a freshly drawn corpus, key and nonce.
///
/// Each runner owns its material for the duration of [`run`](Self::run);
/// running the same runner again draws everything anew.
pub struct ScenarioRunner<'a, M: AeadMode> {
    mode: &'a M,
    config: BenchConfig,
    state: ScenarioState,
    completed: usize,
}

impl<'a, M: AeadMode> ScenarioRunner<'a, M> {
    /// Creates a runner in the `Initializing` state.
    pub fn new(mode: &'a M, config: BenchConfig) -> Self {
        Self {
            mode,
            config,
            state: ScenarioState::Initializing,
            completed: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScenarioState {
        self.state
    }

    /// Iterations reported by the last [`run`](Self::run).
    pub fn completed_iterations(&self) -> usize {
        self.completed
    }

    /// Executes the scenario and writes its report section.
    ///
    /// # Errors
    ///
    /// The first failure aborts the remaining iterations and is returned
    /// tagged with the mode name. Lines already written stay written.
    pub fn run<C, W>(
        &mut self,
        entropy: &dyn EntropySource,
        counter: &mut C,
        report: &mut ReportWriter<W>,
    ) -> Result<(), ScenarioError>
    where
        C: CycleCounter,
        W: Write,
    {
        self.completed = 0;
        self.transition(ScenarioState::Initializing);

        tracing::info!(
            mode = self.mode.name(),
            block_size = self.config.block_size(),
            iterations = self.config.iterations(),
            unit = %counter.unit(),
            "scenario started"
        );

        match self.execute(entropy, counter, report) {
            Ok(()) => {
                tracing::info!(
                    mode = self.mode.name(),
                    iterations = self.completed,
                    "scenario finished"
                );
                Ok(())
            }
            Err(source) => {
                tracing::error!(
                    mode = self.mode.name(),
                    state = ?self.state,
                    completed = self.completed,
                    error = %source,
                    "scenario aborted"
                );
                self.transition(ScenarioState::Failed);

                Err(ScenarioError {
                    mode: self.mode.name(),
                    source,
                })
            }
        }
    }

    fn execute<C, W>(
        &mut self,
        entropy: &dyn EntropySource,
        counter: &mut C,
        report: &mut ReportWriter<W>,
    ) -> Result<(), BenchError>
    where
        C: CycleCounter,
        W: Write,
    {
        let block_size = self.config.block_size();

        let corpus = cyclebench_rand::generate(self.config.corpus_len())?;
        let key = generate_secret(entropy, self.mode.key_size())?;
        let nonce = generate_secret(entropy, self.mode.nonce_size())?;

        tracing::debug!(
            mode = self.mode.name(),
            corpus_len = corpus.len(),
            key_len = key.len(),
            nonce_len = nonce.len(),
            tag_len = self.mode.tag_size(),
            "material drawn"
        );

        let accumulator_len = block_size
            .checked_add(self.mode.tag_size())
            .ok_or(BenchError::InvalidConfig("block size leaves no room for the tag"))?;
        let mut accumulator = Vec::with_capacity(accumulator_len);

        report.banner(self.mode.name())?;
        self.transition(ScenarioState::Iterating);

        for iteration in 0..self.config.iterations() {
            let aead = |source: AeadError| BenchError::Aead { iteration, source };

            let mut session = self
                .mode
                .new_session(key.expose(), nonce.expose())
                .map_err(aead)?;

            let plaintext = &corpus[self.config.slice_range(iteration)];

            if self.mode.requires_data_lengths() {
                session
                    .specify_data_lengths(0, plaintext.len())
                    .map_err(aead)?;
            }

            let sample = timed_encrypt(counter, &mut session, plaintext, &mut accumulator)
                .map_err(aead)?;

            report.sample(&sample, block_size)?;
            self.completed += 1;
        }

        self.transition(ScenarioState::Reporting);
        report.completion()?;
        self.transition(ScenarioState::Done);

        Ok(())
    }

    fn transition(&mut self, next: ScenarioState) {
        tracing::trace!(
            mode = self.mode.name(),
            from = ?self.state,
            to = ?next,
            "state transition"
        );
        self.state = next;
    }
}

/// One encryption between two counter reads. Nothing else sits inside the
/// bracket; the result is inspected only after `stop` is taken.
#[inline(always)]
fn timed_encrypt<C, S>(
    counter: &mut C,
    session: &mut S,
    plaintext: &[u8],
    accumulator: &mut Vec<u8>,
) -> Result<TimingSample, AeadError>
where
    C: CycleCounter,
    S: AeadSession,
{
    let plaintext = black_box(plaintext);

    let start = counter.read();
    let result = session.encrypt_into(&[], plaintext, accumulator);
    let stop = counter.read();

    black_box(accumulator.as_slice());
    result?;

    Ok(TimingSample { start, stop })
}
