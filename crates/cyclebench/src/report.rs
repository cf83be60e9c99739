// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Write};

/// Width of the banner and separator lines.
pub const BANNER_WIDTH: usize = 71;

const TITLE_INDENT: usize = 32;

/// Two counter readings bracketing one encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Reading taken just before the call.
    pub start: u64,
    /// Reading taken just after the call.
    pub stop: u64,
}

impl TimingSample {
    /// Elapsed counter units. Wraps instead of panicking if the counter
    /// went backwards (e.g. after migrating to a core with a skewed TSC).
    pub fn diff(&self) -> u64 {
        self.stop.wrapping_sub(self.start)
    }

    /// `diff / block_size`, truncated. Zero for an empty block.
    pub fn per_byte(&self, block_size: usize) -> u64 {
        self.diff().checked_div(block_size as u64).unwrap_or(0)
    }
}

/// Writes the line-oriented report consumed by downstream tooling.
///
/// Format per scenario: banner, one `start: .. stop: .. diff: .. per byte: ..`
/// line per iteration, closing separator and an empty line.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the scenario header box for `mode`.
    pub fn banner(&mut self, mode: &str) -> io::Result<()> {
        let title = format!("{mode} TEST");
        let inner = BANNER_WIDTH - 2;
        let trailing = inner.saturating_sub(TITLE_INDENT + title.len());

        self.separator()?;
        writeln!(
            self.out,
            "|{:indent$}{title}{:trailing$}|",
            "",
            "",
            indent = TITLE_INDENT,
        )?;
        self.separator()?;
        writeln!(self.out)
    }

    /// Writes one iteration line.
    pub fn sample(&mut self, sample: &TimingSample, block_size: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "start: {} stop: {} diff: {} per byte: {}",
            sample.start,
            sample.stop,
            sample.diff(),
            sample.per_byte(block_size),
        )
    }

    /// Writes the completion marker and flushes.
    pub fn completion(&mut self) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))
    }
}
