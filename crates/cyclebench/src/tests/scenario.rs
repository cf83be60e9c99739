// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use cyclebench_aead::test_utils::{AeadModeMock, AeadModeMockBehaviour};
use cyclebench_aead::{AeadError, Ccm128, Gcm128};
use cyclebench_counter::test_utils::MockCycleCounter;
use cyclebench_rand::EntropyError;
use cyclebench_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::report::ReportWriter;
use crate::scenario::{ScenarioRunner, ScenarioState};

fn small_config() -> BenchConfig {
    BenchConfig::new(64, 3).expect("Failed to BenchConfig::new(..)")
}

fn sample_lines(report: &str) -> Vec<&str> {
    report.lines().filter(|l| l.starts_with("start: ")).collect()
}

fn decode(writer: ReportWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner()).expect("Failed to decode report")
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_run_ccm_reports_every_iteration() {
    let mode = Ccm128::new();
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(1_000, 640);
    let mut report = ReportWriter::new(Vec::new());
    let mut runner = ScenarioRunner::new(&mode, small_config());

    assert_eq!(runner.state(), ScenarioState::Initializing);

    runner
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");

    assert_eq!(runner.state(), ScenarioState::Done);
    assert_eq!(runner.completed_iterations(), 3);
    assert_eq!(counter.reads(), 6);

    let out = decode(report);
    assert_eq!(
        sample_lines(&out),
        vec![
            "start: 1000 stop: 1640 diff: 640 per byte: 10",
            "start: 2280 stop: 2920 diff: 640 per byte: 10",
            "start: 3560 stop: 4200 diff: 640 per byte: 10",
        ]
    );
    assert!(out.lines().nth(1).is_some_and(|l| l.contains("CCM TEST")));
    assert!(out.ends_with(&format!("{}\n\n", "=".repeat(71))));
}

#[test]
fn test_run_gcm_skips_length_declaration() {
    let mode = AeadModeMock::new(Gcm128::new(), AeadModeMockBehaviour::None);
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());

    ScenarioRunner::new(&mode, small_config())
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");

    assert_eq!(mode.specify_count(), 0);
    assert_eq!(mode.encrypt_count(), 3);
    assert_eq!(sample_lines(&decode(report)).len(), 3);
}

#[test]
fn test_run_ccm_declares_lengths_per_iteration() {
    let mode = AeadModeMock::new(Ccm128::new(), AeadModeMockBehaviour::None);
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());

    ScenarioRunner::new(&mode, small_config())
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");

    assert_eq!(mode.new_session_count(), 3);
    assert_eq!(mode.specify_count(), 3);
    assert_eq!(mode.encrypt_count(), 3);
}

#[test]
fn test_stop_never_precedes_start() {
    let mode = Gcm128::new();
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(42, 7);
    let mut report = ReportWriter::new(Vec::new());

    ScenarioRunner::new(&mode, BenchConfig::new(16, 20).expect("Failed to BenchConfig::new(..)"))
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");

    let out = decode(report);
    let lines = sample_lines(&out);
    assert_eq!(lines.len(), 20);

    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let start: u64 = fields[1].parse().expect("Failed to parse start");
        let stop: u64 = fields[3].parse().expect("Failed to parse stop");

        assert!(stop >= start);
    }
}

// =============================================================================
// Key / nonce material
// =============================================================================

#[test]
fn test_material_constant_within_run_fresh_across_runs() {
    let mode = AeadModeMock::new(Ccm128::new(), AeadModeMockBehaviour::None);
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());
    let mut runner = ScenarioRunner::new(&mode, small_config());

    runner
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");
    runner
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");

    let materials = mode.materials();
    assert_eq!(materials.len(), 6);
    assert_eq!(entropy.fill_count(), 4);

    for (key, nonce) in &materials {
        assert_eq!(key.len(), Ccm128::KEY_SIZE);
        assert_eq!(nonce.len(), Ccm128::NONCE_SIZE);
    }

    assert!(materials[..3].iter().all(|m| *m == materials[0]));
    assert!(materials[3..].iter().all(|m| *m == materials[3]));
    assert_ne!(materials[0], materials[3]);
    assert_eq!(sample_lines(&decode(report)).len(), 6);
}

#[test]
fn test_gcm_material_sizes() {
    let mode = AeadModeMock::new(Gcm128::new(), AeadModeMockBehaviour::None);
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());

    ScenarioRunner::new(&mode, small_config())
        .run(&entropy, &mut counter, &mut report)
        .expect("Failed to run(..)");

    let (key, nonce) = &mode.materials()[0];
    assert_eq!(key.len(), 16);
    assert_eq!(nonce.len(), 16);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_encrypt_failure_stops_after_k_lines() {
    let mode = AeadModeMock::new(Gcm128::new(), AeadModeMockBehaviour::FailEncryptAt(1));
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());
    let mut runner = ScenarioRunner::new(&mode, small_config());

    let err = runner
        .run(&entropy, &mut counter, &mut report)
        .expect_err("Expected run(..) to fail");

    assert_eq!(err.mode, "GCM");
    assert!(matches!(
        err.source,
        BenchError::Aead {
            iteration: 1,
            source: AeadError::EncryptionFailed
        }
    ));
    assert_eq!(runner.state(), ScenarioState::Failed);
    assert_eq!(runner.completed_iterations(), 1);
    assert_eq!(mode.new_session_count(), 2);

    let out = decode(report);
    assert_eq!(sample_lines(&out).len(), 1);
    assert!(!out.ends_with(&format!("{}\n\n", "=".repeat(71))));
}

#[test]
fn test_session_failure_on_first_iteration() {
    let mode = AeadModeMock::new(Ccm128::new(), AeadModeMockBehaviour::FailNewSessionAt(0));
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());
    let mut runner = ScenarioRunner::new(&mode, small_config());

    let err = runner
        .run(&entropy, &mut counter, &mut report)
        .expect_err("Expected run(..) to fail");

    assert!(matches!(
        err.source,
        BenchError::Aead {
            iteration: 0,
            source: AeadError::InvalidKeySize
        }
    ));
    assert_eq!(runner.state(), ScenarioState::Failed);
    assert_eq!(counter.reads(), 0);
    assert!(sample_lines(&decode(report)).is_empty());
}

#[test]
fn test_nonce_entropy_failure_writes_nothing() {
    let mode = AeadModeMock::new(Ccm128::new(), AeadModeMockBehaviour::None);
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytesCall(1));
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());
    let mut runner = ScenarioRunner::new(&mode, small_config());

    let err = runner
        .run(&entropy, &mut counter, &mut report)
        .expect_err("Expected run(..) to fail");

    assert!(matches!(
        err.source,
        BenchError::Entropy(EntropyError::EntropyNotAvailable)
    ));
    assert_eq!(runner.state(), ScenarioState::Failed);
    assert_eq!(mode.new_session_count(), 0);
    assert!(decode(report).is_empty());
}

#[test]
fn test_block_beyond_ccm_length_field_is_rejected() {
    let mode = Ccm128::new();
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut counter = MockCycleCounter::new(0, 1);
    let mut report = ReportWriter::new(Vec::new());
    let config = BenchConfig::new(Ccm128::MAX_MESSAGE_LEN + 1, 1)
        .expect("Failed to BenchConfig::new(..)");

    let err = ScenarioRunner::new(&mode, config)
        .run(&entropy, &mut counter, &mut report)
        .expect_err("Expected run(..) to fail");

    assert!(matches!(
        err.source,
        BenchError::Aead {
            iteration: 0,
            source: AeadError::MessageTooLong { .. }
        }
    ));
    assert_eq!(counter.reads(), 0);
}
