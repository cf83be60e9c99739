// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw counter reads, one implementation per target.
//!
//! Reads are bracketed by compiler fences so the compiler cannot hoist or sink
//! surrounding work across them. The CPU may still reorder around the read
//! instruction itself; that is accepted as measurement noise.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::counter::CounterUnit;

/// Unit of the values returned by [`read`] on this target.
#[cfg(target_arch = "x86_64")]
pub const UNIT: CounterUnit = CounterUnit::Cycles;

/// Unit of the values returned by [`read`] on this target.
#[cfg(all(target_arch = "aarch64", feature = "pmu"))]
pub const UNIT: CounterUnit = CounterUnit::Cycles;

/// Unit of the values returned by [`read`] on this target.
#[cfg(all(target_arch = "aarch64", not(feature = "pmu")))]
pub const UNIT: CounterUnit = CounterUnit::TimerTicks;

/// Unit of the values returned by [`read`] on this target.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const UNIT: CounterUnit = CounterUnit::Nanoseconds;

/// Reads the counter register.
#[inline(always)]
pub fn read() -> u64 {
    compiler_fence(Ordering::SeqCst);
    let value = read_raw();
    compiler_fence(Ordering::SeqCst);

    value
}

// =============================================================================
// x86_64: RDTSC
// =============================================================================

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_raw() -> u64 {
    // SAFETY: RDTSC is available on every x86_64 CPU and has no memory effects.
    #[allow(unused_unsafe)]
    let value = unsafe { core::arch::x86_64::_rdtsc() };

    value
}

// =============================================================================
// aarch64: PMCCNTR_EL0 / CNTVCT_EL0
// =============================================================================

#[cfg(all(target_arch = "aarch64", feature = "pmu"))]
#[inline(always)]
fn read_raw() -> u64 {
    let value: u64;

    // SAFETY: reading PMCCNTR_EL0 has no side effects. It traps unless the
    // kernel has set PMUSERENR_EL0.EN, which enabling `pmu` asserts.
    unsafe {
        core::arch::asm!("mrs {}, pmccntr_el0", out(reg) value, options(nostack, preserves_flags));
    }

    value
}

#[cfg(all(target_arch = "aarch64", not(feature = "pmu")))]
#[inline(always)]
fn read_raw() -> u64 {
    let value: u64;

    // SAFETY: CNTVCT_EL0 is readable from EL0 on every supported kernel.
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) value, options(nostack, preserves_flags));
    }

    value
}

// =============================================================================
// Fallback: monotonic clock
// =============================================================================

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_raw() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();

    let elapsed = EPOCH.get_or_init(Instant::now).elapsed();
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}
