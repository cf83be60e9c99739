// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hardware entropy extraction for u64 seed draws.
//!
//! The corpus generator is seeded from several independent draws of this
//! source rather than a single one.
//!
//! # Architecture Support
//!
//! - **x86_64**: RDSEED → RDRAND → OS syscall (with cpufeatures detection)
//! - **Everything else**: OS syscall (getrandom/getentropy, or the
//!   `getrandom` crate where libc has no direct wrapper)

use crate::error::EntropyError;

/// Maximum retry attempts for hardware RNG instructions.
///
/// RDSEED/RDRAND can transiently fail when the entropy pool underflows.
#[cfg(target_arch = "x86_64")]
const MAX_RETRIES: usize = 10;

/// Draws one u64 from the best available hardware or OS source.
///
/// # Errors
///
/// Returns `EntropyError::EntropyNotAvailable` if entropy cannot be obtained.
///
/// # Example
///
/// ```rust
/// use cyclebench_rand::u64_seed::generate;
///
/// let seed = generate().expect("Failed to generate entropy");
/// # let _ = seed;
/// ```
pub fn generate() -> Result<u64, EntropyError> {
    #[cfg(target_arch = "x86_64")]
    {
        generate_x86_64()
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        generate_fallback()
    }
}

// =============================================================================
// x86_64: RDSEED → RDRAND → OS
// =============================================================================

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(x86_64_rdseed_cpuid, "rdseed");
#[cfg(target_arch = "x86_64")]
cpufeatures::new!(x86_64_rdrand_cpuid, "rdrand");

/// Reads the processor entropy source. `None` when the pool is exhausted.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn try_rdseed() -> Option<u64> {
    let value: u64;
    let success: u8;

    // SAFETY: only reached after cpuid reports RDSEED support.
    unsafe {
        core::arch::asm!(
            "rdseed {value}",
            "setc {success}",
            value = out(reg) value,
            success = out(reg_byte) success,
            options(nomem, nostack)
        );
    }

    (success != 0).then_some(value)
}

/// Reads the processor DRBG. `None` when the instruction reports failure.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn try_rdrand() -> Option<u64> {
    let value: u64;
    let success: u8;

    // SAFETY: only reached after cpuid reports RDRAND support.
    unsafe {
        core::arch::asm!(
            "rdrand {value}",
            "setc {success}",
            value = out(reg) value,
            success = out(reg_byte) success,
            options(nomem, nostack)
        );
    }

    (success != 0).then_some(value)
}

#[cfg(target_arch = "x86_64")]
fn generate_x86_64() -> Result<u64, EntropyError> {
    if x86_64_rdseed_cpuid::get() {
        for _ in 0..MAX_RETRIES {
            if let Some(value) = try_rdseed() {
                return Ok(value);
            }
        }
    }

    if x86_64_rdrand_cpuid::get() {
        for _ in 0..MAX_RETRIES {
            if let Some(value) = try_rdrand() {
                return Ok(value);
            }
        }
    }

    generate_fallback()
}

// =============================================================================
// Fallback: OS-specific syscalls
// =============================================================================

/// OS entropy for a single u64.
///
/// Uses the libc syscall wrappers directly on Linux and Apple targets and the
/// `getrandom` crate everywhere else.
fn generate_fallback() -> Result<u64, EntropyError> {
    let mut bytes = [0u8; 8];

    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        // SAFETY: `bytes` is a valid, writable 8-byte buffer.
        let ret = unsafe { libc::getrandom(bytes.as_mut_ptr() as *mut libc::c_void, 8, 0) };

        if ret != 8 {
            return Err(EntropyError::EntropyNotAvailable);
        }
    }

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        // SAFETY: `bytes` is a valid, writable 8-byte buffer.
        let ret = unsafe { libc::getentropy(bytes.as_mut_ptr() as *mut libc::c_void, 8) };

        if ret != 0 {
            return Err(EntropyError::EntropyNotAvailable);
        }
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    )))]
    {
        getrandom::fill(&mut bytes).map_err(|_| EntropyError::EntropyNotAvailable)?;
    }

    Ok(u64::from_le_bytes(bytes))
}
