//! C ABI for foreign callers.
//!
//! Terrains cross the boundary as a `(pointer, length)` pair of `int64_t`.
//! The pair is validated before anything is dereferenced; the slice is only
//! borrowed for the duration of the call and never retained.
//!
//! ```c
//! #include <stdint.h>
//! #include <stddef.h>
//! uint64_t rain_trap_water(const int64_t *heights, size_t len);
//! RainTrapStatus rain_trap_water_checked(const int64_t *heights, size_t len, uint64_t *out);
//! RainTrapStatus rain_trap_water_with(uint32_t strategy, const int64_t *heights, size_t len,
//!                                     uint64_t *out);
//! ```
//!
//! See `include/rain_trap.h` for the full header.

use std::mem;

use thiserror::Error;

use crate::strategies::Strategy;
use crate::traits::TrapStrategy;

/// Why a raw `(pointer, length)` pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RawTerrainError {
    #[error("null terrain pointer with non-zero length {len}")]
    NullPointer { len: usize },
    #[error("terrain pointer {addr:#x} is not aligned for i64")]
    Misaligned { addr: usize },
    #[error("terrain length {len} exceeds the addressable size")]
    LengthOverflow { len: usize },
}

/// Status codes returned by the checked entry points.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainTrapStatus {
    Ok = 0,
    NullPointer = 1,
    Misaligned = 2,
    LengthOverflow = 3,
    NullOutput = 4,
    UnknownStrategy = 5,
}

impl From<RawTerrainError> for RainTrapStatus {
    fn from(err: RawTerrainError) -> Self {
        match err {
            RawTerrainError::NullPointer { .. } => RainTrapStatus::NullPointer,
            RawTerrainError::Misaligned { .. } => RainTrapStatus::Misaligned,
            RawTerrainError::LengthOverflow { .. } => RainTrapStatus::LengthOverflow,
        }
    }
}

/// Check a raw pair without touching the memory behind it.
///
/// A zero length is always valid (the empty terrain), whatever the pointer.
pub fn validate_raw(ptr: *const i64, len: usize) -> Result<(), RawTerrainError> {
    if len == 0 {
        return Ok(());
    }
    if ptr.is_null() {
        return Err(RawTerrainError::NullPointer { len });
    }
    let addr = ptr as usize;
    if addr % mem::align_of::<i64>() != 0 {
        return Err(RawTerrainError::Misaligned { addr });
    }
    match len.checked_mul(mem::size_of::<i64>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(RawTerrainError::LengthOverflow { len }),
    }
}

/// Borrow a raw pair as a terrain slice.
///
/// # Safety
/// If [`validate_raw`] accepts the pair and `len > 0`, `ptr` must point to
/// `len` initialised `i64` values that stay valid and unmodified for `'a`.
pub unsafe fn terrain_from_raw<'a>(
    ptr: *const i64,
    len: usize,
) -> Result<&'a [i64], RawTerrainError> {
    validate_raw(ptr, len)?;
    if len == 0 {
        return Ok(&[]);
    }
    // SAFETY: non-null, aligned and size-checked above; validity of the
    // memory itself is the caller's contract.
    Ok(std::slice::from_raw_parts(ptr, len))
}

unsafe fn run_raw(
    strategy: Strategy,
    ptr: *const i64,
    len: usize,
    out: *mut u64,
) -> RainTrapStatus {
    if out.is_null() {
        return RainTrapStatus::NullOutput;
    }
    match terrain_from_raw(ptr, len) {
        Ok(terrain) => {
            // SAFETY: checked non-null above; alignment is the caller's contract.
            *out = strategy.trapped_water(terrain);
            RainTrapStatus::Ok
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%err, "rejected raw terrain");
            err.into()
        }
    }
}

/// Water trapped by `len` heights at `heights`, default strategy.
///
/// Returns 0 for the empty terrain and for any rejected pair.
///
/// # Safety
/// See [`terrain_from_raw`].
#[no_mangle]
pub unsafe extern "C" fn rain_trap_water(heights: *const i64, len: usize) -> u64 {
    let mut out = 0u64;
    match run_raw(Strategy::default(), heights, len, &mut out) {
        RainTrapStatus::Ok => out,
        _ => 0,
    }
}

/// Checked variant: writes the result to `out` only on [`RainTrapStatus::Ok`].
///
/// # Safety
/// See [`terrain_from_raw`]; `out` must be null or valid for a `u64` write.
#[no_mangle]
pub unsafe extern "C" fn rain_trap_water_checked(
    heights: *const i64,
    len: usize,
    out: *mut u64,
) -> RainTrapStatus {
    run_raw(Strategy::default(), heights, len, out)
}

/// Like [`rain_trap_water_checked`] with an explicit strategy, given as its
/// index in [`Strategy::ALL`].
///
/// # Safety
/// See [`rain_trap_water_checked`].
#[no_mangle]
pub unsafe extern "C" fn rain_trap_water_with(
    strategy: u32,
    heights: *const i64,
    len: usize,
    out: *mut u64,
) -> RainTrapStatus {
    match Strategy::from_index(strategy as usize) {
        Some(s) => run_raw(s, heights, len, out),
        None => RainTrapStatus::UnknownStrategy,
    }
}
