//! Directional rounding backed by a process-wide rounding-mode register.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::Float;
use crate::errors::MathError;

/// Directional rounding policy for converting a float to an integer
/// coordinate.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to the nearest whole number (the register default).
    #[default]
    Nearest,
    /// Round up, toward positive infinity.
    Up,
    /// Round down, toward negative infinity.
    Down,
    /// Round toward zero.
    TowardZero,
}

impl RoundingMode {
    fn from_register(bits: u8) -> Self {
        match bits {
            b if b == RoundingMode::Up as u8 => RoundingMode::Up,
            b if b == RoundingMode::Down as u8 => RoundingMode::Down,
            b if b == RoundingMode::TowardZero as u8 => RoundingMode::TowardZero,
            _ => RoundingMode::Nearest,
        }
    }
}

/// The rounding-mode register. Like the numeric environment it stands in
/// for, there is exactly one for the whole process, not one per call.
static ROUNDING_MODE: AtomicU8 = AtomicU8::new(RoundingMode::Nearest as u8);

/// Scoped installation of a rounding mode into the process-wide register.
///
/// Acquisition saves the previously active mode and installs the requested
/// one; dropping the guard restores the saved mode on every exit path,
/// including errors. The save/restore pair is NOT reentrant-safe: two live
/// guards interleave their restores, so callers must serialize rounding
/// calls that install a mode (single-writer contract).
#[must_use]
struct RoundingModeGuard {
    saved: RoundingMode,
}

impl RoundingModeGuard {
    fn install(mode: RoundingMode) -> Self {
        let saved = RoundingMode::from_register(ROUNDING_MODE.swap(mode as u8, Ordering::SeqCst));
        RoundingModeGuard { saved }
    }
}

impl Drop for RoundingModeGuard {
    fn drop(&mut self) {
        ROUNDING_MODE.store(self.saved as u8, Ordering::SeqCst);
    }
}

/// Rounds to a whole number honoring whatever mode is currently installed
/// in the register.
fn round_via_register(value: Float) -> Float {
    match RoundingMode::from_register(ROUNDING_MODE.load(Ordering::SeqCst)) {
        RoundingMode::Nearest => value.round(),
        RoundingMode::Up => value.ceil(),
        RoundingMode::Down => value.floor(),
        RoundingMode::TowardZero => value.trunc(),
    }
}

/// Rounds a float to an integer coordinate under the given directional
/// policy.
///
/// `Up` and `Down` apply a ceiling/floor pass followed by round-to-nearest,
/// a double-rounding step kept for compatibility with existing plots.
/// `Nearest` and `TowardZero` temporarily install the mode into the
/// process-wide register and restore the previous mode before returning.
/// Values outside the `i32` range (or not finite at all) are an error.
pub fn round_to_int(value: Float, mode: RoundingMode) -> Result<i32, MathError> {
    if !value.is_finite() || value > Float::from(i32::MAX) || value < Float::from(i32::MIN) {
        log::error!("round: {value} does not fit in the integer coordinate range");
        return Err(MathError::IntOutOfRange);
    }

    let rounded = match mode {
        RoundingMode::Up => value.ceil().round(),
        RoundingMode::Down => value.floor().round(),
        RoundingMode::Nearest | RoundingMode::TowardZero => {
            let _guard = RoundingModeGuard::install(mode);
            round_via_register(value)
        }
    };
    Ok(rounded as i32)
}

/// Serializes register-installing test code. The register's single-writer
/// contract applies to the test harness as much as to any other caller.
#[cfg(test)]
pub(crate) fn serialize_register_tests() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
