//! Raw input normalization: coerce form text into a positive value or a
//! typed validation failure.

use crate::error::InputError;

/// Which kind of slot a raw value is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Side,
    Angle,
}

/// Normalize one raw form value.
///
/// Empty or whitespace-only input is `Ok(None)` (the slot stays unknown).
/// Unparseable, non-finite, or non-positive input fails with
/// [`InputError::NotPositive`]; an angle of 180 degrees or more fails with
/// [`InputError::AngleTooLarge`].
pub fn normalize_value(raw: &str, kind: SlotKind) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotPositive)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::NotPositive);
    }
    if kind == SlotKind::Angle && value >= 180.0 {
        return Err(InputError::AngleTooLarge);
    }

    Ok(Some(value))
}
