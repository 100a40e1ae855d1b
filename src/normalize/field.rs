//! Conversion rules from raw cells to typed values, one per field class

use crate::model::{RawCell, Sex, Status, XrayFinding};

/// Marker for a cell outside its column's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

pub type Coerced<T> = Result<T, Rejected>;

/// Always-present number. Missing is rejected.
pub fn number(cell: &RawCell) -> Coerced<f64> {
    cell.as_number().ok_or(Rejected)
}

/// `NA` or empty becomes `None`; anything else must be numeric.
pub fn nullable_number(cell: &RawCell) -> Coerced<Option<f64>> {
    if cell.is_missing() {
        return Ok(None);
    }
    number(cell).map(Some)
}

/// `Yes`/`1` → true, `No`/`0` → false, `NA`/empty → `None`.
pub fn nullable_bool(cell: &RawCell) -> Coerced<Option<bool>> {
    match cell {
        RawCell::Na | RawCell::Empty => Ok(None),
        RawCell::Text(s) => match s.as_str() {
            "Yes" | "1" => Ok(Some(true)),
            "No" | "0" => Ok(Some(false)),
            _ => Err(Rejected),
        },
        RawCell::Bool(b) => Ok(Some(*b)),
        RawCell::Number(n) if *n == 1.0 => Ok(Some(true)),
        RawCell::Number(n) if *n == 0.0 => Ok(Some(false)),
        RawCell::Number(_) => Err(Rejected),
    }
}

pub fn sex(cell: &RawCell) -> Coerced<Sex> {
    match cell {
        RawCell::Text(s) => Sex::from_label(s).ok_or(Rejected),
        _ => Err(Rejected),
    }
}

/// Integer code 0, 1 or 2. Fractional codes are rejected.
pub fn status(cell: &RawCell) -> Coerced<Status> {
    let code = cell.as_number().ok_or(Rejected)?;
    if code.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&code) {
        return Err(Rejected);
    }
    Status::from_code(code as u8).ok_or(Rejected)
}

pub fn xray(cell: &RawCell) -> Coerced<XrayFinding> {
    match cell {
        RawCell::Text(s) => XrayFinding::from_label(s).ok_or(Rejected),
        _ => Err(Rejected),
    }
}

/// Any cell, as source text.
pub fn text(cell: &RawCell) -> Coerced<String> {
    Ok(cell.to_text())
}
