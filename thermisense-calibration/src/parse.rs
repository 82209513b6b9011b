//! Locale-tolerant decimal parsing
//!
//! Bench notes mix decimal commas and points. The rule:
//!
//! ```text
//! "1.234,56"  both separators  → '.' groups thousands, ',' is decimal → 1234.56
//! "1,5"       comma only       → decimal comma                        → 1.5
//! "1234.5"    point only       → parsed as is                         → 1234.5
//! ```

use crate::errors::{CalibrationError, CalibrationResult};

/// Parse a number typed with either decimal separator
pub fn parse_decimal(text: &str) -> CalibrationResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalibrationError::InvalidNumber(text.to_string()));
    }

    let normalized = match (trimmed.contains(','), trimmed.contains('.')) {
        (true, true) => trimmed.replace('.', "").replace(',', "."),
        (true, false) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };

    normalized
        .parse::<f64>()
        .map_err(|_| CalibrationError::InvalidNumber(text.to_string()))
}
