//! JSON coefficient export
//!
//! Layout shared with the bench calibration tool:
//!
//! ```json
//! {
//!   "SteinhartHart": { "A": 0.0021085, "B": 7.979e-05, "C": 6.535e-07 },
//!   "BetaModel": { "beta": 3799.42, "R25": 9637.29 },
//!   "notes": "Units: A,B,C in 1/K; beta in K; R25 in ohms."
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{beta::BetaFit, errors::CalibrationResult, steinhart::SteinhartHartFit, Calibration};

/// Units note written into every export
pub const UNITS_NOTE: &str = "Units: A,B,C in 1/K; beta in K; R25 in ohms.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteinhartHartCoefficients {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaCoefficients {
    pub beta: f64,
    #[serde(rename = "R25")]
    pub r25: f64,
}

/// Both coefficient sets plus a units note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientReport {
    #[serde(rename = "SteinhartHart")]
    pub steinhart_hart: SteinhartHartCoefficients,
    #[serde(rename = "BetaModel")]
    pub beta_model: BetaCoefficients,
    #[serde(default)]
    pub notes: String,
}

impl CoefficientReport {
    pub fn to_json_pretty(&self) -> CalibrationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> CalibrationResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn steinhart(&self) -> SteinhartHartFit {
        let c = &self.steinhart_hart;
        SteinhartHartFit::new(c.a, c.b, c.c)
    }

    pub fn beta(&self) -> BetaFit {
        BetaFit::new(self.beta_model.beta, self.beta_model.r25)
    }
}

impl From<&Calibration> for CoefficientReport {
    fn from(calibration: &Calibration) -> Self {
        let sh = calibration.steinhart;
        let beta = calibration.beta;
        Self {
            steinhart_hart: SteinhartHartCoefficients {
                a: sh.a,
                b: sh.b,
                c: sh.c,
            },
            beta_model: BetaCoefficients {
                beta: beta.beta,
                r25: beta.r25,
            },
            notes: UNITS_NOTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CoefficientReport {
        CoefficientReport {
            steinhart_hart: SteinhartHartCoefficients {
                a: 0.001129241,
                b: 0.0002341077,
                c: 0.00000008775468,
            },
            beta_model: BetaCoefficients {
                beta: 3455.0,
                r25: 10_000.0,
            },
            notes: UNITS_NOTE.to_string(),
        }
    }

    #[test]
    fn field_names_match_the_tool() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["SteinhartHart"]["A"], 0.001129241);
        assert_eq!(json["BetaModel"]["beta"], 3455.0);
        assert_eq!(json["BetaModel"]["R25"], 10_000.0);
        assert_eq!(json["notes"], UNITS_NOTE);
    }

    #[test]
    fn notes_are_optional_on_import() {
        let text = r#"{"SteinhartHart":{"A":1e-3,"B":2e-4,"C":1e-7},"BetaModel":{"beta":3950,"R25":10000}}"#;
        let parsed = CoefficientReport::from_json(text).unwrap();
        assert_eq!(parsed.beta().beta, 3950.0);
        assert!(parsed.notes.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            CoefficientReport::from_json("{\"SteinhartHart\": 3}"),
            Err(crate::CalibrationError::Json(_))
        ));
    }
}
