//! Three-point Steinhart-Hart fit
//!
//! Solves
//!
//! ```text
//! 1/T = A + B·ln R + C·(ln R)³        (T in Kelvin)
//! ```
//!
//! for A, B, C from exactly three measured points. The 3×3 system is solved by
//! Gaussian elimination with partial pivoting in `f64`; the fitted curve is
//! exact at the three points.

use serde::{Deserialize, Serialize};
use thermisense_core::SteinhartHartModel;

use crate::{
    errors::{CalibrationError, CalibrationResult},
    points::{celsius_to_kelvin, kelvin_to_celsius, validate_all, CalibrationPoint},
};

/// Pivot magnitude below which the system is treated as singular
const SINGULAR_PIVOT: f64 = 1e-300;

const NEWTON_START_OHMS: f64 = 10_000.0;
const NEWTON_MAX_ITERATIONS: usize = 60;
const NEWTON_TOLERANCE_OHMS: f64 = 1e-9;
const NEWTON_FLOOR_OHMS: f64 = 1e-9;

/// Steinhart-Hart coefficients in 1/K
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteinhartHartFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl SteinhartHartFit {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Fit the curve through exactly three points
    pub fn fit(points: &[CalibrationPoint]) -> CalibrationResult<Self> {
        if points.len() != 3 {
            return Err(CalibrationError::WrongPointCount(points.len()));
        }
        validate_all(points)?;

        let mut system = [[0.0f64; 4]; 3];
        for (row, point) in system.iter_mut().zip(points) {
            let ln_r = point.resistance_ohms.ln();
            *row = [1.0, ln_r, ln_r * ln_r * ln_r, 1.0 / point.kelvin()];
        }

        let [a, b, c] = solve(system)?;
        log::debug!("Steinhart-Hart fit A={:e} B={:e} C={:e}", a, b, c);
        Ok(Self { a, b, c })
    }

    fn inverse_kelvin(&self, resistance_ohms: f64) -> f64 {
        let ln_r = resistance_ohms.ln();
        self.a + self.b * ln_r + self.c * ln_r * ln_r * ln_r
    }

    /// Temperature in Celsius at a resistance
    pub fn temperature_c(&self, resistance_ohms: f64) -> CalibrationResult<f64> {
        if !(resistance_ohms > 0.0) {
            return Err(CalibrationError::NonPositiveResistance(resistance_ohms));
        }
        let inverse = self.inverse_kelvin(resistance_ohms);
        if !(inverse > 0.0) {
            return Err(CalibrationError::NonPhysicalResult { resistance_ohms });
        }
        Ok(kelvin_to_celsius(1.0 / inverse))
    }

    /// Resistance at a temperature, by Newton iteration on ln R
    ///
    /// The curve has no closed-form inverse. Starts at 10 kΩ; an iterate that
    /// goes non-positive restarts from 1 Ω, and the result never drops below
    /// 1e-9 Ω.
    pub fn resistance_at(&self, temperature_c: f64) -> f64 {
        let target = 1.0 / celsius_to_kelvin(temperature_c);
        let mut r = NEWTON_START_OHMS;

        for _ in 0..NEWTON_MAX_ITERATIONS {
            if r <= 0.0 {
                r = 1.0;
            }
            let ln_r = r.ln();
            let f = self.inverse_kelvin(r) - target;
            let df = (self.b + 3.0 * self.c * ln_r * ln_r) / r;
            let step = if df != 0.0 { f / df } else { f * 1e-6 };
            let next = r - step;
            if (next - r).abs() < NEWTON_TOLERANCE_OHMS {
                break;
            }
            r = next;
        }

        r.max(NEWTON_FLOOR_OHMS)
    }

    /// Single-precision model for the firmware side
    pub fn to_model(&self) -> CalibrationResult<SteinhartHartModel> {
        Ok(SteinhartHartModel::new(self.a as f32, self.b as f32, self.c as f32)?)
    }
}

/// Gaussian elimination with partial pivoting on an augmented 3×4 matrix
fn solve(mut m: [[f64; 4]; 3]) -> CalibrationResult<[f64; 3]> {
    for col in 0..3 {
        let pivot = (col..3)
            .max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))
            .unwrap_or(col);
        if !(m[pivot][col].abs() > SINGULAR_PIVOT) {
            return Err(CalibrationError::SingularSystem);
        }
        m.swap(col, pivot);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut x = [0.0f64; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| m[row][k] * x[k]).sum();
        x[row] = (m[row][3] - tail) / m[row][row];
    }

    if x.iter().all(|v| v.is_finite()) {
        Ok(x)
    } else {
        Err(CalibrationError::SingularSystem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> [CalibrationPoint; 3] {
        [
            CalibrationPoint::new(25_000.0, 5.0).unwrap(),
            CalibrationPoint::new(10_000.0, 25.0).unwrap(),
            CalibrationPoint::new(4_000.0, 45.0).unwrap(),
        ]
    }

    #[test]
    fn curve_passes_through_points() {
        let fit = SteinhartHartFit::fit(&points()).unwrap();
        for point in points() {
            let t = fit.temperature_c(point.resistance_ohms).unwrap();
            assert!((t - point.temperature_c).abs() < 1e-9, "{} vs {}", t, point.temperature_c);
        }
    }

    #[test]
    fn newton_inverts_the_curve() {
        let fit = SteinhartHartFit::fit(&points()).unwrap();
        for point in points() {
            let r = fit.resistance_at(point.temperature_c);
            assert!((r - point.resistance_ohms).abs() < 1e-3, "{} vs {}", r, point.resistance_ohms);
        }
        let r = fit.resistance_at(-20.0);
        assert!((fit.temperature_c(r).unwrap() + 20.0).abs() < 1e-6);
    }

    #[test]
    fn point_count_is_exact() {
        let pts = points();
        assert!(matches!(
            SteinhartHartFit::fit(&pts[..2]),
            Err(CalibrationError::WrongPointCount(2))
        ));
    }

    #[test]
    fn repeated_resistance_is_singular() {
        let pts = [
            CalibrationPoint::new(10_000.0, 20.0).unwrap(),
            CalibrationPoint::new(10_000.0, 25.0).unwrap(),
            CalibrationPoint::new(4_000.0, 45.0).unwrap(),
        ];
        assert!(matches!(
            SteinhartHartFit::fit(&pts),
            Err(CalibrationError::SingularSystem)
        ));
    }

    #[test]
    fn negative_inverse_is_rejected() {
        let fit = SteinhartHartFit::new(-1.0, 0.0, 0.0);
        assert!(matches!(
            fit.temperature_c(1_000.0),
            Err(CalibrationError::NonPhysicalResult { .. })
        ));
    }
}
