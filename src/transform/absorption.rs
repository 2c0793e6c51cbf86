//! Extinction coefficient from internal transmittance.

use crate::config::MM_TO_UM;
use crate::model::{AbsorptionPoint, TransmittanceSample};
use std::f64::consts::PI;

/// `k = -λ/(4π) · ln(T) / d`, with λ and d in µm.
///
/// `None` when the logarithm or the division is undefined: zero or
/// negative transmittance, non-positive thickness.
pub fn extinction_coefficient(sample: &TransmittanceSample) -> Option<f64> {
    if sample.transmittance <= 0.0 || sample.thickness <= 0.0 {
        return None;
    }

    let k = -sample.wavelength / (4.0 * PI) * sample.transmittance.ln()
        / (sample.thickness * MM_TO_UM);

    // T = 1 gives -0.0
    Some(if k == 0.0 { 0.0 } else { k })
}

/// Absorption points for every usable sample, in input order.
pub fn derive_absorption(samples: &[TransmittanceSample]) -> Vec<AbsorptionPoint> {
    samples
        .iter()
        .filter_map(|sample| {
            extinction_coefficient(sample).map(|k| AbsorptionPoint {
                wavelength: sample.wavelength,
                k,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(wavelength: f64, transmittance: f64, thickness: f64) -> TransmittanceSample {
        TransmittanceSample {
            wavelength,
            transmittance,
            thickness,
        }
    }

    #[test]
    fn test_inverse_recovers_transmittance() {
        for s in [
            sample(0.3, 0.992, 10.0),
            sample(2.5, 0.8, 10.0),
            sample(0.35, 0.05, 25.0),
        ] {
            let k = extinction_coefficient(&s).unwrap();
            assert!(k > 0.0);
            let t = (-4.0 * PI * k * s.thickness * MM_TO_UM / s.wavelength).exp();
            assert!((t - s.transmittance).abs() < 1e-12, "{t} vs {}", s.transmittance);
        }
    }

    #[test]
    fn test_zero_transmittance_dropped() {
        let points = derive_absorption(&[
            sample(0.3, 0.0, 10.0),
            sample(0.4, 0.5, 10.0),
            sample(0.5, 0.0, 10.0),
        ]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].wavelength, 0.4);
    }

    #[test]
    fn test_full_transmittance_is_positive_zero() {
        let k = extinction_coefficient(&sample(1.0, 1.0, 10.0)).unwrap();
        assert_eq!(k, 0.0);
        assert!(k.is_sign_positive());
    }

    #[test]
    fn test_invalid_samples_dropped() {
        assert_eq!(extinction_coefficient(&sample(1.0, -0.1, 10.0)), None);
        assert_eq!(extinction_coefficient(&sample(1.0, 0.5, 0.0)), None);
    }

    #[test]
    fn test_order_preserved() {
        let points = derive_absorption(&[sample(2.5, 0.8, 10.0), sample(0.3, 0.992, 10.0)]);
        let wavelengths: Vec<f64> = points.iter().map(|p| p.wavelength).collect();
        assert_eq!(wavelengths, vec![2.5, 0.3]);
    }
}
