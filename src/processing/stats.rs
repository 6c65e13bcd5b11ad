// src/processing/stats.rs
//! Small statistics helpers shared by the gait and FOG analyses

/// Per-sample Euclidean magnitude of a 3-axis block.
pub fn magnitude_series(x: &[f32], y: &[f32], z: &[f32], out: &mut Vec<f32>) {
    debug_assert!(x.len() == y.len() && y.len() == z.len());
    out.clear();
    out.reserve(x.len());
    for i in 0..x.len() {
        out.push((x[i] * x[i] + y[i] * y[i] + z[i] * z[i]).sqrt());
    }
}

pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population variance.
pub fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    values.iter().map(|v| (v - mu) * (v - mu)).sum::<f32>() / values.len() as f32
}

pub fn std_dev(values: &[f32]) -> f32 {
    variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_series() {
        let mut out = Vec::new();
        magnitude_series(&[3.0, 0.0], &[4.0, 0.0], &[0.0, 2.0], &mut out);
        assert_eq!(out, vec![5.0, 2.0]);
    }

    #[test]
    fn test_variance_of_constant_is_zero() {
        let values = [1.5f32; 10];
        assert_eq!(variance(&values), 0.0);
    }

    #[test]
    fn test_variance_matches_hand_computation() {
        // mean 2.5, squared deviations 2.25+0.25+0.25+2.25
        let values = [1.0f32, 2.0, 3.0, 4.0];
        assert!((variance(&values) - 1.25).abs() < 1e-6);
        assert!((std_dev(&values) - 1.25f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[]), 0.0);
    }
}
