/// Arithmetic mean, `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population standard deviation, `None` for an empty slice.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    let mean = mean(data)?;
    let variance = data
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[600.0, 800.0, 1000.0]), Some(800.0));
        assert_eq!(mean(&[42.0]), Some(42.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_mixed_signs() {
        assert_eq!(mean(&[-10.0, 0.0, 10.0]), Some(0.0));
    }

    #[test]
    fn test_std_dev() {
        assert_eq!(std_dev(&[5.0, 5.0, 5.0]), Some(0.0));
        assert_eq!(std_dev(&[]), None);
        let spread = std_dev(&[100.0, 200.0, 300.0]).unwrap();
        assert!((spread - 81.64965809277261).abs() < 1e-9);
    }
}
