//! Derived series: the only arithmetic the blog figures perform.

use crate::error::{ChartError, ChartResult};

/// Divides every value by a shared `baseline`, preserving order and count.
///
/// The entry equal to the baseline maps to exactly `1.0`. A zero or
/// non-finite baseline is rejected, as is any quotient that overflows.
pub fn ratio(values: &[f64], baseline: f64) -> ChartResult<Vec<f64>> {
    check_baseline(baseline, None)?;

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| -> ChartResult<f64> {
            check_value(value, index)?;
            check_quotient(value / baseline, index)
        })
        .collect()
}

/// Divides `values[i]` by `baselines[i]` for every index.
///
/// Both slices must have the same length.
pub fn pairwise_ratio(values: &[f64], baselines: &[f64]) -> ChartResult<Vec<f64>> {
    if values.len() != baselines.len() {
        return Err(ChartError::LengthMismatch {
            context: "pairwise ratio baselines",
            expected: values.len(),
            actual: baselines.len(),
        });
    }

    values
        .iter()
        .zip(baselines)
        .enumerate()
        .map(|(index, (&value, &baseline))| -> ChartResult<f64> {
            check_value(value, index)?;
            check_baseline(baseline, Some(index))?;
            check_quotient(value / baseline, index)
        })
        .collect()
}

/// Produces `[0, step, 2 * step, ..., (count - 1) * step]`.
///
/// Used for evenly spaced category labels.
pub fn range_labels(count: usize, step: i64) -> ChartResult<Vec<i64>> {
    (0..count)
        .map(|k| {
            i64::try_from(k)
                .ok()
                .and_then(|k| k.checked_mul(step))
                .ok_or_else(|| {
                    ChartError::InvalidData(format!("range label {k} * {step} overflows i64"))
                })
        })
        .collect()
}

fn check_baseline(baseline: f64, index: Option<usize>) -> ChartResult<()> {
    if !baseline.is_finite() || baseline == 0.0 {
        return Err(ChartError::InvalidBaseline { index, baseline });
    }
    Ok(())
}

fn check_quotient(quotient: f64, index: usize) -> ChartResult<f64> {
    if !quotient.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "ratio at index {index} overflows f64"
        )));
    }
    Ok(quotient)
}

fn check_value(value: f64, index: usize) -> ChartResult<()> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "ratio input at index {index} must be finite"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_position_is_exactly_one() {
        let baseline = 55.29700344923757;
        let out = ratio(&[37.8393639353616, baseline], baseline).expect("ratio");
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn negative_zero_baseline_is_rejected() {
        assert!(ratio(&[1.0], -0.0).is_err());
    }
}
