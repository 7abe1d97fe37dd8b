use approx::assert_abs_diff_eq;
use blog_charts::ChartError;
use blog_charts::core::{pairwise_ratio, range_labels, ratio};

#[test]
fn ratio_divides_every_value_by_baseline() {
    let values = [37.8393639353616, 47.448846883705926, 55.29700344923757];
    let out = ratio(&values, 55.29700344923757).expect("ratio");

    assert_eq!(out.len(), values.len());
    for (value, derived) in values.iter().zip(&out) {
        assert_eq!(*derived, value / 55.29700344923757);
    }
    assert_eq!(out[2], 1.0);
}

#[test]
fn ratio_of_baseline_alone_is_one() {
    let out = ratio(&[186.31], 186.31).expect("ratio");
    assert_eq!(out, vec![1.0]);
}

#[test]
fn ratio_rejects_zero_baseline() {
    let err = ratio(&[1.0, 2.0], 0.0).expect_err("zero baseline must fail");
    assert!(matches!(
        err,
        ChartError::InvalidBaseline {
            index: None,
            baseline
        } if baseline == 0.0
    ));
}

#[test]
fn ratio_rejects_non_finite_input() {
    assert!(ratio(&[1.0, f64::NAN], 2.0).is_err());
    assert!(ratio(&[1.0], f64::INFINITY).is_err());
}

#[test]
fn ratio_of_empty_input_is_empty() {
    assert!(ratio(&[], 3.0).expect("ratio").is_empty());
}

#[test]
fn pairwise_ratio_matches_throughput_reference_values() {
    let out = pairwise_ratio(&[186.18, 215.83, 304.71], &[186.31, 214.49, 306.53])
        .expect("pairwise ratio");

    assert_abs_diff_eq!(out[0], 0.99930, epsilon = 1e-4);
    assert_abs_diff_eq!(out[1], 1.00623, epsilon = 1e-4);
    assert_abs_diff_eq!(out[2], 0.99408, epsilon = 1e-4);
}

#[test]
fn pairwise_ratio_rejects_length_mismatch() {
    let err = pairwise_ratio(&[1.0, 2.0], &[1.0]).expect_err("lengths differ");
    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn pairwise_ratio_reports_zero_baseline_index() {
    let err = pairwise_ratio(&[1.0, 2.0, 3.0], &[1.0, 0.0, 1.0]).expect_err("zero baseline");
    assert!(matches!(
        err,
        ChartError::InvalidBaseline { index: Some(1), .. }
    ));
    assert!(format!("{err}").contains("at index 1"));
}

#[test]
fn range_labels_step_by_hundred() {
    let labels = range_labels(20, 100).expect("labels");
    let expected: Vec<i64> = (0..20).map(|k| k * 100).collect();
    assert_eq!(labels, expected);
    assert_eq!(labels.first(), Some(&0));
    assert_eq!(labels.last(), Some(&1900));
}

#[test]
fn range_labels_of_zero_count_is_empty() {
    assert!(range_labels(0, 100).expect("labels").is_empty());
}

#[test]
fn range_labels_reports_overflow() {
    let err = range_labels(3, i64::MAX).expect_err("2 * i64::MAX overflows");
    assert!(format!("{err}").contains("overflows"));
}

#[test]
fn ratio_rejects_overflowing_quotient() {
    let err = ratio(&[1.0, 1e308], 1e-10).expect_err("1e308 / 1e-10 overflows");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(format!("{err}").contains("index 1"));
}

#[test]
fn pairwise_ratio_rejects_overflowing_quotient() {
    let err = pairwise_ratio(&[1.0], &[5e-324]).expect_err("1 / min subnormal overflows");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(format!("{err}").contains("index 0"));
}
