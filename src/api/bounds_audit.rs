use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, SeriesData};

use super::{AxisKind, ChartDefinition, ChartOption};

/// Axis named in a bounds-audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditedAxis {
    Y,
    X3D,
    Y3D,
    Z3D,
}

/// Data falling outside an author-declared axis range.
///
/// Declared ranges are hand-picked constants; the library clips data outside
/// them, so findings are reported, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBoundsFinding {
    pub axis: AuditedAxis,
    pub declared_min: Option<f64>,
    pub declared_max: Option<f64>,
    pub observed: AxisBounds,
}

impl ChartDefinition {
    /// Compares each declared axis range with the observed data range.
    #[must_use]
    pub fn audit_axis_bounds(&self) -> Vec<AxisBoundsFinding> {
        audit_option(&self.option)
    }
}

fn audit_option(option: &ChartOption) -> Vec<AxisBoundsFinding> {
    let mut findings = Vec::new();

    if let Some(y_axis) = option.y_axis.first() {
        if y_axis.kind == AxisKind::Value {
            let values = collect_dimension(option, false, 0);
            push_finding(&mut findings, AuditedAxis::Y, y_axis.min, y_axis.max, &values);
        }
    }

    let axes = [AuditedAxis::X3D, AuditedAxis::Y3D, AuditedAxis::Z3D];
    for (dimension, (axis, declared)) in axes.into_iter().zip(option.axes_3d()).enumerate() {
        let Some(declared) = declared else {
            continue;
        };
        let values = collect_dimension(option, true, dimension);
        push_finding(&mut findings, axis, declared.min, declared.max, &values);
    }

    findings
}

fn collect_dimension(option: &ChartOption, three_d: bool, dimension: usize) -> Vec<f64> {
    option
        .series
        .iter()
        .filter(|s| matches!(s.data, SeriesData::Triples(_)) == three_d)
        .flat_map(|s| s.data.dimension(dimension))
        .collect()
}

fn push_finding(
    findings: &mut Vec<AxisBoundsFinding>,
    axis: AuditedAxis,
    declared_min: Option<f64>,
    declared_max: Option<f64>,
    values: &[f64],
) {
    if declared_min.is_none() && declared_max.is_none() {
        return;
    }
    let Some(observed) = AxisBounds::enclosing(values) else {
        return;
    };

    let below = declared_min.is_some_and(|min| observed.min < min);
    let above = declared_max.is_some_and(|max| observed.max > max);
    if below || above {
        findings.push(AxisBoundsFinding {
            axis,
            declared_min,
            declared_max,
            observed,
        });
    }
}
