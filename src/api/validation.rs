use crate::core::SeriesData;
use crate::error::{ChartError, ChartResult};

use super::{
    Axis3D, CartesianAxis, ChartDefinition, ChartOption, MAX_FORMATTER_DECIMALS, ValueFormatter,
};

pub(super) fn validate_definition(definition: &ChartDefinition) -> ChartResult<()> {
    validate_element_id(&definition.element_id)?;

    if let Some(size) = definition.size {
        if !size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }
    }

    if let Some(formatter) = definition.value_formatter {
        validate_value_formatter(formatter)?;
    }

    validate_option(&definition.option)
}

pub(super) fn validate_element_id(element_id: &str) -> ChartResult<()> {
    if element_id.is_empty() {
        return Err(ChartError::InvalidData(
            "chart element id must not be empty".to_owned(),
        ));
    }
    if element_id
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == '<' || c == '>')
    {
        return Err(ChartError::InvalidData(format!(
            "chart element id `{element_id}` contains whitespace, quotes or angle brackets"
        )));
    }
    Ok(())
}

fn validate_value_formatter(formatter: ValueFormatter) -> ChartResult<()> {
    match formatter {
        ValueFormatter::FixedDecimals { decimals } => {
            if decimals > MAX_FORMATTER_DECIMALS {
                return Err(ChartError::InvalidData(format!(
                    "tooltip value precision must be <= {MAX_FORMATTER_DECIMALS}"
                )));
            }
        }
    }
    Ok(())
}

fn validate_option(option: &ChartOption) -> ChartResult<()> {
    for axis in option.x_axis.iter().chain(&option.y_axis) {
        validate_cartesian_axis(axis)?;
    }
    for axis in option.axes_3d().into_iter().flatten() {
        validate_axis_3d(axis)?;
    }

    let category_count = option.x_axis.first().and_then(CartesianAxis::category_count);
    let has_cartesian = !option.x_axis.is_empty() && !option.y_axis.is_empty();
    let has_3d = option.axes_3d().iter().all(Option::is_some);

    for series in &option.series {
        let label = series.name.as_deref().unwrap_or("<unnamed>");

        if let Some(index) = series.data.first_non_finite() {
            return Err(ChartError::InvalidData(format!(
                "series `{label}` has a non-finite value at index {index}"
            )));
        }

        match (&series.data, series.kind.is_3d()) {
            (SeriesData::Triples(_), true) => {
                if !has_3d {
                    return Err(ChartError::InvalidData(format!(
                        "3-D series `{label}` needs x, y and z 3-D axes"
                    )));
                }
            }
            (SeriesData::Scalars(values), false) => {
                if !has_cartesian {
                    return Err(ChartError::InvalidData(format!(
                        "series `{label}` needs an x and a y axis"
                    )));
                }
                if let Some(expected) = category_count {
                    if values.len() != expected {
                        return Err(ChartError::LengthMismatch {
                            context: "series values per category",
                            expected,
                            actual: values.len(),
                        });
                    }
                }
            }
            // An empty scalar list carries no shape; accept it for 3-D kinds.
            (SeriesData::Scalars(values), true) if values.is_empty() => {
                if !has_3d {
                    return Err(ChartError::InvalidData(format!(
                        "3-D series `{label}` needs x, y and z 3-D axes"
                    )));
                }
            }
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "series `{label}` data shape does not match its type"
                )));
            }
        }
    }

    Ok(())
}

fn validate_cartesian_axis(axis: &CartesianAxis) -> ChartResult<()> {
    if axis.category_count() == Some(0) {
        return Err(ChartError::InvalidData(
            "category axis must have at least one label".to_owned(),
        ));
    }
    validate_range(axis.min, axis.max, axis.interval)
}

fn validate_axis_3d(axis: &Axis3D) -> ChartResult<()> {
    validate_range(axis.min, axis.max, axis.interval)
}

fn validate_range(min: Option<f64>, max: Option<f64>, interval: Option<f64>) -> ChartResult<()> {
    for value in [min, max].into_iter().flatten() {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "axis min/max must be finite".to_owned(),
            ));
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min >= max {
            return Err(ChartError::InvalidData(format!(
                "axis min ({min}) must be lower than max ({max})"
            )));
        }
    }
    if let Some(interval) = interval {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis interval must be finite and > 0".to_owned(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_rejects_quotes() {
        assert!(validate_element_id("chart-\"x\"").is_err());
        assert!(validate_element_id("chart-elevator-count").is_ok());
    }

    #[test]
    fn range_rejects_zero_interval() {
        assert!(validate_range(Some(0.0), Some(1.0), Some(0.0)).is_err());
        assert!(validate_range(Some(0.0), Some(1.0), Some(1.0)).is_ok());
        assert!(validate_range(None, None, None).is_ok());
    }
}
