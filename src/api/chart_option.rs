use serde::{Deserialize, Serialize};

use crate::core::{CategoryLabel, SeriesData};

/// Typed subset of the ECharts option object used by the blog figures.
///
/// Field names serialize in the library's camelCase and unset options are
/// omitted, so the JSON can be passed to `setOption` as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x_axis: Vec<CartesianAxis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y_axis: Vec<CartesianAxis>,
    #[serde(rename = "xAxis3D", default, skip_serializing_if = "Option::is_none")]
    pub x_axis_3d: Option<Axis3D>,
    #[serde(rename = "yAxis3D", default, skip_serializing_if = "Option::is_none")]
    pub y_axis_3d: Option<Axis3D>,
    #[serde(rename = "zAxis3D", default, skip_serializing_if = "Option::is_none")]
    pub z_axis_3d: Option<Axis3D>,
    #[serde(rename = "grid3D", default, skip_serializing_if = "Option::is_none")]
    pub grid_3d: Option<Grid3D>,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl ChartOption {
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.x_axis_3d.is_some() || self.y_axis_3d.is_some() || self.z_axis_3d.is_some()
    }

    #[must_use]
    pub fn axes_3d(&self) -> [Option<&Axis3D>; 3] {
        [
            self.x_axis_3d.as_ref(),
            self.y_axis_3d.as_ref(),
            self.z_axis_3d.as_ref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl TextStyle {
    #[must_use]
    pub fn new(font_family: impl Into<String>, font_size: u32) -> Self {
        Self {
            font_family: Some(font_family.into()),
            font_size: Some(font_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Item,
    Axis,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPointerKind {
    Line,
    Shadow,
    Cross,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: AxisPointerKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<TooltipTrigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
}

impl Tooltip {
    /// Axis-triggered tooltip with a shaded band over the hovered category.
    #[must_use]
    pub fn axis_shadow() -> Self {
        Self {
            trigger: Some(TooltipTrigger::Axis),
            axis_pointer: Some(AxisPointer {
                kind: AxisPointerKind::Shadow,
            }),
            text_style: None,
        }
    }

    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }
}

/// Plot-area margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contain_label: Option<bool>,
}

impl Grid {
    /// Margins with axis labels kept inside the grid.
    #[must_use]
    pub fn margins(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            contain_label: Some(true),
        }
    }
}

/// Library-default legend (`legend: {}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Legend {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLocation {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

impl AxisLabel {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show: Some(false),
            text_style: TextStyle::default(),
        }
    }

    #[must_use]
    pub fn styled(text_style: TextStyle) -> Self {
        Self {
            show: None,
            text_style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisTick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

/// One `xAxis` / `yAxis` entry of a cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianAxis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<CategoryLabel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_location: Option<NameLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
}

impl CartesianAxis {
    #[must_use]
    pub fn category(labels: Vec<CategoryLabel>) -> Self {
        Self {
            kind: AxisKind::Category,
            data: Some(labels),
            ..Self::value()
        }
    }

    #[must_use]
    pub fn value() -> Self {
        Self {
            kind: AxisKind::Value,
            data: None,
            name: None,
            name_location: None,
            name_gap: None,
            axis_label: None,
            min: None,
            max: None,
            interval: None,
        }
    }

    /// Axis title centred along the axis, `gap` pixels away from it.
    #[must_use]
    pub fn centered_name(mut self, name: impl Into<String>, gap: u32) -> Self {
        self.name = Some(name.into());
        self.name_location = Some(NameLocation::Center);
        self.name_gap = Some(gap);
        self
    }

    #[must_use]
    pub fn label_style(mut self, text_style: TextStyle) -> Self {
        self.axis_label = Some(AxisLabel::styled(text_style));
        self
    }

    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn category_count(&self) -> Option<usize> {
        match self.kind {
            AxisKind::Category => self.data.as_ref().map(Vec::len),
            AxisKind::Value => None,
        }
    }
}

/// One of `xAxis3D` / `yAxis3D` / `zAxis3D`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis3D {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
}

impl Axis3D {
    #[must_use]
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            kind: AxisKind::Value,
            name: Some(name.into()),
            name_gap: None,
            name_text_style: None,
            min: None,
            max: None,
            interval: None,
        }
    }

    #[must_use]
    pub fn name_gap(mut self, gap: u32) -> Self {
        self.name_gap = Some(gap);
        self
    }

    #[must_use]
    pub fn name_text_style(mut self, text_style: TextStyle) -> Self {
        self.name_text_style = Some(text_style);
        self
    }

    #[must_use]
    pub fn range(mut self, min: f64, max: f64, interval: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.interval = Some(interval);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// Camera of a 3-D grid. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orthographic_size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid3D {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_control: Option<ViewControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTick>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "scatter3D")]
    Scatter3D,
    #[serde(rename = "line3D")]
    Line3D,
}

impl SeriesKind {
    /// Whether the series plots `[x, y, z]` triples on a 3-D grid.
    #[must_use]
    pub fn is_3d(self) -> bool {
        matches!(self, Self::Scatter3D | Self::Line3D)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SeriesRepr")]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: SeriesData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
}

/// Wire shape of [`Series`]; `data` alone cannot tell an empty list of
/// triples from an empty list of scalars, so the series type decides.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesRepr {
    #[serde(rename = "type")]
    kind: SeriesKind,
    #[serde(default)]
    name: Option<String>,
    data: SeriesData,
    #[serde(default)]
    line_style: Option<LineStyle>,
    #[serde(default)]
    silent: Option<bool>,
}

impl From<SeriesRepr> for Series {
    fn from(repr: SeriesRepr) -> Self {
        let data = match repr.data {
            SeriesData::Scalars(values) if values.is_empty() && repr.kind.is_3d() => {
                SeriesData::Triples(Vec::new())
            }
            data => data,
        };
        Self {
            kind: repr.kind,
            name: repr.name,
            data,
            line_style: repr.line_style,
            silent: repr.silent,
        }
    }
}

impl Series {
    #[must_use]
    pub fn bar(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self::new(SeriesKind::Bar, name, SeriesData::Scalars(data))
    }

    #[must_use]
    pub fn scatter_3d(name: impl Into<String>, points: Vec<[f64; 3]>) -> Self {
        Self::new(SeriesKind::Scatter3D, name, SeriesData::Triples(points))
    }

    #[must_use]
    pub fn line_3d(name: impl Into<String>, points: Vec<[f64; 3]>) -> Self {
        Self::new(SeriesKind::Line3D, name, SeriesData::Triples(points))
    }

    #[must_use]
    pub fn new(kind: SeriesKind, name: impl Into<String>, data: SeriesData) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            data,
            line_style: None,
            silent: None,
        }
    }

    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_style = Some(LineStyle { width: Some(width) });
        self
    }

    /// Disables hover and click interaction on this series.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.silent = Some(true);
        self
    }
}
