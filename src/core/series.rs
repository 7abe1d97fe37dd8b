use serde::{Deserialize, Serialize};

/// Data carried by one series.
///
/// Cartesian charts plot one scalar per category; 3-D charts plot `[x, y, z]`
/// triples. Serialized untagged so the JSON matches the library's `data` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Scalars(Vec<f64>),
    Triples(Vec<[f64; 3]>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scalars(values) => values.len(),
            Self::Triples(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index of the first non-finite number, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        match self {
            Self::Scalars(values) => values.iter().position(|v| !v.is_finite()),
            Self::Triples(points) => points
                .iter()
                .position(|p| p.iter().any(|v| !v.is_finite())),
        }
    }

    /// Values along one dimension: scalars for dimension 0, or the given
    /// coordinate of every triple.
    #[must_use]
    pub fn dimension(&self, axis: usize) -> Vec<f64> {
        match self {
            Self::Scalars(values) if axis == 0 => values.clone(),
            Self::Scalars(_) => Vec::new(),
            Self::Triples(points) => points
                .iter()
                .filter_map(|p| p.get(axis).copied())
                .collect(),
        }
    }
}

impl From<Vec<f64>> for SeriesData {
    fn from(values: Vec<f64>) -> Self {
        Self::Scalars(values)
    }
}

impl From<Vec<[f64; 3]>> for SeriesData {
    fn from(points: Vec<[f64; 3]>) -> Self {
        Self::Triples(points)
    }
}

/// Category-axis label: either a number (`1`, `100`) or a short name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryLabel {
    Integer(i64),
    Text(String),
}

impl CategoryLabel {
    /// Converts a list of integers into category labels.
    #[must_use]
    pub fn integers(values: impl IntoIterator<Item = i64>) -> Vec<Self> {
        values.into_iter().map(Self::Integer).collect()
    }

    /// Converts a list of names into category labels.
    #[must_use]
    pub fn texts<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Vec<Self> {
        values.into_iter().map(|s| Self::Text(s.into())).collect()
    }
}
