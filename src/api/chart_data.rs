use serde::{Deserialize, Serialize};

/// Series kind understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Bar,
    Scatter,
}

/// Free `{x, y}` point. Non-finite coordinates are written as `null` and
/// read back as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(with = "nullable_coordinate")]
    pub x: f64,
    #[serde(with = "nullable_coordinate")]
    pub y: f64,
}

impl ChartPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dataset payload: one value per label, or free `{x, y}` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetData {
    Values(Vec<f64>),
    Points(Vec<ChartPoint>),
}

impl DatasetData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Points(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Points(_) => None,
        }
    }

    #[must_use]
    pub fn as_points(&self) -> Option<&[ChartPoint]> {
        match self {
            Self::Points(points) => Some(points),
            Self::Values(_) => None,
        }
    }
}

/// Fill color: one for the whole dataset or one per bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerBucket(Vec<String>),
}

/// One renderable series with its style attributes.
///
/// Unset style attributes are omitted from the serialized payload so the
/// renderer falls back to its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(rename = "type")]
    pub kind: DatasetKind,
    pub label: String,
    pub data: DatasetData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(kind: DatasetKind, label: impl Into<String>, data: DatasetData) -> Self {
        Self {
            kind,
            label: label.into(),
            data,
            background_color: None,
            border_width: None,
            border_color: None,
            border_dash: None,
            show_line: None,
            grouped: None,
            order: None,
            category_percentage: None,
            bar_percentage: None,
            point_style: None,
            point_radius: None,
        }
    }
}

/// Chart-ready histogram payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Bucket centres.
    pub labels: Vec<f64>,
    pub datasets: Vec<ChartDataset>,
    pub tick_step_size: f64,
}

impl ChartData {
    pub fn datasets_of_kind(&self, kind: DatasetKind) -> impl Iterator<Item = &ChartDataset> {
        self.datasets.iter().filter(move |dataset| dataset.kind == kind)
    }
}

mod nullable_coordinate {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
