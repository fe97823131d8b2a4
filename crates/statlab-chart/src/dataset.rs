use serde::Serialize;

/// Display role of a single chart point.
///
/// The frontend maps these to its palette; the projection layer only says
/// which points belong to the highlighted region (a queried outcome, a
/// shaded tail, an outlier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointColor {
    /// An ordinary point.
    Base,
    /// A point inside the highlighted region.
    Accent,
}

/// A label/value/color triple series ready for chart rendering.
///
/// The three vectors always have equal length, one entry per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    /// Per-point display labels.
    pub labels: Vec<String>,
    /// Per-point numeric values.
    pub values: Vec<f64>,
    /// Per-point display roles.
    pub colors: Vec<PointColor>,
}

impl ChartDataset {
    /// An empty dataset to extend point by point.
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: vec![],
            values: vec![],
            colors: vec![],
        }
    }

    /// Appends one point.
    pub fn push(&mut self, label: impl Into<String>, value: f64, color: PointColor) {
        self.labels.push(label.into());
        self.values.push(value);
        self.colors.push(color);
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for ChartDataset {
    fn default() -> Self {
        Self::new()
    }
}
