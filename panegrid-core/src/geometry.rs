//! Rectangle math shared by the converters
//!
//! Pure functions only: subdivision of a rectangle by weights, per-axis
//! extents, and the statistics used for axis detection.

use serde::{Deserialize, Serialize};

use crate::split::SplitAxis;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at the origin.
    #[must_use]
    pub const fn canvas(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Returns the area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the start coordinate along `axis`.
    #[must_use]
    pub const fn leading(&self, axis: SplitAxis) -> f64 {
        match axis {
            SplitAxis::Horizontal => self.x,
            SplitAxis::Vertical => self.y,
        }
    }

    /// Returns the size along `axis`.
    #[must_use]
    pub const fn extent(&self, axis: SplitAxis) -> f64 {
        match axis {
            SplitAxis::Horizontal => self.width,
            SplitAxis::Vertical => self.height,
        }
    }

    /// Returns the end coordinate along `axis`.
    #[must_use]
    pub fn trailing(&self, axis: SplitAxis) -> f64 {
        self.leading(axis) + self.extent(axis)
    }

    /// Returns true if the point lies inside (right and bottom edges excluded).
    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Returns the smallest rectangle covering every input.
    ///
    /// An empty input yields `Rect::default()`.
    #[must_use]
    pub fn bounding<'a>(rects: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut iter = rects.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (mut x0, mut y0) = (first.x, first.y);
        let (mut x1, mut y1) = (first.x + first.width, first.y + first.height);
        for r in iter {
            x0 = x0.min(r.x);
            y0 = y0.min(r.y);
            x1 = x1.max(r.x + r.width);
            y1 = y1.max(r.y + r.height);
        }
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Splits this rectangle along `axis` in proportion to `weights`.
    ///
    /// The last piece ends exactly on the trailing edge so rounding never
    /// opens a gap. A zero weight sum shares the extent equally.
    #[must_use]
    pub fn subdivide(&self, axis: SplitAxis, weights: &[f64]) -> Vec<Self> {
        let total: f64 = weights.iter().sum();
        let end = self.trailing(axis);
        let size = self.extent(axis);
        let count = weights.len();

        let mut cursor = self.leading(axis);
        let mut pieces = Vec::with_capacity(count);
        for (index, weight) in weights.iter().enumerate() {
            let length = if index + 1 == count {
                end - cursor
            } else if total > 0.0 {
                size * weight / total
            } else {
                size / count as f64
            };
            pieces.push(self.with_span(axis, cursor, length));
            cursor += length;
        }
        pieces
    }

    fn with_span(&self, axis: SplitAxis, start: f64, length: f64) -> Self {
        match axis {
            SplitAxis::Horizontal => Self::new(start, self.y, length, self.height),
            SplitAxis::Vertical => Self::new(self.x, start, self.width, length),
        }
    }
}

/// Replaces NaN and infinities with zero.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Arithmetic mean; zero for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; zero for an empty slice.
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    mean(&values.iter().map(|v| (v - m).powi(2)).collect::<Vec<_>>())
}
