use serde::{Deserialize, Serialize};

/// A 2D point. Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Compares both coordinates within `tolerance`.
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of points forming a closed polygon.
///
/// Point order defines edge connectivity, so every transform maps the i-th
/// input vertex to the i-th output vertex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<Point>);

impl Shape {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.0.iter()
    }

    /// Builds a new shape by mapping every vertex, preserving order.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Shape {
        Shape(self.0.iter().copied().map(f).collect())
    }

    /// False when any coordinate is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    pub fn approx_eq(&self, other: &Shape, tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.approx_eq(*b, tolerance))
    }
}

impl FromIterator<Point> for Shape {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The built-in 8-vertex polygon served when a request omits its shape.
pub fn reference_shape() -> Shape {
    [
        (50.0, 200.0),
        (150.0, 80.0),
        (250.0, 200.0),
        (350.0, 100.0),
        (450.0, 200.0),
        (370.0, 260.0),
        (250.0, 180.0),
        (130.0, 260.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}
