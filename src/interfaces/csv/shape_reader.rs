use crate::domain::point::{Point, Shape};
use crate::error::{Result, TransformError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct Row {
    x: f64,
    y: f64,
}

/// Reads a shape from CSV with an `x,y` header.
///
/// Rows keep their file order, which becomes the vertex order of the shape.
pub struct ShapeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ShapeReader<R> {
    /// Creates a new `ShapeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator over the vertices, one per row.
    pub fn points(self) -> impl Iterator<Item = Result<Point>> {
        self.reader
            .into_deserialize()
            .map(|row: std::result::Result<Row, csv::Error>| {
                row.map(|r| Point::new(r.x, r.y))
                    .map_err(TransformError::from)
            })
    }

    /// Reads the whole input, failing on the first malformed row.
    pub fn read_shape(self) -> Result<Shape> {
        self.points().collect::<Result<Vec<_>>>().map(Shape::new)
    }
}
