use crate::domain::point::Shape;
use crate::error::Result;
use std::io::Write;

/// Writes a shape as `x,y` CSV, one vertex per row.
pub struct ShapeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ShapeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_shape(&mut self, shape: &Shape) -> Result<()> {
        self.writer.write_record(["x", "y"])?;
        for point in shape.iter() {
            self.writer
                .write_record([point.x.to_string(), point.y.to_string()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
