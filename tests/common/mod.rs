use affine_shape::domain::point::{Point, Shape};
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const TOLERANCE: f64 = 1e-6;

pub fn random_shape<R: Rng>(rng: &mut R, max_points: usize) -> Shape {
    let len = rng.gen_range(1..=max_points);
    (0..len)
        .map(|_| Point::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)))
        .collect()
}

pub fn write_shape_csv(path: &Path, points: &[(f64, f64)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["x", "y"])?;
    for (x, y) in points {
        wtr.write_record([x.to_string(), y.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
