use super::point::{Point, Shape};
use super::ports::ParameterSource;
use crate::error::{Result, TransformError};
use std::fmt;
use std::str::FromStr;

/// The operation selector carried by a transform request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Translate,
    Rotate,
    Scale,
}

impl Operation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Translate => "translate",
            Operation::Rotate => "rotate",
            Operation::Scale => "scale",
        }
    }
}

impl FromStr for Operation {
    type Err = TransformError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "translate" => Ok(Operation::Translate),
            "rotate" => Ok(Operation::Rotate),
            "scale" => Ok(Operation::Scale),
            other => Err(TransformError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved transform, ready to be applied to any shape.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Transform {
    Translate { dx: f64, dy: f64 },
    Rotate { angle_deg: f64, pivot: Point },
    Scale { kx: f64, ky: f64, pivot: Point },
}

impl Transform {
    /// Reads the parameters `op` needs from `params`.
    pub fn resolve<P: ParameterSource + ?Sized>(op: Operation, params: &P) -> Result<Self> {
        let transform = match op {
            Operation::Translate => Transform::Translate {
                dx: params.number("dx")?,
                dy: params.number("dy")?,
            },
            Operation::Rotate => Transform::Rotate {
                angle_deg: params.number("angle")?,
                pivot: Point::new(params.number("cx")?, params.number("cy")?),
            },
            Operation::Scale => Transform::Scale {
                kx: params.number("kx")?,
                ky: params.number("ky")?,
                pivot: Point::new(params.number("cx")?, params.number("cy")?),
            },
        };
        Ok(transform)
    }

    pub fn apply(&self, shape: &Shape) -> Shape {
        match *self {
            Transform::Translate { dx, dy } => translate(shape, dx, dy),
            Transform::Rotate { angle_deg, pivot } => rotate(shape, angle_deg, pivot.x, pivot.y),
            Transform::Scale { kx, ky, pivot } => scale(shape, kx, ky, pivot.x, pivot.y),
        }
    }
}

/// Shifts every vertex by `(dx, dy)`.
pub fn translate(shape: &Shape, dx: f64, dy: f64) -> Shape {
    shape.map_points(|p| Point::new(p.x + dx, p.y + dy))
}

/// Rotates every vertex about `(cx, cy)`. Positive angles turn
/// counterclockwise in standard mathematical orientation.
pub fn rotate(shape: &Shape, angle_deg: f64, cx: f64, cy: f64) -> Shape {
    let (sin_t, cos_t) = angle_deg.to_radians().sin_cos();
    shape.map_points(|p| {
        let x0 = p.x - cx;
        let y0 = p.y - cy;
        Point::new(x0 * cos_t - y0 * sin_t + cx, x0 * sin_t + y0 * cos_t + cy)
    })
}

/// Scales every vertex about `(cx, cy)`. Zero and negative factors are
/// accepted: zero collapses onto the pivot axis, negative reflects.
pub fn scale(shape: &Shape, kx: f64, ky: f64, cx: f64, cy: f64) -> Shape {
    shape.map_points(|p| Point::new((p.x - cx) * kx + cx, (p.y - cy) * ky + cy))
}
