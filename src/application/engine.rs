use crate::domain::point::Shape;
use crate::domain::ports::ParameterSource;
use crate::domain::transform::{Operation, Transform};
use crate::error::{Result, TransformError};
use tracing::debug;

/// A single transform request whose operation tag is already recognized.
#[derive(Debug, PartialEq, Clone)]
pub struct TransformRequest<P> {
    pub shape: Option<Shape>,
    pub operation: Operation,
    pub params: P,
}

/// Dispatches transform requests.
///
/// `TransformEngine` holds the reference shape used for requests that carry
/// none. It has no other state, so one instance serves every request.
#[derive(Debug, Clone)]
pub struct TransformEngine {
    reference_shape: Shape,
}

impl TransformEngine {
    /// Creates a new `TransformEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `reference_shape` - Shape used when a request does not supply one.
    pub fn new(reference_shape: Shape) -> Self {
        Self { reference_shape }
    }

    pub fn reference_shape(&self) -> &Shape {
        &self.reference_shape
    }

    /// Parses the operation tag, then resolves and applies the transform.
    ///
    /// The tag is checked before any parameter is read, so an unknown tag is
    /// reported even when the parameters are also incomplete.
    pub fn transform<P: ParameterSource + ?Sized>(
        &self,
        shape: Option<&Shape>,
        op: &str,
        params: &P,
    ) -> Result<Shape> {
        let operation: Operation = op.parse()?;
        self.apply(shape, operation, params)
    }

    pub fn process<P: ParameterSource>(&self, request: &TransformRequest<P>) -> Result<Shape> {
        self.apply(request.shape.as_ref(), request.operation, &request.params)
    }

    fn apply<P: ParameterSource + ?Sized>(
        &self,
        shape: Option<&Shape>,
        operation: Operation,
        params: &P,
    ) -> Result<Shape> {
        let transform = Transform::resolve(operation, params)?;
        let shape = shape.unwrap_or(&self.reference_shape);

        debug!(op = %operation, points = shape.len(), "applying transform");
        let result = transform.apply(shape);
        // serde_json writes infinities and NaN as null.
        if !result.is_finite() {
            return Err(TransformError::NonFiniteResult);
        }
        Ok(result)
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new(crate::domain::point::reference_shape())
    }
}
