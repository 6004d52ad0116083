/// Error types that can occur during matrix operations
///
/// # Variants
///
/// - `ShapeMismatch` - Indicates that the operand shapes are incompatible for the requested operation
/// - `OutOfRange` - Indicates that an element index lies outside the matrix bounds
/// - `ConstructionMismatch` - Indicates that a data buffer does not hold exactly `rows * columns` elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    ShapeMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    OutOfRange {
        row: usize,
        column: usize,
        shape: (usize, usize),
    },
    ConstructionMismatch {
        rows: usize,
        columns: usize,
        len: usize,
    },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::ShapeMismatch {
                operation: "multiply",
                left,
                right,
            } => write!(
                f,
                "Shape mismatch: matrices cannot be multiplied, left is {}x{} and right is {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::ShapeMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Shape mismatch in {}: left is {}x{} and right is {}x{}",
                operation, left.0, left.1, right.0, right.1
            ),
            MatrixError::OutOfRange { row, column, shape } => write!(
                f,
                "Index out of range: ({}, {}) is outside a {}x{} matrix",
                row, column, shape.0, shape.1
            ),
            MatrixError::ConstructionMismatch { rows, columns, len } => write!(
                f,
                "Construction mismatch: shape {}x{} requires {} elements, got {}",
                rows,
                columns,
                rows.saturating_mul(*columns),
                len
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Error types that can occur during network operations
///
/// # Variants
///
/// - `InputValidationError` - indicates the input data provided does not meet the expected format, type, or validation rules
/// - `ProcessingError` - indicates that there is something wrong while processing
/// - `Matrix` - wraps a failure raised by the underlying matrix engine
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    ProcessingError(String),
    Matrix(MatrixError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            ModelError::Matrix(e) => write!(f, "Matrix error: {}", e),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Matrix(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MatrixError> for ModelError {
    fn from(e: MatrixError) -> Self {
        ModelError::Matrix(e)
    }
}
