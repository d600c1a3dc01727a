use thiserror::Error;

/// Failures raised by store operations. A failed operation leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested key.
    #[error("{kind} not found")]
    NotFound { kind: &'static str, key: String },

    /// The request violates a precondition of the operation.
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
