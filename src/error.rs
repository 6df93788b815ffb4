use thiserror::Error;

/// Errors raised while building a schema document.
///
/// Every error is raised at the call that violates the builder's contract;
/// none of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A keyword was used outside the vocabulary of the builder's type(s).
    #[error("keyword `{keyword}` is not available on {variant} schemas")]
    Capability {
        /// JSON name of the rejected keyword.
        keyword: String,
        /// Human readable variant, e.g. `object` or `string|null`.
        variant: String,
    },

    /// The [`SchemaOptions`](crate::SchemaOptions) seed is not a usable document.
    #[error("invalid schema options: {0}")]
    Configuration(String),

    /// A `format` value outside the recognised set.
    #[error("unknown format `{0}`")]
    Format(String),

    /// A keyword received a value of the wrong shape.
    #[error("invalid value for `{keyword}`: {reason}")]
    InvalidValue { keyword: String, reason: String },

    /// A type name that is not one of the seven JSON Schema types.
    #[error("unknown schema type `{0}`")]
    UnknownType(String),
}

impl SchemaError {
    pub(crate) fn invalid(keyword: &str, reason: impl Into<String>) -> Self {
        SchemaError::InvalidValue {
            keyword: keyword.to_string(),
            reason: reason.into(),
        }
    }
}
