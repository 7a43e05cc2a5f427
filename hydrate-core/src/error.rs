use crate::MarkerKind;
use thiserror::Error;

/// Failure kinds raised while creating or storing entities.
///
/// Every kind travels inside an [`anyhow::Error`](crate::Error), wrapped by the
/// `Creating entity <type> failed` (or `Storing entity <type> failed`) context.
/// Use `error.downcast_ref::<EntityError>()` to classify a failure: it returns the
/// outermost kind attached to the chain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EntityError {
    #[error("Query must not return more than one row")]
    TooManyRows,
    #[error("Could not get value of field `{field}` by database column `{column}`")]
    MissingColumn { field: &'static str, column: String },
    #[error("Value of field `{field}` must not be null in the database")]
    NotNullable { field: &'static str },
    #[error("Value of contingent field `{field}` must not be null in the database")]
    ContingentNull { field: &'static str },
    #[error("Field `{field}` is missing its declared type")]
    MissingTypeHint { field: &'static str },
    #[error("Type `{type_name}` is not supported")]
    UnsupportedType { type_name: &'static str },
    #[error("Field `{field}` requires at least one `{marker}` marker")]
    MissingMarker {
        field: &'static str,
        marker: MarkerKind,
    },
    #[error("Value `{value}` does not match the format `{format}`: {reason}")]
    MalformedValue {
        value: String,
        format: String,
        reason: String,
    },
    #[error("Could not convert the value of field `{field}` into {type_name}")]
    Conversion {
        field: &'static str,
        type_name: &'static str,
    },
    #[error("Given type is not instantiable")]
    NotInstantiable,
    #[error(
        "Key extractor must belong to the entity being created, it refers to `{found}` instead"
    )]
    WrongExtractorEntity { found: &'static str },
    #[error("Key extractor `{method}` must refer to an existing field getter")]
    UnknownExtractorMethod { method: String },
    #[error("Result keys must be unique, `{key}` appears more than once")]
    DuplicateKey { key: String },
}

pub(crate) fn creating_context(entity: &str) -> String {
    format!("Creating entity {entity} failed")
}

pub(crate) fn storing_context(entity: &str) -> String {
    format!("Storing entity {entity} failed")
}
