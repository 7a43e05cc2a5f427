mod boolean;
mod decimal;
mod enumerated;
mod float;
mod integer;
mod timestamp;
mod uuid_converter;
mod varchar;

pub use boolean::*;
pub use decimal::*;
pub use enumerated::*;
pub use float::*;
pub use integer::*;
pub use timestamp::*;
pub use uuid_converter::*;
pub use varchar::*;

use crate::{DeclaredType, Error, Marker, MarkerKind, Result, Value};
use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

/// Stateless strategy turning raw storage values into field values and back.
///
/// Converters never see nulls: the materializer settles them before dispatching.
pub trait ValueConverter: Send + Sync + Debug {
    /// Pure predicate on the declared type and the owning entity name.
    fn can_handle(&self, declared_type: &DeclaredType, entity: &'static str) -> bool;

    /// Coerces a raw row value into the value the field is built from.
    fn from_storage(
        &self,
        declared_type: &DeclaredType,
        value: Value,
        markers: &[Marker],
    ) -> Result<Value>;

    /// Turns a field value into a primitive the database accepts.
    fn to_storage(&self, value: Value, markers: &[Marker]) -> Result<Value>;

    /// Marker kind this converter needs on every field it handles.
    fn required_marker(&self) -> Option<MarkerKind> {
        None
    }
}

/// Built-in converters, in dispatch order.
pub fn default_converters() -> Vec<Arc<dyn ValueConverter>> {
    vec![
        Arc::new(VarcharConverter),
        Arc::new(IntegerConverter),
        Arc::new(FloatConverter),
        Arc::new(BooleanConverter),
        Arc::new(TimestampConverter),
        Arc::new(EnumConverter),
        Arc::new(DecimalConverter),
        Arc::new(UuidConverter),
    ]
}

pub(crate) fn unexpected(value: &Value, target: impl Display) -> Error {
    Error::msg(format!("Cannot convert {value:?} into {target}"))
}
