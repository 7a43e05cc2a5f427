use crate::{Entity, EntityError, EnumCode, Error, Result, Value};
use std::{
    any::{self, TypeId},
    fmt::{self, Display},
};

/// Name based key extractor: a field getter of a specific entity type.
///
/// ```rust
/// # use hydrate_core::MethodRef;
/// # struct Product;
/// let extractor = MethodRef::new::<Product>("id");
/// assert_eq!(extractor.method(), "id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodRef {
    owner: TypeId,
    owner_name: &'static str,
    method: &'static str,
}

impl MethodRef {
    pub fn new<T: 'static>(method: &'static str) -> Self {
        Self {
            owner: TypeId::of::<T>(),
            owner_name: any::type_name::<T>(),
            method,
        }
    }

    pub fn owner_name(&self) -> &'static str {
        self.owner_name
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Checks the reference against `E`, returning the getter it names.
    pub fn validate<E: Entity>(&self) -> Result<fn(&E) -> Value> {
        if self.owner != TypeId::of::<E>() {
            return Err(EntityError::WrongExtractorEntity {
                found: self.owner_name,
            }
            .into());
        }
        E::getter(self.method).ok_or_else(|| {
            EntityError::UnknownExtractorMethod {
                method: format!("{}::{}", self.owner_name, self.method),
            }
            .into()
        })
    }
}

/// Key extracted by a [`MethodRef`], ordered integers first.
///
/// Integral floats become integers, other floats and nulls are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Integer(i64),
    Varchar(String),
}

impl TryFrom<Value> for Key {
    type Error = Error;
    fn try_from(value: Value) -> Result<Self> {
        Ok(match value {
            Value::Int64(Some(v)) => Key::Integer(v),
            Value::Boolean(Some(v)) => Key::Integer(v as i64),
            Value::Float64(Some(v))
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
            {
                Key::Integer(v as i64)
            }
            Value::Varchar(Some(v)) => Key::Varchar(v),
            Value::Enum(Some(EnumCode::Integer(v))) => Key::Integer(v),
            Value::Enum(Some(EnumCode::Varchar(v))) => Key::Varchar(v.into()),
            Value::Uuid(Some(v)) => Key::Varchar(v.to_string()),
            Value::Decimal(Some(v)) => Key::Varchar(v.to_string()),
            Value::Date(Some(v)) => Key::Varchar(v.to_string()),
            Value::Timestamp(Some(v)) => Key::Varchar(v.to_string()),
            _ => {
                return Err(Error::msg(format!(
                    "{value:?} cannot be used as a result key"
                )));
            }
        })
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Integer(v) => write!(f, "{v}"),
            Key::Varchar(v) => f.write_str(v),
        }
    }
}
