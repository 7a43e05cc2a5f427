use crate::EnumCode;
use rust_decimal::Decimal;
use std::fmt::{self, Display};
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

/// Dynamically typed value flowing between rows, converters and entities.
///
/// Rows coming from a driver only carry the primitive subset (`Null`, `Boolean`,
/// `Int64`, `Float64`, `Varchar`). The remaining variants are produced by
/// converters and consumed by [`AsValue::try_from_value`](crate::AsValue).
/// A variant holding `None` is a typed null.
#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int64(Option<i64>),
    Float64(Option<f64>),
    Varchar(Option<String>),
    Date(Option<Date>),
    Timestamp(Option<PrimitiveDateTime>),
    Decimal(Option<Decimal>),
    Uuid(Option<Uuid>),
    Enum(Option<EnumCode>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Date(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
            Value::Decimal(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
            Value::Enum(v) => v.is_none(),
        }
    }

    /// True for the values a database driver is expected to hand over in a row.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Boolean(..)
                | Value::Int64(..)
                | Value::Float64(..)
                | Value::Varchar(..)
        )
    }

    pub fn same_type(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Int64(l), Self::Int64(r)) => l == r,
            (Self::Float64(l), Self::Float64(r)) => l == r,
            (Self::Varchar(l), Self::Varchar(r)) => l == r,
            (Self::Date(l), Self::Date(r)) => l == r,
            (Self::Timestamp(l), Self::Timestamp(r)) => l == r,
            (Self::Decimal(l), Self::Decimal(r)) => l == r,
            (Self::Uuid(l), Self::Uuid(r)) => l == r,
            (Self::Enum(l), Self::Enum(r)) => l == r,
            _ => self.same_type(other),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(Some(v)) => write!(f, "{v}"),
            Value::Int64(Some(v)) => write!(f, "{v}"),
            Value::Float64(Some(v)) => write!(f, "{v}"),
            Value::Varchar(Some(v)) => write!(f, "'{v}'"),
            Value::Date(Some(v)) => write!(f, "{v}"),
            Value::Timestamp(Some(v)) => write!(f, "{v}"),
            Value::Decimal(Some(v)) => write!(f, "{v}"),
            Value::Uuid(Some(v)) => write!(f, "{v}"),
            Value::Enum(Some(v)) => write!(f, "{v}"),
            _ => f.write_str("NULL"),
        }
    }
}
