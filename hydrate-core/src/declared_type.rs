use crate::{Error, Result, Value};
use std::{
    any,
    fmt::{self, Display},
};

/// Semantic type of an entity field, the key converters dispatch on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeclaredType {
    Boolean,
    Integer,
    Float,
    Varchar,
    Date,
    Timestamp,
    Decimal,
    Uuid,
    Enum(&'static EnumDef),
    /// Application defined type, handled by a converter supplied by the caller.
    Custom(&'static str),
}

impl DeclaredType {
    /// Stable name used for converter resolution and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DeclaredType::Boolean => "bool",
            DeclaredType::Integer => "integer",
            DeclaredType::Float => "float",
            DeclaredType::Varchar => "string",
            DeclaredType::Date => "time::Date",
            DeclaredType::Timestamp => "time::PrimitiveDateTime",
            DeclaredType::Decimal => "rust_decimal::Decimal",
            DeclaredType::Uuid => "uuid::Uuid",
            DeclaredType::Enum(def) => def.name,
            DeclaredType::Custom(name) => name,
        }
    }
}

impl Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backing scalar of one enum case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnumCode {
    Integer(i64),
    Varchar(&'static str),
}

impl EnumCode {
    /// Compares against a raw storage value. Numeric text matches integer codes.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (EnumCode::Integer(code), Value::Int64(Some(v))) => code == v,
            (EnumCode::Integer(code), Value::Varchar(Some(v))) => {
                v.trim().parse::<i64>().is_ok_and(|v| v == *code)
            }
            (EnumCode::Varchar(code), Value::Varchar(Some(v))) => *code == v.as_str(),
            (code, Value::Enum(Some(v))) => code == v,
            _ => false,
        }
    }

    pub fn as_storage(&self) -> Value {
        match self {
            EnumCode::Integer(v) => Value::Int64(Some(*v)),
            EnumCode::Varchar(v) => Value::Varchar(Some((*v).into())),
        }
    }
}

impl Display for EnumCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumCode::Integer(v) => write!(f, "{v}"),
            EnumCode::Varchar(v) => write!(f, "{v}"),
        }
    }
}

/// Closed value set of a backed enum.
#[derive(Debug, PartialEq)]
pub struct EnumDef {
    pub name: &'static str,
    pub codes: &'static [EnumCode],
}

impl EnumDef {
    pub fn find(&self, value: &Value) -> Option<EnumCode> {
        self.codes.iter().find(|code| code.matches(value)).copied()
    }
}

/// Enum whose cases are each backed by a scalar code. Usually derived with
/// `#[derive(BackedEnum)]`.
pub trait BackedEnum: Sized + 'static {
    fn enum_def() -> &'static EnumDef;
    fn code(&self) -> EnumCode;
    fn from_code(code: &EnumCode) -> Option<Self>;
}

/// Shared `AsValue::try_from_value` body for backed enums.
pub fn enum_from_value<E: BackedEnum>(value: Value) -> Result<E> {
    let def = E::enum_def();
    def.find(&value)
        .and_then(|code| E::from_code(&code))
        .ok_or_else(|| {
            Error::msg(format!(
                "{value} is not a valid backing value for enum {}",
                any::type_name::<E>(),
            ))
        })
}
