use super::unexpected;
use crate::{AsValue, DeclaredType, Marker, Result, Value, ValueConverter};

/// Boolean fields, stored as the integers `1` and `0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanConverter;

impl ValueConverter for BooleanConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Boolean)
    }

    fn from_storage(
        &self,
        _declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        let result = match value {
            Value::Boolean(Some(v)) => v,
            Value::Int64(Some(v)) => v != 0,
            Value::Float64(Some(v)) => v != 0.0,
            Value::Varchar(Some(ref v)) => bool::parse(v.trim())?,
            _ => return Err(unexpected(&value, "a boolean")),
        };
        Ok(Value::Boolean(Some(result)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Boolean(Some(v)) => Ok(Value::Int64(Some(v as i64))),
            _ => Err(unexpected(&value, "a boolean")),
        }
    }
}
