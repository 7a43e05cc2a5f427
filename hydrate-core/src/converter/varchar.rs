use super::unexpected;
use crate::{DeclaredType, Marker, Result, Value, ValueConverter};

/// Text fields. Numbers are rendered in their shortest form, booleans as `1`/`0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarcharConverter;

impl ValueConverter for VarcharConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Varchar)
    }

    fn from_storage(
        &self,
        _declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        let text = match value {
            Value::Varchar(Some(v)) => v,
            Value::Int64(Some(v)) => v.to_string(),
            Value::Float64(Some(v)) => v.to_string(),
            Value::Boolean(Some(v)) => if v { "1" } else { "0" }.to_string(),
            _ => return Err(unexpected(&value, "a string")),
        };
        Ok(Value::Varchar(Some(text)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Varchar(..) => Ok(value),
            _ => Err(unexpected(&value, "a string")),
        }
    }
}
