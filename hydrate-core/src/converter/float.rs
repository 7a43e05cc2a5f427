use super::unexpected;
use crate::{AsValue, DeclaredType, Marker, Result, Value, ValueConverter};

#[derive(Debug, Default, Clone, Copy)]
pub struct FloatConverter;

impl ValueConverter for FloatConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Float)
    }

    fn from_storage(
        &self,
        _declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        let result = match value {
            Value::Float64(Some(v)) => v,
            Value::Int64(Some(v)) => v as f64,
            Value::Varchar(Some(ref v)) => f64::parse(v.trim())?,
            _ => return Err(unexpected(&value, "a float")),
        };
        Ok(Value::Float64(Some(result)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Float64(..) => Ok(value),
            _ => Err(unexpected(&value, "a float")),
        }
    }
}
