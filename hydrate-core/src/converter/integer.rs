use super::unexpected;
use crate::{AsValue, DeclaredType, Error, Marker, Result, Value, ValueConverter};

/// Integer fields, every width maps onto `i64` until the entity takes it.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerConverter;

impl ValueConverter for IntegerConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Integer)
    }

    fn from_storage(
        &self,
        _declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        let result = match value {
            Value::Int64(Some(v)) => v,
            Value::Boolean(Some(v)) => v as i64,
            Value::Varchar(Some(ref v)) => i64::parse(v.trim())?,
            Value::Float64(Some(v)) => {
                if v.fract() != 0.0 || v < i64::MIN as f64 || v >= i64::MAX as f64 {
                    return Err(Error::msg(format!(
                        "Float {v} cannot be represented as an integer without losing precision"
                    )));
                }
                v as i64
            }
            _ => return Err(unexpected(&value, "an integer")),
        };
        Ok(Value::Int64(Some(result)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Int64(..) => Ok(value),
            _ => Err(unexpected(&value, "an integer")),
        }
    }
}
