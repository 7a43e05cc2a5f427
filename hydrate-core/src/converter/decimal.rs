use super::unexpected;
use crate::{AsValue, DeclaredType, Marker, Result, Value, ValueConverter};
use rust_decimal::Decimal;

/// Exact numerics. Written back as text so no precision is lost on the way.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalConverter;

impl ValueConverter for DecimalConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Decimal)
    }

    fn from_storage(
        &self,
        _declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        Ok(Value::Decimal(Some(Decimal::try_from_value(value)?)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Decimal(Some(v)) => Ok(Value::Varchar(Some(v.to_string()))),
            _ => Err(unexpected(&value, "a decimal")),
        }
    }
}
