use super::unexpected;
use crate::{DeclaredType, Error, Marker, Result, Value, ValueConverter};

/// Backed enums, stored as their scalar code.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumConverter;

impl ValueConverter for EnumConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Enum(..))
    }

    fn from_storage(
        &self,
        declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        let DeclaredType::Enum(def) = declared_type else {
            return Err(unexpected(&value, declared_type));
        };
        let Some(code) = def.find(&value) else {
            return Err(Error::msg(format!(
                "{value} is not a valid backing value for enum {}",
                def.name
            )));
        };
        Ok(Value::Enum(Some(code)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Enum(Some(code)) => Ok(code.as_storage()),
            _ => Err(unexpected(&value, "an enum code")),
        }
    }
}
