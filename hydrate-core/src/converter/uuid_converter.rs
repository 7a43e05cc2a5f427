use super::unexpected;
use crate::{AsValue, DeclaredType, Marker, Result, Value, ValueConverter};
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidConverter;

impl ValueConverter for UuidConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Uuid)
    }

    fn from_storage(
        &self,
        _declared_type: &DeclaredType,
        value: Value,
        _markers: &[Marker],
    ) -> Result<Value> {
        let result = match value {
            Value::Varchar(Some(ref v)) => Uuid::parse(v.trim())?,
            _ => return Err(unexpected(&value, "a uuid")),
        };
        Ok(Value::Uuid(Some(result)))
    }

    fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
        match value {
            Value::Uuid(Some(v)) => Ok(Value::Varchar(Some(v.hyphenated().to_string()))),
            _ => Err(unexpected(&value, "a uuid")),
        }
    }
}
