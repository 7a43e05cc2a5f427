use super::unexpected;
use crate::{
    DeclaredType, EntityError, Error, Marker, MarkerKind, Result, Value, ValueConverter,
};
use time::{Date, PrimitiveDateTime, format_description};

/// Dates and timestamps, read and written through an explicit layout.
///
/// Every field handled by this converter carries a [`Marker::DateTimeFormat`],
/// the first one attached is the one applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampConverter;

impl TimestampConverter {
    fn format(markers: &[Marker]) -> Result<&str> {
        markers
            .iter()
            .find_map(|v| match v {
                Marker::DateTimeFormat(format) => Some(format.as_ref()),
                _ => None,
            })
            .ok_or_else(|| {
                Error::msg(format!(
                    "Missing `{}` marker, it is required to read and write dates",
                    MarkerKind::DateTimeFormat
                ))
            })
    }
}

impl ValueConverter for TimestampConverter {
    fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
        matches!(declared_type, DeclaredType::Timestamp | DeclaredType::Date)
    }

    fn from_storage(
        &self,
        declared_type: &DeclaredType,
        value: Value,
        markers: &[Marker],
    ) -> Result<Value> {
        let format = Self::format(markers)?;
        let text = match value {
            Value::Varchar(Some(v)) => v,
            Value::Int64(Some(v)) => v.to_string(),
            _ => return Err(unexpected(&value, declared_type)),
        };
        let items = format_description::parse(format)?;
        let malformed = |reason: time::error::Parse| EntityError::MalformedValue {
            value: text.clone(),
            format: format.to_string(),
            reason: reason.to_string(),
        };
        Ok(match declared_type {
            DeclaredType::Date => Value::Date(Some(Date::parse(&text, &items).map_err(malformed)?)),
            _ => Value::Timestamp(Some(
                PrimitiveDateTime::parse(&text, &items).map_err(malformed)?,
            )),
        })
    }

    fn to_storage(&self, value: Value, markers: &[Marker]) -> Result<Value> {
        let format = Self::format(markers)?;
        let items = format_description::parse(format)?;
        let text = match value {
            Value::Timestamp(Some(v)) => v.format(&items)?,
            Value::Date(Some(v)) => v.format(&items)?,
            _ => return Err(unexpected(&value, "a date or timestamp")),
        };
        Ok(Value::Varchar(Some(text)))
    }

    fn required_marker(&self) -> Option<MarkerKind> {
        Some(MarkerKind::DateTimeFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::TimestampConverter;
    use crate::{DeclaredType, EntityError, Marker, Value, ValueConverter};
    use time::macros::{date, datetime};

    const FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

    #[test]
    fn reads_with_the_first_format() {
        let markers = [
            Marker::DateTimeFormat("[year]-[month]-[day]".into()),
            Marker::DateTimeFormat(FORMAT.into()),
        ];
        let value = TimestampConverter
            .from_storage(
                &DeclaredType::Date,
                Value::Varchar(Some("2022-01-01".into())),
                &markers,
            )
            .expect("The date must be parsed");
        assert_eq!(value, Value::Date(Some(date!(2022 - 01 - 01))));
    }

    #[test]
    fn writes_formatted_text() {
        let markers = [Marker::DateTimeFormat(FORMAT.into())];
        let value = TimestampConverter
            .to_storage(
                Value::Timestamp(Some(datetime!(2022-01-01 12:12:12))),
                &markers,
            )
            .expect("The timestamp must be formatted");
        assert_eq!(value, Value::Varchar(Some("2022-01-01 12:12:12".into())));
    }

    #[test]
    fn malformed_text() {
        let markers = [Marker::DateTimeFormat(FORMAT.into())];
        let error = TimestampConverter
            .from_storage(
                &DeclaredType::Timestamp,
                Value::Varchar(Some("01/01/2022".into())),
                &markers,
            )
            .expect_err("The text does not follow the format");
        assert!(matches!(
            error.downcast_ref::<EntityError>(),
            Some(EntityError::MalformedValue { value, .. }) if value == "01/01/2022"
        ));
    }

    #[test]
    fn missing_format() {
        assert!(
            TimestampConverter
                .from_storage(
                    &DeclaredType::Timestamp,
                    Value::Varchar(Some("2022-01-01 12:12:12".into())),
                    &[],
                )
                .is_err()
        );
    }
}
