use crate::{DeclaredType, Error, Result, Value, consume_while, truncate_long};
use anyhow::Context;
use atoi::FromRadix10SignedChecked;
use fast_float::parse_partial;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::{any, borrow::Cow, str::FromStr};
use time::{Date, PrimitiveDateTime, format_description::parse_borrowed};
use uuid::Uuid;

/// Bridge between native Rust field types and the dynamically typed [`Value`].
///
/// Every type usable as an entity field implements this trait. It tells the schema
/// builder what the field is ([`AsValue::declared_type`], [`AsValue::nullable`]),
/// turns a converted value into the field ([`AsValue::try_from_value`]) and the
/// field back into a value ([`AsValue::as_value`]).
///
/// # Parsing contract
/// - `parse` delegates to `extract` then verifies the slice is exhausted.
/// - `extract` MUST update the input slice only on success.
///
/// # Examples
/// ```rust
/// use hydrate_core::{AsValue, DeclaredType, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int64(Some(42))));
/// let n: i32 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// assert_eq!(<Option<i32> as AsValue>::declared_type(), DeclaredType::Integer);
/// assert!(<Option<i32> as AsValue>::nullable());
/// ```
pub trait AsValue {
    /// Type tag the converter registry resolves on.
    fn declared_type() -> DeclaredType;
    /// Whether the Rust type admits null, `Option<T>` is the only nullable wrapper.
    fn nullable() -> bool {
        false
    }
    /// Typed null of this type.
    fn as_empty_value() -> Value;
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
    /// Parse a full string into `Self` delegating to [`AsValue::extract`].
    ///
    /// Fails if the parsing routine does not consume the entire input.
    fn parse(input: impl AsRef<str>) -> Result<Self>
    where
        Self: Sized,
    {
        let mut value = input.as_ref();
        let result = Self::extract(&mut value)?;
        if !value.is_empty() {
            return Err(Error::msg(format!(
                "Value `{}` parsed correctly as {} but it did not consume all the input (remaining: `{}`)",
                truncate_long!(input.as_ref()),
                any::type_name::<Self>(),
                truncate_long!(value),
            )));
        }
        Ok(result)
    }
    /// Parse a prefix of the provided slice, advancing it on success.
    fn extract(value: &mut &str) -> Result<Self>
    where
        Self: Sized,
    {
        Err(Error::msg(format!(
            "Cannot parse '{value}' as {}",
            any::type_name::<Self>()
        )))
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

macro_rules! impl_as_value {
    ($source:ty) => {
        impl AsValue for $source {
            fn declared_type() -> DeclaredType {
                DeclaredType::Integer
            }
            fn as_empty_value() -> Value {
                Value::Int64(None)
            }
            fn as_value(self) -> Value {
                Value::Int64(Some(self as _))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Int64(Some(v)) => <$source>::try_from(v).map_err(|_| {
                        Error::msg(format!(
                            "Value {v}: i64 is out of range for {}",
                            any::type_name::<Self>(),
                        ))
                    }),
                    Value::Varchar(Some(ref v)) => Self::parse(v.trim()),
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
            fn extract(input: &mut &str) -> Result<Self> {
                let value = *input;
                let (num, len) = i64::from_radix_10_signed_checked(value.as_bytes());
                let Some(num) = num.filter(|_| len > 0) else {
                    return Err(Error::msg(format!(
                        "Cannot extract {} from `{}`",
                        any::type_name::<Self>(),
                        truncate_long!(value),
                    )));
                };
                let result = <$source>::try_from(num).map_err(|_| {
                    Error::msg(format!(
                        "Parsed integer {num} is out of range for {}",
                        any::type_name::<Self>(),
                    ))
                })?;
                *input = &value[len..];
                Ok(result)
            }
        }
    };
}
impl_as_value!(i8);
impl_as_value!(i16);
impl_as_value!(i32);
impl_as_value!(i64);
impl_as_value!(u8);
impl_as_value!(u16);
impl_as_value!(u32);

impl AsValue for bool {
    fn declared_type() -> DeclaredType {
        DeclaredType::Boolean
    }
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Int64(Some(v)) => Ok(v != 0),
            Value::Varchar(Some(ref v)) => Self::parse(v.trim()),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to bool"))),
        }
    }
    fn extract(input: &mut &str) -> Result<Self> {
        let mut value = *input;
        let result = consume_while(&mut value, |v| v.is_alphanumeric() || *v == '_');
        let result = match result {
            x if x.eq_ignore_ascii_case("true") || x.eq_ignore_ascii_case("t") || x.eq("1") => true,
            x if x.eq_ignore_ascii_case("false") || x.eq_ignore_ascii_case("f") || x.eq("0") => {
                false
            }
            _ => return Err(Error::msg(format!("Cannot parse boolean from '{input}'"))),
        };
        *input = value;
        Ok(result)
    }
}

macro_rules! impl_as_value {
    ($source:ty) => {
        impl AsValue for $source {
            fn declared_type() -> DeclaredType {
                DeclaredType::Float
            }
            fn as_empty_value() -> Value {
                Value::Float64(None)
            }
            fn as_value(self) -> Value {
                Value::Float64(Some(self as _))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::Float64(Some(v)) => Ok(v as _),
                    Value::Int64(Some(v)) => Ok(v as _),
                    Value::Varchar(Some(ref v)) => Self::parse(v.trim()),
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
            fn extract(input: &mut &str) -> Result<Self> {
                let value = *input;
                let context = || {
                    format!(
                        "Cannot extract a floating point value from `{}`",
                        truncate_long!(value)
                    )
                };
                let (num, len) = parse_partial::<$source, _>(value).with_context(context)?;
                *input = &value[len..];
                Ok(num)
            }
        }
    };
}
impl_as_value!(f32);
impl_as_value!(f64);

impl AsValue for String {
    fn declared_type() -> DeclaredType {
        DeclaredType::Varchar
    }
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to String"))),
        }
    }
    fn extract(input: &mut &str) -> Result<Self> {
        let result = (*input).to_string();
        *input = "";
        Ok(result)
    }
}

impl AsValue for Cow<'static, str> {
    fn declared_type() -> DeclaredType {
        DeclaredType::Varchar
    }
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Cow::Owned)
    }
}

macro_rules! impl_as_value {
    ($source:ty, $declared:path, $destination:path, $($formats:literal),+ $(,)?) => {
        impl AsValue for $source {
            fn declared_type() -> DeclaredType {
                $declared
            }
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v),
                    Value::Varchar(Some(ref v)) => <Self as AsValue>::parse(v),
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
            fn extract(value: &mut &str) -> Result<Self> {
                for format in [$($formats,)+] {
                    let format = parse_borrowed::<2>(format)?;
                    let mut parsed = time::parsing::Parsed::new();
                    if let Ok(remaining) = parsed.parse_items(value.as_bytes(), &format) {
                        let result = parsed.try_into()?;
                        *value = &value[(value.len() - remaining.len())..];
                        return Ok(result);
                    }
                }
                Err(Error::msg(format!(
                    "Cannot extract from `{}` as {}",
                    value,
                    any::type_name::<Self>()
                )))
            }
        }
    };
}
impl_as_value!(Date, DeclaredType::Date, Value::Date, "[year]-[month]-[day]");
impl_as_value!(
    PrimitiveDateTime,
    DeclaredType::Timestamp,
    Value::Timestamp,
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]",
    "[year]-[month]-[day]T[hour]:[minute]:[second]",
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]",
    "[year]-[month]-[day] [hour]:[minute]:[second]",
    "[year]-[month]-[day] [hour]:[minute]",
);

impl AsValue for Decimal {
    fn declared_type() -> DeclaredType {
        DeclaredType::Decimal
    }
    fn as_empty_value() -> Value {
        Value::Decimal(None)
    }
    fn as_value(self) -> Value {
        Value::Decimal(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v)) => Ok(v),
            Value::Int64(Some(v)) => Ok(Decimal::new(v, 0)),
            Value::Float64(Some(v)) => Decimal::from_f64(v)
                .ok_or_else(|| Error::msg(format!("Cannot convert {v} to Decimal"))),
            Value::Varchar(Some(ref v)) => Self::parse(v.trim()),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to Decimal"))),
        }
    }
    fn extract(input: &mut &str) -> Result<Self> {
        let value = *input;
        let len = value
            .char_indices()
            .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-'))
            .count();
        let result = Decimal::from_str(&value[..len])
            .with_context(|| format!("Could not create a Decimal from `{}`", truncate_long!(value)))?;
        *input = &value[len..];
        Ok(result)
    }
}

impl AsValue for Uuid {
    fn declared_type() -> DeclaredType {
        DeclaredType::Uuid
    }
    fn as_empty_value() -> Value {
        Value::Uuid(None)
    }
    fn as_value(self) -> Value {
        Value::Uuid(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(Some(v)) => Ok(v),
            Value::Varchar(Some(ref v)) => Self::parse(v),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to Uuid"))),
        }
    }
    fn extract(input: &mut &str) -> Result<Self> {
        let value = *input;
        let context = || {
            format!(
                "Cannot extract a uuid value from `{}`",
                truncate_long!(value)
            )
        };
        let uuid = Uuid::parse_str(value.get(0..36).ok_or_else(|| Error::msg(context()))?)
            .with_context(context)?;
        *input = &value[36..];
        Ok(uuid)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn declared_type() -> DeclaredType {
        T::declared_type()
    }
    fn nullable() -> bool {
        true
    }
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
    fn extract(input: &mut &str) -> Result<Self>
    where
        Self: Sized,
    {
        let mut value = *input;
        let result = consume_while(&mut value, |v| v.is_alphanumeric() || *v == '_');
        if result.eq_ignore_ascii_case("null") {
            *input = value;
            return Ok(None);
        };
        T::extract(input).map(Some)
    }
}

impl<T: AsValue> AsValue for Box<T> {
    fn declared_type() -> DeclaredType {
        T::declared_type()
    }
    fn nullable() -> bool {
        T::nullable()
    }
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(Self::new(<T as AsValue>::try_from_value(value)?))
    }
    fn extract(value: &mut &str) -> Result<Self>
    where
        Self: Sized,
    {
        T::extract(value).map(Self::new)
    }
}
