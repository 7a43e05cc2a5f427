use crate::{AsValue, DeclaredType, EntityError, Error, Marker, Result, Value};
use anyhow::Context;
use std::{any, vec};

/// Introspected description of one constructor field.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    /// `None` when the field type cannot be expressed as a [`DeclaredType`].
    pub declared_type: Option<DeclaredType>,
    pub nullable: bool,
    /// Explicit storage column, overrides the name derived from `name`.
    pub column: Option<&'static str>,
    pub markers: Box<[Marker]>,
}

impl FieldDef {
    pub fn new<T: AsValue>(name: &'static str) -> Self {
        Self {
            name,
            declared_type: Some(T::declared_type()),
            nullable: T::nullable(),
            column: None,
            markers: Box::new([]),
        }
    }
    pub fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }
    pub fn markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.markers = markers.into_iter().collect();
        self
    }
}

/// Static shape of an entity type, produced once per type.
#[derive(Debug, Clone)]
pub struct EntityShape {
    /// Fully qualified type name, used in diagnostics and cache keys.
    pub name: &'static str,
    pub table: &'static str,
    /// Ordered constructor fields, `None` if the type cannot be constructed.
    pub fields: Option<Box<[FieldDef]>>,
}

/// Type that can be materialized from a row and turned back into one.
///
/// Usually implemented with `#[derive(Entity)]`.
pub trait Entity: Sized + 'static {
    fn shape() -> &'static EntityShape;

    /// Builds the instance in a single call, taking the arguments in field order.
    fn construct(args: &mut Arguments) -> Result<Self>;

    /// Field values in the same order as the shape fields.
    fn values(&self) -> Vec<Value>;

    /// Accessor for the field named `name`, used by name based key extractors.
    fn getter(name: &str) -> Option<fn(&Self) -> Value> {
        let _ = name;
        None
    }
}

/// Ordered, already converted constructor arguments.
#[derive(Debug)]
pub struct Arguments {
    entity: &'static str,
    values: vec::IntoIter<(&'static str, Value)>,
}

impl Arguments {
    pub fn new(entity: &'static str, values: Vec<(&'static str, Value)>) -> Self {
        Self {
            entity,
            values: values.into_iter(),
        }
    }

    /// Takes the next argument as `T`, failures name the field it belongs to.
    pub fn take<T: AsValue>(&mut self) -> Result<T> {
        let Some((field, value)) = self.values.next() else {
            return Err(Error::msg(format!(
                "Entity {} has no argument left to bind as {}",
                self.entity,
                any::type_name::<T>(),
            )));
        };
        T::try_from_value(value).with_context(|| EntityError::Conversion {
            field,
            type_name: any::type_name::<T>(),
        })
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}
