use crate::{
    ConverterRegistry, DeclaredType, Entity, EntityError, Marker, Result, RowNames,
    ValueConverter, to_column_name,
};
use log::debug;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

/// Everything needed to bind one constructor field, built once per entity type.
#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub declared_type: DeclaredType,
    pub nullable: bool,
    pub column: String,
    /// Optional in Rust, yet never null in storage.
    pub contingent: bool,
    pub markers: Box<[Marker]>,
    converter: OnceLock<Arc<dyn ValueConverter>>,
    resolved_markers: OnceLock<Box<[Marker]>>,
}

impl FieldDescriptor {
    pub fn new(
        name: &'static str,
        declared_type: DeclaredType,
        nullable: bool,
        column: String,
        markers: Box<[Marker]>,
    ) -> Self {
        Self {
            name,
            declared_type,
            nullable,
            column,
            contingent: markers.iter().any(|v| matches!(v, Marker::Contingent)),
            markers,
            converter: Default::default(),
            resolved_markers: Default::default(),
        }
    }

    /// Converter for this field, resolved on first use.
    pub fn converter(
        &self,
        registry: &ConverterRegistry,
        entity: &'static str,
    ) -> Result<&Arc<dyn ValueConverter>> {
        if let Some(converter) = self.converter.get() {
            return Ok(converter);
        }
        let converter = registry.resolve(&self.declared_type, entity)?;
        Ok(self.converter.get_or_init(|| converter))
    }

    /// Markers the field converter consumes, collected on first use.
    pub fn resolved_markers(
        &self,
        registry: &ConverterRegistry,
        converter: &dyn ValueConverter,
    ) -> Result<&[Marker]> {
        if let Some(markers) = self.resolved_markers.get() {
            return Ok(&markers[..]);
        }
        let markers = registry.resolve_markers(self, converter)?;
        Ok(&self.resolved_markers.get_or_init(|| markers)[..])
    }
}

/// Ordered field descriptors of an entity type.
#[derive(Debug)]
pub struct EntitySchema {
    pub entity: &'static str,
    pub table: &'static str,
    pub fields: Box<[FieldDescriptor]>,
    /// Storage column of every field, in field order.
    pub columns: RowNames,
}

impl EntitySchema {
    pub fn build<E: Entity>() -> Result<Self> {
        let shape = E::shape();
        let Some(fields) = shape.fields.as_ref() else {
            return Err(EntityError::NotInstantiable.into());
        };
        let fields = fields
            .iter()
            .map(|field| -> Result<FieldDescriptor> {
                let Some(declared_type) = field.declared_type else {
                    return Err(EntityError::MissingTypeHint { field: field.name }.into());
                };
                let column = field
                    .column
                    .map(String::from)
                    .unwrap_or_else(|| to_column_name(field.name));
                Ok(FieldDescriptor::new(
                    field.name,
                    declared_type,
                    field.nullable,
                    column,
                    field.markers.clone(),
                ))
            })
            .collect::<Result<Box<[_]>>>()?;
        let columns = fields.iter().map(|v| v.column.clone()).collect();
        debug!(
            "Built the schema of {} with {} fields, stored in table {}",
            shape.name,
            fields.len(),
            shape.table,
        );
        Ok(Self {
            entity: shape.name,
            table: shape.table,
            fields,
            columns,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|v| v.name == name)
    }
}

/// Schemas built so far, one per entity type.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: RwLock<HashMap<TypeId, Arc<EntitySchema>>>,
}

impl SchemaCache {
    pub fn get_or_build<E: Entity>(&self) -> Result<Arc<EntitySchema>> {
        let key = TypeId::of::<E>();
        if let Some(schema) = self
            .schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(schema.clone());
        }
        let schema = Arc::new(EntitySchema::build::<E>()?);
        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        Ok(schemas.entry(key).or_insert(schema).clone())
    }

    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
