use crate::{
    Arguments, ConverterRegistry, Entity, EntityError, EntitySchema, Error, Result, RowLabeled,
    Value,
};
use anyhow::Context;

/// Binds rows to entities of one type, and entities back to rows.
#[derive(Debug, Clone, Copy)]
pub struct EntityMaterializer<'a> {
    schema: &'a EntitySchema,
    registry: &'a ConverterRegistry,
}

impl<'a> EntityMaterializer<'a> {
    pub fn new(schema: &'a EntitySchema, registry: &'a ConverterRegistry) -> Self {
        Self { schema, registry }
    }

    pub fn schema(&self) -> &'a EntitySchema {
        self.schema
    }

    /// Builds one entity out of `row`.
    ///
    /// Fields are processed in order and the first failure aborts the row. Columns
    /// not claimed by any field are ignored.
    pub fn materialize<E: Entity>(&self, row: RowLabeled) -> Result<E> {
        let entity = self.schema.entity;
        let mut args = Vec::with_capacity(self.schema.fields.len());
        for field in &self.schema.fields {
            let Some(index) = row.labels.iter().position(|v| *v == field.column) else {
                return Err(EntityError::MissingColumn {
                    field: field.name,
                    column: field.column.clone(),
                }
                .into());
            };
            let Some(value) = row.values.get(index).cloned() else {
                return Err(EntityError::MissingColumn {
                    field: field.name,
                    column: field.column.clone(),
                }
                .into());
            };
            if value.is_null() {
                if !field.nullable {
                    return Err(EntityError::NotNullable { field: field.name }.into());
                }
                if field.contingent {
                    return Err(EntityError::ContingentNull { field: field.name }.into());
                }
                args.push((field.name, Value::Null));
                continue;
            }
            let converter = field.converter(self.registry, entity)?;
            let markers = field.resolved_markers(self.registry, converter.as_ref())?;
            let value = converter
                .from_storage(&field.declared_type, value, markers)
                .with_context(|| EntityError::Conversion {
                    field: field.name,
                    type_name: field.declared_type.name(),
                })?;
            args.push((field.name, value));
        }
        let mut args = Arguments::new(entity, args);
        let result = E::construct(&mut args)?;
        if args.remaining() != 0 {
            return Err(Error::msg(format!(
                "Entity {entity} left {} arguments unbound",
                args.remaining()
            )));
        }
        Ok(result)
    }

    /// Persistable row of `entity`, keyed by storage column.
    pub fn to_storage<E: Entity>(&self, entity: &E) -> Result<RowLabeled> {
        let values = entity.values();
        if values.len() != self.schema.fields.len() {
            return Err(Error::msg(format!(
                "Entity {} produced {} values but it has {} fields",
                self.schema.entity,
                values.len(),
                self.schema.fields.len(),
            )));
        }
        let values = self
            .schema
            .fields
            .iter()
            .zip(values)
            .map(|(field, value)| -> Result<Value> {
                if value.is_null() {
                    return Ok(Value::Null);
                }
                let converter = field.converter(self.registry, self.schema.entity)?;
                let markers = field.resolved_markers(self.registry, converter.as_ref())?;
                converter
                    .to_storage(value, markers)
                    .with_context(|| EntityError::Conversion {
                        field: field.name,
                        type_name: field.declared_type.name(),
                    })
            })
            .collect::<Result<Box<[_]>>>()?;
        Ok(RowLabeled::new(self.schema.columns.clone(), values))
    }
}
