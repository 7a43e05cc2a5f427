use crate::{
    DeclaredType, EntityError, FieldDescriptor, Marker, Result, ValueConverter,
    default_converters,
};
use log::trace;
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

type CacheKey = (&'static str, &'static str);

/// Ordered converter list plus the memo of which one handles each type.
///
/// The first converter (in registration order) claiming a type wins.
#[derive(Debug)]
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn ValueConverter>>,
    cache: RwLock<HashMap<CacheKey, Arc<dyn ValueConverter>>>,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ConverterRegistry {
    /// Registry holding `extra` followed by the built-in converters.
    pub fn new(extra: Vec<Arc<dyn ValueConverter>>) -> Self {
        let mut converters = extra;
        converters.extend(default_converters());
        Self::with_converters(converters)
    }

    /// Registry holding exactly `converters`, no built-in is added.
    pub fn with_converters(converters: Vec<Arc<dyn ValueConverter>>) -> Self {
        Self {
            converters,
            cache: Default::default(),
        }
    }

    pub fn converters(&self) -> &[Arc<dyn ValueConverter>] {
        &self.converters
    }

    /// Number of memoized resolutions.
    pub fn resolved(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn resolve(
        &self,
        declared_type: &DeclaredType,
        entity: &'static str,
    ) -> Result<Arc<dyn ValueConverter>> {
        let key = (declared_type.name(), entity);
        if let Some(converter) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(converter.clone());
        }
        let Some(converter) = self
            .converters
            .iter()
            .find(|v| v.can_handle(declared_type, entity))
        else {
            return Err(EntityError::UnsupportedType {
                type_name: declared_type.name(),
            }
            .into());
        };
        trace!("Type {declared_type} of {entity} is handled by {converter:?}");
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(cache.entry(key).or_insert_with(|| converter.clone()).clone())
    }

    /// Markers of `field` the converter asks for, in declaration order.
    pub fn resolve_markers(
        &self,
        field: &FieldDescriptor,
        converter: &dyn ValueConverter,
    ) -> Result<Box<[Marker]>> {
        let Some(kind) = converter.required_marker() else {
            return Ok(Box::new([]));
        };
        let markers: Box<[Marker]> = field
            .markers
            .iter()
            .filter(|v| v.is(kind))
            .cloned()
            .collect();
        if markers.is_empty() {
            return Err(EntityError::MissingMarker {
                field: field.name,
                marker: kind,
            }
            .into());
        }
        Ok(markers)
    }
}
