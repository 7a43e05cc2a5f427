use crate::{
    ConverterRegistry, EitherIterator, Entity, EntityError, EntityMaterializer, EntitySchema,
    HydratorConfig, Key, MethodRef, Result, ResultSet, RowLabeled, SchemaCache, StorageWriter,
    ValueConverter, creating_context, storing_context,
};
use anyhow::Context;
use log::debug;
use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt::Debug,
    sync::Arc,
};

/// Entry point: turns query results into entities and entities into rows.
///
/// Converter resolutions and entity schemas are cached for the lifetime of the
/// hydrator, which can be shared between threads.
///
/// ```rust
/// use hydrate_core::{Hydrator, HydratorConfig};
/// let hydrator = Hydrator::builder().stream_threshold(None).build();
/// assert_eq!(hydrator.config(), &HydratorConfig { stream_threshold: None });
/// ```
#[derive(Debug, Default)]
pub struct Hydrator {
    registry: ConverterRegistry,
    schemas: SchemaCache,
    config: HydratorConfig,
}

impl Hydrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HydratorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Hydrator configured through the environment, see [`HydratorConfig::from_env`].
    pub fn from_env() -> Self {
        Self::with_config(HydratorConfig::from_env())
    }

    pub fn builder() -> HydratorBuilder {
        HydratorBuilder::default()
    }

    pub fn config(&self) -> &HydratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Schema of `E`, built on first request.
    pub fn schema<E: Entity>(&self) -> Result<Arc<EntitySchema>> {
        self.schemas.get_or_build::<E>()
    }

    /// Creates the entity described by the only row of `result`.
    ///
    /// Returns `None` for an empty result and fails if there is more than one row.
    pub fn create_one<E: Entity, R: ResultSet>(&self, result: &mut R) -> Result<Option<E>> {
        let mut create = || -> Result<Option<E>> {
            let mut rows = result.fetch_all()?;
            if rows.len() > 1 {
                return Err(EntityError::TooManyRows.into());
            }
            let Some(row) = rows.pop() else {
                return Ok(None);
            };
            let schema = self.schema::<E>()?;
            EntityMaterializer::new(&schema, &self.registry)
                .materialize(row)
                .map(Some)
        };
        create().with_context(|| creating_context(E::shape().name))
    }

    /// Creates one entity per row, in row order.
    pub fn create_all<E: Entity, R: ResultSet>(&self, result: &mut R) -> Result<Vec<E>> {
        let mut create = || -> Result<Vec<E>> {
            let schema = self.schema::<E>()?;
            let materializer = EntityMaterializer::new(&schema, &self.registry);
            self.rows(result)?
                .map(|row| materializer.materialize(row?))
                .collect()
        };
        create().with_context(|| creating_context(E::shape().name))
    }

    /// Creates one entity per row, keyed by `key`.
    ///
    /// Fails without returning any entity when two rows produce the same key.
    pub fn create_all_keyed<E, K, F, R>(&self, result: &mut R, key: F) -> Result<BTreeMap<K, E>>
    where
        E: Entity,
        K: Ord + Debug,
        F: Fn(&E) -> K,
        R: ResultSet,
    {
        self.collect_keyed(result, |entity| Ok(key(entity)))
            .with_context(|| creating_context(E::shape().name))
    }

    /// Creates one entity per row, keyed by the field getter `method` refers to.
    ///
    /// The reference is checked against `E` before any row is fetched. Integral floats key as
    /// integers, any other float or a null key fails.
    pub fn create_all_by<E: Entity, R: ResultSet>(
        &self,
        result: &mut R,
        method: &MethodRef,
    ) -> Result<BTreeMap<Key, E>> {
        let mut create = || -> Result<BTreeMap<Key, E>> {
            self.schema::<E>()?;
            let getter = method.validate::<E>()?;
            self.collect_keyed(result, |entity| Key::try_from(getter(entity)))
        };
        create().with_context(|| creating_context(E::shape().name))
    }

    /// Persistable row of `entity`, keyed by storage column.
    pub fn to_storage<E: Entity>(&self, entity: &E) -> Result<RowLabeled> {
        let create = || -> Result<RowLabeled> {
            let schema = self.schema::<E>()?;
            EntityMaterializer::new(&schema, &self.registry).to_storage(entity)
        };
        create().with_context(|| storing_context(E::shape().name))
    }

    /// Hands the persistable row of `entity` over to `writer`, along with its table.
    pub fn store<E: Entity, W: StorageWriter>(&self, entity: &E, writer: &mut W) -> Result<()> {
        let row = self.to_storage(entity)?;
        let table = E::shape().table;
        writer
            .write(table, row)
            .with_context(|| storing_context(E::shape().name))
    }

    fn collect_keyed<E, K, R>(
        &self,
        result: &mut R,
        key: impl Fn(&E) -> Result<K>,
    ) -> Result<BTreeMap<K, E>>
    where
        E: Entity,
        K: Ord + Debug,
        R: ResultSet,
    {
        let schema = self.schema::<E>()?;
        let materializer = EntityMaterializer::new(&schema, &self.registry);
        let mut entities = BTreeMap::new();
        for row in self.rows(result)? {
            let entity = materializer.materialize::<E>(row?)?;
            match entities.entry(key(&entity)?) {
                Entry::Occupied(entry) => {
                    return Err(EntityError::DuplicateKey {
                        key: format!("{:?}", entry.key()),
                    }
                    .into());
                }
                Entry::Vacant(entry) => {
                    entry.insert(entity);
                }
            }
        }
        Ok(entities)
    }

    fn rows<R: ResultSet>(
        &self,
        result: &mut R,
    ) -> Result<impl Iterator<Item = Result<RowLabeled>>> {
        let stream = match self.config.stream_threshold {
            Some(..) => {
                let row_count = result.row_count()?;
                debug!("Result reports {row_count} rows");
                self.config.streams(row_count)
            }
            None => false,
        };
        Ok(if stream {
            debug!("Streaming the rows of the result");
            EitherIterator::Left(result.iterate())
        } else {
            debug!("Fetching the rows of the result at once");
            EitherIterator::Right(result.fetch_all()?.into_iter().map(Ok))
        })
    }
}

/// Step by step construction of a [`Hydrator`].
#[derive(Debug, Default)]
pub struct HydratorBuilder {
    config: HydratorConfig,
    converters: Vec<Arc<dyn ValueConverter>>,
}

impl HydratorBuilder {
    pub fn config(mut self, config: HydratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stream_threshold(mut self, threshold: Option<u64>) -> Self {
        self.config.stream_threshold = threshold;
        self
    }

    /// Adds a converter, consulted before the built-in ones in the order added.
    pub fn converter(mut self, converter: impl ValueConverter + 'static) -> Self {
        self.converters.push(Arc::new(converter));
        self
    }

    pub fn build(self) -> Hydrator {
        Hydrator {
            registry: ConverterRegistry::new(self.converters),
            schemas: Default::default(),
            config: self.config,
        }
    }
}
