mod as_value;
mod config;
mod converter;
mod declared_type;
mod entity;
mod error;
mod hydrator;
mod key;
mod marker;
mod materializer;
mod name_mapper;
mod registry;
mod result_set;
mod schema;
mod storage;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use config::*;
pub use converter::*;
pub use declared_type::*;
pub use entity::*;
pub use error::*;
pub use hydrator::*;
pub use key::*;
pub use marker::*;
pub use materializer::*;
pub use name_mapper::*;
pub use registry::*;
pub use result_set::*;
pub use schema::*;
pub use storage::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
