//! Typed access to OpenERP object-model field metadata.
//!
//! The `fields_get` introspection call describes every field of a model as a
//! loosely typed property bag. [`FieldMetadata`] wraps one of those bags and
//! exposes its well-known properties with the defaults the server implies when
//! a property is omitted.

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{FieldMetadata, FieldType, Fields, Properties, SelectionOption};

pub mod value;
pub use value::Value;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
