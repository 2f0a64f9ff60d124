mod selection;
pub use selection::SelectionOption;

mod ty;
pub use ty::FieldType;

use crate::{err, Error, Result, Value};
use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// The raw property mapping describing one field.
pub type Properties = IndexMap<String, Value>;

/// Metadata for a single field of a remote model.
///
/// Wraps the property mapping returned by introspection without copying it.
/// Every accessor reads the mapping on each call; nothing is cached. A
/// property that is absent, or present but null, resolves to the accessor's
/// default. A property holding a value of the wrong type is reported as a
/// type conversion error.
#[derive(Debug, Clone)]
pub struct FieldMetadata {
    /// The field name, as keyed in the `fields_get` response
    name: String,

    /// The server supplied properties, shared with the caller
    properties: Arc<Properties>,
}

impl FieldMetadata {
    /// Creates the metadata for field `name` over `properties`.
    ///
    /// No validation is performed; a mapping missing every well-known key is
    /// accepted and all accessors return their defaults.
    pub fn new(name: impl Into<String>, properties: impl Into<Arc<Properties>>) -> FieldMetadata {
        let name = name.into();
        debug_assert!(!name.is_empty(), "field name must not be empty");

        FieldMetadata {
            name,
            properties: properties.into(),
        }
    }

    /// Returns the raw value stored under `key`, if any.
    ///
    /// This is the escape hatch for properties without a typed accessor
    /// (`digits`, `domain`, `translate`, ...).
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Gets the whole property mapping.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Gets the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the field label (the `string` property).
    pub fn description(&self) -> Result<Option<String>> {
        self.read_opt("string")
    }

    /// Gets the field type.
    ///
    /// Wire names are matched ignoring case. A missing or unrecognized type is
    /// reported as [`FieldType::Char`]; use `property("type")` for the
    /// original string.
    pub fn ty(&self) -> Result<FieldType> {
        match self.lookup("type") {
            None => Ok(FieldType::Char),
            Some(Value::String(name)) => Ok(FieldType::from_wire(name).unwrap_or_else(|| {
                tracing::debug!(field = %self.name, ty = %name, "unrecognized field type; using char");
                FieldType::Char
            })),
            Some(other) => Err(Error::type_conversion(other, "FieldType")
                .context(self.property_context("type"))),
        }
    }

    /// Gets whether a value is required. Defaults to `false`.
    pub fn required(&self) -> Result<bool> {
        self.read("required", false)
    }

    /// Gets whether the field can be used in search filters. Defaults to
    /// `true`.
    pub fn selectable(&self) -> Result<bool> {
        self.read("selectable", true)
    }

    /// Gets the choices of a selection field.
    ///
    /// Returns `None` for any other field type, even when a `selection`
    /// property is present. A selection field without a sequence-shaped
    /// `selection` property has no options.
    pub fn selection_options(&self) -> Result<Option<Vec<SelectionOption>>> {
        if self.ty()? != FieldType::Selection {
            return Ok(None);
        }

        let Some(Value::List(entries)) = self.lookup("selection") else {
            return Ok(Some(vec![]));
        };

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| SelectionOption::from_entry(index, entry))
            .collect::<Result<Vec<_>>>()
            .map(Some)
            .map_err(|e| e.context(self.property_context("selection")))
    }

    /// Gets the maximum length of a char field. Defaults to 64.
    pub fn size(&self) -> Result<i32> {
        self.read("size", 64)
    }

    /// Gets the tooltip text.
    pub fn help(&self) -> Result<Option<String>> {
        self.read_opt("help")
    }

    /// Gets whether the field is persisted. Defaults to `true`.
    pub fn store(&self) -> Result<bool> {
        self.read("store", true)
    }

    /// Gets whether a function field is computed by a method. Defaults to
    /// `false`.
    pub fn func_method(&self) -> Result<bool> {
        self.read("func_method", false)
    }

    /// Gets the target model of a relation field. Defaults to an empty string.
    pub fn relation(&self) -> Result<String> {
        self.read("relation", String::new())
    }

    /// Gets whether the field is read only. Defaults to `false`.
    ///
    /// Older servers encode this flag as the integer `0` or `1`; an integer is
    /// read only when it equals `1`.
    pub fn readonly(&self) -> Result<bool> {
        match self.lookup("readonly") {
            None => Ok(false),
            Some(Value::Bool(v)) => Ok(*v),
            Some(Value::I64(v)) => Ok(*v == 1),
            Some(other) => {
                Err(Error::type_conversion(other, "bool").context(self.property_context("readonly")))
            }
        }
    }

    /// Returns `true` if the field references another model.
    pub fn is_relation(&self) -> Result<bool> {
        Ok(self.ty()?.is_relation())
    }

    /// Null is how XML-RPC marshals an unset property, so it reads as absent.
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).filter(|value| !value.is_null())
    }

    fn read<T>(&self, key: &'static str, default: T) -> Result<T>
    where
        T: for<'a> TryFrom<&'a Value, Error = Error>,
    {
        match self.lookup(key) {
            None => Ok(default),
            Some(value) => T::try_from(value).map_err(|e| e.context(self.property_context(key))),
        }
    }

    fn read_opt<T>(&self, key: &'static str) -> Result<Option<T>>
    where
        T: for<'a> TryFrom<&'a Value, Error = Error>,
    {
        self.lookup(key)
            .map(|value| T::try_from(value).map_err(|e| e.context(self.property_context(key))))
            .transpose()
    }

    fn property_context(&self, key: &str) -> Error {
        err!("property `{key}` of field `{}`", self.name)
    }
}

impl fmt::Display for FieldMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty() {
            Ok(ty) => write!(f, "{} ({ty})", self.name),
            Err(_) => f.write_str(&self.name),
        }
    }
}
