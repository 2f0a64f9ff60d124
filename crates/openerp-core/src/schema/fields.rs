use super::{FieldMetadata, Properties};
use indexmap::IndexMap;

/// The fields of one model, in the order the server listed them.
///
/// This is the typed form of a single `fields_get` response. It is not kept
/// in sync with the server; fetch it again to observe schema changes.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    fields: IndexMap<String, FieldMetadata>,
}

impl Fields {
    pub fn new() -> Fields {
        Fields::default()
    }

    /// Builds the collection from `(name, properties)` pairs.
    ///
    /// A later pair with an already seen name replaces the earlier one.
    pub fn from_properties<I, N>(iter: I) -> Fields
    where
        I: IntoIterator<Item = (N, Properties)>,
        N: Into<String>,
    {
        iter.into_iter()
            .map(|(name, properties)| FieldMetadata::new(name, properties))
            .collect()
    }

    /// Parses the object returned by a JSON-RPC `fields_get` call.
    ///
    /// Object-valued properties (`states`, `context`, ...) are not
    /// representable and are stored as [`Value::Null`](crate::Value::Null);
    /// their payload is lost. Every other property is kept as sent.
    #[cfg(feature = "json")]
    pub fn from_json(response: serde_json::Value) -> crate::Result<Fields> {
        let map = match response {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(crate::Error::type_conversion(&other.into(), "Fields")
                    .context(crate::err!("fields_get response")))
            }
        };

        let mut fields = Fields::new();
        for (name, properties) in map {
            let properties = match properties {
                serde_json::Value::Object(properties) => properties,
                other => {
                    return Err(crate::Error::type_conversion(&other.into(), "Properties")
                        .context(crate::err!("fields_get entry `{name}`")))
                }
            };

            let properties: Properties = properties
                .into_iter()
                .map(|(key, value)| (key, crate::Value::from(value)))
                .collect();
            fields.insert(FieldMetadata::new(name, properties));
        }

        Ok(fields)
    }

    /// Adds a field, replacing any field of the same name.
    pub fn insert(&mut self, field: FieldMetadata) -> Option<FieldMetadata> {
        self.fields.insert(field.name().to_string(), field)
    }

    pub fn get(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMetadata> + '_ {
        self.fields.values()
    }
}

impl FromIterator<FieldMetadata> for Fields {
    fn from_iter<T: IntoIterator<Item = FieldMetadata>>(iter: T) -> Self {
        let mut fields = Fields::new();
        for field in iter {
            fields.insert(field);
        }
        fields
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a FieldMetadata;
    type IntoIter = indexmap::map::Values<'a, String, FieldMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}
