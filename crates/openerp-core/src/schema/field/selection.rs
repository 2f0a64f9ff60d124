use crate::{err, Error, Result, Value};

/// One `(value, label)` choice of a selection field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionOption {
    /// The code stored in records.
    pub value: String,

    /// The human readable label.
    pub label: String,
}

impl SelectionOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> SelectionOption {
        SelectionOption {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Parses the entry at `index` of a `selection` property.
    ///
    /// Entries longer than two elements keep only the first two.
    pub(super) fn from_entry(index: usize, entry: &Value) -> Result<SelectionOption> {
        let Value::List(items) = entry else {
            return Err(Error::type_conversion(entry, "SelectionOption"));
        };

        match items.as_slice() {
            [value, label, ..] => Ok(SelectionOption {
                value: value.to_text()?,
                label: label.to_text()?,
            }),
            _ => Err(Error::type_conversion(entry, "SelectionOption").context(err!(
                "selection entry {index} has {} elements, expected 2",
                items.len()
            ))),
        }
    }
}

impl<V, L> From<(V, L)> for SelectionOption
where
    V: Into<String>,
    L: Into<String>,
{
    fn from((value, label): (V, L)) -> Self {
        SelectionOption::new(value, label)
    }
}
