use std::{fmt, str::FromStr};

/// The kind of data a field holds, as named by the `type` property.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldType {
    Integer,
    #[default]
    Char,
    Text,
    Boolean,
    Float,
    DateTime,
    Date,
    #[cfg_attr(feature = "serde", serde(rename = "many2one"))]
    ManyToOne,
    #[cfg_attr(feature = "serde", serde(rename = "one2many"))]
    OneToMany,
    #[cfg_attr(feature = "serde", serde(rename = "many2many"))]
    ManyToMany,
    Selection,
}

/// Wire name to field type. Lookups ignore ASCII case.
const WIRE_NAMES: [(&str, FieldType); 11] = [
    ("integer", FieldType::Integer),
    ("char", FieldType::Char),
    ("text", FieldType::Text),
    ("boolean", FieldType::Boolean),
    ("float", FieldType::Float),
    ("datetime", FieldType::DateTime),
    ("date", FieldType::Date),
    ("many2one", FieldType::ManyToOne),
    ("one2many", FieldType::OneToMany),
    ("many2many", FieldType::ManyToMany),
    ("selection", FieldType::Selection),
];

impl FieldType {
    pub const ALL: [FieldType; 11] = [
        FieldType::Integer,
        FieldType::Char,
        FieldType::Text,
        FieldType::Boolean,
        FieldType::Float,
        FieldType::DateTime,
        FieldType::Date,
        FieldType::ManyToOne,
        FieldType::OneToMany,
        FieldType::ManyToMany,
        FieldType::Selection,
    ];

    /// Looks up a field type by its wire name, ignoring ASCII case.
    ///
    /// Returns `None` for names the server may send but this crate does not
    /// model (`binary`, `html`, `reference`, ...).
    pub fn from_wire(name: &str) -> Option<FieldType> {
        WIRE_NAMES
            .iter()
            .find(|(wire, _)| wire.eq_ignore_ascii_case(name))
            .map(|(_, ty)| *ty)
    }

    /// The canonical lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Char => "char",
            FieldType::Text => "text",
            FieldType::Boolean => "boolean",
            FieldType::Float => "float",
            FieldType::DateTime => "datetime",
            FieldType::Date => "date",
            FieldType::ManyToOne => "many2one",
            FieldType::OneToMany => "one2many",
            FieldType::ManyToMany => "many2many",
            FieldType::Selection => "selection",
        }
    }

    /// Returns `true` for fields referencing another model.
    pub fn is_relation(self) -> bool {
        matches!(
            self,
            FieldType::ManyToOne | FieldType::OneToMany | FieldType::ManyToMany
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = std::convert::Infallible;

    /// Unrecognized names parse as [`FieldType::Char`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldType::from_wire(s).unwrap_or_default())
    }
}
