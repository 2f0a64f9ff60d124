mod field;
pub use field::{FieldMetadata, FieldType, Properties, SelectionOption};

mod fields;
pub use fields::Fields;
