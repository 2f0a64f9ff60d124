use super::{Error, ErrorKind};
use crate::value::{Type, Value};

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) ty: Type,
    pub(super) to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {:?} to {}", self.ty, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// This is used when a stored property value does not have the type the
    /// accessor reading it expects.
    pub fn type_conversion(value: &Value, to_type: &'static str) -> Error {
        Error::from(ErrorKind::TypeConversion(TypeConversionError {
            ty: value.infer_ty(),
            to_type,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a type
    /// conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::TypeConversion(_)))
    }
}
