use super::Value;
use crate::Error;

// Strict conversions: a value only converts to the Rust type matching its own
// variant. The one exception is `i32`, which narrows from `I64` when in range.

macro_rules! impl_try_from {
    ( $( $variant:ident => $ty:ty, )* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(val) => Ok(val),
                        _ => Err(Error::type_conversion(&value, stringify!($ty))),
                    }
                }
            }

            impl TryFrom<&Value> for $ty {
                type Error = Error;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(val) => Ok(val.clone()),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_try_from! {
    Bool => bool,
    I64 => i64,
    F64 => f64,
    String => String,
    List => Vec<Value>,
}

impl TryFrom<&Value> for i32 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(val) => i32::try_from(*val).map_err(|_| {
                Error::type_conversion(value, "i32")
                    .context(crate::err!("value {val} is out of range for i32"))
            }),
            _ => Err(Error::type_conversion(value, "i32")),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        i32::try_from(&value)
    }
}
