use super::{Type, Value};
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $to:ident
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        impl Value {
            $(
                /// Converts the value, accepting any integer variant whose
                /// contents fit in the target type.
                pub fn $to(self) -> crate::Result<$ty> {
                    let converted = match &self {
                        Value::I8(v) => <$ty>::try_from(*v).ok(),
                        Value::I16(v) => <$ty>::try_from(*v).ok(),
                        Value::I32(v) => <$ty>::try_from(*v).ok(),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::U8(v) => <$ty>::try_from(*v).ok(),
                        Value::U16(v) => <$ty>::try_from(*v).ok(),
                        Value::U32(v) => <$ty>::try_from(*v).ok(),
                        Value::U64(v) => <$ty>::try_from(*v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(self, stringify!($ty)))
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    value.$to()
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        to_i8
        is_i8
    }
    I16(i16) {
        to_i16
        is_i16
    }
    I32(i32) {
        to_i32
        is_i32
    }
    I64(i64) {
        to_i64
        is_i64
    }
    U8(u8) {
        to_u8
        is_u8
    }
    U16(u16) {
        to_u16
        is_u16
    }
    U32(u32) {
        to_u32
        is_u32
    }
    U64(u64) {
        to_u64
        is_u64
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl Value {
    /// Converts the value to `f64`. Integer values are widened; databases
    /// frequently report whole-number `NUMERIC`/`REAL` values as integers.
    pub fn to_f64(self) -> crate::Result<f64> {
        match self {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(v as f64),
            value => match value.as_i64() {
                Some(v) => Ok(v as f64),
                None => Err(Error::type_conversion(value, "f64")),
            },
        }
    }

    pub fn to_f32(self) -> crate::Result<f32> {
        match self {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            value => match value.as_i64() {
                Some(v) => Ok(v as f32),
                None => Err(Error::type_conversion(value, "f32")),
            },
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.to_f64()
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.to_f32()
    }
}
