//! Per-scalar code generation.

/// Defines the scalar types a late-bound method may take or return.
/// Arguments passed to callback:
/// 1. Rust Type
/// 2. `Type` / `Value` Variant
macro_rules! for_each_scalar {
    ($m:ident) => {
        $m!(bool, Bool);
        $m!(u8,   U8);
        $m!(u16,  U16);
        $m!(u32,  U32);
        $m!(u64,  U64);
        $m!(i8,   S8);
        $m!(i16,  S16);
        $m!(i32,  S32);
        $m!(i64,  S64);
        $m!(f32,  F32);
        $m!(f64,  F64);
        $m!(char, Char);
    };
}

/// Generates `FromValue`, `IntoValue` and `From<$ty> for Value` for a type
/// whose `Value` variant holds it directly.
macro_rules! impl_value_conversions {
    ($ty:ty, $var:ident) => {
        impl $crate::FromValue for $ty {
            const TYPE: $crate::Type = $crate::Type::$var;

            #[inline]
            fn from_value(value: $crate::Value) -> $crate::Result<Self> {
                match value {
                    $crate::Value::$var(v) => Ok(v),
                    $crate::Value::Nothing => Ok(<$ty>::default()),
                    other => Err($crate::Error::TypeMismatch {
                        expected: $crate::Type::$var,
                        found: other.type_name(),
                    }),
                }
            }
        }

        impl $crate::IntoValue for $ty {
            const TYPE: $crate::Type = $crate::Type::$var;

            #[inline]
            fn into_value(self) -> $crate::Value {
                $crate::Value::$var(self)
            }
        }

        impl From<$ty> for $crate::Value {
            #[inline]
            fn from(v: $ty) -> Self {
                $crate::Value::$var(v)
            }
        }
    };
}

pub(crate) use for_each_scalar;
pub(crate) use impl_value_conversions;
