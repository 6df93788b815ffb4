use serde_json::{Number, Value};

use super::SchemaBuilder;
use crate::error::SchemaError;
use crate::keyword::Keyword;
use crate::kind::NumericCapable;

mod sealed {
    pub trait Sealed {}
}

/// Rust numbers accepted as numeric bounds.
///
/// Integers stay integers in the output (`minimum(0)` writes `0`, not
/// `0.0`). NaN and the infinities have no JSON form and are rejected.
pub trait Numeric: sealed::Sealed + Copy {
    /// The JSON number, or `None` for a non-finite float.
    fn to_number(self) -> Option<Number>;
}

/// Integer bounds, which always have a JSON form.
pub trait Integral: Numeric {
    fn to_json(self) -> Value;
}

macro_rules! integral {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                fn to_number(self) -> Option<Number> {
                    Some(Number::from(self))
                }
            }

            impl Integral for $t {
                fn to_json(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl sealed::Sealed for f32 {}

impl Numeric for f32 {
    fn to_number(self) -> Option<Number> {
        Number::from_f64(f64::from(self))
    }
}

impl sealed::Sealed for f64 {}

impl Numeric for f64 {
    fn to_number(self) -> Option<Number> {
        Number::from_f64(self)
    }
}

/// `value` as a JSON number, or [`SchemaError::InvalidValue`] naming `keyword`.
pub(crate) fn bound(keyword: Keyword, value: impl Numeric) -> Result<Value, SchemaError> {
    value
        .to_number()
        .map(Value::Number)
        .ok_or_else(|| SchemaError::invalid(keyword.as_str(), "expected a finite number"))
}

/// Integer bounds are infallible; the `try_` forms take any [`Numeric`],
/// floats included, and reject NaN and the infinities.
impl<K: NumericCapable> SchemaBuilder<K> {
    pub fn minimum(&self, min: impl Integral) -> Self {
        self.with_value(Keyword::Minimum, min.to_json())
    }

    pub fn exclusive_minimum(&self, min: impl Integral) -> Self {
        self.with_value(Keyword::ExclusiveMinimum, min.to_json())
    }

    pub fn maximum(&self, max: impl Integral) -> Self {
        self.with_value(Keyword::Maximum, max.to_json())
    }

    pub fn exclusive_maximum(&self, max: impl Integral) -> Self {
        self.with_value(Keyword::ExclusiveMaximum, max.to_json())
    }

    pub fn multiple_of(&self, multiple: impl Integral) -> Self {
        self.with_value(Keyword::MultipleOf, multiple.to_json())
    }

    pub fn try_minimum(&self, min: impl Numeric) -> Result<Self, SchemaError> {
        self.with_bound(Keyword::Minimum, min)
    }

    pub fn try_exclusive_minimum(&self, min: impl Numeric) -> Result<Self, SchemaError> {
        self.with_bound(Keyword::ExclusiveMinimum, min)
    }

    pub fn try_maximum(&self, max: impl Numeric) -> Result<Self, SchemaError> {
        self.with_bound(Keyword::Maximum, max)
    }

    pub fn try_exclusive_maximum(&self, max: impl Numeric) -> Result<Self, SchemaError> {
        self.with_bound(Keyword::ExclusiveMaximum, max)
    }

    pub fn try_multiple_of(&self, multiple: impl Numeric) -> Result<Self, SchemaError> {
        self.with_bound(Keyword::MultipleOf, multiple)
    }

    fn with_bound(&self, keyword: Keyword, value: impl Numeric) -> Result<Self, SchemaError> {
        Ok(self.with_value(keyword, bound(keyword, value)?))
    }
}
