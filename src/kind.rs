//! Schema types and the typestate markers that drive the fluent API.
//!
//! A [`SchemaBuilder<K>`](crate::SchemaBuilder) is parameterised by one of
//! the zero-sized markers below. The capability traits decide which keyword
//! families a marker unlocks, so calling a string keyword on an object
//! builder is a compile error rather than a runtime one.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// One of the seven JSON Schema instance types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

impl SchemaType {
    pub const ALL: [SchemaType; 7] = [
        SchemaType::String,
        SchemaType::Number,
        SchemaType::Integer,
        SchemaType::Boolean,
        SchemaType::Array,
        SchemaType::Object,
        SchemaType::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownType(s.to_string()))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Marker implemented by every builder state.
pub trait Kind: sealed::Sealed + 'static {
    /// Name used in error messages for statically typed states.
    const NAME: &'static str;
}

/// Unlocks `minLength`, `maxLength`, `format`, `pattern`, `contentEncoding`
/// and `contentMediaType`.
pub trait StringCapable: Kind {}

/// Unlocks `minimum`, `exclusiveMinimum`, `maximum`, `exclusiveMaximum` and
/// `multipleOf`.
pub trait NumericCapable: Kind {}

/// Unlocks `items`, `additionalItems`, `contains`, `uniqueItems`,
/// `minItems` and `maxItems`.
pub trait ArrayCapable: Kind {}

/// Unlocks properties, definitions and the other object keywords.
pub trait ObjectCapable: Kind {}

macro_rules! kinds {
    ($($(#[$meta:meta])* $name:ident => $label:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl Kind for $name {
                const NAME: &'static str = $label;
            }
        )*
    };
}

kinds! {
    /// No type selected yet; only universal keywords are available.
    Untyped => "untyped",
    StringKind => "string",
    NumberKind => "number",
    IntegerKind => "integer",
    BooleanKind => "boolean",
    ArrayKind => "array",
    ObjectKind => "object",
    NullKind => "null",
    /// A union of several types. Keyword availability is checked at the call
    /// site against the declared types.
    Mixed => "mixed",
}

impl StringCapable for StringKind {}
impl NumericCapable for NumberKind {}
impl NumericCapable for IntegerKind {}
impl ArrayCapable for ArrayKind {}
impl ObjectCapable for ObjectKind {}
