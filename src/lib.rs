//! # fluent-json-schema
//!
//! Build [JSON Schema](https://json-schema.org/) (draft-07) documents with a
//! fluent, immutable builder whose type tracks which keywords are legal.
//!
//! ## Features
//!
//! - One builder state per schema type (`string`, `number`, `integer`,
//!   `boolean`, `array`, `object`, `null`), so a string keyword on an object
//!   schema does not compile
//! - `mixed` schemas over several types, checked at the call site
//! - Composition keywords (`anyOf`, `allOf`, `oneOf`, `not`) taking nested
//!   builders, plain documents or boolean schemas
//! - `prop(...).required()` bookkeeping for the parent's `required` list
//! - Optional `$id` generation for properties and definitions
//! - Seeding from an existing document, which round-trips unchanged
//!
//! ## Example
//!
//! ```
//! use fluent_schema::{number, object, string};
//! use serde_json::json;
//!
//! let person = object()
//!     .prop("age", number().minimum(0).maximum(120))
//!     .prop("name", string().min_length(1))
//!     .required();
//!
//! assert_eq!(
//!     person.to_value(),
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "age": {"type": "number", "minimum": 0, "maximum": 120},
//!             "name": {"type": "string", "minLength": 1}
//!         },
//!         "required": ["name"]
//!     })
//! );
//! ```
//!
//! Builders are values: every call returns a new builder and leaves the
//! receiver untouched, so a partially built schema can be reused.
//!
//! ```
//! use fluent_schema::string;
//!
//! let base = string().min_length(1);
//! let short = base.max_length(8);
//! let long = base.max_length(256);
//! assert_eq!(short.to_value()["maxLength"], 8);
//! assert_eq!(long.to_value()["maxLength"], 256);
//! assert!(base.to_value().get("maxLength").is_none());
//! ```
//!
//! ## Options
//!
//! ```
//! use fluent_schema::{string, SchemaBuilder, SchemaOptions};
//!
//! let root = SchemaBuilder::with_options(SchemaOptions::new().with_generate_ids(true))?;
//! let schema = root.object().prop("email", string());
//! assert_eq!(schema.to_value()["properties"]["email"]["$id"], "#properties/email");
//! # Ok::<(), fluent_schema::SchemaError>(())
//! ```
//!
//! ## Crate Layout
//!
//! - [`builder`] — [`SchemaBuilder`] and its keyword families
//! - [`kind`] — [`SchemaType`] and the typestate markers
//! - [`keyword`] — the keyword vocabulary and capability checks
//! - [`format`] — the recognised `format` names
//! - [`options`] — [`SchemaOptions`]
//! - [`common`] — JSON Pointer helpers
pub mod builder;
pub mod common;
pub mod error;
pub mod format;
pub mod keyword;
pub mod kind;
pub mod options;

pub use builder::{
    ArraySchema, BooleanSchema, Dependency, IntegerSchema, MixedSchema, NullSchema, NumberSchema,
    Integral, Numeric, ObjectSchema, SchemaBuilder, StringSchema, Subschema,
};
pub use error::SchemaError;
pub use format::Format;
pub use keyword::{Keyword, Vocabulary};
pub use kind::SchemaType;
pub use options::SchemaOptions;

/// `{"type": "string"}` with default options.
pub fn string() -> StringSchema {
    SchemaBuilder::new().string()
}

/// `{"type": "number"}` with default options.
pub fn number() -> NumberSchema {
    SchemaBuilder::new().number()
}

/// `{"type": "integer"}` with default options.
pub fn integer() -> IntegerSchema {
    SchemaBuilder::new().integer()
}

/// `{"type": "boolean"}` with default options.
pub fn boolean() -> BooleanSchema {
    SchemaBuilder::new().boolean()
}

/// `{"type": "array"}` with default options.
pub fn array() -> ArraySchema {
    SchemaBuilder::new().array()
}

/// `{"type": "object"}` with default options.
pub fn object() -> ObjectSchema {
    SchemaBuilder::new().object()
}

/// `{"type": "null"}` with default options.
pub fn null() -> NullSchema {
    SchemaBuilder::new().null()
}

/// `{"type": [...]}` with default options. See [`SchemaBuilder::mixed`].
pub fn mixed(types: &[SchemaType]) -> Result<MixedSchema, SchemaError> {
    SchemaBuilder::new().mixed(types)
}
