use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configuration for a root [`SchemaBuilder`](crate::SchemaBuilder).
///
/// Field names follow the camelCase convention of the documents being built,
/// so options can be read from JSON:
///
/// ```
/// use fluent_schema::SchemaOptions;
///
/// let options: SchemaOptions =
///     serde_json::from_str(r#"{"generateIds": true}"#).unwrap();
/// assert!(options.generate_ids);
/// assert!(options.schema.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaOptions {
    /// Existing document the builder starts from. Must be a JSON object.
    pub schema: Option<Value>,
    /// Give nested properties and definitions a `$id` derived from their
    /// name, unless they set one themselves.
    pub generate_ids: bool,
}

impl SchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_generate_ids(mut self, generate_ids: bool) -> Self {
        self.generate_ids = generate_ids;
        self
    }
}

/// The part of [`SchemaOptions`] every derived builder carries along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Context {
    pub(crate) generate_ids: bool,
}

impl From<&SchemaOptions> for Context {
    fn from(options: &SchemaOptions) -> Self {
        Context {
            generate_ids: options.generate_ids,
        }
    }
}
