use std::sync::Arc;

use serde_json::Value;

use super::node::Node;
use super::SchemaBuilder;
use crate::kind::Kind;

/// A schema passed as an argument to another builder: a nested builder, a
/// plain JSON document or a boolean schema.
///
/// Builders convert with `.into()` (or implicitly wherever an
/// `impl Into<Subschema>` is accepted), so differently typed builders can be
/// mixed in one list:
///
/// ```
/// use fluent_schema::{integer, string, Subschema};
///
/// let choices: Vec<Subschema> = vec![string().into(), integer().into()];
/// assert_eq!(choices.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Subschema(Inner);

#[derive(Debug, Clone)]
enum Inner {
    Builder(Arc<Node>),
    Document(Value),
}

impl Subschema {
    /// Render this schema (and everything below it) to a document.
    pub fn to_value(&self) -> Value {
        self.render("")
    }

    /// Render as the subschema found at `pointer` in the enclosing document.
    pub(crate) fn render(&self, pointer: &str) -> Value {
        match &self.0 {
            Inner::Builder(node) => node.render(pointer),
            Inner::Document(value) => value.clone(),
        }
    }

    pub(crate) fn is_marked_required(&self) -> bool {
        match &self.0 {
            Inner::Builder(node) => node.is_marked_required(),
            Inner::Document(_) => false,
        }
    }
}

impl<K: Kind> From<SchemaBuilder<K>> for Subschema {
    fn from(builder: SchemaBuilder<K>) -> Self {
        Subschema(Inner::Builder(builder.node))
    }
}

impl<K: Kind> From<&SchemaBuilder<K>> for Subschema {
    fn from(builder: &SchemaBuilder<K>) -> Self {
        Subschema(Inner::Builder(Arc::clone(&builder.node)))
    }
}

impl From<Value> for Subschema {
    fn from(value: Value) -> Self {
        Subschema(Inner::Document(value))
    }
}

impl From<bool> for Subschema {
    fn from(value: bool) -> Self {
        Subschema(Inner::Document(Value::Bool(value)))
    }
}

/// The value side of a `dependencies` entry.
#[derive(Debug, Clone)]
pub enum Dependency {
    /// Properties that must be present whenever the key property is.
    Properties(Vec<String>),
    /// A schema the whole instance must also match.
    Schema(Subschema),
}

impl Dependency {
    pub fn properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dependency::Properties(names.into_iter().map(Into::into).collect())
    }

    pub(crate) fn into_subschema(self) -> Subschema {
        match self {
            Dependency::Properties(names) => Subschema::from(Value::Array(
                names.into_iter().map(Value::String).collect(),
            )),
            Dependency::Schema(schema) => schema,
        }
    }
}

impl From<Vec<String>> for Dependency {
    fn from(names: Vec<String>) -> Self {
        Dependency::Properties(names)
    }
}

impl From<Vec<&str>> for Dependency {
    fn from(names: Vec<&str>) -> Self {
        Dependency::properties(names)
    }
}

impl<K: Kind> From<SchemaBuilder<K>> for Dependency {
    fn from(builder: SchemaBuilder<K>) -> Self {
        Dependency::Schema(builder.into())
    }
}

impl From<Subschema> for Dependency {
    fn from(schema: Subschema) -> Self {
        Dependency::Schema(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_dependency_renders_as_list() {
        let dep = Dependency::from(vec!["street", "city"]).into_subschema();
        assert_eq!(dep.to_value(), json!(["street", "city"]));
    }
}
