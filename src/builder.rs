mod array;
mod dynamic;
mod mixed;
mod node;
mod numeric;
mod object;
mod string;
mod subschema;

pub use numeric::{Integral, Numeric};
pub use subschema::{Dependency, Subschema};

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::SchemaError;
use crate::keyword::{variant_label, Keyword};
use crate::kind::{
    ArrayKind, BooleanKind, IntegerKind, Kind, Mixed, NullKind, NumberKind, ObjectKind, SchemaType,
    StringKind, Untyped,
};
use crate::options::{Context, SchemaOptions};
use node::{Entry, Node};

pub type StringSchema = SchemaBuilder<StringKind>;
pub type NumberSchema = SchemaBuilder<NumberKind>;
pub type IntegerSchema = SchemaBuilder<IntegerKind>;
pub type BooleanSchema = SchemaBuilder<BooleanKind>;
pub type ArraySchema = SchemaBuilder<ArrayKind>;
pub type ObjectSchema = SchemaBuilder<ObjectKind>;
pub type NullSchema = SchemaBuilder<NullKind>;
pub type MixedSchema = SchemaBuilder<Mixed>;

/// An immutable, chainable JSON Schema under construction.
///
/// Every method takes `&self` and returns a new builder; the receiver is
/// never modified, so a builder can serve as a template for several derived
/// schemas. Nested schemas are shared between builders until one of them is
/// changed.
///
/// `K` is the typestate: it decides which keyword families are callable.
pub struct SchemaBuilder<K: Kind = Untyped> {
    pub(crate) node: Arc<Node>,
    pub(crate) context: Context,
    kind: PhantomData<fn() -> K>,
}

impl<K: Kind> Clone for SchemaBuilder<K> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            context: self.context,
            kind: PhantomData,
        }
    }
}

impl<K: Kind> fmt::Debug for SchemaBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("kind", &K::NAME)
            .field("generate_ids", &self.context.generate_ids)
            .field("schema", &self.node.to_value())
            .finish()
    }
}

impl Default for SchemaBuilder<Untyped> {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder<Untyped> {
    /// An empty, untyped builder with default options.
    pub fn new() -> Self {
        Self::from_parts(Node::default(), Context::default())
    }

    /// A root builder configured by `options`.
    ///
    /// The seed document, if any, is copied; the builder never aliases it.
    pub fn with_options(options: SchemaOptions) -> Result<Self, SchemaError> {
        let context = Context::from(&options);
        let node = match &options.schema {
            None => Node::default(),
            Some(Value::Object(document)) => {
                tracing::debug!(
                    keys = document.len(),
                    generate_ids = context.generate_ids,
                    "seeding schema builder"
                );
                Node::load(document).map_err(SchemaError::Configuration)?
            }
            Some(other) => {
                return Err(SchemaError::Configuration(format!(
                    "seed schema must be an object, got {}",
                    json_kind(other)
                )))
            }
        };
        Ok(Self::from_parts(node, context))
    }

    /// Start from an existing document with default options.
    pub fn from_document(document: Value) -> Result<Self, SchemaError> {
        Self::with_options(SchemaOptions::new().with_schema(document))
    }

    pub fn string(&self) -> StringSchema {
        self.select(vec![SchemaType::String], false)
    }

    pub fn number(&self) -> NumberSchema {
        self.select(vec![SchemaType::Number], false)
    }

    pub fn integer(&self) -> IntegerSchema {
        self.select(vec![SchemaType::Integer], false)
    }

    pub fn boolean(&self) -> BooleanSchema {
        self.select(vec![SchemaType::Boolean], false)
    }

    pub fn array(&self) -> ArraySchema {
        self.select(vec![SchemaType::Array], false)
    }

    pub fn object(&self) -> ObjectSchema {
        self.select(vec![SchemaType::Object], false)
    }

    pub fn null(&self) -> NullSchema {
        self.select(vec![SchemaType::Null], false)
    }

    /// A schema accepting any of `types`, with the union of their keywords.
    ///
    /// Keyword calls on the result are checked against the declared types and
    /// return a [`SchemaError::Capability`] when none of them allows the
    /// keyword.
    pub fn mixed(&self, types: &[SchemaType]) -> Result<MixedSchema, SchemaError> {
        if types.is_empty() {
            return Err(SchemaError::invalid(
                "type",
                "a mixed schema needs at least one type",
            ));
        }
        let mut seen = Vec::with_capacity(types.len());
        for t in types {
            if seen.contains(t) {
                return Err(SchemaError::invalid(
                    "type",
                    format!("`{t}` is listed more than once"),
                ));
            }
            seen.push(*t);
        }
        Ok(self.select(seen, true))
    }

    fn select<T: Kind>(&self, types: Vec<SchemaType>, as_list: bool) -> SchemaBuilder<T> {
        tracing::debug!(types = %variant_label(&types), "selecting schema type");
        let mut node = Arc::clone(&self.node);
        Arc::make_mut(&mut node).set_types(types, as_list);
        SchemaBuilder {
            node,
            context: self.context,
            kind: PhantomData,
        }
    }
}

impl<K: Kind> SchemaBuilder<K> {
    fn from_parts(node: Node, context: Context) -> Self {
        Self {
            node: Arc::new(node),
            context,
            kind: PhantomData,
        }
    }

    /// Copy-on-write: the receiver keeps its node, the result gets a changed copy.
    pub(crate) fn update(&self, f: impl FnOnce(&mut Node)) -> Self {
        let mut node = Arc::clone(&self.node);
        f(Arc::make_mut(&mut node));
        Self {
            node,
            context: self.context,
            kind: PhantomData,
        }
    }

    pub(crate) fn with_entry(&self, keyword: Keyword, entry: Entry) -> Self {
        self.update(|node| node.set(keyword.as_str(), entry))
    }

    pub(crate) fn with_value(&self, keyword: Keyword, value: impl Into<Value>) -> Self {
        self.with_entry(keyword, Entry::Value(value.into()))
    }

    /// The declared type(s); empty while untyped.
    pub fn types(&self) -> &[SchemaType] {
        &self.node.types
    }

    /// Whether nested properties and definitions receive generated `$id`s.
    pub fn generates_ids(&self) -> bool {
        self.context.generate_ids
    }

    /// Names of the properties added so far, in insertion order.
    pub fn declared_properties(&self) -> Vec<&str> {
        self.node.property_names()
    }

    /// Sets `$id`.
    pub fn id(&self, id: impl Into<String>) -> Self {
        self.with_value(Keyword::Id, id.into())
    }

    pub fn title(&self, title: impl Into<String>) -> Self {
        self.with_value(Keyword::Title, title.into())
    }

    pub fn description(&self, description: impl Into<String>) -> Self {
        self.with_value(Keyword::Description, description.into())
    }

    pub fn examples<I>(&self, examples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.with_value(Keyword::Examples, collect_values(examples))
    }

    /// Sets `$ref`.
    pub fn reference(&self, reference: impl Into<String>) -> Self {
        self.with_value(Keyword::Ref, reference.into())
    }

    /// Sets `enum`.
    pub fn enum_values<I>(&self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.with_value(Keyword::Enum, collect_values(values))
    }

    /// Sets `const`.
    pub fn constant(&self, value: impl Into<Value>) -> Self {
        self.with_value(Keyword::Const, value)
    }

    /// Sets `default`.
    ///
    /// On `SchemaBuilder<Untyped>` this inherent method shadows
    /// [`Default::default`], so an empty builder is spelled
    /// `SchemaBuilder::new()` or `<SchemaBuilder as Default>::default()`.
    pub fn default(&self, value: impl Into<Value>) -> Self {
        self.with_value(Keyword::Default, value)
    }

    /// Mark a field as required.
    ///
    /// On a builder that already has properties this requires the most
    /// recently added one. Otherwise the builder itself is marked, and the
    /// enclosing object's [`prop`](SchemaBuilder::prop) lists it under
    /// `required`. Repeated calls never duplicate a name.
    pub fn required(&self) -> Self {
        self.update(Node::mark_required)
    }

    pub fn not(&self, schema: impl Into<Subschema>) -> Self {
        self.with_entry(Keyword::Not, Entry::Schema(schema.into()))
    }

    pub fn any_of<I>(&self, schemas: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Subschema>,
    {
        self.with_entry(Keyword::AnyOf, Entry::Schemas(collect_schemas(schemas)))
    }

    pub fn all_of<I>(&self, schemas: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Subschema>,
    {
        self.with_entry(Keyword::AllOf, Entry::Schemas(collect_schemas(schemas)))
    }

    pub fn one_of<I>(&self, schemas: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Subschema>,
    {
        self.with_entry(Keyword::OneOf, Entry::Schemas(collect_schemas(schemas)))
    }

    /// Render the schema and every nested builder to a plain document.
    pub fn to_value(&self) -> Value {
        self.node.to_value()
    }

    /// Fails with [`SchemaError::Capability`] unless `keyword` suits the
    /// declared types.
    pub(crate) fn checked(&self, keyword: Keyword) -> Result<&Self, SchemaError> {
        keyword.check(self.types()).map(|()| self)
    }
}

impl<K: Kind> Serialize for SchemaBuilder<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<K: Kind> From<SchemaBuilder<K>> for Value {
    fn from(builder: SchemaBuilder<K>) -> Self {
        builder.to_value()
    }
}

pub(crate) fn collect_values<I>(values: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Value::Array(values.into_iter().map(Into::into).collect())
}

pub(crate) fn collect_schemas<I>(schemas: I) -> Vec<Subschema>
where
    I: IntoIterator,
    I::Item: Into<Subschema>,
{
    schemas.into_iter().map(Into::into).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_selection_writes_type() {
        let root = SchemaBuilder::new();
        assert_eq!(root.string().to_value(), json!({"type": "string"}));
        assert_eq!(root.null().to_value(), json!({"type": "null"}));
        assert_eq!(root.to_value(), json!({}));
    }

    #[test]
    fn universal_keywords_on_untyped_root() {
        let schema = SchemaBuilder::new()
            .id("http://example.com/root")
            .title("Root")
            .description("a root")
            .reference("#/definitions/other")
            .constant(3)
            .default(json!({"a": 1}));
        assert_eq!(
            schema.to_value(),
            json!({
                "$id": "http://example.com/root",
                "title": "Root",
                "description": "a root",
                "$ref": "#/definitions/other",
                "const": 3,
                "default": {"a": 1}
            })
        );
    }

    #[test]
    fn mixed_rejects_empty_and_duplicate_lists() {
        let root = SchemaBuilder::new();
        assert!(matches!(
            root.mixed(&[]),
            Err(SchemaError::InvalidValue { .. })
        ));
        assert!(matches!(
            root.mixed(&[SchemaType::Null, SchemaType::Null]),
            Err(SchemaError::InvalidValue { .. })
        ));
    }

    #[test]
    fn seed_must_be_an_object() {
        let err = SchemaBuilder::from_document(json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Configuration("seed schema must be an object, got an array".into())
        );
    }

    #[test]
    fn default_keyword_and_default_builder_coexist() {
        let empty = <SchemaBuilder as Default>::default();
        assert_eq!(empty.default(1).to_value(), json!({"default": 1}));
    }

    #[test]
    fn later_calls_overwrite_the_same_keyword() {
        let schema = SchemaBuilder::new().title("a").title("b");
        assert_eq!(schema.to_value(), json!({"title": "b"}));
    }

    #[test]
    fn builders_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObjectSchema>();
        assert_send_sync::<MixedSchema>();
        assert_send_sync::<Subschema>();
    }
}
