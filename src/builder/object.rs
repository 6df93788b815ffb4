use super::node::{Entry, Member};
use super::{Dependency, SchemaBuilder, Subschema};
use crate::keyword::Keyword;
use crate::kind::{Kind, ObjectCapable};

impl<K: Kind> SchemaBuilder<K> {
    /// Register `schema` under `properties` (or `definitions`), lifting a
    /// pending `required()` from a property. With id generation on, the
    /// entry gets a `$id` derived from its location when rendered.
    pub(crate) fn put_named(&self, section: Keyword, name: String, schema: Subschema) -> Self {
        let generate_id = self.context.generate_ids;
        tracing::trace!(section = %section, %name, generate_id, "registering nested schema");
        self.update(|node| {
            if section == Keyword::Definitions {
                node.put_definition(name, Member::new(schema, generate_id));
            } else {
                if schema.is_marked_required() {
                    node.require(&name);
                }
                node.put_property(name, Member::new(schema, generate_id));
            }
        })
    }

    pub(crate) fn put_pattern_properties<I, N, S>(&self, patterns: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Subschema>,
    {
        let named = patterns
            .into_iter()
            .map(|(pattern, schema)| (pattern.into(), schema.into()))
            .collect();
        self.with_entry(Keyword::PatternProperties, Entry::Named(named))
    }

    pub(crate) fn put_dependencies<I, N, D>(&self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<Dependency>,
    {
        let named = dependencies
            .into_iter()
            .map(|(name, dependency)| (name.into(), dependency.into().into_subschema()))
            .collect();
        self.with_entry(Keyword::Dependencies, Entry::Named(named))
    }
}

impl<K: ObjectCapable> SchemaBuilder<K> {
    /// Add (or replace) property `name`.
    ///
    /// If `schema` was marked with [`required`](SchemaBuilder::required), the
    /// name is appended to this object's `required` list.
    pub fn prop(&self, name: impl Into<String>, schema: impl Into<Subschema>) -> Self {
        self.put_named(Keyword::Properties, name.into(), schema.into())
    }

    /// Add (or replace) a reusable schema under `definitions`, to be
    /// referenced with `#/definitions/<name>`.
    pub fn definition(&self, name: impl Into<String>, schema: impl Into<Subschema>) -> Self {
        self.put_named(Keyword::Definitions, name.into(), schema.into())
    }

    /// Schema (or `true`/`false` gate) for properties not otherwise matched.
    pub fn additional_properties(&self, schema: impl Into<Subschema>) -> Self {
        self.with_entry(Keyword::AdditionalProperties, Entry::Schema(schema.into()))
    }

    pub fn max_properties(&self, max: u64) -> Self {
        self.with_value(Keyword::MaxProperties, max)
    }

    pub fn min_properties(&self, min: u64) -> Self {
        self.with_value(Keyword::MinProperties, min)
    }

    /// Replaces `patternProperties` with the given regex → schema pairs.
    pub fn pattern_properties<I, N, S>(&self, patterns: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Subschema>,
    {
        self.put_pattern_properties(patterns)
    }

    /// Replaces `dependencies`. Each value is either a list of property
    /// names or a schema.
    pub fn dependencies<I, N, D>(&self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<Dependency>,
    {
        self.put_dependencies(dependencies)
    }

    pub fn property_names(&self, schema: impl Into<Subschema>) -> Self {
        self.with_entry(Keyword::PropertyNames, Entry::Schema(schema.into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{integer, object, string, Dependency, SchemaBuilder, SchemaOptions};
    use serde_json::json;

    #[test]
    fn props_and_required() {
        let schema = object()
            .prop("id", integer())
            .required()
            .prop("name", string().required())
            .prop("nickname", string());
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"},
                    "nickname": {"type": "string"}
                },
                "required": ["id", "name"]
            })
        );
    }

    #[test]
    fn definitions_ignore_required_marker() {
        let schema = object().definition("address", object().required());
        assert_eq!(
            schema.to_value(),
            json!({"type": "object", "definitions": {"address": {"type": "object"}}})
        );
    }

    #[test]
    fn generated_ids_use_section_and_escaped_name() {
        let schema = SchemaBuilder::with_options(SchemaOptions::new().with_generate_ids(true))
            .unwrap()
            .object()
            .definition("geo/point", object())
            .prop("home", json!({"$ref": "#/definitions/geo~1point"}))
            .prop("flag", true);
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "definitions": {"geo/point": {"$id": "#definitions/geo~1point", "type": "object"}},
                "properties": {
                    "home": {"$id": "#properties/home", "$ref": "#/definitions/geo~1point"},
                    "flag": true
                }
            })
        );
    }

    #[test]
    fn generated_ids_follow_the_full_path() {
        let root = SchemaBuilder::with_options(SchemaOptions::new().with_generate_ids(true)).unwrap();
        let schema = root
            .object()
            .prop("a", root.object().prop("name", string()))
            .prop("name", string())
            .definition("d", root.array().items(root.object().prop("name", string())));
        let value = schema.to_value();
        assert_eq!(value["properties"]["name"]["$id"], "#properties/name");
        assert_eq!(value["properties"]["a"]["$id"], "#properties/a");
        assert_eq!(
            value["properties"]["a"]["properties"]["name"]["$id"],
            "#properties/a/properties/name"
        );
        assert_eq!(
            value["definitions"]["d"]["items"]["properties"]["name"]["$id"],
            "#definitions/d/items/properties/name"
        );
    }

    #[test]
    fn generated_id_leads_for_builders_and_documents() {
        let root = SchemaBuilder::with_options(SchemaOptions::new().with_generate_ids(true)).unwrap();
        let schema = root
            .object()
            .prop("built", string().min_length(1))
            .prop("plain", json!({"type": "string", "minLength": 1}));
        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            concat!(
                r##"{"type":"object","properties":{"##,
                r##""built":{"$id":"#properties/built","type":"string","minLength":1},"##,
                r##""plain":{"$id":"#properties/plain","type":"string","minLength":1}}}"##
            )
        );
    }

    #[test]
    fn object_keywords() {
        let schema = object()
            .additional_properties(false)
            .min_properties(1)
            .max_properties(5)
            .pattern_properties([("^x-", string())])
            .dependencies([
                ("credit_card", Dependency::from(vec!["billing_address"])),
                ("name", Dependency::from(object().prop("age", integer()))),
            ])
            .property_names(string().pattern("^[a-z_]+$"));
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "object",
                "additionalProperties": false,
                "minProperties": 1,
                "maxProperties": 5,
                "patternProperties": {"^x-": {"type": "string"}},
                "dependencies": {
                    "credit_card": ["billing_address"],
                    "name": {"type": "object", "properties": {"age": {"type": "integer"}}}
                },
                "propertyNames": {"type": "string", "pattern": "^[a-z_]+$"}
            })
        );
    }
}
