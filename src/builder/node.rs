use serde_json::{Map, Value};

use super::subschema::Subschema;
use crate::common::{generated_id, push_token};
use crate::kind::SchemaType;

/// A keyword's value as held inside the tree. Nested builders stay shared
/// until serialization walks them.
#[derive(Debug, Clone)]
pub(crate) enum Entry {
    Value(Value),
    Schema(Subschema),
    Schemas(Vec<Subschema>),
    Named(Vec<(String, Subschema)>),
}

impl Entry {
    /// `pointer` locates this keyword's value in the rendered document.
    fn render(&self, pointer: &str) -> Value {
        match self {
            Entry::Value(value) => value.clone(),
            Entry::Schema(schema) => schema.render(pointer),
            Entry::Schemas(schemas) => Value::Array(
                schemas
                    .iter()
                    .enumerate()
                    .map(|(i, schema)| schema.render(&push_token(pointer, &i.to_string())))
                    .collect(),
            ),
            Entry::Named(named) => {
                let mut map = Map::new();
                for (name, schema) in named {
                    map.insert(name.clone(), schema.render(&push_token(pointer, name)));
                }
                Value::Object(map)
            }
        }
    }
}

/// An entry of `properties` or `definitions`. `generate_id` is fixed when
/// the entry is added; the id itself is derived from the entry's location
/// when the document is rendered.
#[derive(Debug, Clone)]
pub(crate) struct Member {
    schema: Subschema,
    generate_id: bool,
}

impl Member {
    pub(crate) fn new(schema: Subschema, generate_id: bool) -> Self {
        Member {
            schema,
            generate_id,
        }
    }
}

fn render_members(members: &[(String, Member)], pointer: &str) -> Value {
    let mut map = Map::new();
    for (name, member) in members {
        let pointer = push_token(pointer, name);
        let mut value = member.schema.render(&pointer);
        if member.generate_id {
            let id = generated_id(&pointer);
            tracing::trace!(%name, %id, "generating nested schema id");
            value = with_leading_id(value, id);
        }
        map.insert(name.clone(), value);
    }
    Value::Object(map)
}

/// Put `id` first in `value` unless it already has an `$id`. Boolean and
/// other non-object schemas have nowhere to put it and are returned as is.
fn with_leading_id(value: Value, id: String) -> Value {
    match value {
        Value::Object(map) if !map.contains_key("$id") => {
            let mut with_id = Map::with_capacity(map.len() + 1);
            with_id.insert("$id".to_string(), Value::String(id));
            with_id.extend(map);
            Value::Object(with_id)
        }
        other => other,
    }
}

/// Insert or overwrite `name`, keeping the position of an existing entry.
fn upsert<T>(entries: &mut Vec<(String, T)>, name: String, item: T) {
    match entries.iter_mut().find(|(existing, _)| *existing == name) {
        Some(slot) => slot.1 = item,
        None => entries.push((name, item)),
    }
}

/// One schema in the tree.
///
/// `properties`, `definitions` and `required` are kept apart from the plain
/// keywords so that chained calls can extend them. `None` means the section
/// was never touched and is left out of the output.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) types: Vec<SchemaType>,
    keywords: Vec<(String, Entry)>,
    definitions: Option<Vec<(String, Member)>>,
    properties: Option<Vec<(String, Member)>>,
    required: Option<Vec<String>>,
    marked_required: bool,
}

impl Node {
    /// Build a node from a seed document, keeping every key verbatim.
    pub(crate) fn load(document: &Map<String, Value>) -> Result<Node, String> {
        let mut node = Node::default();
        for (key, value) in document {
            match key.as_str() {
                "properties" => node.properties = Some(named_documents(key, value)?),
                "definitions" => node.definitions = Some(named_documents(key, value)?),
                "required" => {
                    let names = value
                        .as_array()
                        .ok_or_else(|| "`required` must be an array".to_string())?
                        .iter()
                        .map(|name| {
                            name.as_str()
                                .map(str::to_string)
                                .ok_or_else(|| "`required` must only contain strings".to_string())
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    node.required = Some(names);
                }
                "type" => {
                    node.types = seeded_types(value)?;
                    node.keywords.push((key.clone(), Entry::Value(value.clone())));
                }
                _ => node
                    .keywords
                    .push((key.clone(), Entry::Value(value.clone()))),
            }
        }
        Ok(node)
    }

    pub(crate) fn set(&mut self, key: &str, entry: Entry) {
        upsert(&mut self.keywords, key.to_string(), entry);
    }

    /// Record the selected type(s) and write the `type` keyword.
    pub(crate) fn set_types(&mut self, types: Vec<SchemaType>, as_list: bool) {
        let value = if as_list {
            Value::Array(types.iter().map(|t| Value::from(t.as_str())).collect())
        } else {
            Value::from(types.first().map(|t| t.as_str()).unwrap_or_default())
        };
        self.types = types;
        self.set("type", Entry::Value(value));
    }

    pub(crate) fn put_property(&mut self, name: String, member: Member) {
        upsert(self.properties.get_or_insert_with(Vec::new), name, member);
    }

    pub(crate) fn put_definition(&mut self, name: String, member: Member) {
        upsert(self.definitions.get_or_insert_with(Vec::new), name, member);
    }

    /// Append `name` to `required` unless it is already listed.
    pub(crate) fn require(&mut self, name: &str) {
        let required = self.required.get_or_insert_with(Vec::new);
        if !required.iter().any(|existing| existing == name) {
            required.push(name.to_string());
        }
    }

    /// `required()` with no argument: the last property if there is one,
    /// otherwise the node itself (picked up by the parent's `prop`).
    pub(crate) fn mark_required(&mut self) {
        let last = self
            .properties
            .as_ref()
            .and_then(|props| props.last())
            .map(|(name, _)| name.clone());
        match last {
            Some(name) => self.require(&name),
            None => self.marked_required = true,
        }
    }

    pub(crate) fn is_marked_required(&self) -> bool {
        self.marked_required
    }

    pub(crate) fn property_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .flatten()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub(crate) fn to_value(&self) -> Value {
        self.render("")
    }

    /// Render the subtree rooted at `pointer` (`""` for the document root).
    pub(crate) fn render(&self, pointer: &str) -> Value {
        let mut map = Map::new();
        for (key, entry) in &self.keywords {
            map.insert(key.clone(), entry.render(&push_token(pointer, key)));
        }
        if let Some(definitions) = &self.definitions {
            let pointer = push_token(pointer, "definitions");
            map.insert("definitions".to_string(), render_members(definitions, &pointer));
        }
        if let Some(properties) = &self.properties {
            let pointer = push_token(pointer, "properties");
            map.insert("properties".to_string(), render_members(properties, &pointer));
        }
        if let Some(required) = &self.required {
            map.insert(
                "required".to_string(),
                Value::Array(required.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(map)
    }
}

/// The types a seed declares, so that by-name keyword calls see the
/// vocabulary the document already has.
fn seeded_types(value: &Value) -> Result<Vec<SchemaType>, String> {
    let parse = |name: &Value| -> Result<SchemaType, String> {
        name.as_str()
            .ok_or_else(|| "`type` must be a type name or a list of them".to_string())?
            .parse::<SchemaType>()
            .map_err(|err| err.to_string())
    };
    match value {
        Value::Array(names) => names.iter().map(parse).collect(),
        name => parse(name).map(|t| vec![t]),
    }
}

fn named_documents(key: &str, value: &Value) -> Result<Vec<(String, Member)>, String> {
    let map = value
        .as_object()
        .ok_or_else(|| format!("`{key}` must be an object"))?;
    Ok(map
        .iter()
        .map(|(name, schema)| {
            let member = Member::new(Subschema::from(schema.clone()), false);
            (name.clone(), member)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(document: Value) -> Node {
        Node::load(document.as_object().unwrap()).unwrap()
    }

    fn member(document: Value) -> Member {
        Member::new(Subschema::from(document), false)
    }

    #[test]
    fn untouched_sections_are_omitted() {
        let mut n = Node::default();
        n.set_types(vec![SchemaType::Object], false);
        assert_eq!(n.to_value(), json!({"type": "object"}));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut n = Node::default();
        n.put_property("a".into(), member(json!({"type": "string"})));
        n.put_property("b".into(), member(json!({})));
        n.put_property("a".into(), member(json!({"type": "number"})));
        assert_eq!(n.property_names(), vec!["a", "b"]);
        assert_eq!(n.to_value()["properties"]["a"], json!({"type": "number"}));
    }

    #[test]
    fn require_deduplicates() {
        let mut n = Node::default();
        n.require("x");
        n.require("y");
        n.require("x");
        assert_eq!(n.to_value()["required"], json!(["x", "y"]));
    }

    #[test]
    fn mark_required_targets_last_property() {
        let mut n = Node::default();
        n.mark_required();
        assert!(n.is_marked_required());

        let mut n = Node::default();
        n.put_property("first".into(), member(json!({})));
        n.put_property("second".into(), member(json!({})));
        n.mark_required();
        assert!(!n.is_marked_required());
        assert_eq!(n.to_value()["required"], json!(["second"]));
    }

    #[test]
    fn load_keeps_seed_verbatim() {
        let seed = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "properties": {},
            "required": ["a", "a"],
            "x-extension": {"nested": true}
        });
        assert_eq!(node(seed.clone()).to_value(), seed);
    }

    #[test]
    fn load_rejects_malformed_sections() {
        let bad = json!({"properties": []});
        assert_eq!(
            Node::load(bad.as_object().unwrap()).unwrap_err(),
            "`properties` must be an object"
        );
        let bad = json!({"required": ["a", 1]});
        assert!(Node::load(bad.as_object().unwrap()).is_err());
    }

    #[test]
    fn load_reads_declared_types() {
        assert_eq!(node(json!({"type": "object"})).types, vec![SchemaType::Object]);
        assert_eq!(
            node(json!({"type": ["string", "null"]})).types,
            vec![SchemaType::String, SchemaType::Null]
        );
        assert!(node(json!({"title": "t"})).types.is_empty());

        let bad = json!({"type": "decimal"});
        assert_eq!(
            Node::load(bad.as_object().unwrap()).unwrap_err(),
            "unknown schema type `decimal`"
        );
        assert!(Node::load(json!({"type": 1}).as_object().unwrap()).is_err());
    }

    #[test]
    fn mixed_type_list_is_written_as_array() {
        let mut n = Node::default();
        n.set_types(vec![SchemaType::String, SchemaType::Null], true);
        assert_eq!(n.to_value(), json!({"type": ["string", "null"]}));
    }

    #[test]
    fn generated_id_leads_unless_one_is_set() {
        let mut n = Node::default();
        n.put_definition(
            "geo/point".into(),
            Member::new(Subschema::from(json!({"type": "object"})), true),
        );
        n.put_property(
            "own".into(),
            Member::new(Subschema::from(json!({"type": "string", "$id": "#mine"})), true),
        );
        n.put_property("flag".into(), Member::new(Subschema::from(true), true));
        assert_eq!(
            serde_json::to_string(&n.render("/properties/outer")).unwrap(),
            r##"{"definitions":{"geo/point":{"$id":"#properties/outer/definitions/geo~1point","type":"object"}},"properties":{"own":{"type":"string","$id":"#mine"},"flag":true}}"##
        );
    }
}
