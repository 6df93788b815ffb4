use super::node::Entry;
use super::{collect_schemas, SchemaBuilder, Subschema};
use crate::keyword::Keyword;
use crate::kind::ArrayCapable;

impl<K: ArrayCapable> SchemaBuilder<K> {
    /// Every item must match `schema`.
    pub fn items(&self, schema: impl Into<Subschema>) -> Self {
        self.with_entry(Keyword::Items, Entry::Schema(schema.into()))
    }

    /// Tuple typing: item `i` must match `schemas[i]`.
    pub fn items_tuple<I>(&self, schemas: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Subschema>,
    {
        self.with_entry(Keyword::Items, Entry::Schemas(collect_schemas(schemas)))
    }

    /// Schema (or `true`/`false` gate) for items past a tuple.
    pub fn additional_items(&self, schema: impl Into<Subschema>) -> Self {
        self.with_entry(Keyword::AdditionalItems, Entry::Schema(schema.into()))
    }

    pub fn contains(&self, schema: impl Into<Subschema>) -> Self {
        self.with_entry(Keyword::Contains, Entry::Schema(schema.into()))
    }

    pub fn unique_items(&self, unique: bool) -> Self {
        self.with_value(Keyword::UniqueItems, unique)
    }

    pub fn min_items(&self, min: u64) -> Self {
        self.with_value(Keyword::MinItems, min)
    }

    pub fn max_items(&self, max: u64) -> Self {
        self.with_value(Keyword::MaxItems, max)
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, integer, string, Subschema};
    use serde_json::json;

    #[test]
    fn list_validation() {
        let schema = array()
            .items(string().min_length(1))
            .unique_items(true)
            .min_items(1)
            .max_items(10);
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "array",
                "items": {"type": "string", "minLength": 1},
                "uniqueItems": true,
                "minItems": 1,
                "maxItems": 10
            })
        );
    }

    #[test]
    fn tuple_validation() {
        let schema = array()
            .items_tuple([Subschema::from(string()), integer().into()])
            .additional_items(false);
        assert_eq!(
            schema.to_value(),
            json!({
                "type": "array",
                "items": [{"type": "string"}, {"type": "integer"}],
                "additionalItems": false
            })
        );
    }

    #[test]
    fn contains_accepts_boolean_and_schema() {
        assert_eq!(array().contains(true).to_value()["contains"], json!(true));
        assert_eq!(
            array().contains(integer().minimum(5)).to_value()["contains"],
            json!({"type": "integer", "minimum": 5})
        );
    }
}
