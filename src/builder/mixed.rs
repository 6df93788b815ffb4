use super::node::Entry;
use super::numeric::bound;
use super::{collect_schemas, Dependency, MixedSchema, Numeric, Subschema};
use crate::error::SchemaError;
use crate::format::Format;
use crate::keyword::Keyword;

/// Keyword calls on a mixed schema. Each one is available when at least one
/// declared type allows it and fails with [`SchemaError::Capability`]
/// otherwise.
impl MixedSchema {
    fn checked_value(
        &self,
        keyword: Keyword,
        value: impl Into<serde_json::Value>,
    ) -> Result<Self, SchemaError> {
        Ok(self.checked(keyword)?.with_value(keyword, value))
    }

    fn checked_schema(
        &self,
        keyword: Keyword,
        schema: impl Into<Subschema>,
    ) -> Result<Self, SchemaError> {
        Ok(self
            .checked(keyword)?
            .with_entry(keyword, Entry::Schema(schema.into())))
    }

    fn checked_bound(&self, keyword: Keyword, value: impl Numeric) -> Result<Self, SchemaError> {
        let checked = self.checked(keyword)?;
        Ok(checked.with_value(keyword, bound(keyword, value)?))
    }

    pub fn min_length(&self, min: u64) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::MinLength, min)
    }

    pub fn max_length(&self, max: u64) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::MaxLength, max)
    }

    pub fn format(&self, format: Format) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::Format, format.as_str())
    }

    pub fn pattern(&self, pattern: impl Into<String>) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::Pattern, pattern.into())
    }

    pub fn content_encoding(&self, encoding: impl Into<String>) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::ContentEncoding, encoding.into())
    }

    pub fn content_media_type(&self, media_type: impl Into<String>) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::ContentMediaType, media_type.into())
    }

    pub fn minimum(&self, min: impl Numeric) -> Result<Self, SchemaError> {
        self.checked_bound(Keyword::Minimum, min)
    }

    pub fn exclusive_minimum(&self, min: impl Numeric) -> Result<Self, SchemaError> {
        self.checked_bound(Keyword::ExclusiveMinimum, min)
    }

    pub fn maximum(&self, max: impl Numeric) -> Result<Self, SchemaError> {
        self.checked_bound(Keyword::Maximum, max)
    }

    pub fn exclusive_maximum(&self, max: impl Numeric) -> Result<Self, SchemaError> {
        self.checked_bound(Keyword::ExclusiveMaximum, max)
    }

    pub fn multiple_of(&self, multiple: impl Numeric) -> Result<Self, SchemaError> {
        self.checked_bound(Keyword::MultipleOf, multiple)
    }

    pub fn items(&self, schema: impl Into<Subschema>) -> Result<Self, SchemaError> {
        self.checked_schema(Keyword::Items, schema)
    }

    pub fn items_tuple<I>(&self, schemas: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator,
        I::Item: Into<Subschema>,
    {
        Ok(self
            .checked(Keyword::Items)?
            .with_entry(Keyword::Items, Entry::Schemas(collect_schemas(schemas))))
    }

    pub fn additional_items(&self, schema: impl Into<Subschema>) -> Result<Self, SchemaError> {
        self.checked_schema(Keyword::AdditionalItems, schema)
    }

    pub fn contains(&self, schema: impl Into<Subschema>) -> Result<Self, SchemaError> {
        self.checked_schema(Keyword::Contains, schema)
    }

    pub fn unique_items(&self, unique: bool) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::UniqueItems, unique)
    }

    pub fn min_items(&self, min: u64) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::MinItems, min)
    }

    pub fn max_items(&self, max: u64) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::MaxItems, max)
    }

    pub fn prop(
        &self,
        name: impl Into<String>,
        schema: impl Into<Subschema>,
    ) -> Result<Self, SchemaError> {
        Ok(self
            .checked(Keyword::Properties)?
            .put_named(Keyword::Properties, name.into(), schema.into()))
    }

    pub fn definition(
        &self,
        name: impl Into<String>,
        schema: impl Into<Subschema>,
    ) -> Result<Self, SchemaError> {
        Ok(self
            .checked(Keyword::Definitions)?
            .put_named(Keyword::Definitions, name.into(), schema.into()))
    }

    pub fn additional_properties(
        &self,
        schema: impl Into<Subschema>,
    ) -> Result<Self, SchemaError> {
        self.checked_schema(Keyword::AdditionalProperties, schema)
    }

    pub fn max_properties(&self, max: u64) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::MaxProperties, max)
    }

    pub fn min_properties(&self, min: u64) -> Result<Self, SchemaError> {
        self.checked_value(Keyword::MinProperties, min)
    }

    pub fn pattern_properties<I, N, S>(&self, patterns: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Subschema>,
    {
        Ok(self
            .checked(Keyword::PatternProperties)?
            .put_pattern_properties(patterns))
    }

    pub fn dependencies<I, N, D>(&self, dependencies: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<Dependency>,
    {
        Ok(self
            .checked(Keyword::Dependencies)?
            .put_dependencies(dependencies))
    }

    pub fn property_names(&self, schema: impl Into<Subschema>) -> Result<Self, SchemaError> {
        self.checked_schema(Keyword::PropertyNames, schema)
    }
}

#[cfg(test)]
mod tests {
    use crate::{mixed, string, Format, SchemaError, SchemaType};
    use serde_json::json;

    #[test]
    fn union_vocabulary() -> Result<(), SchemaError> {
        let schema = mixed(&[SchemaType::String, SchemaType::Integer, SchemaType::Null])?
            .min_length(1)?
            .format(Format::Uuid)?
            .minimum(0)?
            .title("id");
        assert_eq!(
            schema.to_value(),
            json!({
                "type": ["string", "integer", "null"],
                "minLength": 1,
                "format": "uuid",
                "minimum": 0,
                "title": "id"
            })
        );
        Ok(())
    }

    #[test]
    fn keyword_outside_union_fails_at_call_site() {
        let schema = mixed(&[SchemaType::String, SchemaType::Null]).unwrap();
        let err = schema.prop("a", string()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Capability {
                keyword: "properties".to_string(),
                variant: "string|null".to_string(),
            }
        );
        assert!(schema.minimum(1).is_err());
        assert!(schema.items(string()).is_err());
    }

    #[test]
    fn float_bounds_must_be_finite() -> Result<(), SchemaError> {
        let schema = mixed(&[SchemaType::Number, SchemaType::Null])?;
        assert_eq!(schema.multiple_of(0.5)?.to_value()["multipleOf"], json!(0.5));
        assert!(matches!(
            schema.maximum(f64::NAN),
            Err(SchemaError::InvalidValue { .. })
        ));
        // capability is checked before the value
        assert!(matches!(
            mixed(&[SchemaType::String])?.minimum(f64::INFINITY),
            Err(SchemaError::Capability { .. })
        ));
        Ok(())
    }

    #[test]
    fn mixed_object_supports_required_props() -> Result<(), SchemaError> {
        let schema = mixed(&[SchemaType::Object, SchemaType::Array])?
            .prop("tags", string())?
            .required()
            .min_items(1)?;
        assert_eq!(
            schema.to_value(),
            json!({
                "type": ["object", "array"],
                "minItems": 1,
                "properties": {"tags": {"type": "string"}},
                "required": ["tags"]
            })
        );
        Ok(())
    }
}
