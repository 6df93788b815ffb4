use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;
use crate::kind::SchemaType;

/// Keyword families. A keyword belongs to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// Available on every schema, typed or not.
    Universal,
    String,
    Numeric,
    Array,
    Object,
}

impl Vocabulary {
    /// The family a type contributes, if any beyond the universal keywords.
    pub fn of(schema_type: SchemaType) -> Option<Vocabulary> {
        match schema_type {
            SchemaType::String => Some(Vocabulary::String),
            SchemaType::Number | SchemaType::Integer => Some(Vocabulary::Numeric),
            SchemaType::Array => Some(Vocabulary::Array),
            SchemaType::Object => Some(Vocabulary::Object),
            SchemaType::Boolean | SchemaType::Null => None,
        }
    }
}

/// Every keyword the builder knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Id,
    Title,
    Description,
    Examples,
    Ref,
    Enum,
    Const,
    Default,
    Required,
    Not,
    AnyOf,
    AllOf,
    OneOf,

    MinLength,
    MaxLength,
    Format,
    Pattern,
    ContentEncoding,
    ContentMediaType,

    Minimum,
    ExclusiveMinimum,
    Maximum,
    ExclusiveMaximum,
    MultipleOf,

    Items,
    AdditionalItems,
    Contains,
    UniqueItems,
    MinItems,
    MaxItems,

    Definitions,
    Properties,
    AdditionalProperties,
    MaxProperties,
    MinProperties,
    PatternProperties,
    Dependencies,
    PropertyNames,
}

impl Keyword {
    pub const ALL: [Keyword; 38] = [
        Keyword::Id,
        Keyword::Title,
        Keyword::Description,
        Keyword::Examples,
        Keyword::Ref,
        Keyword::Enum,
        Keyword::Const,
        Keyword::Default,
        Keyword::Required,
        Keyword::Not,
        Keyword::AnyOf,
        Keyword::AllOf,
        Keyword::OneOf,
        Keyword::MinLength,
        Keyword::MaxLength,
        Keyword::Format,
        Keyword::Pattern,
        Keyword::ContentEncoding,
        Keyword::ContentMediaType,
        Keyword::Minimum,
        Keyword::ExclusiveMinimum,
        Keyword::Maximum,
        Keyword::ExclusiveMaximum,
        Keyword::MultipleOf,
        Keyword::Items,
        Keyword::AdditionalItems,
        Keyword::Contains,
        Keyword::UniqueItems,
        Keyword::MinItems,
        Keyword::MaxItems,
        Keyword::Definitions,
        Keyword::Properties,
        Keyword::AdditionalProperties,
        Keyword::MaxProperties,
        Keyword::MinProperties,
        Keyword::PatternProperties,
        Keyword::Dependencies,
        Keyword::PropertyNames,
    ];

    /// JSON name of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Id => "$id",
            Keyword::Title => "title",
            Keyword::Description => "description",
            Keyword::Examples => "examples",
            Keyword::Ref => "$ref",
            Keyword::Enum => "enum",
            Keyword::Const => "const",
            Keyword::Default => "default",
            Keyword::Required => "required",
            Keyword::Not => "not",
            Keyword::AnyOf => "anyOf",
            Keyword::AllOf => "allOf",
            Keyword::OneOf => "oneOf",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::Format => "format",
            Keyword::Pattern => "pattern",
            Keyword::ContentEncoding => "contentEncoding",
            Keyword::ContentMediaType => "contentMediaType",
            Keyword::Minimum => "minimum",
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::Maximum => "maximum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::MultipleOf => "multipleOf",
            Keyword::Items => "items",
            Keyword::AdditionalItems => "additionalItems",
            Keyword::Contains => "contains",
            Keyword::UniqueItems => "uniqueItems",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::Definitions => "definitions",
            Keyword::Properties => "properties",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::MaxProperties => "maxProperties",
            Keyword::MinProperties => "minProperties",
            Keyword::PatternProperties => "patternProperties",
            Keyword::Dependencies => "dependencies",
            Keyword::PropertyNames => "propertyNames",
        }
    }

    pub fn vocabulary(self) -> Vocabulary {
        use Keyword::*;
        match self {
            Id | Title | Description | Examples | Ref | Enum | Const | Default | Required | Not
            | AnyOf | AllOf | OneOf => Vocabulary::Universal,
            MinLength | MaxLength | Format | Pattern | ContentEncoding | ContentMediaType => {
                Vocabulary::String
            }
            Minimum | ExclusiveMinimum | Maximum | ExclusiveMaximum | MultipleOf => {
                Vocabulary::Numeric
            }
            Items | AdditionalItems | Contains | UniqueItems | MinItems | MaxItems => {
                Vocabulary::Array
            }
            Definitions | Properties | AdditionalProperties | MaxProperties | MinProperties
            | PatternProperties | Dependencies | PropertyNames => Vocabulary::Object,
        }
    }

    /// Whether the keyword may be written on a schema declaring `types`.
    ///
    /// An empty slice means no type has been selected, which leaves only the
    /// universal keywords.
    pub fn allowed_for(self, types: &[SchemaType]) -> bool {
        match self.vocabulary() {
            Vocabulary::Universal => true,
            family => types
                .iter()
                .any(|t| Vocabulary::of(*t) == Some(family)),
        }
    }

    /// Fail with [`SchemaError::Capability`] unless [`allowed_for`](Self::allowed_for).
    pub fn check(self, types: &[SchemaType]) -> Result<(), SchemaError> {
        if self.allowed_for(types) {
            Ok(())
        } else {
            Err(SchemaError::Capability {
                keyword: self.as_str().to_string(),
                variant: variant_label(types),
            })
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown names fail with [`SchemaError::Capability`] against variant `any`;
/// [`SchemaBuilder::set`](crate::SchemaBuilder::set) relabels them with the
/// builder's own variant.
impl FromStr for Keyword {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SchemaError::Capability {
                keyword: s.to_string(),
                variant: "any".to_string(),
            })
    }
}

/// `untyped`, `string`, `string|null`, ...
pub(crate) fn variant_label(types: &[SchemaType]) -> String {
    if types.is_empty() {
        return "untyped".to_string();
    }
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("|")
}
