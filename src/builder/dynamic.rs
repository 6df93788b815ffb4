use serde_json::Value;

use super::{SchemaBuilder, Subschema};
use crate::error::SchemaError;
use crate::format::Format;
use crate::keyword::{variant_label, Keyword};
use crate::kind::Kind;

impl<K: Kind> SchemaBuilder<K> {
    /// Set a keyword by its JSON name.
    ///
    /// The keyword is checked against the builder's declared type(s), so on
    /// an untyped builder only the universal keywords are accepted. `type`
    /// cannot be set this way; use the type selectors instead.
    ///
    /// - `format` must name a [`Format`].
    /// - `properties` and `definitions` take an object; each entry goes
    ///   through [`prop`](SchemaBuilder::prop) /
    ///   [`definition`](SchemaBuilder::definition) semantics.
    /// - `required` takes an array of property names, or `true`/`null` for
    ///   the no-argument form.
    ///
    /// ```
    /// use fluent_schema::{string, SchemaError};
    /// use serde_json::json;
    ///
    /// let schema = string().set("minLength", json!(3))?;
    /// assert_eq!(schema.to_value(), json!({"type": "string", "minLength": 3}));
    ///
    /// assert!(matches!(
    ///     string().set("minimum", json!(0)),
    ///     Err(SchemaError::Capability { .. })
    /// ));
    /// # Ok::<(), SchemaError>(())
    /// ```
    pub fn set(&self, keyword: &str, value: Value) -> Result<Self, SchemaError> {
        let parsed: Keyword = keyword.parse().map_err(|_| SchemaError::Capability {
            keyword: keyword.to_string(),
            variant: variant_label(self.types()),
        })?;
        parsed.check(self.types())?;

        match parsed {
            Keyword::Format => {
                let name = value
                    .as_str()
                    .ok_or_else(|| SchemaError::invalid(keyword, "expected a string"))?;
                let format: Format = name.parse()?;
                Ok(self.with_value(parsed, format.as_str()))
            }
            Keyword::Required => match value {
                Value::Null | Value::Bool(true) => Ok(self.required()),
                Value::Array(names) => {
                    let names = names
                        .into_iter()
                        .map(|name| match name {
                            Value::String(name) => Ok(name),
                            other => Err(SchemaError::invalid(
                                keyword,
                                format!("expected property names, found {other}"),
                            )),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(self.update(|node| {
                        for name in &names {
                            node.require(name);
                        }
                    }))
                }
                other => Err(SchemaError::invalid(
                    keyword,
                    format!("expected an array of property names, found {other}"),
                )),
            },
            Keyword::Properties | Keyword::Definitions => match value {
                Value::Object(entries) => Ok(entries.into_iter().fold(
                    self.clone(),
                    |builder, (name, schema)| {
                        builder.put_named(parsed, name, Subschema::from(schema))
                    },
                )),
                other => Err(SchemaError::invalid(
                    keyword,
                    format!("expected an object, found {other}"),
                )),
            },
            _ => Ok(self.with_value(parsed, value)),
        }
    }
}
