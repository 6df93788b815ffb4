use super::SchemaBuilder;
use crate::format::Format;
use crate::keyword::Keyword;
use crate::kind::StringCapable;

impl<K: StringCapable> SchemaBuilder<K> {
    pub fn min_length(&self, min: u64) -> Self {
        self.with_value(Keyword::MinLength, min)
    }

    pub fn max_length(&self, max: u64) -> Self {
        self.with_value(Keyword::MaxLength, max)
    }

    /// Sets `format`. Names outside [`Format`] cannot be expressed; parse
    /// user input with `str::parse::<Format>()` to get a
    /// [`SchemaError::Format`](crate::SchemaError::Format) instead.
    pub fn format(&self, format: Format) -> Self {
        self.with_value(Keyword::Format, format.as_str())
    }

    /// Sets `pattern`. The expression is not compiled here.
    pub fn pattern(&self, pattern: impl Into<String>) -> Self {
        self.with_value(Keyword::Pattern, pattern.into())
    }

    pub fn content_encoding(&self, encoding: impl Into<String>) -> Self {
        self.with_value(Keyword::ContentEncoding, encoding.into())
    }

    pub fn content_media_type(&self, media_type: impl Into<String>) -> Self {
        self.with_value(Keyword::ContentMediaType, media_type.into())
    }
}
