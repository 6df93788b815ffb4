use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The `format` annotations a string schema may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    DateTime,
    Date,
    Time,
    Uri,
    UriReference,
    UriTemplate,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Regex,
    Uuid,
    JsonPointer,
    RelativeJsonPointer,
}

impl Format {
    pub const ALL: [Format; 14] = [
        Format::DateTime,
        Format::Date,
        Format::Time,
        Format::Uri,
        Format::UriReference,
        Format::UriTemplate,
        Format::Email,
        Format::Hostname,
        Format::Ipv4,
        Format::Ipv6,
        Format::Regex,
        Format::Uuid,
        Format::JsonPointer,
        Format::RelativeJsonPointer,
    ];

    /// The name written into the document.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
            Format::Uri => "uri",
            Format::UriReference => "uri-reference",
            Format::UriTemplate => "uri-template",
            Format::Email => "email",
            Format::Hostname => "hostname",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::Regex => "regex",
            Format::Uuid => "uuid",
            Format::JsonPointer => "json-pointer",
            Format::RelativeJsonPointer => "relative-json-pointer",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| SchemaError::Format(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_name() {
        for format in Format::ALL {
            assert_eq!(format.as_str().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "url".parse::<Format>(),
            Err(SchemaError::Format("url".to_string()))
        );
        assert!("DATE".parse::<Format>().is_err());
    }

    #[test]
    fn serde_name_matches_as_str() {
        let value = serde_json::to_value(Format::RelativeJsonPointer).unwrap();
        assert_eq!(value, "relative-json-pointer");
    }
}
