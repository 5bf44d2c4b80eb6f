// Copyright 2026 The Kafka Admin Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI output formatters
//!
//! Structured output (JSON, YAML) goes through [`print_object`]; listings go
//! through the buffered [`TableWriter`].

mod json_formatter;
mod table_writer;
mod yaml_formatter;

use std::io::Write;

pub use json_formatter::JsonFormatter;
use serde::Serialize;
pub use table_writer::TableWriter;
pub use yaml_formatter::YamlFormatter;

use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

/// Output format of listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `""`: the detailed table
    #[default]
    Default,
    Wide,
    Compact,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parses an `--output` value. Matching is exact.
    pub fn parse(format: &str) -> KafkaAdminResult<Self> {
        match format {
            "" => Ok(Self::Default),
            "wide" => Ok(Self::Wide),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(KafkaAdminError::unknown_output_format(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Wide => "wide",
            Self::Compact => "compact",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Whether the format is rendered by [`print_object`] instead of a table.
    #[inline]
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Json | Self::Yaml)
    }
}

/// Serializes a whole value into one structured document.
pub trait Formatter {
    fn format<T: Serialize + ?Sized>(&self, data: &T) -> KafkaAdminResult<String>;
}

/// Formatter enum that holds concrete implementations
pub enum FormatterType {
    Json(JsonFormatter),
    Yaml(YamlFormatter),
}

impl FormatterType {
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> KafkaAdminResult<String> {
        match self {
            Self::Json(f) => f.format(data),
            Self::Yaml(f) => f.format(data),
        }
    }
}

/// Get the formatter for a structured format name (`json` or `yaml`)
pub fn get_formatter(format: &str) -> KafkaAdminResult<FormatterType> {
    match format {
        "json" => Ok(FormatterType::Json(JsonFormatter)),
        "yaml" => Ok(FormatterType::Yaml(YamlFormatter)),
        other => Err(KafkaAdminError::illegal_argument(format!(
            "object printer supports json and yaml, got '{other}'"
        ))),
    }
}

/// Serializes `value` as a whole document in `format` and writes it to `out`.
pub fn print_object<T, W>(value: &T, format: &str, out: &mut W) -> KafkaAdminResult<()>
where
    T: Serialize + ?Sized,
    W: Write + ?Sized,
{
    let rendered = get_formatter(format)?.format(value)?;
    writeln!(out, "{}", rendered.trim_end())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        for format in ["", "wide", "compact", "json", "yaml"] {
            assert_eq!(OutputFormat::parse(format).unwrap().as_str(), format);
        }
        assert!(OutputFormat::parse("table").is_err());
        assert!(OutputFormat::parse("JSON").is_err());
        assert!(OutputFormat::parse("yml").is_err());
        assert!(OutputFormat::Json.is_structured());
        assert!(!OutputFormat::Compact.is_structured());
    }

    #[test]
    fn test_print_object_json() {
        let mut out = Vec::new();
        print_object(&vec![1, 2], "json", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  1,\n  2\n]\n");
    }

    #[test]
    fn test_print_object_empty_sequences() {
        let empty: Vec<u8> = Vec::new();

        let mut out = Vec::new();
        print_object(&empty, "json", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");

        let mut out = Vec::new();
        print_object(&empty, "yaml", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_print_object_serialization_failure_writes_nothing() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("broken value"))
            }
        }

        for format in ["json", "yaml"] {
            let mut out = Vec::new();
            let err = print_object(&Broken, format, &mut out).unwrap_err();
            assert!(matches!(err, KafkaAdminError::Serialization { .. }), "{format}");
            assert!(out.is_empty(), "{format}");
        }
    }

    #[test]
    fn test_print_object_rejects_table_formats() {
        let mut out = Vec::new();
        assert!(print_object(&1, "wide", &mut out).is_err());
        assert!(out.is_empty());
    }
}
