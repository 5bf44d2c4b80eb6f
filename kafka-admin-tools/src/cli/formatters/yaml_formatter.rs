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

use serde::Serialize;

use super::Formatter;
use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format<T: Serialize + ?Sized>(&self, data: &T) -> KafkaAdminResult<String> {
        serde_yaml::to_string(data).map_err(|e| KafkaAdminError::serialization_failed("yaml", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Serializer;

    use super::*;

    struct Unrepresentable;

    impl Serialize for Unrepresentable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("no yaml form"))
        }
    }

    #[test]
    fn sequence_of_users() {
        let data = serde_json::json!([{"name": "alice", "scramMechanism": "SCRAM-SHA-256"}]);
        let output = YamlFormatter.format(&data).unwrap();
        assert!(output.starts_with("- "));
        assert!(output.contains("name: alice"));
        assert!(output.contains("scramMechanism: SCRAM-SHA-256"));
    }

    #[test]
    fn serializer_errors_are_returned() {
        let err = YamlFormatter.format(&Unrepresentable).unwrap_err();
        assert!(matches!(err, KafkaAdminError::Serialization { format: "yaml", .. }));
        assert!(err.to_string().contains("no yaml form"));
    }
}
