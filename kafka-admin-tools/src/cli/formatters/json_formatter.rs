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

/// Pretty printed JSON, two space indent.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format<T: Serialize + ?Sized>(&self, data: &T) -> KafkaAdminResult<String> {
        serde_json::to_string_pretty(data).map_err(|e| KafkaAdminError::serialization_failed("json", e.to_string()))
    }
}
