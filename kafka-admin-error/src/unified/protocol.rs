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

//! Kafka wire protocol errors

use thiserror::Error;

/// Errors raised while framing, encoding or decoding Kafka messages
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Frame size prefix is negative or above the accepted maximum
    #[error("Invalid frame size {size}, maximum is {max}")]
    InvalidFrameSize { size: i64, max: usize },

    /// Response ended before a field could be read
    #[error("Truncated response while reading {field}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// Unsigned varint longer than five bytes
    #[error("Malformed varint while reading {field}")]
    MalformedVarint { field: &'static str },

    /// String field is not valid UTF-8
    #[error("Invalid UTF-8 in {field}")]
    InvalidString { field: &'static str },

    /// Required (non-nullable) field was null
    #[error("Unexpected null value for {field}")]
    UnexpectedNull { field: &'static str },

    /// Response correlation id does not match the request
    #[error("Correlation id mismatch: expected {expected}, got {actual}")]
    CorrelationMismatch { expected: i32, actual: i32 },
}

impl ProtocolError {
    /// Create a truncated response error
    #[inline]
    pub fn truncated(field: &'static str, needed: usize, remaining: usize) -> Self {
        Self::Truncated {
            field,
            needed,
            remaining,
        }
    }
}
