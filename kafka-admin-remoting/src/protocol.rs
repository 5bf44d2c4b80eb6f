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

//! Kafka request/response framing for the SCRAM admin APIs.
//!
//! Both APIs are "flexible" versions: requests use header v2 and responses
//! header v1, strings and arrays use the compact (unsigned varint) encoding,
//! and every struct ends with a tagged field section.

pub mod header;
pub mod scram;
pub mod wire;

use bytes::Bytes;
use bytes::BytesMut;
use kafka_admin_error::ProtocolError;

use self::header::RequestHeader;
use self::header::ResponseHeader;
use self::wire::WireReader;

/// A request body that can be sent to a broker.
pub trait KafkaRequest {
    const API_KEY: i16;
    const API_VERSION: i16;
    /// API name used in errors and logs
    const NAME: &'static str;

    type Response: KafkaResponse;

    fn encode_body(&self, dst: &mut BytesMut);
}

/// A response body decoded from a broker frame.
pub trait KafkaResponse: Sized {
    fn decode_body(reader: &mut WireReader) -> Result<Self, ProtocolError>;
}

/// Builds a complete request payload (header + body), without the size prefix.
pub fn encode_request<R: KafkaRequest>(request: &R, correlation_id: i32, client_id: &str) -> Bytes {
    let mut dst = BytesMut::with_capacity(128);
    RequestHeader {
        api_key: R::API_KEY,
        api_version: R::API_VERSION,
        correlation_id,
        client_id: Some(client_id.to_string()),
    }
    .encode(&mut dst);
    request.encode_body(&mut dst);
    dst.freeze()
}

/// Decodes a response payload and checks it answers `expected_correlation_id`.
pub fn decode_response<R: KafkaRequest>(frame: Bytes, expected_correlation_id: i32) -> Result<R::Response, ProtocolError> {
    let mut reader = WireReader::new(frame);
    let header = ResponseHeader::decode(&mut reader)?;
    if header.correlation_id != expected_correlation_id {
        return Err(ProtocolError::CorrelationMismatch {
            expected: expected_correlation_id,
            actual: header.correlation_id,
        });
    }
    R::Response::decode_body(&mut reader)
}
