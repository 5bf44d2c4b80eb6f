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

//! DescribeUserScramCredentials (key 50) and AlterUserScramCredentials (key 51), version 0.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;
use kafka_admin_error::BrokerErrorCode;
use kafka_admin_error::ProtocolError;

use super::wire::WireBufMut;
use super::wire::WireReader;
use super::KafkaRequest;
use super::KafkaResponse;

// ============================================================================
// DescribeUserScramCredentials
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeUserScramCredentialsRequest {
    /// `None` asks the broker for every user with SCRAM credentials.
    pub users: Option<Vec<String>>,
}

impl DescribeUserScramCredentialsRequest {
    pub fn all() -> Self {
        Self { users: None }
    }
}

impl KafkaRequest for DescribeUserScramCredentialsRequest {
    const API_KEY: i16 = 50;
    const API_VERSION: i16 = 0;
    const NAME: &'static str = "DescribeUserScramCredentials";

    type Response = DescribeUserScramCredentialsResponse;

    fn encode_body(&self, dst: &mut BytesMut) {
        dst.put_compact_array_len(self.users.as_ref().map(Vec::len));
        for name in self.users.iter().flatten() {
            dst.put_compact_string(name);
            dst.put_empty_tagged_fields();
        }
        dst.put_empty_tagged_fields();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialInfo {
    pub mechanism: i8,
    pub iterations: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeUserScramCredentialsResult {
    pub user: String,
    pub error_code: BrokerErrorCode,
    pub error_message: Option<String>,
    pub credential_infos: Vec<CredentialInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeUserScramCredentialsResponse {
    pub throttle_time_ms: i32,
    pub error_code: BrokerErrorCode,
    pub error_message: Option<String>,
    pub results: Vec<DescribeUserScramCredentialsResult>,
}

impl KafkaResponse for DescribeUserScramCredentialsResponse {
    fn decode_body(reader: &mut WireReader) -> Result<Self, ProtocolError> {
        let throttle_time_ms = reader.get_i32("throttle_time_ms")?;
        let error_code = BrokerErrorCode::from(reader.get_i16("error_code")?);
        let error_message = reader.get_compact_nullable_string("error_message")?;
        let results = reader.get_compact_array("results", |reader| {
            let user = reader.get_compact_string("user")?;
            let error_code = BrokerErrorCode::from(reader.get_i16("error_code")?);
            let error_message = reader.get_compact_nullable_string("error_message")?;
            let credential_infos = reader.get_compact_array("credential_infos", |reader| {
                let mechanism = reader.get_i8("mechanism")?;
                let iterations = reader.get_i32("iterations")?;
                reader.skip_tagged_fields("credential_info")?;
                Ok(CredentialInfo { mechanism, iterations })
            })?;
            reader.skip_tagged_fields("result")?;
            Ok(DescribeUserScramCredentialsResult {
                user,
                error_code,
                error_message,
                credential_infos,
            })
        })?;
        reader.skip_tagged_fields("response")?;
        Ok(Self {
            throttle_time_ms,
            error_code,
            error_message,
            results,
        })
    }
}

// ============================================================================
// AlterUserScramCredentials
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramCredentialDeletion {
    pub name: String,
    pub mechanism: i8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramCredentialUpsertion {
    pub name: String,
    pub mechanism: i8,
    pub iterations: i32,
    pub salt: Bytes,
    pub salted_password: Bytes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlterUserScramCredentialsRequest {
    pub deletions: Vec<ScramCredentialDeletion>,
    pub upsertions: Vec<ScramCredentialUpsertion>,
}

impl KafkaRequest for AlterUserScramCredentialsRequest {
    const API_KEY: i16 = 51;
    const API_VERSION: i16 = 0;
    const NAME: &'static str = "AlterUserScramCredentials";

    type Response = AlterUserScramCredentialsResponse;

    fn encode_body(&self, dst: &mut BytesMut) {
        dst.put_compact_array_len(Some(self.deletions.len()));
        for deletion in &self.deletions {
            dst.put_compact_string(&deletion.name);
            dst.put_i8(deletion.mechanism);
            dst.put_empty_tagged_fields();
        }
        dst.put_compact_array_len(Some(self.upsertions.len()));
        for upsertion in &self.upsertions {
            dst.put_compact_string(&upsertion.name);
            dst.put_i8(upsertion.mechanism);
            dst.put_i32(upsertion.iterations);
            dst.put_compact_bytes(&upsertion.salt);
            dst.put_compact_bytes(&upsertion.salted_password);
            dst.put_empty_tagged_fields();
        }
        dst.put_empty_tagged_fields();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterUserScramCredentialsResult {
    pub user: String,
    pub error_code: BrokerErrorCode,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterUserScramCredentialsResponse {
    pub throttle_time_ms: i32,
    pub results: Vec<AlterUserScramCredentialsResult>,
}

impl KafkaResponse for AlterUserScramCredentialsResponse {
    fn decode_body(reader: &mut WireReader) -> Result<Self, ProtocolError> {
        let throttle_time_ms = reader.get_i32("throttle_time_ms")?;
        let results = reader.get_compact_array("results", |reader| {
            let user = reader.get_compact_string("user")?;
            let error_code = BrokerErrorCode::from(reader.get_i16("error_code")?);
            let error_message = reader.get_compact_nullable_string("error_message")?;
            reader.skip_tagged_fields("result")?;
            Ok(AlterUserScramCredentialsResult {
                user,
                error_code,
                error_message,
            })
        })?;
        reader.skip_tagged_fields("response")?;
        Ok(Self {
            throttle_time_ms,
            results,
        })
    }
}
