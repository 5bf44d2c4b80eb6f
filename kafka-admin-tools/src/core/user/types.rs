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

//! User management types

use kafka_admin_error::BrokerErrorCode;
use serde::Deserialize;
use serde::Serialize;

use super::credential::ScramMechanism;

pub const DEFAULT_ITERATIONS: i32 = 4096;
pub const DEFAULT_SCRAM_MECHANISM: &str = "SCRAM-SHA-512";

/// One row per (user, mechanism) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(rename = "scramMechanism")]
    pub scram_mechanism: String,
    pub iterations: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUsersFlags {
    pub password: String,
    pub scram_mechanism: String,
    pub iterations: i32,
}

impl Default for CreateUsersFlags {
    fn default() -> Self {
        Self {
            password: String::new(),
            scram_mechanism: DEFAULT_SCRAM_MECHANISM.to_string(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteUsersFlags {
    pub scram_mechanism: String,
}

impl Default for DeleteUsersFlags {
    fn default() -> Self {
        Self {
            scram_mechanism: DEFAULT_SCRAM_MECHANISM.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUsersFlags {
    /// One of `""`, `wide`, `compact`, `json`, `yaml`
    pub output_format: String,
}

// ============================================================================
// Admin gateway records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScramCredentialInfo {
    pub mechanism: ScramMechanism,
    pub iterations: i32,
}

/// Credentials of one user as described by the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserScramCredentials {
    pub user: String,
    pub error_code: BrokerErrorCode,
    pub error_message: Option<String>,
    pub credential_infos: Vec<ScramCredentialInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramCredentialUpsertion {
    pub name: String,
    pub mechanism: ScramMechanism,
    pub iterations: i32,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScramCredentialDeletion {
    pub name: String,
    pub mechanism: ScramMechanism,
}

/// Per-user outcome of an upsertion or deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterUserScramCredentialsResult {
    pub user: String,
    pub error_code: BrokerErrorCode,
    pub error_message: Option<String>,
}
