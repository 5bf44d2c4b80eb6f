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

use kafka_admin_error::KafkaAdminResult;

use crate::core::user::AlterUserScramCredentialsResult;
use crate::core::user::ScramCredentialDeletion;
use crate::core::user::ScramCredentialUpsertion;
use crate::core::user::UserScramCredentials;

/// Cluster admin capabilities needed to manage SCRAM users.
///
/// An `Err` from any method is a transport level failure (connection,
/// timeout, framing or a top-level broker error). Per-user failures are
/// reported through the `error_code` of each returned record.
#[allow(async_fn_in_trait)]
pub trait ScramAdminExt {
    /// Describes the credentials of `users`, or of every user when `users` is empty.
    async fn describe_user_scram_credentials(&self, users: &[String]) -> KafkaAdminResult<Vec<UserScramCredentials>>;

    async fn upsert_user_scram_credentials(
        &self,
        upsertions: Vec<ScramCredentialUpsertion>,
    ) -> KafkaAdminResult<Vec<AlterUserScramCredentialsResult>>;

    async fn delete_user_scram_credentials(
        &self,
        deletions: Vec<ScramCredentialDeletion>,
    ) -> KafkaAdminResult<Vec<AlterUserScramCredentialsResult>>;
}
