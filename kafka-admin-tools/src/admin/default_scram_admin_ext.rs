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

use std::time::Duration;

use bytes::Bytes;
use kafka_admin_error::KafkaAdminError;
use kafka_admin_error::KafkaAdminResult;
use kafka_admin_remoting::clients::kafka_client::KafkaRemotingClient;
use kafka_admin_remoting::protocol::scram;
use kafka_admin_remoting::protocol::KafkaRequest;
use tracing::debug;

use crate::admin::scram_admin_ext::ScramAdminExt;
use crate::core::user::credential::generate_salt;
use crate::core::user::AlterUserScramCredentialsResult;
use crate::core::user::ScramCredentialDeletion;
use crate::core::user::ScramCredentialInfo;
use crate::core::user::ScramCredentialUpsertion;
use crate::core::user::ScramMechanism;
use crate::core::user::UserScramCredentials;

/// [`ScramAdminExt`] over the Kafka wire protocol, talking to one bootstrap broker.
#[derive(Debug)]
pub struct DefaultScramAdminExt {
    client: KafkaRemotingClient,
}

impl DefaultScramAdminExt {
    pub fn new(broker_addr: impl Into<String>, client_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: KafkaRemotingClient::new(broker_addr, client_id, timeout),
        }
    }

    #[inline]
    pub fn broker_addr(&self) -> &str {
        self.client.broker_addr()
    }

    async fn alter(
        &self,
        request: scram::AlterUserScramCredentialsRequest,
    ) -> KafkaAdminResult<Vec<AlterUserScramCredentialsResult>> {
        let response = self.client.invoke(&request).await?;
        debug!(
            throttle_time_ms = response.throttle_time_ms,
            results = response.results.len(),
            "alter user scram credentials completed"
        );
        Ok(response
            .results
            .into_iter()
            .map(|result| AlterUserScramCredentialsResult {
                user: result.user,
                error_code: result.error_code,
                error_message: result.error_message,
            })
            .collect())
    }
}

impl ScramAdminExt for DefaultScramAdminExt {
    async fn describe_user_scram_credentials(&self, users: &[String]) -> KafkaAdminResult<Vec<UserScramCredentials>> {
        let request = scram::DescribeUserScramCredentialsRequest {
            users: (!users.is_empty()).then(|| users.to_vec()),
        };
        let response = self.client.invoke(&request).await?;
        if response.error_code.is_error() {
            return Err(KafkaAdminError::broker(
                scram::DescribeUserScramCredentialsRequest::NAME,
                response.error_code,
                response.error_message,
            ));
        }

        response
            .results
            .into_iter()
            .map(|result| {
                let credential_infos = result
                    .credential_infos
                    .into_iter()
                    .map(|info| {
                        Ok(ScramCredentialInfo {
                            mechanism: ScramMechanism::from_wire_code(info.mechanism)?,
                            iterations: info.iterations,
                        })
                    })
                    .collect::<KafkaAdminResult<Vec<_>>>()?;
                Ok(UserScramCredentials {
                    user: result.user,
                    error_code: result.error_code,
                    error_message: result.error_message,
                    credential_infos,
                })
            })
            .collect()
    }

    async fn upsert_user_scram_credentials(
        &self,
        upsertions: Vec<ScramCredentialUpsertion>,
    ) -> KafkaAdminResult<Vec<AlterUserScramCredentialsResult>> {
        let upsertions = upsertions
            .into_iter()
            .map(|upsertion| {
                let salt = generate_salt();
                let salted_password =
                    upsertion
                        .mechanism
                        .salted_password(&upsertion.password, &salt, upsertion.iterations)?;
                Ok(scram::ScramCredentialUpsertion {
                    name: upsertion.name,
                    mechanism: upsertion.mechanism.wire_code(),
                    iterations: upsertion.iterations,
                    salt: Bytes::copy_from_slice(&salt),
                    salted_password: Bytes::from(salted_password),
                })
            })
            .collect::<KafkaAdminResult<Vec<_>>>()?;

        self.alter(scram::AlterUserScramCredentialsRequest {
            deletions: Vec::new(),
            upsertions,
        })
        .await
    }

    async fn delete_user_scram_credentials(
        &self,
        deletions: Vec<ScramCredentialDeletion>,
    ) -> KafkaAdminResult<Vec<AlterUserScramCredentialsResult>> {
        let deletions = deletions
            .into_iter()
            .map(|deletion| scram::ScramCredentialDeletion {
                name: deletion.name,
                mechanism: deletion.mechanism.wire_code(),
            })
            .collect();

        self.alter(scram::AlterUserScramCredentialsRequest {
            deletions,
            upsertions: Vec::new(),
        })
        .await
    }
}
