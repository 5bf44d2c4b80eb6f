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

//! User operations - Core business logic
//!
//! Every operation validates its input before talking to the cluster and
//! performs at most one gateway round trip.

use std::io::Write;

use tracing::info;
use tracing::warn;

use super::credential::validate_iterations;
use super::credential::validate_password;
use super::credential::ScramMechanism;
use super::render::render_users;
use super::types::AlterUserScramCredentialsResult;
use super::types::CreateUsersFlags;
use super::types::DeleteUsersFlags;
use super::types::GetUsersFlags;
use super::types::ScramCredentialDeletion;
use super::types::ScramCredentialUpsertion;
use super::types::User;
use super::types::UserScramCredentials;
use crate::admin::scram_admin_ext::ScramAdminExt;
use crate::cli::formatters::OutputFormat;
use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

/// User operations service
pub struct UserService;

impl UserService {
    /// All SCRAM credentials as one row per (user, mechanism), sorted by name
    ///
    /// The sort is stable: rows of the same user keep the order the broker
    /// returned them in.
    pub async fn fetch_users<A: ScramAdminExt>(admin: &A) -> KafkaAdminResult<Vec<User>> {
        let credentials = Self::describe_all(admin).await?;
        let mut users: Vec<User> = credentials
            .iter()
            .flat_map(|credential| {
                credential.credential_infos.iter().map(move |info| User {
                    name: credential.user.clone(),
                    scram_mechanism: info.mechanism.to_string(),
                    iterations: info.iterations,
                })
            })
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    /// List users and write them to `out` in `flags.output_format`
    ///
    /// An unknown format is rejected before the cluster is contacted.
    pub async fn get_users<A, W>(admin: &A, flags: &GetUsersFlags, out: &mut W) -> KafkaAdminResult<()>
    where
        A: ScramAdminExt,
        W: Write,
    {
        let format = OutputFormat::parse(&flags.output_format)?;
        let users = Self::fetch_users(admin).await?;
        render_users(&users, format, out)
    }

    /// Usernames in the order the broker returned them, one per user
    pub async fn list_user_names<A: ScramAdminExt>(admin: &A) -> KafkaAdminResult<Vec<String>> {
        let credentials = Self::describe_all(admin).await?;
        Ok(credentials.into_iter().map(|credential| credential.user).collect())
    }

    /// Create or update the SCRAM credential of `username`
    ///
    /// Checks iterations, then the mechanism, then the password.
    pub async fn create_user<A: ScramAdminExt>(
        admin: &A,
        username: &str,
        flags: &CreateUsersFlags,
    ) -> KafkaAdminResult<()> {
        validate_iterations(flags.iterations)?;
        let mechanism = ScramMechanism::parse(&flags.scram_mechanism)?;
        validate_password(username, &flags.password)?;

        let upsertion = ScramCredentialUpsertion {
            name: username.to_string(),
            mechanism,
            iterations: flags.iterations,
            password: flags.password.clone(),
        };
        let results = admin
            .upsert_user_scram_credentials(vec![upsertion])
            .await
            .map_err(|e| KafkaAdminError::admin_request_failed("create", Some(username.to_string()), e))?;
        check_alter_results("creation", results)?;

        info!(user = %username, %mechanism, iterations = flags.iterations, "user created");
        Ok(())
    }

    /// Delete the SCRAM credential of `username` for one mechanism
    pub async fn delete_user<A: ScramAdminExt>(
        admin: &A,
        username: &str,
        flags: &DeleteUsersFlags,
    ) -> KafkaAdminResult<()> {
        let mechanism = ScramMechanism::parse(&flags.scram_mechanism)?;

        let deletion = ScramCredentialDeletion {
            name: username.to_string(),
            mechanism,
        };
        let results = admin
            .delete_user_scram_credentials(vec![deletion])
            .await
            .map_err(|e| KafkaAdminError::admin_request_failed("delete", Some(username.to_string()), e))?;
        check_alter_results("deletion", results)?;

        info!(user = %username, %mechanism, "user deleted");
        Ok(())
    }

    async fn describe_all<A: ScramAdminExt>(admin: &A) -> KafkaAdminResult<Vec<UserScramCredentials>> {
        let credentials = admin
            .describe_user_scram_credentials(&[])
            .await
            .map_err(|e| KafkaAdminError::admin_request_failed("describe", None, e))?;
        for credential in credentials.iter().filter(|credential| credential.error_code.is_error()) {
            warn!(
                user = %credential.user,
                code = %credential.error_code,
                message = ?credential.error_message,
                "broker reported an error while describing user credentials"
            );
        }
        Ok(credentials)
    }
}

fn check_alter_results(operation: &'static str, results: Vec<AlterUserScramCredentialsResult>) -> KafkaAdminResult<()> {
    match results.into_iter().find(|result| result.error_code.is_error()) {
        Some(failed) => Err(KafkaAdminError::credential_operation_failed(
            operation,
            failed.user,
            failed.error_code,
            failed.error_message,
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use kafka_admin_error::BrokerErrorCode;
    use kafka_admin_error::UserAdminError;

    use super::*;

    #[test]
    fn alter_results_without_errors_pass() {
        let results = vec![AlterUserScramCredentialsResult {
            user: "alice".to_string(),
            error_code: BrokerErrorCode::NONE,
            error_message: None,
        }];
        assert!(check_alter_results("creation", results).is_ok());
        assert!(check_alter_results("creation", Vec::new()).is_ok());
    }

    #[test]
    fn first_failed_alter_result_is_reported() {
        let results = vec![AlterUserScramCredentialsResult {
            user: "alice".to_string(),
            error_code: BrokerErrorCode::new(68),
            error_message: Some("unsupported".to_string()),
        }];
        let err = check_alter_results("creation", results).unwrap_err();
        match err.as_user_error() {
            Some(UserAdminError::CredentialOperationFailed {
                operation,
                username,
                code,
                message,
            }) => {
                assert_eq!(*operation, "creation");
                assert_eq!(username, "alice");
                assert_eq!(*code, BrokerErrorCode::new(68));
                assert_eq!(message.as_deref(), Some("unsupported"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
