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

//! SCRAM user management errors
//!
//! Validation errors are raised before any request reaches a broker. The two
//! request level variants separate a failed round trip
//! ([`UserAdminError::AdminRequestFailed`]) from a round trip that succeeded
//! but carried a non-zero per-user error code
//! ([`UserAdminError::CredentialOperationFailed`]).

use thiserror::Error;

use super::format_broker_message;
use super::KafkaAdminError;
use crate::error_code::BrokerErrorCode;

/// User management errors
#[derive(Debug, Error)]
pub enum UserAdminError {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// Mechanism name (or wire code) is not a supported SCRAM mechanism
    #[error("unknown scram mechanism: '{mechanism}', expected one of: SCRAM-SHA-256, SCRAM-SHA-512")]
    InvalidMechanism { mechanism: String },

    /// Iteration count below one
    #[error("iterations must be greater than 0, got {iterations}")]
    InvalidIterations { iterations: i32 },

    /// Missing password on create
    #[error("password must not be empty for user '{username}'")]
    EmptyPassword { username: String },

    /// Unrecognized rendering mode
    #[error("unknown output format: '{format}', expected one of: json, yaml, wide, compact")]
    UnknownOutputFormat { format: String },

    // ============================================================================
    // Gateway Errors
    // ============================================================================
    /// The cluster admin handle could not be obtained
    #[error("failed to create cluster admin: {reason}")]
    AdminGatewayUnavailable { reason: String },

    /// Transport level failure of a describe/upsert/delete call
    #[error("failed to {operation} {}: {source}", format_target(.username))]
    AdminRequestFailed {
        operation: &'static str,
        username: Option<String>,
        source: Box<KafkaAdminError>,
    },

    /// The broker accepted the request but reported an error for the user
    #[error(
        "user {operation} resulted in error for '{username}': error code {code}{}",
        format_broker_message(.message)
    )]
    CredentialOperationFailed {
        operation: &'static str,
        username: String,
        code: BrokerErrorCode,
        message: Option<String>,
    },
}

fn format_target(username: &Option<String>) -> String {
    match username {
        Some(username) => format!("user '{username}'"),
        None => "users".to_string(),
    }
}

impl UserAdminError {
    /// Create an invalid mechanism error
    #[inline]
    pub fn invalid_mechanism(mechanism: impl Into<String>) -> Self {
        Self::InvalidMechanism {
            mechanism: mechanism.into(),
        }
    }

    /// True for errors raised before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMechanism { .. }
                | Self::InvalidIterations { .. }
                | Self::EmptyPassword { .. }
                | Self::UnknownOutputFormat { .. }
        )
    }

    /// The username the error refers to, if any
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::EmptyPassword { username } | Self::CredentialOperationFailed { username, .. } => Some(username),
            Self::AdminRequestFailed { username, .. } => username.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkError;

    #[test]
    fn test_validation_errors() {
        let err = UserAdminError::invalid_mechanism("SCRAM-SHA-1");
        assert_eq!(
            err.to_string(),
            "unknown scram mechanism: 'SCRAM-SHA-1', expected one of: SCRAM-SHA-256, SCRAM-SHA-512"
        );
        assert!(err.is_validation_error());

        let err = UserAdminError::EmptyPassword {
            username: "alice".to_string(),
        };
        assert_eq!(err.to_string(), "password must not be empty for user 'alice'");
        assert_eq!(err.username(), Some("alice"));

        let err = UserAdminError::UnknownOutputFormat {
            format: "bogus".to_string(),
        };
        assert!(err.to_string().contains("'bogus'"));
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_admin_request_failed() {
        let err = UserAdminError::AdminRequestFailed {
            operation: "create",
            username: Some("alice".to_string()),
            source: Box::new(NetworkError::connection_failed("localhost:9092", "refused").into()),
        };
        assert_eq!(
            err.to_string(),
            "failed to create user 'alice': Connection failed to localhost:9092: refused"
        );
        assert!(!err.is_validation_error());

        let err = UserAdminError::AdminRequestFailed {
            operation: "describe",
            username: None,
            source: Box::new(NetworkError::connection_failed("localhost:9092", "refused").into()),
        };
        assert!(err.to_string().starts_with("failed to describe users:"));
        assert_eq!(err.username(), None);
    }

    #[test]
    fn test_credential_operation_failed() {
        let err = UserAdminError::CredentialOperationFailed {
            operation: "deletion",
            username: "bob".to_string(),
            code: BrokerErrorCode::new(91),
            message: Some("Attempt to delete a user credential for an unknown user".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "user deletion resulted in error for 'bob': error code 91 (Attempt to delete a user credential for an \
             unknown user)"
        );
        assert_eq!(err.username(), Some("bob"));
    }
}
