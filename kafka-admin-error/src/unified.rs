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

//! Unified error system for the Kafka admin tools
//!
//! All errors are grouped into categories; the top level [`KafkaAdminError`]
//! wraps them transparently so callers only deal with one type.

mod network;
mod protocol;
mod user;

use std::io;

pub use network::NetworkError;
pub use protocol::ProtocolError;
use thiserror::Error;
pub use user::UserAdminError;

use crate::error_code::BrokerErrorCode;

/// Main error type for all Kafka admin operations
#[derive(Debug, Error)]
pub enum KafkaAdminError {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Network operation errors (connect, timeout, send/receive failures)
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Kafka wire protocol errors (framing, truncated or malformed responses)
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A broker rejected a whole request with a top-level error code
    #[error("Broker rejected {api} request: error code {code}{}", format_broker_message(.message))]
    Broker {
        api: &'static str,
        code: BrokerErrorCode,
        message: Option<String>,
    },

    // ============================================================================
    // User Management Errors
    // ============================================================================
    /// SCRAM user management errors
    #[error(transparent)]
    User(#[from] UserAdminError),

    // ============================================================================
    // Tooling Errors
    // ============================================================================
    /// Configuration could not be loaded or is invalid
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// The delegated execution environment reported a failure
    #[error("Delegated command '{program}' failed: {status}")]
    DelegateFailed { program: String, status: String },

    /// A value could not be serialized for structured output
    #[error("Failed to render {format} output: {reason}")]
    Serialization { format: &'static str, reason: String },

    /// Illegal argument
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub(crate) fn format_broker_message(message: &Option<String>) -> String {
    match message.as_deref() {
        Some(message) if !message.is_empty() => format!(" ({message})"),
        _ => String::new(),
    }
}

/// Result type alias for Kafka admin operations
pub type KafkaAdminResult<T> = std::result::Result<T, KafkaAdminError>;

impl KafkaAdminError {
    // ============================================================================
    // Transport Error Constructors
    // ============================================================================

    /// Create a network connection failed error
    #[inline]
    pub fn network_connection_failed(addr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network(NetworkError::connection_failed(addr, reason))
    }

    /// Create a top-level broker error
    #[inline]
    pub fn broker(api: &'static str, code: impl Into<BrokerErrorCode>, message: Option<String>) -> Self {
        Self::Broker {
            api,
            code: code.into(),
            message,
        }
    }

    // ============================================================================
    // User Management Error Constructors
    // ============================================================================

    /// Create an invalid mechanism error
    #[inline]
    pub fn invalid_mechanism(mechanism: impl Into<String>) -> Self {
        Self::User(UserAdminError::invalid_mechanism(mechanism))
    }

    /// Create an invalid iterations error
    #[inline]
    pub fn invalid_iterations(iterations: i32) -> Self {
        Self::User(UserAdminError::InvalidIterations { iterations })
    }

    /// Create an empty password error
    #[inline]
    pub fn empty_password(username: impl Into<String>) -> Self {
        Self::User(UserAdminError::EmptyPassword {
            username: username.into(),
        })
    }

    /// Create an unknown output format error
    #[inline]
    pub fn unknown_output_format(format: impl Into<String>) -> Self {
        Self::User(UserAdminError::UnknownOutputFormat { format: format.into() })
    }

    /// Create an admin gateway unavailable error
    #[inline]
    pub fn admin_gateway_unavailable(reason: impl Into<String>) -> Self {
        Self::User(UserAdminError::AdminGatewayUnavailable { reason: reason.into() })
    }

    /// Wrap a transport failure of a gateway call
    #[inline]
    pub fn admin_request_failed(operation: &'static str, username: Option<String>, source: KafkaAdminError) -> Self {
        Self::User(UserAdminError::AdminRequestFailed {
            operation,
            username,
            source: Box::new(source),
        })
    }

    /// Create a per-record credential failure
    #[inline]
    pub fn credential_operation_failed(
        operation: &'static str,
        username: impl Into<String>,
        code: BrokerErrorCode,
        message: Option<String>,
    ) -> Self {
        Self::User(UserAdminError::CredentialOperationFailed {
            operation,
            username: username.into(),
            code,
            message,
        })
    }

    // ============================================================================
    // Tooling Error Constructors
    // ============================================================================

    /// Create a configuration error
    #[inline]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config { reason: reason.into() }
    }

    /// Create a delegated execution failure
    #[inline]
    pub fn delegate_failed(program: impl Into<String>, status: impl Into<String>) -> Self {
        Self::DelegateFailed {
            program: program.into(),
            status: status.into(),
        }
    }

    /// Create a structured output serialization error
    #[inline]
    pub fn serialization_failed(format: &'static str, reason: impl Into<String>) -> Self {
        Self::Serialization {
            format,
            reason: reason.into(),
        }
    }

    /// Create an illegal argument error
    #[inline]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    /// Returns the user management error if this is one
    pub fn as_user_error(&self) -> Option<&UserAdminError> {
        match self {
            Self::User(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = KafkaAdminError::network_connection_failed("127.0.0.1:9092", "refused");
        assert!(matches!(err, KafkaAdminError::Network(_)));
        assert!(err.to_string().contains("127.0.0.1:9092"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        let err: KafkaAdminError = io_err.into();
        assert!(matches!(err, KafkaAdminError::Io(_)));
    }

    #[test]
    fn test_broker_error_display() {
        let err = KafkaAdminError::broker("DescribeUserScramCredentials", 31, Some("not authorized".to_string()));
        assert_eq!(
            err.to_string(),
            "Broker rejected DescribeUserScramCredentials request: error code 31 (not authorized)"
        );

        let err = KafkaAdminError::broker("AlterUserScramCredentials", 31, None);
        assert_eq!(
            err.to_string(),
            "Broker rejected AlterUserScramCredentials request: error code 31"
        );
    }

    #[test]
    fn test_serialization_error_display() {
        let err = KafkaAdminError::serialization_failed("yaml", "unsupported value");
        assert_eq!(err.to_string(), "Failed to render yaml output: unsupported value");
    }

    #[test]
    fn test_user_errors_are_transparent() {
        let err = KafkaAdminError::invalid_iterations(0);
        assert_eq!(err.to_string(), "iterations must be greater than 0, got 0");
        assert!(matches!(
            err.as_user_error(),
            Some(UserAdminError::InvalidIterations { iterations: 0 })
        ));
    }
}
