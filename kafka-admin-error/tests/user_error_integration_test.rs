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

//! Integration tests for UserAdminError with KafkaAdminError

use std::error::Error;

use kafka_admin_error::BrokerErrorCode;
use kafka_admin_error::KafkaAdminError;
use kafka_admin_error::NetworkError;
use kafka_admin_error::UserAdminError;

#[test]
fn test_user_error_into_kafka_admin_error() {
    let user_err = UserAdminError::invalid_mechanism("");
    let err: KafkaAdminError = user_err.into();

    assert!(matches!(err, KafkaAdminError::User(UserAdminError::InvalidMechanism { .. })));
    assert!(err.to_string().contains("unknown scram mechanism: ''"));
}

#[test]
fn test_user_error_constructors() {
    let err = KafkaAdminError::empty_password("alice");
    assert!(matches!(err, KafkaAdminError::User(UserAdminError::EmptyPassword { .. })));

    let err = KafkaAdminError::unknown_output_format("table");
    assert!(matches!(
        err,
        KafkaAdminError::User(UserAdminError::UnknownOutputFormat { .. })
    ));
    assert!(err.to_string().contains("table"));

    let err = KafkaAdminError::admin_gateway_unavailable("no bootstrap brokers configured");
    assert_eq!(
        err.to_string(),
        "failed to create cluster admin: no bootstrap brokers configured"
    );

    let err = KafkaAdminError::credential_operation_failed("creation", "alice", BrokerErrorCode::new(68), None);
    match err.as_user_error() {
        Some(UserAdminError::CredentialOperationFailed { code, username, .. }) => {
            assert_eq!(*code, BrokerErrorCode::new(68));
            assert_eq!(username, "alice");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_admin_request_failed_keeps_transport_source() {
    let transport = KafkaAdminError::from(NetworkError::request_timeout("broker-1:9092", 10_000));
    let err = KafkaAdminError::admin_request_failed("delete", Some("bob".to_string()), transport);

    assert_eq!(
        err.to_string(),
        "failed to delete user 'bob': Request timeout to broker-1:9092 after 10000ms"
    );

    let user_err = err.as_user_error().expect("user error");
    let source = user_err.source().expect("transport source");
    assert!(source.to_string().contains("Request timeout"));
}
