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

//! Admin client builder
//!
//! [`AdminBuilder`] turns configuration into a ready [`DefaultScramAdminExt`].
//! Building never touches the network; connections are opened per request.

use std::time::Duration;

use tracing::debug;

use crate::admin::default_scram_admin_ext::DefaultScramAdminExt;
use crate::cli::validators::validate_bootstrap_servers;
use crate::config::KafkaAdminConfig;
use crate::config::DEFAULT_CLIENT_ID;
use crate::config::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

/// Builder for creating and configuring admin clients
///
/// # Examples
///
/// ```rust,ignore
/// use kafka_admin_tools::core::admin::AdminBuilder;
///
/// let admin = AdminBuilder::new()
///     .bootstrap_servers(["kafka-1:9092", "kafka-2:9092"])
///     .client_id("ops-tool")
///     .timeout_millis(5000)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminBuilder {
    bootstrap_servers: Vec<String>,
    client_id: Option<String>,
    timeout_millis: Option<u64>,
}

impl AdminBuilder {
    /// Create a new builder with default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from the loaded tool configuration
    pub fn from_config(config: &KafkaAdminConfig) -> Self {
        Self::new()
            .bootstrap_servers(config.brokers.iter().cloned())
            .client_id(config.client_id.clone())
            .timeout_millis(config.request_timeout_ms)
    }

    /// Set the bootstrap brokers, replacing any previous list
    #[inline]
    pub fn bootstrap_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bootstrap_servers = servers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the client id sent in every request header
    ///
    /// If not set, defaults to `"kafka-admin-cli-rust"`
    #[inline]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the request timeout in milliseconds
    #[inline]
    pub fn timeout_millis(mut self, timeout: u64) -> Self {
        self.timeout_millis = Some(timeout);
        self
    }

    /// Build the admin client
    ///
    /// Requests go to the first bootstrap broker.
    ///
    /// # Errors
    ///
    /// Returns `AdminGatewayUnavailable` if no broker is configured or an
    /// address is not `host:port`.
    pub fn build(self) -> KafkaAdminResult<DefaultScramAdminExt> {
        let Some(broker) = self.bootstrap_servers.first() else {
            return Err(KafkaAdminError::admin_gateway_unavailable(
                "no bootstrap brokers configured, use --brokers or KAFKA_ADMIN__BROKERS",
            ));
        };
        validate_bootstrap_servers(&self.bootstrap_servers)
            .map_err(|e| KafkaAdminError::admin_gateway_unavailable(e.to_string()))?;

        let client_id = self.client_id.unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string());
        let timeout = Duration::from_millis(self.timeout_millis.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS));
        debug!(broker = %broker, client_id = %client_id, ?timeout, "creating cluster admin");
        Ok(DefaultScramAdminExt::new(broker.clone(), client_id, timeout))
    }
}

#[cfg(test)]
mod tests {
    use kafka_admin_error::UserAdminError;

    use super::*;

    #[test]
    fn test_builder_configuration() {
        let builder = AdminBuilder::new()
            .bootstrap_servers(["kafka-1:9092", "kafka-2:9092"])
            .client_id("test-client")
            .timeout_millis(5000);

        assert_eq!(builder.bootstrap_servers, vec!["kafka-1:9092", "kafka-2:9092"]);
        assert_eq!(builder.client_id, Some("test-client".to_string()));
        assert_eq!(builder.timeout_millis, Some(5000));
    }

    #[test]
    fn test_builder_default() {
        let builder = AdminBuilder::default();
        assert!(builder.bootstrap_servers.is_empty());
        assert!(builder.client_id.is_none());
        assert!(builder.timeout_millis.is_none());
    }

    #[test]
    fn test_build_uses_first_broker() {
        let admin = AdminBuilder::new()
            .bootstrap_servers(["kafka-1:9092", "kafka-2:9092"])
            .build()
            .unwrap();
        assert_eq!(admin.broker_addr(), "kafka-1:9092");
    }

    #[test]
    fn test_build_from_config() {
        let config = KafkaAdminConfig {
            brokers: vec!["broker:19092".to_string()],
            ..Default::default()
        };
        let admin = AdminBuilder::from_config(&config).build().unwrap();
        assert_eq!(admin.broker_addr(), "broker:19092");
    }

    #[test]
    fn test_build_without_brokers_is_unavailable() {
        let err = AdminBuilder::new().build().unwrap_err();
        assert!(matches!(
            err.as_user_error(),
            Some(UserAdminError::AdminGatewayUnavailable { .. })
        ));
    }

    #[test]
    fn test_build_with_invalid_broker_is_unavailable() {
        let err = AdminBuilder::new().bootstrap_servers(["kafka-1"]).build().unwrap_err();
        assert!(matches!(
            err.as_user_error(),
            Some(UserAdminError::AdminGatewayUnavailable { .. })
        ));
        assert!(err.to_string().contains("kafka-1"));
    }
}
