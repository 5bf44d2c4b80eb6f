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

//! Tool configuration
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file: the `--config` path, or `<config dir>/kafka-admin/config.toml` when present
//! 3. `KAFKA_ADMIN__*` environment variables, `__` separating nested keys
//!    (`KAFKA_ADMIN__DELEGATE__ENABLED=true`), lists separated by commas
//! 4. the `--brokers` command line flag

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use kafka_admin_error::KafkaAdminError;
use kafka_admin_error::KafkaAdminResult;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CLIENT_ID: &str = "kafka-admin-cli-rust";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

const ENV_PREFIX: &str = "KAFKA_ADMIN";
const ENV_SEPARATOR: &str = "__";
const CONFIG_DIR_NAME: &str = "kafka-admin";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KafkaAdminConfig {
    /// Bootstrap brokers, `host:port`
    pub brokers: Vec<String>,
    pub client_id: String,
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub delegate: DelegateConfig,
}

/// Forwarding of user commands to an externally hosted runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DelegateConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Program followed by its leading arguments; the user command line is appended.
    #[serde(default)]
    pub command: Vec<String>,
}

impl Default for KafkaAdminConfig {
    fn default() -> Self {
        Self {
            brokers: Vec::new(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            delegate: DelegateConfig::default(),
        }
    }
}

impl KafkaAdminConfig {
    /// Loads the layered configuration from the process environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> KafkaAdminResult<Self> {
        Self::load_with_environment(config_file, Self::environment())
    }

    pub(crate) fn load_with_environment(config_file: Option<&Path>, environment: Environment) -> KafkaAdminResult<Self> {
        let builder = Self::defaults().map_err(config_error)?;
        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match Self::default_config_file() {
                Some(path) => builder.add_source(File::from(path).required(false)),
                None => builder,
            },
        };

        let config = builder
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize::<KafkaAdminConfig>())
            .map_err(config_error)?;
        config.validate()?;
        debug!("kafka-admin config: {:?}", config);
        Ok(config)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("brokers", Vec::<String>::new())?
            .set_default("client_id", DEFAULT_CLIENT_ID)?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS as i64)?
            .set_default("delegate.enabled", false)?
            .set_default("delegate.command", Vec::<String>::new())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("brokers")
            .with_list_parse_key("delegate.command")
            .try_parsing(true)
            .ignore_empty(true)
    }

    pub fn default_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Replaces the broker list with a comma separated `--brokers` value.
    pub fn with_brokers_override(mut self, brokers: Option<&str>) -> Self {
        if let Some(brokers) = brokers {
            self.brokers = parse_broker_list(brokers);
        }
        self
    }

    #[inline]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn validate(&self) -> KafkaAdminResult<()> {
        if self.request_timeout_ms == 0 {
            return Err(KafkaAdminError::config("request_timeout_ms must be greater than 0"));
        }
        if self.client_id.is_empty() {
            return Err(KafkaAdminError::config("client_id must not be empty"));
        }
        Ok(())
    }
}

pub fn parse_broker_list(brokers: &str) -> Vec<String> {
    brokers
        .split(',')
        .map(str::trim)
        .filter(|broker| !broker.is_empty())
        .map(str::to_string)
        .collect()
}

fn config_error(e: ConfigError) -> KafkaAdminError {
    KafkaAdminError::config(e.to_string())
}
