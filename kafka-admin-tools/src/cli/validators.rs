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

//! CLI input validators

use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

/// Validate bootstrap broker addresses
///
/// # Format
/// Each entry is `host:port`, e.g. `kafka-1:9092` or `[::1]:9092`
pub fn validate_bootstrap_servers(brokers: &[String]) -> KafkaAdminResult<()> {
    if brokers.is_empty() {
        return Err(KafkaAdminError::config("bootstrap broker list cannot be empty"));
    }

    for broker in brokers {
        let Some((host, port)) = broker.rsplit_once(':') else {
            return Err(KafkaAdminError::config(format!(
                "invalid bootstrap broker '{broker}', expected 'host:port'"
            )));
        };

        if host.is_empty() {
            return Err(KafkaAdminError::config(format!(
                "invalid bootstrap broker '{broker}', host is empty"
            )));
        }

        match port.parse::<u16>() {
            Ok(port) if port > 0 => {}
            _ => {
                return Err(KafkaAdminError::config(format!(
                    "invalid port '{port}' in bootstrap broker '{broker}'"
                )))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brokers(addrs: &[&str]) -> Vec<String> {
        addrs.iter().map(|addr| addr.to_string()).collect()
    }

    #[test]
    fn test_validate_bootstrap_servers() {
        // Valid single and multiple addresses
        assert!(validate_bootstrap_servers(&brokers(&["localhost:9092"])).is_ok());
        assert!(validate_bootstrap_servers(&brokers(&["10.0.0.1:9092", "kafka-2:19092"])).is_ok());
        assert!(validate_bootstrap_servers(&brokers(&["[::1]:9092"])).is_ok());

        // Invalid: empty list
        assert!(validate_bootstrap_servers(&[]).is_err());

        // Invalid: missing port, empty host, bad port
        assert!(validate_bootstrap_servers(&brokers(&["localhost"])).is_err());
        assert!(validate_bootstrap_servers(&brokers(&[":9092"])).is_err());
        assert!(validate_bootstrap_servers(&brokers(&["localhost:abc"])).is_err());
        assert!(validate_bootstrap_servers(&brokers(&["localhost:0"])).is_err());
        assert!(validate_bootstrap_servers(&brokers(&["ok:9092", "localhost:70000"])).is_err());
    }

    #[test]
    fn test_error_names_the_offending_address() {
        let err = validate_bootstrap_servers(&brokers(&["kafka-1"])).unwrap_err();
        assert!(err.to_string().contains("kafka-1"));
    }
}
