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

//! SCRAM credential codec
//!
//! Mechanism names and wire codes, the create-time validation rules and the
//! salted password derivation brokers expect in an upsertion.

use std::str::FromStr;

use hmac::digest::core_api::BlockSizeUser;
use hmac::Mac;
use hmac::SimpleHmac;
use kafka_admin_error::KafkaAdminError;
use kafka_admin_error::KafkaAdminResult;
use sha2::Digest;
use sha2::Sha256;
use sha2::Sha512;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use strum::IntoStaticStr;

/// Salt length used for new credentials.
pub const SALT_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ScramMechanism {
    #[strum(serialize = "SCRAM-SHA-256")]
    ScramSha256,
    #[strum(serialize = "SCRAM-SHA-512")]
    ScramSha512,
}

impl ScramMechanism {
    /// Parses an external mechanism name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> KafkaAdminResult<Self> {
        Self::from_str(name).map_err(|_| KafkaAdminError::invalid_mechanism(name))
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Code used by the SCRAM admin APIs. `0` is reserved for "unknown".
    #[inline]
    pub fn wire_code(self) -> i8 {
        match self {
            ScramMechanism::ScramSha256 => 1,
            ScramMechanism::ScramSha512 => 2,
        }
    }

    pub fn from_wire_code(code: i8) -> KafkaAdminResult<Self> {
        match code {
            1 => Ok(ScramMechanism::ScramSha256),
            2 => Ok(ScramMechanism::ScramSha512),
            other => Err(KafkaAdminError::invalid_mechanism(format!("wire code {other}"))),
        }
    }

    /// Derives `SaltedPassword := Hi(Normalize(password), salt, i)`.
    ///
    /// The output is as long as the mechanism's digest: 32 bytes for
    /// SCRAM-SHA-256 and 64 bytes for SCRAM-SHA-512.
    pub fn salted_password(self, password: &str, salt: &[u8], iterations: i32) -> KafkaAdminResult<Vec<u8>> {
        validate_iterations(iterations)?;
        let iterations = iterations as u32;
        match self {
            ScramMechanism::ScramSha256 => hi::<Sha256>(password.as_bytes(), salt, iterations),
            ScramMechanism::ScramSha512 => hi::<Sha512>(password.as_bytes(), salt, iterations),
        }
    }
}

pub fn validate_iterations(iterations: i32) -> KafkaAdminResult<()> {
    if iterations < 1 {
        return Err(KafkaAdminError::invalid_iterations(iterations));
    }
    Ok(())
}

pub fn validate_password(username: &str, password: &str) -> KafkaAdminResult<()> {
    if password.is_empty() {
        return Err(KafkaAdminError::empty_password(username));
    }
    Ok(())
}

/// Fresh random salt for one upsertion.
pub fn generate_salt() -> [u8; SALT_LEN] {
    rand::random()
}

// RFC 5802 Hi(): PBKDF2 with a single output block.
fn hi<D>(password: &[u8], salt: &[u8], iterations: u32) -> KafkaAdminResult<Vec<u8>>
where
    D: Digest + BlockSizeUser + Clone,
{
    let prf = SimpleHmac::<D>::new_from_slice(password)
        .map_err(|e| KafkaAdminError::illegal_argument(format!("invalid HMAC key: {e}")))?;

    let mut mac = prf.clone();
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut block = mac.finalize().into_bytes();
    let mut result = block.clone();

    for _ in 1..iterations {
        let mut mac = prf.clone();
        mac.update(&block);
        block = mac.finalize().into_bytes();
        for (acc, byte) in result.iter_mut().zip(block.iter()) {
            *acc ^= byte;
        }
    }
    Ok(result.to_vec())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn mechanism_names_round_trip() {
        for mechanism in ScramMechanism::iter() {
            assert_eq!(ScramMechanism::parse(mechanism.name()).unwrap(), mechanism);
            assert_eq!(mechanism.to_string(), mechanism.name());
        }
        assert_eq!(ScramMechanism::ScramSha256.name(), "SCRAM-SHA-256");
        assert_eq!(ScramMechanism::ScramSha512.name(), "SCRAM-SHA-512");
    }

    #[test]
    fn unknown_mechanism_names_are_rejected() {
        for name in ["", "SCRAM-SHA-1", "scram-sha-256", "SHA-512", " SCRAM-SHA-512"] {
            let err = ScramMechanism::parse(name).unwrap_err();
            assert!(
                matches!(err.as_user_error(), Some(e) if e.is_validation_error()),
                "{name:?} should be rejected, got {err}"
            );
        }
    }

    #[test]
    fn wire_codes() {
        for mechanism in ScramMechanism::iter() {
            assert_eq!(ScramMechanism::from_wire_code(mechanism.wire_code()).unwrap(), mechanism);
        }
        assert!(ScramMechanism::from_wire_code(0).is_err());
        assert!(ScramMechanism::from_wire_code(3).is_err());
    }

    #[test]
    fn iterations_must_be_positive() {
        assert!(validate_iterations(1).is_ok());
        assert!(validate_iterations(4096).is_ok());
        assert!(validate_iterations(0).is_err());
        assert!(validate_iterations(-5).is_err());
    }

    #[test]
    fn password_must_not_be_empty() {
        assert!(validate_password("alice", "secret").is_ok());
        let err = validate_password("alice", "").unwrap_err();
        assert!(err.to_string().contains("alice"));
    }

    #[test]
    fn salted_password_matches_pbkdf2_vectors() {
        let one = ScramMechanism::ScramSha256
            .salted_password("password", b"salt", 1)
            .unwrap();
        assert_eq!(
            to_hex(&one),
            "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
        );

        let two = ScramMechanism::ScramSha256
            .salted_password("password", b"salt", 2)
            .unwrap();
        assert_eq!(
            to_hex(&two),
            "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
        );
    }

    #[test]
    fn salted_password_length_follows_digest() {
        let salt = generate_salt();
        let sha512 = ScramMechanism::ScramSha512
            .salted_password("secret", &salt, 16)
            .unwrap();
        assert_eq!(sha512.len(), 64);
        assert_eq!(
            ScramMechanism::ScramSha512
                .salted_password("secret", &salt, 16)
                .unwrap(),
            sha512
        );
        assert!(ScramMechanism::ScramSha512.salted_password("secret", &salt, 0).is_err());
    }

    #[test]
    fn salts_are_random() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
