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

//! # Kafka Admin Error Handling
//!
//! Unified error types shared by the remoting layer, the admin tools library
//! and the command line binary.
//!
//! - [`KafkaAdminError`] is the single error type returned across crate
//!   boundaries, with automatic `From` conversions from the category enums.
//! - [`UserAdminError`] covers SCRAM user management (validation, gateway
//!   availability, per-request and per-record failures).
//! - [`NetworkError`] and [`ProtocolError`] describe transport failures.
//!
//! ### Usage
//!
//! ```rust
//! use kafka_admin_error::KafkaAdminError;
//! use kafka_admin_error::KafkaAdminResult;
//!
//! fn check_iterations(iterations: i32) -> KafkaAdminResult<()> {
//!     if iterations < 1 {
//!         return Err(KafkaAdminError::invalid_iterations(iterations));
//!     }
//!     Ok(())
//! }
//! # check_iterations(4096).unwrap();
//! ```

pub mod error_code;
pub mod unified;

pub use error_code::BrokerErrorCode;
pub use unified::KafkaAdminError;
pub use unified::KafkaAdminResult;
pub use unified::NetworkError;
pub use unified::ProtocolError;
pub use unified::UserAdminError;
