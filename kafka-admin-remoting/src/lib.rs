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

//! Kafka wire protocol plumbing used by the admin tools.
//!
//! Only the pieces needed for SCRAM credential administration are provided:
//! - [`codec`] - length-prefixed frame codec for `tokio_util::codec::Framed`
//! - [`protocol`] - request/response headers, primitive field encoding and the
//!   `DescribeUserScramCredentials` / `AlterUserScramCredentials` messages
//! - [`clients`] - a one-shot request/response client over plaintext TCP

pub mod clients;
pub mod codec;
pub mod protocol;
