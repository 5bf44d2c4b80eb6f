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


//! Cluster admin API
//!
//! - [`ScramAdminExt`](scram_admin_ext::ScramAdminExt) - the capabilities user management needs
//! - [`DefaultScramAdminExt`](default_scram_admin_ext::DefaultScramAdminExt) - implementation over the Kafka wire protocol

pub mod default_scram_admin_ext;
pub mod scram_admin_ext;
