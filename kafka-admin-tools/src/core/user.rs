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


//! SCRAM user management
//!
//! - [`credential`] - mechanism names, wire codes, validation, salted passwords
//! - [`UserService`] - get, create and delete over a [`ScramAdminExt`](crate::admin::scram_admin_ext::ScramAdminExt)
//! - [`render`] - table, compact and structured output of user rows
//! - [`completion`] - username candidates for shell completion
//! - [`management`] - direct and delegated execution strategies

pub mod completion;
pub mod credential;
pub mod management;
mod operations;
pub mod render;
mod types;

pub use completion::complete_user_names;
pub use completion::ShellCompDirective;
pub use credential::ScramMechanism;
pub use management::select_user_management;
pub use management::DelegatedUserManagement;
pub use management::DirectUserManagement;
pub use management::UserManagement;
pub use management::UserManagementStrategy;
pub use operations::UserService;
pub use types::AlterUserScramCredentialsResult;
pub use types::CreateUsersFlags;
pub use types::DeleteUsersFlags;
pub use types::GetUsersFlags;
pub use types::ScramCredentialDeletion;
pub use types::ScramCredentialInfo;
pub use types::ScramCredentialUpsertion;
pub use types::User;
pub use types::UserScramCredentials;
pub use types::DEFAULT_ITERATIONS;
pub use types::DEFAULT_SCRAM_MECHANISM;
