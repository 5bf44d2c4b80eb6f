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

//! Execution strategies for user commands
//!
//! A command either talks to the cluster itself ([`DirectUserManagement`]) or
//! forwards its whole command line to an externally hosted runner
//! ([`DelegatedUserManagement`]). The choice is made once per invocation by
//! [`select_user_management`].

use std::io;

use tokio::process::Command;
use tracing::debug;

use super::operations::UserService;
use super::types::CreateUsersFlags;
use super::types::DeleteUsersFlags;
use super::types::GetUsersFlags;
use crate::admin::default_scram_admin_ext::DefaultScramAdminExt;
use crate::admin::scram_admin_ext::ScramAdminExt;
use crate::config::KafkaAdminConfig;
use crate::core::admin::AdminBuilder;
use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;
use crate::ui::output::print_info;

/// The create, get and delete capability set shared by both strategies.
#[allow(async_fn_in_trait)]
pub trait UserManagement {
    async fn get_users(&self, flags: &GetUsersFlags) -> KafkaAdminResult<()>;

    async fn create_user(&self, username: &str, flags: &CreateUsersFlags) -> KafkaAdminResult<()>;

    async fn delete_user(&self, username: &str, flags: &DeleteUsersFlags) -> KafkaAdminResult<()>;
}

/// Runs user operations against the cluster, printing results to stdout.
pub struct DirectUserManagement<A> {
    admin: A,
}

impl<A: ScramAdminExt> DirectUserManagement<A> {
    pub fn new(admin: A) -> Self {
        Self { admin }
    }
}

impl<A: ScramAdminExt> UserManagement for DirectUserManagement<A> {
    async fn get_users(&self, flags: &GetUsersFlags) -> KafkaAdminResult<()> {
        let mut out = io::stdout();
        UserService::get_users(&self.admin, flags, &mut out).await
    }

    async fn create_user(&self, username: &str, flags: &CreateUsersFlags) -> KafkaAdminResult<()> {
        UserService::create_user(&self.admin, username, flags).await?;
        print_info(&format!("user created: {username}"));
        Ok(())
    }

    async fn delete_user(&self, username: &str, flags: &DeleteUsersFlags) -> KafkaAdminResult<()> {
        UserService::delete_user(&self.admin, username, flags).await?;
        print_info(&format!("user deleted: {username}"));
        Ok(())
    }
}

/// Hands the unmodified command line to a configured external program.
///
/// The program inherits stdio, so its output is the command's output.
/// Flags are not interpreted here; the runner parses the forwarded arguments.
#[derive(Debug, Clone)]
pub struct DelegatedUserManagement {
    program: String,
    leading_args: Vec<String>,
    argv: Vec<String>,
}

impl DelegatedUserManagement {
    /// `command` is the program and its leading arguments, `argv` the
    /// original arguments without the program name.
    pub fn new(command: &[String], argv: Vec<String>) -> KafkaAdminResult<Self> {
        let Some((program, leading_args)) = command.split_first() else {
            return Err(KafkaAdminError::config(
                "delegate.command must not be empty when delegation is enabled",
            ));
        };
        Ok(Self {
            program: program.clone(),
            leading_args: leading_args.to_vec(),
            argv,
        })
    }

    async fn run(&self) -> KafkaAdminResult<()> {
        debug!(program = %self.program, args = ?self.leading_args, argv = ?self.argv, "delegating command");
        let status = Command::new(&self.program)
            .args(&self.leading_args)
            .args(&self.argv)
            .status()
            .await
            .map_err(|e| KafkaAdminError::delegate_failed(&self.program, format!("failed to start: {e}")))?;
        if !status.success() {
            return Err(KafkaAdminError::delegate_failed(&self.program, status.to_string()));
        }
        Ok(())
    }
}

impl UserManagement for DelegatedUserManagement {
    async fn get_users(&self, _flags: &GetUsersFlags) -> KafkaAdminResult<()> {
        self.run().await
    }

    async fn create_user(&self, _username: &str, _flags: &CreateUsersFlags) -> KafkaAdminResult<()> {
        self.run().await
    }

    async fn delete_user(&self, _username: &str, _flags: &DeleteUsersFlags) -> KafkaAdminResult<()> {
        self.run().await
    }
}

/// The strategy chosen for this invocation
pub enum UserManagementStrategy {
    Direct(DirectUserManagement<DefaultScramAdminExt>),
    Delegated(DelegatedUserManagement),
}

impl UserManagement for UserManagementStrategy {
    async fn get_users(&self, flags: &GetUsersFlags) -> KafkaAdminResult<()> {
        match self {
            Self::Direct(strategy) => strategy.get_users(flags).await,
            Self::Delegated(strategy) => strategy.get_users(flags).await,
        }
    }

    async fn create_user(&self, username: &str, flags: &CreateUsersFlags) -> KafkaAdminResult<()> {
        match self {
            Self::Direct(strategy) => strategy.create_user(username, flags).await,
            Self::Delegated(strategy) => strategy.create_user(username, flags).await,
        }
    }

    async fn delete_user(&self, username: &str, flags: &DeleteUsersFlags) -> KafkaAdminResult<()> {
        match self {
            Self::Direct(strategy) => strategy.delete_user(username, flags).await,
            Self::Delegated(strategy) => strategy.delete_user(username, flags).await,
        }
    }
}

/// Picks delegation when `delegate.enabled` is set, the direct path otherwise.
pub fn select_user_management(config: &KafkaAdminConfig, argv: &[String]) -> KafkaAdminResult<UserManagementStrategy> {
    if config.delegate.enabled {
        let delegated = DelegatedUserManagement::new(&config.delegate.command, argv.to_vec())?;
        return Ok(UserManagementStrategy::Delegated(delegated));
    }
    let admin = AdminBuilder::from_config(config).build()?;
    Ok(UserManagementStrategy::Direct(DirectUserManagement::new(admin)))
}
