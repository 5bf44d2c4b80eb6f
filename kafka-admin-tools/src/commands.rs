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


mod completion_commands;
mod create_commands;
mod delete_commands;
mod get_commands;

use clap::Subcommand;

use crate::config::KafkaAdminConfig;
use crate::core::KafkaAdminResult;

/// State shared by every command of one invocation.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Fully layered configuration, `--brokers` applied
    pub config: KafkaAdminConfig,
    /// Original command line without the program name, forwarded when delegating
    pub argv: Vec<String>,
}

/// A trait that defines the execution behavior for commands.
///
/// This trait is designed to be implemented by the command types of the
/// CLI. The `execute` method runs the command with the invocation context.
#[allow(async_fn_in_trait)]
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `context`: configuration and original arguments of this invocation.
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()>;
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Create resources")]
    Create(create_commands::CreateCommands),

    #[command(subcommand)]
    #[command(about = "Display resources")]
    Get(get_commands::GetCommands),

    #[command(subcommand)]
    #[command(about = "Delete resources")]
    Delete(delete_commands::DeleteCommands),

    #[command(subcommand)]
    #[command(name = "__complete", hide = true)]
    Complete(completion_commands::CompleteCommands),
}

impl CommandExecute for Commands {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        match self {
            Commands::Create(value) => value.execute(context).await,
            Commands::Get(value) => value.execute(context).await,
            Commands::Delete(value) => value.execute(context).await,
            Commands::Complete(value) => value.execute(context).await,
        }
    }
}
