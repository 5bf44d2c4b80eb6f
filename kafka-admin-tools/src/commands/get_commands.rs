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


mod get_users_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::KafkaAdminResult;

#[derive(Subcommand)]
pub enum GetCommands {
    #[command(
        name = "users",
        about = "list available users",
        long_about = r#"List every SCRAM user with one row per credential mechanism, sorted by name."#
    )]
    Users(get_users_sub_command::GetUsersSubCommand),
}

impl CommandExecute for GetCommands {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        match self {
            GetCommands::Users(cmd) => cmd.execute(context).await,
        }
    }
}
