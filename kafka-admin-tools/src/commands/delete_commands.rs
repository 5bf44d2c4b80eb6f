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


mod delete_user_sub_command;

use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::KafkaAdminResult;

#[derive(Subcommand)]
pub enum DeleteCommands {
    #[command(
        name = "user",
        about = "delete a user",
        long_about = r#"Delete the SCRAM credential of a user for one mechanism."#
    )]
    User(delete_user_sub_command::DeleteUserSubCommand),
}

impl CommandExecute for DeleteCommands {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        match self {
            DeleteCommands::User(cmd) => cmd.execute(context).await,
        }
    }
}
