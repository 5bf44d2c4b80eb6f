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


use clap::Parser;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::core::user::select_user_management;
use crate::core::user::GetUsersFlags;
use crate::core::user::UserManagement;
use crate::core::KafkaAdminResult;

#[derive(Debug, Clone, Parser)]
pub struct GetUsersSubCommand {
    #[arg(
        short = 'o',
        long = "output",
        default_value = "",
        help = "output format. One of: json|yaml|wide|compact"
    )]
    output: String,
}

impl CommandExecute for GetUsersSubCommand {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        let management = select_user_management(&context.config, &context.argv)?;
        let flags = GetUsersFlags {
            output_format: self.output.clone(),
        };
        management.get_users(&flags).await
    }
}
