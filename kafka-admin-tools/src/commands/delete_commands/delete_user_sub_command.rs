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
use crate::core::user::DeleteUsersFlags;
use crate::core::user::UserManagement;
use crate::core::user::DEFAULT_SCRAM_MECHANISM;
use crate::core::KafkaAdminResult;

#[derive(Debug, Clone, Parser)]
pub struct DeleteUserSubCommand {
    #[arg(value_name = "USER", required = true, help = "name of the user")]
    user: String,

    #[arg(
        short = 'm',
        long = "mechanism",
        default_value = DEFAULT_SCRAM_MECHANISM,
        help = "scram mechanism (SCRAM-SHA-256, SCRAM-SHA-512)"
    )]
    mechanism: String,
}

impl CommandExecute for DeleteUserSubCommand {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        let management = select_user_management(&context.config, &context.argv)?;
        let flags = DeleteUsersFlags {
            scram_mechanism: self.mechanism.clone(),
        };
        management.delete_user(&self.user, &flags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mechanism_defaults_to_sha512() {
        let cmd = DeleteUserSubCommand::try_parse_from(["user", "alice"]).unwrap();
        assert_eq!(cmd.user, "alice");
        assert_eq!(cmd.mechanism, "SCRAM-SHA-512");

        let cmd = DeleteUserSubCommand::try_parse_from(["user", "alice", "-m", "SCRAM-SHA-256"]).unwrap();
        assert_eq!(cmd.mechanism, "SCRAM-SHA-256");
    }

    #[test]
    fn user_is_required() {
        assert!(DeleteUserSubCommand::try_parse_from(["user"]).is_err());
    }
}
