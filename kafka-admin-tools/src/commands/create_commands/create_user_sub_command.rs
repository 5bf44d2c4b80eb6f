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
use crate::core::user::CreateUsersFlags;
use crate::core::user::UserManagement;
use crate::core::user::DEFAULT_ITERATIONS;
use crate::core::user::DEFAULT_SCRAM_MECHANISM;
use crate::core::KafkaAdminResult;

#[derive(Debug, Clone, Parser)]
pub struct CreateUserSubCommand {
    #[arg(value_name = "USER", required = true, help = "name of the user")]
    user: String,

    #[arg(
        short = 'i',
        long = "iterations",
        default_value_t = DEFAULT_ITERATIONS,
        allow_negative_numbers = true,
        help = "number of iterations"
    )]
    iterations: i32,

    #[arg(short = 'p', long = "password", default_value = "", help = "password")]
    password: String,

    #[arg(
        short = 'm',
        long = "mechanism",
        default_value = DEFAULT_SCRAM_MECHANISM,
        help = "scram mechanism (SCRAM-SHA-256, SCRAM-SHA-512)"
    )]
    mechanism: String,
}

impl CreateUserSubCommand {
    fn flags(&self) -> CreateUsersFlags {
        CreateUsersFlags {
            password: self.password.clone(),
            scram_mechanism: self.mechanism.clone(),
            iterations: self.iterations,
        }
    }
}

impl CommandExecute for CreateUserSubCommand {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        let management = select_user_management(&context.config, &context.argv)?;
        management.create_user(&self.user, &self.flags()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cmd = CreateUserSubCommand::try_parse_from(["user", "alice"]).unwrap();
        assert_eq!(cmd.user, "alice");
        assert_eq!(cmd.flags(), CreateUsersFlags::default());
    }

    #[test]
    fn all_flags() {
        let cmd = CreateUserSubCommand::try_parse_from([
            "user",
            "bob",
            "-i",
            "8192",
            "--password",
            "s3cret",
            "-m",
            "SCRAM-SHA-256",
        ])
        .unwrap();
        let flags = cmd.flags();
        assert_eq!(cmd.user, "bob");
        assert_eq!(flags.iterations, 8192);
        assert_eq!(flags.password, "s3cret");
        assert_eq!(flags.scram_mechanism, "SCRAM-SHA-256");
    }

    #[test]
    fn negative_iterations_reach_validation() {
        let cmd = CreateUserSubCommand::try_parse_from(["user", "bob", "-i", "-1"]).unwrap();
        assert_eq!(cmd.flags().iterations, -1);
    }

    #[test]
    fn exactly_one_user() {
        assert!(CreateUserSubCommand::try_parse_from(["user"]).is_err());
        assert!(CreateUserSubCommand::try_parse_from(["user", "alice", "bob"]).is_err());
    }
}
