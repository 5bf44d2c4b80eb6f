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


use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;
use tracing::debug;

use crate::cli::shell_completion::write_completion_script;
use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::config::KafkaAdminConfig;
use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

const BIN_NAME: &str = "kafka-admin-cli-rust";

#[derive(Parser)]
#[command(name = "kafka-admin-cli-rust")]
#[command(about = "Kafka SCRAM user admin commands", long_about = None)]
pub struct KafkaAdminCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    #[arg(
        long = "brokers",
        value_name = "HOST:PORT[,HOST:PORT...]",
        global = true,
        help = "Comma separated bootstrap brokers, overrides the configuration"
    )]
    brokers: Option<String>,

    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Configuration file (default: <config dir>/kafka-admin/config.toml)"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl KafkaAdminCli {
    /// Runs the parsed invocation. `argv` is the raw command line without
    /// the program name and is only used when the command is delegated.
    pub async fn handle(&self, argv: Vec<String>) -> KafkaAdminResult<()> {
        if let Some(shell) = &self.completion {
            return generate_completion(shell, &mut io::stdout());
        }

        let Some(commands) = &self.commands else {
            return Err(KafkaAdminError::illegal_argument(
                "No command specified. Use --help for usage information.",
            ));
        };

        let config = KafkaAdminConfig::load(self.config.as_deref())?.with_brokers_override(self.brokers.as_deref());
        debug!(brokers = ?config.brokers, delegate = config.delegate.enabled, "configuration loaded");

        let context = CommandContext { config, argv };
        commands.execute(&context).await
    }
}

fn generate_completion<W: Write>(shell: &str, out: &mut W) -> KafkaAdminResult<()> {
    write_completion_script(&KafkaAdminCli::command(), BIN_NAME, shell, out)
}
