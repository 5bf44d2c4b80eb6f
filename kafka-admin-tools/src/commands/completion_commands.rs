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

//! Hidden `__complete` entry point called by the generated shell scripts.
//!
//! `__complete users WORDS...` receives the command line words before the
//! one being completed and prints one candidate per line followed by
//! `:<directive>`. Outside the `USER` argument of `create user` and
//! `delete user` nothing is printed except `:0`, so the script falls back to
//! its static completion.

use std::io;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use clap::Subcommand;

use crate::commands::CommandContext;
use crate::commands::CommandExecute;
use crate::config::KafkaAdminConfig;
use crate::core::admin::AdminBuilder;
use crate::core::user::complete_user_names;
use crate::core::user::ShellCompDirective;
use crate::core::KafkaAdminResult;

/// Flags whose value is the next word.
const VALUE_FLAGS: [&str; 8] = [
    "-i",
    "--iterations",
    "-p",
    "--password",
    "-m",
    "--mechanism",
    "--brokers",
    "--config",
];

const USER_COMMANDS: [[&str; 2]; 2] = [["create", "user"], ["delete", "user"]];

#[derive(Subcommand)]
pub enum CompleteCommands {
    #[command(name = "users", about = "complete the USER argument of create/delete user")]
    Users(CompleteUsersSubCommand),
}

impl CommandExecute for CompleteCommands {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        match self {
            CompleteCommands::Users(cmd) => cmd.execute(context).await,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct CompleteUsersSubCommand {
    /// Command line words before the word being completed
    #[arg(value_name = "WORDS", trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl CommandExecute for CompleteUsersSubCommand {
    async fn execute(&self, context: &CommandContext) -> KafkaAdminResult<()> {
        let (candidates, directive) = match existing_user_args(&self.words) {
            Some(existing_args) => {
                complete_user_names(&existing_args, || {
                    let config = completion_config(&context.config, &self.words)?;
                    AdminBuilder::from_config(&config).build()
                })
                .await
            }
            None => (Vec::new(), ShellCompDirective::Default),
        };
        let mut out = io::stdout().lock();
        write_candidates(&mut out, &candidates, directive)
    }
}

/// Positional arguments already given to `create user` or `delete user`.
///
/// `None` when the next word is not a positional of one of those commands,
/// for example a flag value or a different command.
fn existing_user_args(words: &[String]) -> Option<Vec<String>> {
    let mut command_path: Vec<&str> = Vec::new();
    let mut positional = Vec::new();
    let mut in_user_command = false;
    let mut expects_value = false;

    for word in words {
        if expects_value {
            expects_value = false;
            continue;
        }
        if VALUE_FLAGS.contains(&word.as_str()) {
            expects_value = true;
            continue;
        }
        if word.starts_with('-') {
            continue;
        }
        if in_user_command {
            positional.push(word.clone());
        } else {
            command_path.push(word.as_str());
            in_user_command = USER_COMMANDS.iter().any(|path| path[..] == command_path[..]);
        }
    }

    (in_user_command && !expects_value).then_some(positional)
}

/// Value of a global flag in `--flag value` or `--flag=value` form; the last one wins.
fn global_flag<'a>(words: &'a [String], flag: &str) -> Option<&'a str> {
    let mut value = None;
    let mut words = words.iter();
    while let Some(word) = words.next() {
        if word == flag {
            value = words.next().map(String::as_str);
        } else if let Some(inline) = word.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            value = Some(inline);
        }
    }
    value
}

/// Configuration as the completed command would see it.
fn completion_config(base: &KafkaAdminConfig, words: &[String]) -> KafkaAdminResult<KafkaAdminConfig> {
    let config = match global_flag(words, "--config") {
        Some(path) => KafkaAdminConfig::load(Some(Path::new(path)))?,
        None => base.clone(),
    };
    Ok(config.with_brokers_override(global_flag(words, "--brokers")))
}

fn write_candidates<W: Write>(out: &mut W, candidates: &[String], directive: ShellCompDirective) -> KafkaAdminResult<()> {
    for candidate in candidates {
        writeln!(out, "{candidate}")?;
    }
    writeln!(out, ":{}", directive.code())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn candidates_then_directive() {
        let mut out = Vec::new();
        write_candidates(
            &mut out,
            &["alice".to_string(), "bob".to_string()],
            ShellCompDirective::NoFileComp,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "alice\nbob\n:4\n");

        let mut out = Vec::new();
        write_candidates(&mut out, &[], ShellCompDirective::Error).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ":1\n");
    }

    #[test]
    fn user_position_of_create_and_delete() {
        assert_eq!(existing_user_args(&words("create user")), Some(Vec::new()));
        assert_eq!(existing_user_args(&words("delete user -m SCRAM-SHA-256")), Some(Vec::new()));
        assert_eq!(
            existing_user_args(&words("--brokers a:9092 create user -p pw alice -i 4096")),
            Some(words("alice"))
        );
        assert_eq!(
            existing_user_args(&words("delete user --mechanism=SCRAM-SHA-256 bob")),
            Some(words("bob"))
        );
    }

    #[test]
    fn other_positions_are_not_completed() {
        assert_eq!(existing_user_args(&[]), None);
        assert_eq!(existing_user_args(&words("create")), None);
        assert_eq!(existing_user_args(&words("get users")), None);
        assert_eq!(existing_user_args(&words("create user -m")), None);
        assert_eq!(existing_user_args(&words("delete user alice --mechanism")), None);
        assert_eq!(existing_user_args(&words("--config")), None);
    }

    #[test]
    fn global_flags_are_picked_up() {
        let line = words("--brokers a:9092 create user --config=/etc/kafka-admin.toml --brokers b:9092");
        assert_eq!(global_flag(&line, "--brokers"), Some("b:9092"));
        assert_eq!(global_flag(&line, "--config"), Some("/etc/kafka-admin.toml"));
        assert_eq!(global_flag(&words("create user"), "--brokers"), None);
        assert_eq!(global_flag(&words("create user --brokers"), "--brokers"), None);
    }

    #[test]
    fn brokers_on_the_command_line_reach_the_admin() {
        let config = completion_config(&KafkaAdminConfig::default(), &words("--brokers k1:9092 delete user")).unwrap();
        assert_eq!(config.brokers, words("k1:9092"));
        assert_eq!(AdminBuilder::from_config(&config).build().unwrap().broker_addr(), "k1:9092");
    }

    #[test]
    fn all_words_are_collected() {
        let cmd = CompleteUsersSubCommand::try_parse_from(["users", "create", "user", "-m", "SCRAM-SHA-256"]).unwrap();
        assert_eq!(cmd.words, words("create user -m SCRAM-SHA-256"));

        let cmd = CompleteUsersSubCommand::try_parse_from(["users"]).unwrap();
        assert!(cmd.words.is_empty());
    }
}
