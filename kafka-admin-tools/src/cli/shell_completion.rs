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

//! Shell completion scripts
//!
//! The static part comes from `clap_complete`. Each script is extended so that
//! the `USER` argument of `create user` and `delete user` is completed by
//! running `<bin> __complete users WORDS...`, where WORDS are the words before
//! the cursor. The last output line is `:<directive>`: `1` shows nothing, `4`
//! shows the listed names without file completion, anything else falls back to
//! the static completion.

use std::io::Write;

use clap::Command;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use clap_complete::Generator;

use crate::core::KafkaAdminError;
use crate::core::KafkaAdminResult;

const BASH_USER_COMPLETION: &str = r#"
__DYNAMIC__() {
    local cur="${COMP_WORDS[COMP_CWORD]}"
    if [[ "${cur}" != -* && " ${COMP_WORDS[*]:1:COMP_CWORD-1} " == *" user "* ]]; then
        local out last directive
        out="$("${COMP_WORDS[0]}" __complete users "${COMP_WORDS[@]:1:COMP_CWORD-1}" 2>/dev/null)"
        last="${out##*$'\n'}"
        directive="${last#:}"
        out="${out%"${last}"}"
        case "${directive}" in
            1)
                COMPREPLY=()
                compopt +o default +o bashdefault 2>/dev/null
                return 0
                ;;
            4)
                COMPREPLY=( $(compgen -W "${out}" -- "${cur}") )
                compopt +o default +o bashdefault 2>/dev/null
                return 0
                ;;
        esac
    fi
    __STATIC__ "$@"
}

if [[ "${BASH_VERSINFO[0]}" -eq 4 && "${BASH_VERSINFO[1]}" -ge 4 || "${BASH_VERSINFO[0]}" -gt 4 ]]; then
    complete -F __DYNAMIC__ -o nosort -o bashdefault -o default __BIN__
else
    complete -F __DYNAMIC__ -o bashdefault -o default __BIN__
fi
"#;

const ZSH_USER_COMPLETION: &str = r#"__DYNAMIC__() {
    if [[ ${words[CURRENT]} != -* && " ${words[2,CURRENT-1]} " == *" user "* ]]; then
        local -a out
        out=("${(@f)$(${words[1]} __complete users "${(@)words[2,CURRENT-1]}" 2>/dev/null)}")
        local directive=${out[-1]#:}
        out=("${(@)out[1,-2]}")
        case $directive in
            1) return 1 ;;
            4) compadd -a out; return ;;
        esac
    fi
    __STATIC__ "$@"
}

if [ "$funcstack[1]" = "__DYNAMIC__" ]; then
    __DYNAMIC__ "$@"
else
    compdef __DYNAMIC__ __BIN__
fi
"#;

const FISH_USER_COMPLETION: &str = r#"
function __DYNAMIC__
    set -l tokens (commandline -opc)
    set -l out ($tokens[1] __complete users $tokens[2..-1] 2>/dev/null)
    set -q out[1]; or return 1
    set -l directive (string replace -r '^:' '' -- $out[-1])
    set -e out[-1]
    test "$directive" = 4; or return 1
    printf '%s\n' $out
end

complete -c __BIN__ -n '__fish_seen_subcommand_from create delete; and __fish_seen_subcommand_from user; and not string match -q -- "-*" (commandline -ct)' -f -a '(__DYNAMIC__)'
"#;

/// Writes the completion script for `shell` (bash, zsh or fish, any case).
///
/// Hidden subcommands of `cmd` are not offered.
pub fn write_completion_script<W: Write>(
    cmd: &Command,
    bin_name: &'static str,
    shell: &str,
    out: &mut W,
) -> KafkaAdminResult<()> {
    let mut visible = visible_command(cmd, bin_name);
    let script = match shell.to_lowercase().as_str() {
        "bash" => with_bash_user_completion(render(Bash, &mut visible, bin_name)?, bin_name),
        "zsh" => with_zsh_user_completion(render(Zsh, &mut visible, bin_name)?, bin_name)?,
        "fish" => with_fish_user_completion(render(Fish, &mut visible, bin_name)?, bin_name),
        _ => {
            return Err(KafkaAdminError::illegal_argument(format!(
                "Unsupported shell: {shell}. Supported shells: bash, zsh, fish"
            )))
        }
    };
    out.write_all(script.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn visible_command(cmd: &Command, bin_name: &'static str) -> Command {
    Command::new(bin_name)
        .args(cmd.get_arguments().cloned())
        .subcommands(cmd.get_subcommands().filter(|sub| !sub.is_hide_set()).cloned())
}

fn render<G: Generator>(generator: G, cmd: &mut Command, bin_name: &str) -> KafkaAdminResult<String> {
    let mut buf = Vec::new();
    generate(generator, cmd, bin_name, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| KafkaAdminError::illegal_argument(format!("completion script is not valid UTF-8: {e}")))
}

fn with_bash_user_completion(script: String, bin_name: &str) -> String {
    let static_fn = script
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("complete -F "))
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_string)
        .unwrap_or_else(|| format!("_{}", bin_name.replace('-', "__")));
    let addition = BASH_USER_COMPLETION
        .replace("__DYNAMIC__", &format!("_{}_users", bin_name.replace('-', "_")))
        .replace("__STATIC__", &static_fn)
        .replace("__BIN__", bin_name);
    script + &addition
}

// The generated `_<bin>` function is renamed so that `_<bin>`, which zsh
// autoloads for `#compdef <bin>`, is the user aware wrapper.
fn with_zsh_user_completion(script: String, bin_name: &str) -> KafkaAdminResult<String> {
    let entry_fn = format!("_{bin_name}");
    let static_fn = format!("{entry_fn}_static");
    let definition = format!("\n{entry_fn}() {{");
    let dispatch = format!(
        "if [ \"$funcstack[1]\" = \"{entry_fn}\" ]; then\n    {entry_fn} \"$@\"\nelse\n    compdef {entry_fn} {bin_name}\nfi\n"
    );
    if !script.contains(&definition) || !script.contains(&dispatch) {
        return Err(KafkaAdminError::illegal_argument(
            "unexpected layout of the generated zsh completion script",
        ));
    }
    let addition = ZSH_USER_COMPLETION
        .replace("__DYNAMIC__", &entry_fn)
        .replace("__STATIC__", &static_fn)
        .replace("__BIN__", bin_name);
    Ok(script
        .replacen(&definition, &format!("\n{static_fn}() {{"), 1)
        .replacen(&dispatch, &addition, 1))
}

fn with_fish_user_completion(script: String, bin_name: &str) -> String {
    let addition = FISH_USER_COMPLETION
        .replace("__DYNAMIC__", &format!("__{}_users", bin_name.replace('-', "_")))
        .replace("__BIN__", bin_name);
    script + &addition
}

#[cfg(test)]
mod tests {
    use clap::Arg;

    use super::*;

    const BIN: &str = "kafka-admin-test";

    fn test_command() -> Command {
        Command::new(BIN)
            .arg(Arg::new("brokers").long("brokers").global(true))
            .subcommand(Command::new("create").subcommand(Command::new("user").arg(Arg::new("user").required(true))))
            .subcommand(Command::new("delete").subcommand(Command::new("user").arg(Arg::new("user").required(true))))
            .subcommand(Command::new("__complete").hide(true).subcommand(Command::new("users")))
    }

    fn script(shell: &str) -> String {
        let mut out = Vec::new();
        write_completion_script(&test_command(), BIN, shell, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hidden_subcommands_are_not_offered() {
        for shell in ["bash", "zsh", "fish"] {
            let script = script(shell);
            let offers_complete = script
                .lines()
                .filter(|line| !line.contains("__complete users"))
                .any(|line| line.contains("__complete"));
            assert!(!offers_complete, "{shell}");
            assert!(script.contains("create"), "{shell}");
        }
    }

    #[test]
    fn every_script_asks_the_binary_for_users() {
        for shell in ["bash", "zsh", "fish", "Bash"] {
            assert!(script(shell).contains("__complete users"), "{shell}");
        }
    }

    #[test]
    fn bash_registers_the_user_aware_function() {
        let script = script("bash");
        assert!(script.contains("complete -F _kafka_admin_test_users -o nosort -o bashdefault -o default kafka-admin-test"));
        let static_fn = script
            .lines()
            .find_map(|line| line.trim_start().strip_prefix("complete -F "))
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap();
        assert!(script.contains(&format!("    {static_fn} \"$@\"")));
    }

    #[test]
    fn zsh_entry_point_is_the_user_aware_function() {
        let script = script("zsh");
        assert!(script.starts_with("#compdef kafka-admin-test"));
        assert!(script.contains("\n_kafka-admin-test_static() {"));
        assert!(script.contains("\n_kafka-admin-test() {\n"));
        assert!(script.contains("    _kafka-admin-test_static \"$@\""));
        assert!(script.contains("compdef _kafka-admin-test kafka-admin-test"));
        assert_eq!(script.matches("compdef _kafka-admin-test ").count(), 1);
    }

    #[test]
    fn fish_completes_users_without_files() {
        let script = script("fish");
        assert!(script.contains("function __kafka_admin_test_users"));
        assert!(script.contains("-f -a '(__kafka_admin_test_users)'"));
    }

    #[test]
    fn unsupported_shell() {
        let err = write_completion_script(&test_command(), BIN, "tcsh", &mut Vec::new()).unwrap_err();
        assert!(matches!(err, KafkaAdminError::IllegalArgument(_)));
    }

    #[cfg(unix)]
    #[test]
    fn bash_offers_names_printed_by_the_binary() {
        use std::process::Command as Process;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("completion.bash");
        std::fs::write(&path, script("bash")).unwrap();

        // the binary is replaced by a function that answers only the expected request
        let session = format!(
            r#"
kafka-admin-test() {{
    if [[ "$*" == "__complete users --brokers k:9092 delete user" ]]; then
        printf 'alice\nbob\nalex\n:4\n'
    else
        printf ':1\n'
    fi
}}
source {path}
COMP_WORDS=(kafka-admin-test --brokers k:9092 delete user al)
COMP_CWORD=5
_kafka_admin_test_users kafka-admin-test al user
printf '%s\n' "${{COMPREPLY[@]}}"
"#,
            path = path.display()
        );
        let Ok(output) = Process::new("bash").arg("-c").arg(&session).output() else {
            return;
        };
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        assert_eq!(String::from_utf8_lossy(&output.stdout), "alice\nalex\n");
    }
}
