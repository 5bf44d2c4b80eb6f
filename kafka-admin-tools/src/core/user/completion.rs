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

use tracing::debug;

use super::operations::UserService;
use crate::admin::scram_admin_ext::ScramAdminExt;
use crate::core::KafkaAdminResult;

/// Hint returned to the shell together with completion candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCompDirective {
    /// Fall back to the shell's default behavior
    Default,
    /// Completion failed, show nothing
    Error,
    /// Do not fall back to file name completion
    NoFileComp,
}

impl ShellCompDirective {
    /// Numeric code understood by cobra style completion scripts.
    pub fn code(self) -> u32 {
        match self {
            ShellCompDirective::Default => 0,
            ShellCompDirective::Error => 1,
            ShellCompDirective::NoFileComp => 4,
        }
    }
}

/// Candidate usernames for the single `USER` argument.
///
/// Nothing is offered once the argument is present. `connect` is only called
/// when a lookup is needed, and failures become an empty list with
/// [`ShellCompDirective::Error`].
pub async fn complete_user_names<A, F>(existing_args: &[String], connect: F) -> (Vec<String>, ShellCompDirective)
where
    A: ScramAdminExt,
    F: FnOnce() -> KafkaAdminResult<A>,
{
    if !existing_args.is_empty() {
        return (Vec::new(), ShellCompDirective::NoFileComp);
    }

    let names = match connect() {
        Ok(admin) => UserService::list_user_names(&admin).await,
        Err(e) => Err(e),
    };
    match names {
        Ok(names) => (names, ShellCompDirective::NoFileComp),
        Err(e) => {
            debug!("user name completion failed: {e}");
            (Vec::new(), ShellCompDirective::Error)
        }
    }
}
