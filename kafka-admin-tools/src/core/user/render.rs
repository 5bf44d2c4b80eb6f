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

use std::io::Write;

use super::types::User;
use crate::cli::formatters::print_object;
use crate::cli::formatters::OutputFormat;
use crate::cli::formatters::TableWriter;
use crate::core::KafkaAdminResult;

pub const USER_TABLE_HEADER: [&str; 3] = ["USER", "SCRAM MECHANISM", "ITERATIONS"];

/// Writes `users` in `format`.
///
/// Structured formats are handed to the object printer as one document.
/// `compact` lists one name per row, repeating users with several
/// mechanisms. The table formats flush once at the end.
pub fn render_users<W: Write>(users: &[User], format: OutputFormat, out: &mut W) -> KafkaAdminResult<()> {
    if format.is_structured() {
        return print_object(users, format.as_str(), out);
    }

    let mut table_writer = TableWriter::new(out);
    match format {
        OutputFormat::Compact => {
            table_writer.initialize();
            for user in users {
                table_writer.write([user.name.as_str()]);
            }
        }
        _ => {
            table_writer.write_header(USER_TABLE_HEADER);
            for user in users {
                table_writer.write([
                    user.name.clone(),
                    user.scram_mechanism.clone(),
                    user.iterations.to_string(),
                ]);
            }
        }
    }
    table_writer.flush()
}
