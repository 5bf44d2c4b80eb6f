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

//! Buffered, borderless table writer using tabled

use std::io::Write;

use tabled::builder::Builder;
use tabled::settings::Padding;
use tabled::settings::Style;

use crate::core::KafkaAdminResult;

/// Spaces between two columns
const COLUMN_GAP: usize = 3;

/// Collects rows and renders them as space aligned columns on [`flush`](Self::flush).
///
/// There are no borders and trailing whitespace is trimmed, so a single
/// column table is one plain value per line.
pub struct TableWriter<W: Write> {
    out: W,
    builder: Builder,
    records: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            builder: Builder::default(),
            records: 0,
        }
    }

    /// Drops any buffered rows.
    pub fn initialize(&mut self) {
        self.builder = Builder::default();
        self.records = 0;
    }

    /// Starts a new table with a header row.
    pub fn write_header<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initialize();
        self.write(columns);
    }

    pub fn write<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builder.push_record(values.into_iter().map(Into::<String>::into));
        self.records += 1;
    }

    /// Renders the buffered rows to the output and clears the buffer.
    pub fn flush(&mut self) -> KafkaAdminResult<()> {
        if self.records > 0 {
            let mut table = std::mem::take(&mut self.builder).build();
            table.with(Style::empty()).with(Padding::new(0, COLUMN_GAP, 0, 0));
            for line in table.to_string().lines() {
                writeln!(self.out, "{}", line.trim_end())?;
            }
            self.records = 0;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
