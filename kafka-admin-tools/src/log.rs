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

use std::str::FromStr;

use tracing::Level;

/// Initializes logging to stderr so stdout stays machine readable.
///
/// The level comes from `RUST_LOG` and defaults to `WARN`; an unparsable
/// value falls back to the default as well.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| parse_level(&level))
        .unwrap_or(Level::WARN);
    init_logger_with_level(level);
}

pub fn init_logger_with_level(level: Level) {
    // a second initialization is a no-op
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(level)
        .try_init();
}

fn parse_level(level: &str) -> Option<Level> {
    Level::from_str(level.trim()).ok()
}
