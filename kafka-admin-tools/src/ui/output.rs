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


//! Colored notices
//!
//! All notices go to stderr; stdout carries command results only.

use colored::Colorize;

/// Print error message with red tag
pub fn print_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print info message with blue tag
pub fn print_info(message: &str) {
    eprintln!("{}", format_info(message));
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", "[ERROR]".red().bold(), message)
}

pub fn format_info(message: &str) -> String {
    format!("{} {}", "[INFO]".blue().bold(), message)
}
