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


//! Kafka Admin Tools - SCRAM user administration
//!
//! This crate provides both:
//! - **Core**: Reusable user management logic over a SCRAM admin gateway
//! - **CLI**: Command-line interface with formatting, validation and completion
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - User operations                      │
//! │  - Direct or delegated execution        │
//! │  - Username completion                  │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Admin API (admin/)               │
//! │  - DefaultScramAdminExt                 │
//! │  - ScramAdminExt trait                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library (using core)
//!
//! ```rust,ignore
//! use kafka_admin_tools::core::admin::AdminBuilder;
//! use kafka_admin_tools::core::user::UserService;
//!
//! let admin = AdminBuilder::new()
//!     .bootstrap_servers(["127.0.0.1:9092"])
//!     .build()?;
//!
//! let users = UserService::fetch_users(&admin).await?;
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! kafka-admin-cli-rust --brokers 127.0.0.1:9092 create user alice -p s3cret -m SCRAM-SHA-256
//! kafka-admin-cli-rust get users -o compact
//! kafka-admin-cli-rust delete user alice -m SCRAM-SHA-256
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Independent of the presentation layer, apart from the writer that
    //! user listings are rendered into.
    //!
    //! - [`admin`] - Admin gateway builder
    //! - [`user`] - SCRAM user management operations

    pub mod admin;
    pub mod user;

    pub use kafka_admin_error::KafkaAdminError;
    pub use kafka_admin_error::KafkaAdminResult;
    pub use kafka_admin_error::UserAdminError;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (JSON, YAML, Table)
    //! - [`shell_completion`] - Completion scripts for bash, zsh and fish
    //! - [`validators`] - Input validators

    pub mod formatters;
    pub mod shell_completion;
    pub mod validators;
}

// Admin API layer
pub mod admin;

pub mod config;
pub mod log;

// UI utilities for enhanced CLI experience
pub mod ui;

pub(crate) mod commands;

// CLI entry point
pub mod kafka_cli;
