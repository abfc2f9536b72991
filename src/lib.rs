// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           show / export / fields
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |            env            |
//!              |  INTLAYER_* extract/export|
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          config           |
//!              |  schema, coerce, assemble |
//!              |  TOML loader              |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
