// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite storage for the `sql` path of the Qroute router.
//!
//! [`SqliteExecutor`] runs one generated statement per request through a
//! tokio-rusqlite connection. Sample tables are created by embedded migrations.

pub mod executor;
pub mod migrations;

pub use executor::{SqliteExecutor, returns_rows};
