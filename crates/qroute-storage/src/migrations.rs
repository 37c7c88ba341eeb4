// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded migrations creating the sample `users`, `products`, and `orders`
//! tables described by the default schema.

use qroute_core::QrouteError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("migrations");
}

/// Apply pending migrations; returns how many ran.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<usize, QrouteError> {
    let report = embedded::migrations::runner()
        .run(conn)
        .map_err(|e| QrouteError::Storage {
            source: Box::new(e),
        })?;
    Ok(report.applied_migrations().len())
}
