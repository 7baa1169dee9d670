//! Schema bootstrap for the constellation table
//!
//! This is bootstrap DDL, not a migration framework: it creates the one
//! table this crate owns when it is missing and changes nothing otherwise.

use crate::db::connection::DbPool;
use crate::error::Result;
use tracing::info;

/// DDL for the constellation table.
///
/// `gen_random_uuid()` needs PostgreSQL 13+; `name` carries the database's
/// "unicode" collation.
const CREATE_CONSTELLATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS constellation (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name TEXT COLLATE "unicode"
)
"#;

/// Create the constellation table if it does not exist
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(CREATE_CONSTELLATION_TABLE).execute(pool).await?;
    info!("Constellation schema ensured");

    Ok(())
}

#[cfg(test)]
mod tests {
    // Tests require a running database - see integration tests
}
