//! Constellation database operations

use crate::db::models::{Constellation, NewConstellation};
use crate::db::DbPool;
use crate::error::Result;
use uuid::Uuid;

/// Create a new constellation record, letting the server generate the id
pub async fn create_constellation(pool: &DbPool, new: &NewConstellation) -> Result<Constellation> {
    let constellation = sqlx::query_as::<_, Constellation>(
        r#"
        INSERT INTO constellation (name)
        VALUES ($1)
        RETURNING *
        "#,
    )
    .bind(&new.name)
    .fetch_one(pool)
    .await?;

    Ok(constellation)
}

/// Get constellation by ID
pub async fn get_constellation_by_id(pool: &DbPool, id: Uuid) -> Result<Option<Constellation>> {
    let constellation =
        sqlx::query_as::<_, Constellation>("SELECT * FROM constellation WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(constellation)
}

/// Get constellation by name (comparison uses the column's collation)
pub async fn get_constellation_by_name(pool: &DbPool, name: &str) -> Result<Option<Constellation>> {
    let constellation =
        sqlx::query_as::<_, Constellation>("SELECT * FROM constellation WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;

    Ok(constellation)
}

/// List all constellations ordered by name
pub async fn list_constellations(pool: &DbPool) -> Result<Vec<Constellation>> {
    let constellations =
        sqlx::query_as::<_, Constellation>("SELECT * FROM constellation ORDER BY name")
            .fetch_all(pool)
            .await?;

    Ok(constellations)
}

/// Update a constellation's name
pub async fn update_constellation_name(pool: &DbPool, id: Uuid, name: Option<&str>) -> Result<()> {
    sqlx::query("UPDATE constellation SET name = $2 WHERE id = $1")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a constellation by ID, returning whether a row was removed
pub async fn delete_constellation(pool: &DbPool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM constellation WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count constellations for monitoring
pub async fn count_constellations(pool: &DbPool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM constellation")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    // Tests require a running database - see integration tests
}
