//! Session management
//!
//! A [`SessionFactory`] binds sessions to one pool; a [`Session`] scopes a
//! sequence of operations to a single transaction and keeps an identity
//! cache of the records it has loaded.

use crate::db::connection::DbPool;
use crate::db::models::{Constellation, NewConstellation};
use crate::error::Result;
use sqlx::{Postgres, Transaction};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Factory for new [`Session`] objects bound to one pool.
///
/// The factory is cheap to clone and never closes the pool or expires the
/// sessions it hands out; the pool owner remains responsible for disposal.
#[derive(Clone)]
pub struct SessionFactory {
    pool: DbPool,
    expire_on_commit: bool,
}

impl SessionFactory {
    /// Create a factory with the default policy (records expire on commit)
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            expire_on_commit: true,
        }
    }

    /// Set whether sessions expire their loaded records after commit
    pub fn expire_on_commit(mut self, expire: bool) -> Self {
        self.expire_on_commit = expire;
        self
    }

    /// Open a new session.
    ///
    /// Performs no I/O; the session's transaction begins on first use.
    pub fn session(&self) -> Session {
        Session {
            pool: self.pool.clone(),
            tx: None,
            identity: HashMap::new(),
            expire_on_commit: self.expire_on_commit,
        }
    }

    /// The pool this factory is bound to
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Unit-of-work over a single transaction.
///
/// Dropping a session with an open transaction rolls it back.
pub struct Session {
    pool: DbPool,
    tx: Option<Transaction<'static, Postgres>>,
    identity: HashMap<Uuid, Constellation>,
    expire_on_commit: bool,
}

impl Session {
    async fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>> {
        if self.tx.is_none() {
            debug!("Beginning session transaction");
            self.tx = Some(self.pool.begin().await?);
        }

        Ok(self.tx.as_mut().expect("transaction initialized above"))
    }

    /// Insert a new constellation and return the stored record
    pub async fn add(&mut self, new: &NewConstellation) -> Result<Constellation> {
        let tx = self.tx().await?;
        let constellation = sqlx::query_as::<_, Constellation>(
            "INSERT INTO constellation (name) VALUES ($1) RETURNING *",
        )
        .bind(&new.name)
        .fetch_one(&mut **tx)
        .await?;

        self.identity
            .insert(constellation.id, constellation.clone());
        Ok(constellation)
    }

    /// Fetch a constellation by id.
    ///
    /// Served from the identity cache when already loaded in this session.
    pub async fn get(&mut self, id: Uuid) -> Result<Option<Constellation>> {
        if let Some(cached) = self.identity.get(&id) {
            return Ok(Some(cached.clone()));
        }

        let tx = self.tx().await?;
        let constellation =
            sqlx::query_as::<_, Constellation>("SELECT * FROM constellation WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

        if let Some(constellation) = &constellation {
            self.identity
                .insert(constellation.id, constellation.clone());
        }
        Ok(constellation)
    }

    /// Update a constellation's name, returning the updated record if found
    pub async fn update_name(
        &mut self,
        id: Uuid,
        name: Option<&str>,
    ) -> Result<Option<Constellation>> {
        let tx = self.tx().await?;
        let constellation = sqlx::query_as::<_, Constellation>(
            "UPDATE constellation SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&mut **tx)
        .await?;

        match &constellation {
            Some(updated) => {
                self.identity.insert(updated.id, updated.clone());
            }
            None => {
                self.identity.remove(&id);
            }
        }
        Ok(constellation)
    }

    /// Delete a constellation, returning whether a row was removed
    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let tx = self.tx().await?;
        let result = sqlx::query("DELETE FROM constellation WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        self.identity.remove(&id);
        Ok(result.rows_affected() > 0)
    }

    /// Commit the transaction.
    ///
    /// With `expire_on_commit = false` the loaded records stay accessible
    /// through [`Session::cached`] without a reload; otherwise they are
    /// expired and the next access re-queries.
    pub async fn commit(&mut self) -> Result<()> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        if self.expire_on_commit {
            self.identity.clear();
        }

        Ok(())
    }

    /// Roll back the transaction, discarding loaded records
    pub async fn rollback(&mut self) -> Result<()> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        self.identity.clear();

        Ok(())
    }

    /// A record already loaded in this session, if any
    pub fn cached(&self, id: &Uuid) -> Option<&Constellation> {
        self.identity.get(id)
    }
}
