//! Adoption repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use straycare_core::AdoptionSource;
use straycare_domain::{Adoption, Result as DomainResult};
use tokio::task;

use super::columns::{read_enum, read_timestamp, sql_limit, to_unix};
use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

const SELECT_ADOPTION: &str = "SELECT id, dog_name, status, created_at FROM adoptions";

/// SQLite-backed implementation of [`AdoptionSource`]
pub struct SqliteAdoptionRepository {
    db: Arc<DbManager>,
}

impl SqliteAdoptionRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Blocking insert, for seeding and tests.
    pub fn insert(&self, adoption: &Adoption) -> DomainResult<()> {
        let conn = self.db.get_connection()?;
        insert_adoption(&conn, adoption).map_err(map_sql_error)
    }
}

#[async_trait]
impl AdoptionSource for SqliteAdoptionRepository {
    async fn list_all(&self) -> DomainResult<Vec<Adoption>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Adoption>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!("{SELECT_ADOPTION} ORDER BY created_at DESC"))
                .map_err(map_sql_error)?;
            let rows = stmt.query_map([], map_adoption_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Adoption>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Adoption>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!("{SELECT_ADOPTION} ORDER BY created_at DESC LIMIT ?1"))
                .map_err(map_sql_error)?;
            let rows =
                stmt.query_map(params![sql_limit(limit)], map_adoption_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Adoption>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Adoption>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("{SELECT_ADOPTION} WHERE id = ?1"),
                params![&id],
                map_adoption_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn count(&self) -> DomainResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<usize> {
            let conn = db.get_connection()?;
            conn.query_row("SELECT COUNT(*) FROM adoptions", [], |row| row.get::<_, usize>(0))
                .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

pub(crate) fn insert_adoption(conn: &Connection, adoption: &Adoption) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO adoptions (id, dog_name, status, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            adoption.id,
            adoption.dog_name,
            adoption.status.map(|s| s.to_string()),
            to_unix(adoption.created_at),
        ],
    )?;
    Ok(())
}

fn map_adoption_row(row: &Row<'_>) -> rusqlite::Result<Adoption> {
    Ok(Adoption {
        id: row.get(0)?,
        dog_name: row.get(1)?,
        status: read_enum(row, 2)?,
        created_at: read_timestamp(row, 3)?,
    })
}
