//! Volunteer repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use straycare_core::VolunteerSource;
use straycare_domain::{Result as DomainResult, Volunteer, VolunteerStatus};
use tokio::task;

use super::columns::{read_enum, read_timestamp, sql_limit, to_unix};
use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

const SELECT_VOLUNTEER: &str = "SELECT id, name, area, status, created_at FROM volunteers";

/// SQLite-backed implementation of [`VolunteerSource`]
///
/// A status the application does not recognise reads as
/// [`VolunteerStatus::Pending`], so it never counts as active.
pub struct SqliteVolunteerRepository {
    db: Arc<DbManager>,
}

impl SqliteVolunteerRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Blocking insert, for seeding and tests.
    pub fn insert(&self, volunteer: &Volunteer) -> DomainResult<()> {
        let conn = self.db.get_connection()?;
        insert_volunteer(&conn, volunteer).map_err(map_sql_error)
    }

    async fn select(
        &self,
        clause: &'static str,
        params: Vec<Value>,
    ) -> DomainResult<Vec<Volunteer>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Volunteer>> {
            let conn = db.get_connection()?;
            let mut stmt =
                conn.prepare(&format!("{SELECT_VOLUNTEER} {clause}")).map_err(map_sql_error)?;
            let rows = stmt
                .query_map(params_from_iter(params), map_volunteer_row)
                .map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl VolunteerSource for SqliteVolunteerRepository {
    async fn list_all(&self) -> DomainResult<Vec<Volunteer>> {
        self.select("ORDER BY created_at DESC", Vec::new()).await
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Volunteer>> {
        self.select("ORDER BY created_at DESC LIMIT ?1", vec![sql_limit(limit).into()]).await
    }

    async fn list_by_status(&self, status: VolunteerStatus) -> DomainResult<Vec<Volunteer>> {
        self.select("WHERE status = ?1 ORDER BY created_at DESC", vec![status.to_string().into()])
            .await
    }

    async fn list_by_area(&self, area: &str) -> DomainResult<Vec<Volunteer>> {
        self.select("WHERE area = ?1 ORDER BY created_at DESC", vec![area.to_string().into()])
            .await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Volunteer>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Volunteer>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("{SELECT_VOLUNTEER} WHERE id = ?1"),
                params![&id],
                map_volunteer_row,
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
            conn.query_row("SELECT COUNT(*) FROM volunteers", [], |row| row.get::<_, usize>(0))
                .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

pub(crate) fn insert_volunteer(conn: &Connection, volunteer: &Volunteer) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO volunteers (id, name, area, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            volunteer.id,
            volunteer.name,
            volunteer.area,
            volunteer.status.to_string(),
            to_unix(volunteer.created_at),
        ],
    )?;
    Ok(())
}

fn map_volunteer_row(row: &Row<'_>) -> rusqlite::Result<Volunteer> {
    Ok(Volunteer {
        id: row.get(0)?,
        name: row.get(1)?,
        area: row.get(2)?,
        status: read_enum(row, 3)?.unwrap_or(VolunteerStatus::Pending),
        created_at: read_timestamp(row, 4)?,
    })
}
