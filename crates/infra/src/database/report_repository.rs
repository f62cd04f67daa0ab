//! Report repository implementation using SQLite
//!
//! Read side of the intake collection. `insert` exists for seeding and
//! tests; the dashboard itself never writes.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use straycare_core::ReportSource;
use straycare_domain::{Report, ReportStatus, Result as DomainResult};
use tokio::task;

use super::columns::{read_enum, read_timestamp, sql_limit, to_unix};
use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

const SELECT_REPORT: &str =
    "SELECT id, location, description, condition, status, created_at FROM reports";

/// SQLite-backed implementation of [`ReportSource`]
pub struct SqliteReportRepository {
    db: Arc<DbManager>,
}

impl SqliteReportRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Blocking insert, for seeding and tests.
    pub fn insert(&self, report: &Report) -> DomainResult<()> {
        let conn = self.db.get_connection()?;
        insert_report(&conn, report).map_err(map_sql_error)
    }

    async fn query(
        &self,
        sql: String,
        params: Vec<rusqlite::types::Value>,
    ) -> DomainResult<Vec<Report>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Report>> {
            let conn = db.get_connection()?;
            let mut stmt = conn.prepare(&sql).map_err(map_sql_error)?;
            let rows = stmt
                .query_map(rusqlite::params_from_iter(params), map_report_row)
                .map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl ReportSource for SqliteReportRepository {
    async fn list_all(&self) -> DomainResult<Vec<Report>> {
        self.query(format!("{SELECT_REPORT} ORDER BY created_at DESC"), Vec::new()).await
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Report>> {
        self.query(
            format!("{SELECT_REPORT} ORDER BY created_at DESC LIMIT ?1"),
            vec![sql_limit(limit).into()],
        )
        .await
    }

    async fn list_by_status(&self, status: ReportStatus) -> DomainResult<Vec<Report>> {
        self.query(
            format!("{SELECT_REPORT} WHERE status = ?1 ORDER BY created_at DESC"),
            vec![status.to_string().into()],
        )
        .await
    }

    async fn list_by_location(&self, location: &str) -> DomainResult<Vec<Report>> {
        self.query(
            format!("{SELECT_REPORT} WHERE location = ?1 ORDER BY created_at DESC"),
            vec![location.to_string().into()],
        )
        .await
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Report>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Report>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("{SELECT_REPORT} WHERE id = ?1"),
                params![&id],
                map_report_row,
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
            conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get::<_, usize>(0))
                .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

pub(crate) fn insert_report(conn: &Connection, report: &Report) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO reports (id, location, description, condition, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            report.id,
            report.location,
            report.description,
            report.condition.map(|c| c.to_string()),
            report.status.map(|s| s.to_string()),
            to_unix(report.created_at),
        ],
    )?;
    Ok(())
}

fn map_report_row(row: &Row<'_>) -> rusqlite::Result<Report> {
    Ok(Report {
        id: row.get(0)?,
        location: row.get(1)?,
        description: row.get(2)?,
        condition: read_enum(row, 3)?,
        status: read_enum(row, 4)?,
        created_at: read_timestamp(row, 5)?,
    })
}
